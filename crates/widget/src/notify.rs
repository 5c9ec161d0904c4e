//! User-facing fault reporting for failed remote loads.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::error;

/// Receives the blocking alert shown when a remote load fails.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

pub fn fault_message(response_body: &str) -> String {
    format!("Unable to handle the request due to a remote load fault!\nResponse : {response_body}")
}

pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn alert(&self, message: &str) {
        error!(%message, "remote load fault");
    }
}

/// Keeps every alert so the host can surface it later.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
