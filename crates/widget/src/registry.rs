use std::{collections::HashMap, sync::Arc};

use remote_loader::RemoteLoader;
use shared::domain::WidgetId;
use tracing::{debug, info};

use crate::{
    command::{Command, CommandOutput},
    config::WidgetConfig,
    notify::{Notifier, TracingNotifier},
    widget::{MultiSelect, ReloadItemsOutcome},
};

/// Owns every live widget, keyed by a handle that is never reused.
pub struct WidgetRegistry {
    next_id: u64,
    widgets: HashMap<WidgetId, MultiSelect>,
    loader: RemoteLoader,
    notifier: Arc<dyn Notifier>,
}

impl WidgetRegistry {
    pub fn new(loader: RemoteLoader, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            next_id: 1,
            widgets: HashMap::new(),
            loader,
            notifier,
        }
    }

    pub fn create(&mut self, config: WidgetConfig) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        let widget = MultiSelect::new(id, config, self.loader.clone(), self.notifier.clone());
        self.widgets.insert(id, widget);
        info!(widget_id = %id, "widget created");
        id
    }

    /// Creates a widget and, when endpoints are configured, loads both lists.
    pub async fn create_and_load(
        &mut self,
        config: WidgetConfig,
    ) -> (WidgetId, Option<ReloadItemsOutcome>) {
        let load = config.ajax.is_some();
        let id = self.create(config);
        if !load {
            return (id, None);
        }
        let outcome = match self.widgets.get_mut(&id) {
            Some(widget) => Some(widget.reload_items(None, None, true).await),
            None => None,
        };
        (id, outcome)
    }

    pub fn get(&self, id: WidgetId) -> Option<&MultiSelect> {
        self.widgets.get(&id)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut MultiSelect> {
        self.widgets.get_mut(&id)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Runs `command` on the widget behind `id`. Unknown handles are a no-op
    /// and yield `None`.
    pub async fn execute(&mut self, id: WidgetId, command: Command) -> Option<CommandOutput> {
        let name = command.name();
        if matches!(command, Command::Destroy) {
            return self.destroy(id).then_some(CommandOutput::Destroyed);
        }
        let Some(widget) = self.widgets.get_mut(&id) else {
            debug!(widget_id = %id, command = name, "ignoring command for unknown widget");
            return None;
        };
        debug!(widget_id = %id, command = name, "executing widget command");
        Some(widget.execute(command).await)
    }

    pub fn destroy(&mut self, id: WidgetId) -> bool {
        match self.widgets.remove(&id) {
            Some(mut widget) => {
                widget.destroy();
                true
            }
            None => {
                debug!(widget_id = %id, "ignoring destroy for unknown widget");
                false
            }
        }
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new(RemoteLoader::reqwest(), Arc::new(TracingNotifier))
    }
}
