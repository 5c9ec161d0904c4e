//! Dual-list multi select widget: configuration, presentation binding,
//! remote loading glue and the handle registry.

pub mod command;
pub mod config;
pub mod notify;
pub mod registry;
pub mod view;
pub mod widget;

pub use command::{Command, CommandOutput};
pub use config::{AjaxConfig, AjaxPatch, ConfigPatch, WidgetConfig};
pub use notify::{Notifier, RecordingNotifier, TracingNotifier};
pub use registry::WidgetRegistry;
pub use selection_store::SelectionStore;
pub use view::{render, PanelSide, UserAction, View};
pub use widget::{LoadOutcome, MultiSelect, PendingLoad, ReloadItemsOutcome};
