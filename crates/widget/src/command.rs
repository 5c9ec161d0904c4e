//! Public operation surface of a widget, addressed through the registry.

use remote_loader::LoadError;
use shared::domain::{Identifier, Item};

use crate::{
    config::{ConfigPatch, WidgetConfig},
    view::UserAction,
    widget::{LoadOutcome, MultiSelect, ReloadItemsOutcome},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ReloadAvailable {
        url: Option<String>,
        redraw: bool,
    },
    ReloadSelected {
        url: Option<String>,
        redraw: bool,
    },
    ReloadItems {
        available_url: Option<String>,
        selected_url: Option<String>,
        redraw: bool,
    },
    ResetSelection,
    ClearItems,
    SetAvailableItems {
        items: Vec<Item>,
        redraw: bool,
    },
    SetSelectedItems {
        ids: Vec<Identifier>,
        redraw: bool,
    },
    SetItems {
        items: Vec<Item>,
        ids: Vec<Identifier>,
        redraw: bool,
    },
    GetConfig,
    SetConfig {
        patch: ConfigPatch,
        reload: bool,
        redraw: bool,
    },
    Action(UserAction),
    Destroy,
}

impl Command {
    pub fn reload_available() -> Self {
        Self::ReloadAvailable {
            url: None,
            redraw: true,
        }
    }

    pub fn reload_selected() -> Self {
        Self::ReloadSelected {
            url: None,
            redraw: true,
        }
    }

    pub fn reload_items() -> Self {
        Self::ReloadItems {
            available_url: None,
            selected_url: None,
            redraw: true,
        }
    }

    pub fn set_config(patch: ConfigPatch) -> Self {
        Self::SetConfig {
            patch,
            reload: true,
            redraw: true,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ReloadAvailable { .. } => "reload_available",
            Self::ReloadSelected { .. } => "reload_selected",
            Self::ReloadItems { .. } => "reload_items",
            Self::ResetSelection => "reset_selection",
            Self::ClearItems => "clear_items",
            Self::SetAvailableItems { .. } => "set_available_items",
            Self::SetSelectedItems { .. } => "set_selected_items",
            Self::SetItems { .. } => "set_items",
            Self::GetConfig => "get_config",
            Self::SetConfig { .. } => "set_config",
            Self::Action(_) => "action",
            Self::Destroy => "destroy",
        }
    }
}

#[derive(Debug)]
pub enum CommandOutput {
    Done,
    Loaded(Result<LoadOutcome, LoadError>),
    ReloadedItems(ReloadItemsOutcome),
    Config(WidgetConfig),
    ConfigApplied(Option<ReloadItemsOutcome>),
    ActionApplied(bool),
    Destroyed,
}

impl MultiSelect {
    pub async fn execute(&mut self, command: Command) -> CommandOutput {
        match command {
            Command::ReloadAvailable { url, redraw } => {
                CommandOutput::Loaded(self.reload_available(url, redraw).await)
            }
            Command::ReloadSelected { url, redraw } => {
                CommandOutput::Loaded(self.reload_selected(url, redraw).await)
            }
            Command::ReloadItems {
                available_url,
                selected_url,
                redraw,
            } => CommandOutput::ReloadedItems(
                self.reload_items(available_url, selected_url, redraw).await,
            ),
            Command::ResetSelection => {
                self.reset_selection();
                CommandOutput::Done
            }
            Command::ClearItems => {
                self.clear_items();
                CommandOutput::Done
            }
            Command::SetAvailableItems { items, redraw } => {
                self.set_available_items(items, redraw);
                CommandOutput::Done
            }
            Command::SetSelectedItems { ids, redraw } => {
                self.set_selected_items(&ids, redraw);
                CommandOutput::Done
            }
            Command::SetItems { items, ids, redraw } => {
                self.set_items(items, &ids, redraw);
                CommandOutput::Done
            }
            Command::GetConfig => CommandOutput::Config(self.get_config()),
            Command::SetConfig {
                patch,
                reload,
                redraw,
            } => CommandOutput::ConfigApplied(self.apply_config(patch, reload, redraw).await),
            Command::Action(action) => CommandOutput::ActionApplied(self.dispatch(&action)),
            Command::Destroy => {
                self.destroy();
                CommandOutput::Destroyed
            }
        }
    }
}
