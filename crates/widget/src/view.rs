//! Projection of a store onto the two panels, the command buttons and the
//! hidden mirror field.

use selection_store::SelectionStore;
use serde::{Deserialize, Serialize};
use shared::domain::{Identifier, Item};

use crate::config::WidgetConfig;

pub const AVAILABLE_HEADER: &str = "Available Items";
pub const SELECTED_HEADER: &str = "Selected Items";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum UserAction {
    /// Moves the clicked item to the opposite panel.
    Click(Identifier),
    ResetSelection,
    SelectAll,
    UnselectAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelSide {
    Available,
    Selected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub value_field: HiddenField,
    pub available: Panel,
    pub selected: Panel,
    pub controls: Vec<ControlButton>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HiddenField {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub side: PanelSide,
    pub header: String,
    pub header_class: String,
    pub items: Vec<RenderedItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedItem {
    pub value: Identifier,
    pub text: String,
    pub class: String,
    pub action: UserAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlButton {
    pub label: String,
    pub class: String,
    pub action: UserAction,
}

impl View {
    pub fn panel(&self, side: PanelSide) -> &Panel {
        match side {
            PanelSide::Available => &self.available,
            PanelSide::Selected => &self.selected,
        }
    }

    /// Which panel shows `id`, if any. Orphaned selections show nowhere.
    pub fn side_of(&self, id: &Identifier) -> Option<PanelSide> {
        [PanelSide::Available, PanelSide::Selected]
            .into_iter()
            .find(|side| self.panel(*side).items.iter().any(|item| &item.value == id))
    }
}

pub fn render(store: &SelectionStore, config: &WidgetConfig) -> View {
    let header_class = format!("oms-list-header oms-list-header-{}", config.header_color);
    let button_class = format!("btn btn-block btn-{}", config.button_color);

    View {
        value_field: HiddenField {
            name: config.name.clone(),
            value: store.serialize(),
        },
        available: Panel {
            side: PanelSide::Available,
            header: AVAILABLE_HEADER.into(),
            header_class: header_class.clone(),
            items: rendered_items(store.available(), &config.available_item_color),
        },
        selected: Panel {
            side: PanelSide::Selected,
            header: SELECTED_HEADER.into(),
            header_class,
            items: rendered_items(store.selected_items(), &config.selected_item_color),
        },
        controls: vec![
            ControlButton {
                label: "Reset Selection".into(),
                class: format!("{button_class} mb-1"),
                action: UserAction::ResetSelection,
            },
            ControlButton {
                label: "Select All".into(),
                class: format!("{button_class} mt-3"),
                action: UserAction::SelectAll,
            },
            ControlButton {
                label: "Unselect All".into(),
                class: format!("{button_class} mt-3"),
                action: UserAction::UnselectAll,
            },
        ],
    }
}

fn rendered_items<'a>(items: impl Iterator<Item = &'a Item>, color: &str) -> Vec<RenderedItem> {
    items
        .map(|item| RenderedItem {
            value: item.value.clone(),
            text: item.text.clone(),
            class: format!("oms-item oms-item-{color}"),
            action: UserAction::Click(item.value.clone()),
        })
        .collect()
}

/// Applies a user action to the store. Returns false when the action was
/// ignored because it targets nothing on screen.
pub fn dispatch(store: &mut SelectionStore, action: &UserAction) -> bool {
    match action {
        UserAction::Click(id) => {
            if store.selected_items().any(|item| &item.value == id) {
                store.unselect(id)
            } else if store.available().any(|item| &item.value == id) {
                store.select(id)
            } else {
                false
            }
        }
        UserAction::ResetSelection => {
            store.reset();
            true
        }
        UserAction::SelectAll => {
            store.select_all();
            true
        }
        UserAction::UnselectAll => {
            store.unselect_all();
            true
        }
    }
}
