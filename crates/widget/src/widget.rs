use std::sync::Arc;

use remote_loader::{LoadError, LoadGenerations, LoadRequest, LoadSlot, LoadTicket, RemoteLoader};
use selection_store::SelectionStore;
use shared::domain::{Identifier, Item, WidgetId};
use tracing::{debug, info, warn};

use crate::{
    config::{ConfigPatch, WidgetConfig},
    notify::{fault_message, Notifier},
    view::{self, UserAction, View},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response replaced the store contents.
    Applied,
    /// No endpoint is configured; nothing was requested.
    Skipped,
    /// A newer load or assignment superseded this one; the response was dropped.
    Stale,
}

/// A load that has been issued but whose response has not been applied yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    pub ticket: LoadTicket,
    pub request: LoadRequest,
}

#[derive(Debug)]
pub struct ReloadItemsOutcome {
    pub available: Result<LoadOutcome, LoadError>,
    pub selected: Result<LoadOutcome, LoadError>,
}

impl ReloadItemsOutcome {
    pub fn is_ok(&self) -> bool {
        self.available.is_ok() && self.selected.is_ok()
    }
}

/// One multi select instance: its store, configuration and last rendered view.
pub struct MultiSelect {
    id: WidgetId,
    config: WidgetConfig,
    store: SelectionStore,
    generations: LoadGenerations,
    view: Option<View>,
    mirror: String,
    loader: RemoteLoader,
    notifier: Arc<dyn Notifier>,
    destroyed: bool,
}

impl MultiSelect {
    pub fn new(
        id: WidgetId,
        config: WidgetConfig,
        loader: RemoteLoader,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let store = SelectionStore::new();
        let mirror = store.serialize();
        let mut widget = Self {
            id,
            config,
            store,
            generations: LoadGenerations::default(),
            view: None,
            mirror,
            loader,
            notifier,
            destroyed: false,
        };
        widget.redraw();
        widget
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Owned snapshot of the active configuration.
    pub fn get_config(&self) -> WidgetConfig {
        self.config.clone()
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    /// Last rendered view. `None` once destroyed.
    pub fn view(&self) -> Option<&View> {
        self.view.as_ref()
    }

    /// Hidden field value; always the serialized live selection.
    pub fn mirror(&self) -> &str {
        &self.mirror
    }

    /// Once destroyed, every mutating call is a silent no-op.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn redraw(&mut self) {
        if self.destroyed {
            return;
        }
        self.view = Some(view::render(&self.store, &self.config));
    }

    /// Refreshes the mirror and the rendered hidden field. Panels are only
    /// re-projected when `redraw` is set.
    fn commit(&mut self, redraw: bool) {
        self.mirror = self.store.serialize();
        if redraw {
            self.redraw();
        } else if let Some(view) = self.view.as_mut() {
            view.value_field.value.clone_from(&self.mirror);
        }
    }

    pub fn dispatch(&mut self, action: &UserAction) -> bool {
        if self.destroyed {
            return false;
        }
        let applied = view::dispatch(&mut self.store, action);
        debug!(widget_id = %self.id, ?action, applied, "user action");
        self.commit(true);
        applied
    }

    pub fn set_available_items(&mut self, items: Vec<Item>, redraw: bool) {
        if self.destroyed {
            return;
        }
        self.generations.bump(LoadSlot::Catalog);
        self.store.set_catalog(items);
        self.commit(redraw);
    }

    pub fn set_selected_items(&mut self, ids: &[Identifier], redraw: bool) {
        if self.destroyed {
            return;
        }
        self.generations.bump(LoadSlot::Selection);
        self.store.set_selection(ids);
        self.commit(redraw);
    }

    pub fn set_items(&mut self, items: Vec<Item>, ids: &[Identifier], redraw: bool) {
        if self.destroyed {
            return;
        }
        self.set_available_items(items, false);
        self.set_selected_items(ids, false);
        self.commit(redraw);
    }

    pub fn reset_selection(&mut self) {
        if self.destroyed {
            return;
        }
        self.store.reset();
        self.commit(true);
    }

    pub fn clear_items(&mut self) {
        if self.destroyed {
            return;
        }
        self.generations.bump_all();
        self.store.clear();
        self.commit(true);
    }

    pub fn set_config(&mut self, patch: ConfigPatch) {
        if self.destroyed {
            return;
        }
        self.config.merge(patch);
    }

    /// Merges `patch`, optionally reloads both lists, optionally redraws.
    pub async fn apply_config(
        &mut self,
        patch: ConfigPatch,
        reload: bool,
        redraw: bool,
    ) -> Option<ReloadItemsOutcome> {
        if self.destroyed {
            return None;
        }
        self.set_config(patch);
        let outcome = if reload {
            Some(self.reload_items(None, None, false).await)
        } else {
            None
        };
        if redraw {
            self.redraw();
        }
        outcome
    }

    /// Clears the store and issues a catalog load. Returns `None` when no
    /// available-items endpoint is configured.
    pub fn begin_available_load(&mut self, url: Option<String>) -> Option<PendingLoad> {
        if self.destroyed {
            return None;
        }
        if let Some(url) = url {
            self.config.set_available_url(url);
        }
        self.begin_load(LoadSlot::Catalog)
    }

    /// Clears the store and issues a selection load. Returns `None` when no
    /// selected-items endpoint is configured.
    pub fn begin_selected_load(&mut self, url: Option<String>) -> Option<PendingLoad> {
        if self.destroyed {
            return None;
        }
        if let Some(url) = url {
            self.config.set_selected_url(url);
        }
        self.begin_load(LoadSlot::Selection)
    }

    fn begin_load(&mut self, slot: LoadSlot) -> Option<PendingLoad> {
        self.store.clear();
        self.commit(true);
        let ticket = self.generations.issue(slot);

        let request = self.config.ajax.as_ref().and_then(|ajax| match slot {
            LoadSlot::Catalog => ajax.available_request(),
            LoadSlot::Selection => ajax.selected_request(),
        })?;
        info!(
            widget_id = %self.id,
            ?slot,
            url = %request.url,
            generation = ticket.generation(),
            "remote load issued"
        );
        Some(PendingLoad { ticket, request })
    }

    pub fn complete_available_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Item>, LoadError>,
        redraw: bool,
    ) -> Result<LoadOutcome, LoadError> {
        if !self.accepts(&ticket) {
            return Ok(LoadOutcome::Stale);
        }
        let items = self.report_failure(result)?;
        info!(widget_id = %self.id, items = items.len(), "available items loaded");
        self.store.set_catalog(items);
        self.commit(redraw);
        Ok(LoadOutcome::Applied)
    }

    pub fn complete_selected_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Identifier>, LoadError>,
        redraw: bool,
    ) -> Result<LoadOutcome, LoadError> {
        if !self.accepts(&ticket) {
            return Ok(LoadOutcome::Stale);
        }
        let ids = self.report_failure(result)?;
        info!(widget_id = %self.id, selected = ids.len(), "selected items loaded");
        self.store.set_selection(&ids);
        self.commit(redraw);
        Ok(LoadOutcome::Applied)
    }

    fn accepts(&self, ticket: &LoadTicket) -> bool {
        let current = !self.destroyed && self.generations.is_current(ticket);
        if !current {
            warn!(
                widget_id = %self.id,
                slot = ?ticket.slot(),
                generation = ticket.generation(),
                "dropping superseded load response"
            );
        }
        current
    }

    fn report_failure<T>(&self, result: Result<T, LoadError>) -> Result<T, LoadError> {
        result.inspect_err(|err| {
            warn!(widget_id = %self.id, error = %err, "remote load failed");
            self.notifier.alert(&fault_message(err.response_body()));
        })
    }

    pub async fn reload_available(
        &mut self,
        url: Option<String>,
        redraw: bool,
    ) -> Result<LoadOutcome, LoadError> {
        let Some(pending) = self.begin_available_load(url) else {
            return Ok(LoadOutcome::Skipped);
        };
        let result = self.loader.fetch_catalog(&pending.request).await;
        self.complete_available_load(pending.ticket, result, redraw)
    }

    pub async fn reload_selected(
        &mut self,
        url: Option<String>,
        redraw: bool,
    ) -> Result<LoadOutcome, LoadError> {
        let Some(pending) = self.begin_selected_load(url) else {
            return Ok(LoadOutcome::Skipped);
        };
        let result = self.loader.fetch_selection(&pending.request).await;
        self.complete_selected_load(pending.ticket, result, redraw)
    }

    /// Issues both loads up front, then fetches them concurrently.
    pub async fn reload_items(
        &mut self,
        available_url: Option<String>,
        selected_url: Option<String>,
        redraw: bool,
    ) -> ReloadItemsOutcome {
        let available = self.begin_available_load(available_url);
        let selected = self.begin_selected_load(selected_url);

        let loader = self.loader.clone();
        let (catalog, selection) = futures::join!(
            async {
                match &available {
                    Some(pending) => Some(loader.fetch_catalog(&pending.request).await),
                    None => None,
                }
            },
            async {
                match &selected {
                    Some(pending) => Some(loader.fetch_selection(&pending.request).await),
                    None => None,
                }
            }
        );

        let available = match (available, catalog) {
            (Some(pending), Some(result)) => {
                self.complete_available_load(pending.ticket, result, redraw)
            }
            _ => Ok(LoadOutcome::Skipped),
        };
        let selected = match (selected, selection) {
            (Some(pending), Some(result)) => {
                self.complete_selected_load(pending.ticket, result, redraw)
            }
            _ => Ok(LoadOutcome::Skipped),
        };
        ReloadItemsOutcome {
            available,
            selected,
        }
    }

    /// Clears everything and drops the view. Outstanding loads become stale
    /// and later calls are ignored.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.generations.bump_all();
        self.store.clear();
        self.mirror = self.store.serialize();
        self.view = None;
        info!(widget_id = %self.id, "widget destroyed");
    }
}

#[cfg(test)]
#[path = "tests/widget_tests.rs"]
mod tests;
