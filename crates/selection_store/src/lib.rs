//! In-memory selection state of one multi select widget.
//!
//! The store keeps the catalog of selectable items, the baseline selection
//! (`initial`) and the live selection (`current`). Availability is derived:
//! an item is available iff its identifier is not in `current`.

use shared::{
    domain::{Identifier, Item},
    protocol::encode_selection,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    catalog: Vec<Item>,
    initial: Vec<Identifier>,
    current: Vec<Identifier>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the catalog. `current` is left as is, so identifiers missing
    /// from the new catalog stay selected as orphans.
    pub fn set_catalog(&mut self, items: Vec<Item>) {
        self.catalog = items;
    }

    /// Redefines the baseline and the live selection. Repeated identifiers
    /// keep their first position only.
    pub fn set_selection(&mut self, ids: &[Identifier]) {
        let mut deduped: Vec<Identifier> = Vec::with_capacity(ids.len());
        for id in ids {
            if !deduped.contains(id) {
                deduped.push(id.clone());
            }
        }
        self.initial = deduped.clone();
        self.current = deduped;
    }

    /// Appends `id` to the live selection. Returns false if it was already
    /// selected.
    pub fn select(&mut self, id: &Identifier) -> bool {
        if self.is_selected(id) {
            return false;
        }
        self.current.push(id.clone());
        true
    }

    /// Removes every occurrence of `id` from the live selection. Returns
    /// false if nothing was removed.
    pub fn unselect(&mut self, id: &Identifier) -> bool {
        let before = self.current.len();
        self.current.retain(|selected| selected != id);
        self.current.len() != before
    }

    /// Appends every available catalog identifier in catalog order.
    /// Already selected identifiers keep their position.
    pub fn select_all(&mut self) {
        for item in &self.catalog {
            if !self.current.contains(&item.value) {
                self.current.push(item.value.clone());
            }
        }
    }

    pub fn unselect_all(&mut self) {
        self.current.clear();
    }

    pub fn reset(&mut self) {
        self.current = self.initial.clone();
    }

    pub fn clear(&mut self) {
        self.catalog.clear();
        self.initial.clear();
        self.current.clear();
    }

    /// JSON array text of the live selection, in selection order.
    pub fn serialize(&self) -> String {
        encode_selection(&self.current)
    }

    pub fn catalog(&self) -> &[Item] {
        &self.catalog
    }

    pub fn initial(&self) -> &[Identifier] {
        &self.initial
    }

    pub fn current(&self) -> &[Identifier] {
        &self.current
    }

    pub fn contains(&self, id: &Identifier) -> bool {
        self.catalog.iter().any(|item| &item.value == id)
    }

    pub fn is_selected(&self, id: &Identifier) -> bool {
        self.current.contains(id)
    }

    pub fn available(&self) -> impl Iterator<Item = &Item> + '_ {
        self.catalog
            .iter()
            .filter(|item| !self.current.contains(&item.value))
    }

    pub fn selected_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.catalog
            .iter()
            .filter(|item| self.current.contains(&item.value))
    }

    /// Selected identifiers with no catalog entry. They are serialized but
    /// never rendered.
    pub fn orphans(&self) -> impl Iterator<Item = &Identifier> + '_ {
        self.current.iter().filter(|id| !self.contains(id))
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty() && self.initial.is_empty() && self.current.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
