//! Monotonic load generations. A response is applied only if no newer load
//! or direct assignment happened on its slot since the request was issued.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSlot {
    Catalog,
    Selection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    slot: LoadSlot,
    generation: u64,
}

impl LoadTicket {
    pub fn slot(&self) -> LoadSlot {
        self.slot
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default, Clone)]
pub struct LoadGenerations {
    catalog: u64,
    selection: u64,
}

impl LoadGenerations {
    /// Invalidates every outstanding ticket for `slot` and returns a new one.
    pub fn issue(&mut self, slot: LoadSlot) -> LoadTicket {
        let generation = self.bump(slot);
        LoadTicket { slot, generation }
    }

    /// Invalidates outstanding tickets for `slot` without issuing a new one.
    pub fn bump(&mut self, slot: LoadSlot) -> u64 {
        let counter = match slot {
            LoadSlot::Catalog => &mut self.catalog,
            LoadSlot::Selection => &mut self.selection,
        };
        *counter += 1;
        *counter
    }

    pub fn bump_all(&mut self) {
        self.bump(LoadSlot::Catalog);
        self.bump(LoadSlot::Selection);
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        let latest = match ticket.slot {
            LoadSlot::Catalog => self.catalog,
            LoadSlot::Selection => self.selection,
        };
        latest == ticket.generation
    }
}
