//! Selection state machine.
//!
//! The grid is a controlled component: the caller owns the authoritative set
//! of selected keys and hands a copy to the grid through a
//! [`SelectionDescriptor`] on every render pass. Operations never mutate that
//! copy. They compute the next selection and report it through `on_change`,
//! synchronously, before returning.
//!
//! Derived states (`all_selected`, `indeterminate`) are never stored; they are
//! recomputed from the selected keys, the current rows and the selectable
//! predicate.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::identity::{RowItem, RowKey};

/// Selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Selecting a row replaces the selection.
    Single,
    /// Rows toggle independently; select-all is available.
    #[default]
    Multiple,
}

impl SelectionMode {
    /// Parse a mode name. Unknown names fall back to multiple.
    pub fn parse(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("single") {
            Self::Single
        } else {
            Self::Multiple
        }
    }
}

impl<'de> Deserialize<'de> for SelectionMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name))
    }
}

/// A selection emitted by a toggle: keys and rows in dataset order.
#[derive(Debug)]
pub struct SelectionChange<'r, R> {
    pub keys: Vec<RowKey>,
    pub rows: Vec<&'r R>,
}

impl<R> SelectionChange<'_, R> {
    fn empty() -> Self {
        Self {
            keys: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// The emitted keys as a set, ready to store as the next selection.
    pub fn key_set(&self) -> HashSet<RowKey> {
        self.keys.iter().cloned().collect()
    }
}

/// Counts and derived flags for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionSummary {
    /// Rows accepted by the selectable predicate.
    pub selectable: usize,
    /// Selectable rows whose key is selected.
    pub selected: usize,
    pub all_selected: bool,
    pub indeterminate: bool,
}

/// Host callback receiving every emitted selection.
pub type OnChangeFn<'a, R> = Box<dyn FnMut(&SelectionChange<'_, R>) + 'a>;

/// Host predicate deciding whether `(row, index)` may be selected.
pub type SelectableFn<'a, R> = Box<dyn Fn(&R, usize) -> bool + 'a>;

/// The caller's selection, as seen by the grid for one render pass.
pub struct SelectionDescriptor<'a, R> {
    pub mode: SelectionMode,
    /// Snapshot of the caller's selected keys.
    pub selected_keys: HashSet<RowKey>,
    /// Show the header select-all checkbox in multiple mode.
    pub enable_select_all: bool,
    on_change: Option<OnChangeFn<'a, R>>,
    is_row_selectable: Option<SelectableFn<'a, R>>,
}

impl<R> fmt::Debug for SelectionDescriptor<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionDescriptor")
            .field("mode", &self.mode)
            .field("selected_keys", &self.selected_keys)
            .field("enable_select_all", &self.enable_select_all)
            .field("on_change", &self.on_change.is_some())
            .field("is_row_selectable", &self.is_row_selectable.is_some())
            .finish()
    }
}

impl<'a, R> SelectionDescriptor<'a, R> {
    /// Create a descriptor over the caller's current selection.
    pub fn new(mode: SelectionMode, selected_keys: impl IntoIterator<Item = RowKey>) -> Self {
        Self {
            mode,
            selected_keys: selected_keys.into_iter().collect(),
            enable_select_all: true,
            on_change: None,
            is_row_selectable: None,
        }
    }

    /// Single-selection descriptor.
    pub fn single(selected_keys: impl IntoIterator<Item = RowKey>) -> Self {
        Self::new(SelectionMode::Single, selected_keys)
    }

    /// Multiple-selection descriptor.
    pub fn multiple(selected_keys: impl IntoIterator<Item = RowKey>) -> Self {
        Self::new(SelectionMode::Multiple, selected_keys)
    }

    /// Set the change callback.
    pub fn on_change(mut self, on_change: impl FnMut(&SelectionChange<'_, R>) + 'a) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Set the selectable predicate. Without one, every row is selectable.
    pub fn selectable(mut self, predicate: impl Fn(&R, usize) -> bool + 'a) -> Self {
        self.is_row_selectable = Some(Box::new(predicate));
        self
    }

    /// Show or hide the header select-all checkbox.
    pub fn enable_select_all(mut self, enable: bool) -> Self {
        self.enable_select_all = enable;
        self
    }

    /// Whether the row may be selected.
    pub fn is_selectable(&self, item: &RowItem<'_, R>) -> bool {
        self.is_row_selectable
            .as_ref()
            .is_none_or(|predicate| predicate(item.row, item.index))
    }

    /// Whether the row's key is in the selected set.
    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.selected_keys.contains(key)
    }

    /// Derive counts and the all-selected/indeterminate flags.
    pub fn summary(&self, items: &[RowItem<'_, R>]) -> SelectionSummary {
        let mut selectable = 0;
        let mut selected = 0;
        for item in items.iter().filter(|item| self.is_selectable(item)) {
            selectable += 1;
            if self.selected_keys.contains(&item.key) {
                selected += 1;
            }
        }
        SelectionSummary {
            selectable,
            selected,
            all_selected: selectable > 0 && selected == selectable,
            indeterminate: selected > 0 && selected < selectable,
        }
    }

    /// Compute the selection that toggling `item` would produce.
    ///
    /// Returns `None` when the row is not selectable.
    pub fn next_for_row<'r>(
        &self,
        items: &[RowItem<'r, R>],
        item: &RowItem<'_, R>,
    ) -> Option<SelectionChange<'r, R>> {
        if !self.is_selectable(item) {
            return None;
        }

        let next: HashSet<RowKey> = match self.mode {
            SelectionMode::Single => HashSet::from([item.key.clone()]),
            SelectionMode::Multiple => {
                let mut working = self.selected_keys.clone();
                if !working.remove(&item.key) {
                    working.insert(item.key.clone());
                }
                working
            }
        };

        let mut change = SelectionChange::empty();
        for candidate in items.iter().filter(|candidate| next.contains(&candidate.key)) {
            change.keys.push(candidate.key.clone());
            change.rows.push(candidate.row);
        }
        Some(change)
    }

    /// Compute the selection that select-all would produce.
    ///
    /// Returns `None` outside multiple mode or when nothing is selectable.
    pub fn next_for_all<'r>(&self, items: &[RowItem<'r, R>]) -> Option<SelectionChange<'r, R>> {
        if self.mode != SelectionMode::Multiple {
            return None;
        }
        let summary = self.summary(items);
        if summary.selectable == 0 {
            return None;
        }
        if summary.all_selected {
            return Some(SelectionChange::empty());
        }

        let mut change = SelectionChange::empty();
        for item in items.iter().filter(|item| self.is_selectable(item)) {
            change.keys.push(item.key.clone());
            change.rows.push(item.row);
        }
        Some(change)
    }

    /// Toggle one row and report the result through `on_change`.
    ///
    /// Returns false (without calling `on_change`) when the row is not
    /// selectable.
    pub fn toggle_row(&mut self, items: &[RowItem<'_, R>], item: &RowItem<'_, R>) -> bool {
        match self.next_for_row(items, item) {
            Some(change) => {
                log::trace!("Row {} toggled, {} selected", item.key, change.keys.len());
                self.emit(&change);
                true
            }
            None => {
                log::debug!("Ignored toggle of unselectable row {}", item.key);
                false
            }
        }
    }

    /// Select every selectable row, or clear when all are selected.
    ///
    /// Returns false (without calling `on_change`) outside multiple mode or
    /// when nothing is selectable. Operates over the whole dataset, not the
    /// materialized window.
    pub fn toggle_all(&mut self, items: &[RowItem<'_, R>]) -> bool {
        match self.next_for_all(items) {
            Some(change) => {
                log::trace!("Toggled all, {} selected", change.keys.len());
                self.emit(&change);
                true
            }
            None => {
                log::debug!("Ignored select-all ({:?} mode)", self.mode);
                false
            }
        }
    }

    fn emit(&mut self, change: &SelectionChange<'_, R>) {
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(change);
        }
    }
}
