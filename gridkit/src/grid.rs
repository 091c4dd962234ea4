//! The grid facade and its instance state.

use std::collections::HashMap;

use crate::column::{ColumnLayout, ColumnSpec};
use crate::config::GridConfig;
use crate::identity::{GridRow, KeyResolver, RowItem, RowKey};
use crate::render::{CellRenderer, ComposeInput, GridFrame, Palette, Rgb, RowStyleFn, compose};
use crate::selection::{SelectionDescriptor, SelectionSummary};
use crate::viewport::ScrollSnapshot;
use crate::window::{self, VirtualWindow};

/// Instance-scoped mutable state of one grid.
///
/// Each grid owns its own `GridState`; nothing is shared between instances.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridState {
    snapshot: ScrollSnapshot,
    hovered: Option<RowKey>,
}

impl GridState {
    /// Create state with an empty viewport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state from an initial snapshot.
    pub fn with_snapshot(snapshot: ScrollSnapshot) -> Self {
        Self {
            snapshot,
            hovered: None,
        }
    }

    /// Latest viewport snapshot.
    pub fn snapshot(&self) -> &ScrollSnapshot {
        &self.snapshot
    }

    /// Replace the viewport snapshot.
    pub fn set_snapshot(&mut self, snapshot: ScrollSnapshot) {
        self.snapshot = snapshot;
    }

    /// Key of the row under the pointer.
    pub fn hovered(&self) -> Option<&RowKey> {
        self.hovered.as_ref()
    }

    /// Set the hovered row. Returns true if it changed.
    pub fn set_hovered(&mut self, key: Option<RowKey>) -> bool {
        if self.hovered == key {
            return false;
        }
        self.hovered = key;
        true
    }

    /// Clear the hovered row (pointer left the grid).
    pub fn clear_hover(&mut self) -> bool {
        self.set_hovered(None)
    }
}

/// A virtualized data grid over a borrowed row slice.
///
/// Column layout and row keys are resolved when the rows, columns, key
/// callback or selection presence change; composition happens per snapshot.
///
/// # Example
///
/// ```
/// use gridkit::prelude::*;
///
/// struct Item(i64);
///
/// impl GridRow for Item {
///     fn id(&self) -> Option<RowKey> {
///         Some(RowKey::Int(self.0))
///     }
/// }
///
/// let rows: Vec<Item> = (0..1000).map(Item).collect();
/// let grid = DataGrid::new(&rows, vec![ColumnSpec::new("id", "ID")]);
/// let state = GridState::with_snapshot(ScrollSnapshot::sized(800.0, 480.0));
/// let window = grid.window(&state);
/// assert!(window.len() < rows.len());
/// ```
pub struct DataGrid<'a, R> {
    config: GridConfig,
    palette: Palette,
    specs: Vec<ColumnSpec>,
    columns: ColumnLayout,
    resolver: KeyResolver<'a, R>,
    rows: &'a [R],
    items: Vec<RowItem<'a, R>>,
    positions: HashMap<RowKey, usize>,
    selection: Option<SelectionDescriptor<'a, R>>,
    row_style: Option<RowStyleFn<'a, R>>,
    loading: bool,
}

impl<'a, R: GridRow> DataGrid<'a, R> {
    /// Create a grid with default configuration.
    pub fn new(rows: &'a [R], columns: Vec<ColumnSpec>) -> Self {
        let mut grid = Self {
            config: GridConfig::default(),
            palette: Palette::default(),
            columns: ColumnLayout::default(),
            specs: columns,
            resolver: KeyResolver::new(),
            rows,
            items: Vec::new(),
            positions: HashMap::new(),
            selection: None,
            row_style: None,
            loading: false,
        };
        grid.resolve_columns();
        grid.resolve_rows();
        grid
    }

    /// Set the configuration.
    pub fn config(mut self, config: GridConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the tint palette.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Key rows with an explicit callback instead of their own identity.
    pub fn row_key(mut self, row_key: impl Fn(&R, usize) -> RowKey + 'a) -> Self {
        self.resolver = KeyResolver::with_row_key(row_key);
        self.resolve_rows();
        self
    }

    /// Enable selection. Adds the selection column to the left group.
    pub fn selection(mut self, selection: SelectionDescriptor<'a, R>) -> Self {
        self.selection = Some(selection);
        self.resolve_columns();
        self
    }

    /// Override row backgrounds. Returning `Some` wins over every other rule.
    pub fn row_style(mut self, row_style: impl Fn(&R, usize) -> Option<Rgb> + 'a) -> Self {
        self.row_style = Some(Box::new(row_style));
        self
    }

    /// Show the loading block instead of rows.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Replace the rows and re-key them.
    pub fn set_rows(&mut self, rows: &'a [R]) {
        self.rows = rows;
        self.resolve_rows();
    }

    /// Replace the column specs and re-resolve the layout.
    pub fn set_columns(&mut self, columns: Vec<ColumnSpec>) {
        self.specs = columns;
        self.resolve_columns();
    }

    /// Replace or remove the selection descriptor.
    pub fn set_selection(&mut self, selection: Option<SelectionDescriptor<'a, R>>) {
        let had_selection = self.selection.is_some();
        self.selection = selection;
        if had_selection != self.selection.is_some() {
            self.resolve_columns();
        }
    }

    /// Set the loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: GridConfig) {
        self.config = config;
    }

    /// Whether the loading block replaces the rows.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn resolve_columns(&mut self) {
        self.columns = ColumnLayout::resolve(&self.specs, self.selection.is_some());
    }

    fn resolve_rows(&mut self) {
        self.items = self.resolver.items(self.rows);
        self.positions.clear();
        for item in &self.items {
            self.positions.entry(item.key.clone()).or_insert(item.index);
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The configuration.
    pub fn grid_config(&self) -> &GridConfig {
        &self.config
    }

    /// The resolved column layout.
    pub fn columns(&self) -> &ColumnLayout {
        &self.columns
    }

    /// Row items in dataset order.
    pub fn items(&self) -> &[RowItem<'a, R>] {
        &self.items
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find a row item by key.
    pub fn item(&self, key: &RowKey) -> Option<&RowItem<'a, R>> {
        self.positions
            .get(key)
            .and_then(|&index| self.items.get(index))
    }

    /// The selection descriptor, if selection is enabled.
    pub fn selection_descriptor(&self) -> Option<&SelectionDescriptor<'a, R>> {
        self.selection.as_ref()
    }

    /// Selection counts and derived flags, if selection is enabled.
    pub fn summary(&self) -> Option<SelectionSummary> {
        self.selection
            .as_ref()
            .map(|selection| selection.summary(&self.items))
    }

    // -------------------------------------------------------------------------
    // Virtualization
    // -------------------------------------------------------------------------

    /// Materialized row range for the state's snapshot.
    pub fn window(&self, state: &GridState) -> VirtualWindow {
        VirtualWindow::compute(self.items.len(), &self.config, &state.snapshot)
    }

    /// Reserved scrollable body height.
    pub fn content_height(&self) -> f64 {
        window::content_height(self.items.len(), &self.config)
    }

    /// Row under a viewport-relative y coordinate.
    ///
    /// The header band and the space below the last row return `None`.
    pub fn row_at(&self, state: &GridState, y: f64) -> Option<&RowItem<'a, R>> {
        let header_height = self.config.effective_header_height();
        if y < header_height {
            return None;
        }
        let body_y = state.snapshot.scroll_top + y - header_height;
        window::index_at_body_y(body_y, &self.config).and_then(|index| self.items.get(index))
    }

    /// Update the hovered row from a pointer position; `None` means the
    /// pointer left the grid. Returns true if the hovered row changed.
    pub fn hover_at(&self, state: &mut GridState, y: Option<f64>) -> bool {
        let key = y
            .and_then(|y| self.row_at(&*state, y))
            .map(|item| item.key.clone());
        state.set_hovered(key)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggle the row with `key`. Returns true if `on_change` fired.
    pub fn toggle_row(&mut self, key: &RowKey) -> bool {
        let Some(selection) = self.selection.as_mut() else {
            return false;
        };
        let Some(item) = self
            .positions
            .get(key)
            .and_then(|&index| self.items.get(index))
        else {
            log::debug!("Ignored toggle of unknown row {key}");
            return false;
        };
        selection.toggle_row(&self.items, item)
    }

    /// Toggle the row at dataset position `index`.
    pub fn toggle_row_at(&mut self, index: usize) -> bool {
        let Some(key) = self.items.get(index).map(|item| item.key.clone()) else {
            return false;
        };
        self.toggle_row(&key)
    }

    /// Select all selectable rows, or clear when all are selected.
    pub fn toggle_all(&mut self) -> bool {
        match self.selection.as_mut() {
            Some(selection) => selection.toggle_all(&self.items),
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Composition
    // -------------------------------------------------------------------------

    /// Compose the drawable frame for the state's snapshot.
    pub fn compose<'g, C>(
        &'g self,
        state: &'g GridState,
        renderer: &C,
    ) -> GridFrame<'g, C::Output>
    where
        C: CellRenderer<R>,
    {
        compose(
            &ComposeInput {
                config: &self.config,
                palette: &self.palette,
                columns: &self.columns,
                items: &self.items,
                selection: self.selection.as_ref(),
                row_style: self.row_style.as_ref(),
                loading: self.loading,
                snapshot: &state.snapshot,
                hovered: state.hovered.as_ref(),
            },
            renderer,
        )
    }
}
