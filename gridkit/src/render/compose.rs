//! Render composition.
//!
//! Merges the virtual window, the resolved columns and the selection into a
//! [`GridFrame`]: everything a host needs to paint, with the per-cell content
//! filled in by its [`CellRenderer`].

use crate::column::{ColumnLayout, ColumnMeta};
use crate::config::GridConfig;
use crate::identity::{RowItem, RowKey};
use crate::selection::{SelectionDescriptor, SelectionMode};
use crate::viewport::ScrollSnapshot;
use crate::window::{VirtualWindow, content_height};

use super::background::{RowBackground, RowVisualState};
use super::palette::{Palette, Rgb};
use super::shadow::ScrollShadows;
use super::tracks::GroupTracks;

/// Per-cell information handed to the host's renderer.
#[derive(Debug)]
pub struct CellContext<'c, R> {
    pub row: &'c R,
    pub row_index: usize,
    pub key: &'c RowKey,
    pub is_selected: bool,
    pub is_hovered: bool,
    /// Whether the selectable predicate accepts this row.
    pub is_selectable: bool,
}

/// Host capability that draws cell content and placeholder blocks.
///
/// The engine decides layout and background; what goes inside a cell (text,
/// badges, checkboxes for the selection column) is entirely the host's.
pub trait CellRenderer<R> {
    type Output;

    /// Content of one cell.
    fn render_cell(&self, column: &ColumnMeta, cell: &CellContext<'_, R>) -> Self::Output;

    /// Content shown in place of rows when the dataset is empty.
    fn render_empty(&self) -> Self::Output;

    /// Content shown in place of rows while loading.
    fn render_loading(&self) -> Self::Output;
}

/// Host callback overriding a row's background.
pub type RowStyleFn<'a, R> = Box<dyn Fn(&R, usize) -> Option<Rgb> + 'a>;

/// Cells of one row, split by column group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupCells<O> {
    pub left: Vec<O>,
    pub center: Vec<O>,
    pub right: Vec<O>,
}

/// A materialized row with its layout and visual decisions made.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow<O> {
    pub key: RowKey,
    pub index: usize,
    /// Top edge within the body.
    pub top: f64,
    /// Top edge relative to the viewport, below the sticky header.
    pub viewport_y: f64,
    pub height: f64,
    pub selected: bool,
    pub hovered: bool,
    pub selectable: bool,
    pub background: RowBackground,
    pub fill: Rgb,
    pub cells: GroupCells<O>,
}

/// What occupies the body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body<O> {
    Rows(Vec<RenderedRow<O>>),
    /// Dataset is empty; block sized to the fallback body height.
    Empty { height: f64, content: O },
    /// Host reports loading; takes precedence over rows and empty.
    Loading { height: f64, content: O },
}

/// Header checkbox state for select-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectAllState {
    pub checked: bool,
    pub indeterminate: bool,
    /// No row is selectable.
    pub disabled: bool,
}

/// Everything needed to paint the grid for one snapshot.
#[derive(Debug, Clone)]
pub struct GridFrame<'g, O> {
    pub columns: &'g ColumnLayout,
    pub tracks: GroupTracks,
    pub header_height: f64,
    /// Reserved scrollable body height.
    pub content_height: f64,
    pub window: VirtualWindow,
    pub select_all: Option<SelectAllState>,
    pub shadows: ScrollShadows,
    pub body: Body<O>,
}

impl<O> GridFrame<'_, O> {
    /// Materialized rows, empty for placeholder bodies.
    pub fn rows(&self) -> &[RenderedRow<O>] {
        match &self.body {
            Body::Rows(rows) => rows,
            Body::Empty { .. } | Body::Loading { .. } => &[],
        }
    }
}

/// Inputs to one composition pass.
pub(crate) struct ComposeInput<'g, 'r, 's, R> {
    pub config: &'g GridConfig,
    pub palette: &'g Palette,
    pub columns: &'g ColumnLayout,
    pub items: &'g [RowItem<'r, R>],
    pub selection: Option<&'g SelectionDescriptor<'s, R>>,
    pub row_style: Option<&'g RowStyleFn<'s, R>>,
    pub loading: bool,
    pub snapshot: &'g ScrollSnapshot,
    pub hovered: Option<&'g RowKey>,
}

pub(crate) fn compose<'g, R, C>(
    input: &ComposeInput<'g, '_, '_, R>,
    renderer: &C,
) -> GridFrame<'g, C::Output>
where
    C: CellRenderer<R>,
{
    let config = input.config;
    let tracks = GroupTracks::new(input.columns, input.snapshot.viewport_width);
    let shadows = ScrollShadows::compute(input.columns, input.snapshot);
    let window = VirtualWindow::compute(input.items.len(), config, input.snapshot);

    let select_all = input
        .selection
        .filter(|selection| {
            selection.mode == SelectionMode::Multiple && selection.enable_select_all
        })
        .map(|selection| {
            let summary = selection.summary(input.items);
            SelectAllState {
                checked: summary.all_selected,
                indeterminate: summary.indeterminate,
                disabled: summary.selectable == 0,
            }
        });

    let body = if input.loading {
        Body::Loading {
            height: config.effective_fallback_body_height(),
            content: renderer.render_loading(),
        }
    } else if input.items.is_empty() {
        Body::Empty {
            height: config.effective_fallback_body_height(),
            content: renderer.render_empty(),
        }
    } else {
        Body::Rows(compose_rows(input, window, renderer))
    };

    log::trace!(
        "Composed frame: window {}..{}, shadows {:?}",
        window.start,
        window.end,
        shadows
    );

    GridFrame {
        columns: input.columns,
        tracks,
        header_height: config.effective_header_height(),
        content_height: content_height(input.items.len(), config),
        window,
        select_all,
        shadows,
        body,
    }
}

fn compose_rows<R, C>(
    input: &ComposeInput<'_, '_, '_, R>,
    window: VirtualWindow,
    renderer: &C,
) -> Vec<RenderedRow<C::Output>>
where
    C: CellRenderer<R>,
{
    let config = input.config;
    let row_height = config.effective_row_height();
    let header_height = config.effective_header_height();
    let Some(items) = input.items.get(window.range()) else {
        return Vec::new();
    };

    items
        .iter()
        .map(|item| {
            let selected = input
                .selection
                .is_some_and(|selection| selection.is_selected(&item.key));
            let selectable = input
                .selection
                .is_some_and(|selection| selection.is_selectable(item));
            let hovered = input.hovered == Some(&item.key);
            let custom = input.row_style.and_then(|style| style(item.row, item.index));

            let background = RowBackground::choose(
                RowVisualState {
                    index: item.index,
                    selected,
                    hovered,
                    custom,
                },
                config.zebra,
                config.highlight_on_hover,
            );

            let cell = CellContext {
                row: item.row,
                row_index: item.index,
                key: &item.key,
                is_selected: selected,
                is_hovered: hovered,
                is_selectable: selectable,
            };
            let render_group = |columns: &[ColumnMeta]| -> Vec<C::Output> {
                columns
                    .iter()
                    .map(|column| renderer.render_cell(column, &cell))
                    .collect()
            };

            let top = item.index as f64 * row_height;
            RenderedRow {
                key: item.key.clone(),
                index: item.index,
                top,
                viewport_y: header_height + top - input.snapshot.scroll_top,
                height: row_height,
                selected,
                hovered,
                selectable,
                background,
                fill: background.color(input.palette),
                cells: GroupCells {
                    left: render_group(&input.columns.left),
                    center: render_group(&input.columns.center),
                    right: render_group(&input.columns.right),
                },
            }
        })
        .collect()
}
