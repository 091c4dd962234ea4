//! gridkit - a virtualized data-grid engine.
//!
//! Renders arbitrarily large row sets into a bounded number of materialized
//! rows, resolves column sizing, alignment and fixed sides, and runs a
//! controlled selection state machine over a live dataset.
//!
//! The engine is headless. A host supplies rows, column specs, viewport
//! snapshots and a [`CellRenderer`](render::CellRenderer); it gets back a
//! [`GridFrame`](render::GridFrame) describing what to paint.

pub mod column;
pub mod config;
pub mod error;
pub mod grid;
pub mod identity;
pub mod render;
pub mod selection;
pub mod viewport;
pub mod window;

pub use column::{ColumnLayout, ColumnMeta, ColumnSpec};
pub use config::GridConfig;
pub use error::{GridError, Result};
pub use grid::{DataGrid, GridState};
pub use identity::{GridRow, RowItem, RowKey};
pub use selection::{SelectionDescriptor, SelectionMode};
pub use viewport::{ScrollSnapshot, ViewportTracker};
pub use window::VirtualWindow;

pub mod prelude {
    pub use crate::column::{
        Alignment, ColumnClass, ColumnLayout, ColumnMeta, ColumnSpec, FixedSide, Intent, Semantic,
    };
    pub use crate::config::GridConfig;
    pub use crate::grid::{DataGrid, GridState};
    pub use crate::identity::{GridRow, KeyResolver, RowItem, RowKey};
    pub use crate::render::{
        Body, CellContext, CellRenderer, GridFrame, Palette, RenderedRow, Rgb, RowBackground,
    };
    pub use crate::selection::{
        SelectionChange, SelectionDescriptor, SelectionMode, SelectionSummary,
    };
    pub use crate::viewport::{
        FrameId, FrameScheduler, ScrollContainer, ScrollSnapshot, ViewportEvent, ViewportTracker,
    };
    pub use crate::window::VirtualWindow;
}
