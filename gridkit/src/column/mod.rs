//! Column specs and the column layout resolver.
//!
//! - `spec.rs` - declared columns ([`ColumnSpec`]) and their enums
//! - `layout.rs` - width/alignment resolution and fixed-group partitioning

mod layout;
mod spec;

pub use layout::{
    ColumnClass, ColumnKind, ColumnLayout, ColumnMeta, DEFAULT_COLUMN_WIDTH, MIN_COLUMN_WIDTH,
    SELECTION_COLUMN_KEY, SELECTION_COLUMN_WIDTH,
};
pub use spec::{Alignment, ColumnSpec, FixedSide, Intent, Semantic, WidthValue};
