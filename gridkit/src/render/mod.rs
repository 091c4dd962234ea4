//! Render composition for the grid.
//!
//! - `tracks.rs` - grid-template tracks, content width, sticky group placement
//! - `background.rs` - the priority-ordered row background rule
//! - `shadow.rs` - fixed-group scroll shadow visibility
//! - `palette.rs` - concrete tint colors
//! - `compose.rs` - assembles a [`GridFrame`] from all of the above

mod background;
mod compose;
mod palette;
mod shadow;
mod tracks;

pub use background::{RowBackground, RowVisualState};
pub use compose::{
    Body, CellContext, CellRenderer, GridFrame, GroupCells, RenderedRow, RowStyleFn,
    SelectAllState,
};
pub use palette::{Palette, Rgb};
pub use shadow::ScrollShadows;
pub use tracks::{GroupTracks, MIN_CONTENT_WIDTH, Tracks};

pub(crate) use compose::{ComposeInput, compose};
