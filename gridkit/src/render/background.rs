use super::palette::{Palette, Rgb};

/// The single background rule that applies to a row.
///
/// Rules are checked in declaration order; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowBackground {
    /// Host-supplied per-row override.
    Custom(Rgb),
    SelectedHovered,
    Selected,
    Hovered,
    Zebra,
    Base,
}

/// Inputs to the background decision for one row.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowVisualState {
    pub index: usize,
    pub selected: bool,
    pub hovered: bool,
    pub custom: Option<Rgb>,
}

impl RowBackground {
    /// Pick the background rule for a row.
    ///
    /// Hover only counts when `highlight_on_hover` is set; striping only when
    /// `zebra` is set, on odd indices.
    pub fn choose(state: RowVisualState, zebra: bool, highlight_on_hover: bool) -> Self {
        let hovered = state.hovered && highlight_on_hover;
        if let Some(color) = state.custom {
            Self::Custom(color)
        } else if state.selected && hovered {
            Self::SelectedHovered
        } else if state.selected {
            Self::Selected
        } else if hovered {
            Self::Hovered
        } else if zebra && state.index % 2 == 1 {
            Self::Zebra
        } else {
            Self::Base
        }
    }

    /// Concrete color for this rule.
    pub fn color(self, palette: &Palette) -> Rgb {
        match self {
            Self::Custom(color) => color,
            Self::SelectedHovered => palette.selected_hover,
            Self::Selected => palette.selected,
            Self::Hovered => palette.hover,
            Self::Zebra => palette.zebra,
            Self::Base => palette.base,
        }
    }
}
