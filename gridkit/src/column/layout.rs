//! Column layout resolution.
//!
//! Turns declared [`ColumnSpec`]s into resolved [`ColumnMeta`]s and partitions
//! them into the left-fixed, center and right-fixed groups.

use bitflags::bitflags;

use super::spec::{Alignment, ColumnSpec, FixedSide, Intent};

/// Floor applied to every data column track.
pub const MIN_COLUMN_WIDTH: f64 = 96.0;

/// Width used when nothing else resolves, and the unit for flex factors.
pub const DEFAULT_COLUMN_WIDTH: f64 = 160.0;

/// Width of the synthetic selection (checkbox) column.
pub const SELECTION_COLUMN_WIDTH: f64 = 44.0;

/// Key of the synthetic selection column.
pub const SELECTION_COLUMN_KEY: &str = "__selection";

bitflags! {
    /// Derived presentation flags for a column.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ColumnClass: u16 {
        const NUMERIC = 1 << 0;
        const TEMPORAL = 1 << 1;
        const ACTIONS = 1 << 2;
        const STATUS = 1 << 3;
        const META = 1 << 4;
        const SELECTION = 1 << 5;
        const FIXED_LEFT = 1 << 6;
        const FIXED_RIGHT = 1 << 7;
        const ALIGN_LEFT = 1 << 8;
        const ALIGN_CENTER = 1 << 9;
        const ALIGN_RIGHT = 1 << 10;
    }
}

impl ColumnClass {
    /// Class names for hosts that emit class strings, in flag order.
    pub fn class_names(self) -> Vec<&'static str> {
        self.iter_names()
            .map(|(name, _)| match name {
                "NUMERIC" => "numeric",
                "TEMPORAL" => "temporal",
                "ACTIONS" => "actions",
                "STATUS" => "status",
                "META" => "meta",
                "SELECTION" => "selection",
                "FIXED_LEFT" => "fixed-left",
                "FIXED_RIGHT" => "fixed-right",
                "ALIGN_LEFT" => "align-left",
                "ALIGN_CENTER" => "align-center",
                _ => "align-right",
            })
            .collect()
    }
}

/// Whether a resolved column holds data or is the synthetic selection column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Data,
    Selection,
}

/// A resolved column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMeta {
    /// The declared column this was resolved from.
    pub spec: ColumnSpec,
    pub kind: ColumnKind,
    /// Resolved width, before the track floor is applied.
    pub width: f64,
    pub align: Alignment,
    pub class: ColumnClass,
}

impl ColumnMeta {
    fn resolve(spec: &ColumnSpec) -> Self {
        let width = resolve_width(spec);
        let align = resolve_alignment(spec);

        let mut class = match align {
            Alignment::Left => ColumnClass::ALIGN_LEFT,
            Alignment::Center => ColumnClass::ALIGN_CENTER,
            Alignment::Right => ColumnClass::ALIGN_RIGHT,
        };
        if let Some(semantic) = spec.semantic {
            class.set(ColumnClass::NUMERIC, semantic.is_numeric());
            class.set(ColumnClass::TEMPORAL, semantic.is_temporal());
        }
        match spec.intent {
            Intent::Data => {}
            Intent::Actions => class |= ColumnClass::ACTIONS,
            Intent::Status => class |= ColumnClass::STATUS,
            Intent::Meta => class |= ColumnClass::META,
        }
        match spec.fixed {
            FixedSide::None => {}
            FixedSide::Left => class |= ColumnClass::FIXED_LEFT,
            FixedSide::Right => class |= ColumnClass::FIXED_RIGHT,
        }

        Self {
            spec: spec.clone(),
            kind: ColumnKind::Data,
            width,
            align,
            class,
        }
    }

    fn selection() -> Self {
        let spec = ColumnSpec::new(SELECTION_COLUMN_KEY, "")
            .align(Alignment::Center)
            .width(SELECTION_COLUMN_WIDTH)
            .fixed(FixedSide::Left);
        Self {
            spec,
            kind: ColumnKind::Selection,
            width: SELECTION_COLUMN_WIDTH,
            align: Alignment::Center,
            class: ColumnClass::SELECTION | ColumnClass::FIXED_LEFT | ColumnClass::ALIGN_CENTER,
        }
    }

    /// Column key.
    pub fn key(&self) -> &str {
        &self.spec.key
    }

    /// Header title.
    pub fn title(&self) -> &str {
        &self.spec.title
    }

    /// Whether this is the synthetic selection column.
    pub fn is_selection(&self) -> bool {
        self.kind == ColumnKind::Selection
    }

    /// Width of the grid track this column occupies.
    ///
    /// Data columns are floored at [`MIN_COLUMN_WIDTH`]; the selection column
    /// keeps its own narrower floor.
    pub fn track_width(&self) -> f64 {
        match self.kind {
            ColumnKind::Data => self.width.max(MIN_COLUMN_WIDTH),
            ColumnKind::Selection => self.width.max(SELECTION_COLUMN_WIDTH),
        }
    }
}

/// Finite, non-negative pixel value.
fn usable(px: Option<f64>) -> Option<f64> {
    px.filter(|px| px.is_finite() && *px >= 0.0)
}

/// Resolve a column's width: explicit width, then min, then max, then flex.
fn resolve_width(spec: &ColumnSpec) -> f64 {
    spec.width
        .as_ref()
        .and_then(|width| width.to_px())
        .or_else(|| usable(spec.min_width))
        .or_else(|| usable(spec.max_width))
        .or_else(|| usable(spec.flex).map(|flex| flex * DEFAULT_COLUMN_WIDTH))
        .unwrap_or(DEFAULT_COLUMN_WIDTH)
}

/// Resolve a column's alignment: actions, explicit, then semantic default.
fn resolve_alignment(spec: &ColumnSpec) -> Alignment {
    if spec.intent == Intent::Actions {
        return Alignment::Center;
    }
    if let Some(align) = spec.align {
        return align;
    }
    match spec.semantic {
        Some(semantic) if semantic.is_numeric() => Alignment::Right,
        Some(semantic) if semantic.is_temporal() => Alignment::Center,
        _ => Alignment::Left,
    }
}

/// Resolved columns partitioned into fixed and scrolling groups.
///
/// Declaration order is preserved within each group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnLayout {
    pub left: Vec<ColumnMeta>,
    pub center: Vec<ColumnMeta>,
    pub right: Vec<ColumnMeta>,
}

impl ColumnLayout {
    /// Resolve and partition column specs.
    ///
    /// Hidden columns are dropped first. When `with_selection` is set, the
    /// left group is prefixed with the synthetic selection column.
    pub fn resolve(specs: &[ColumnSpec], with_selection: bool) -> Self {
        let mut layout = Self::default();
        if with_selection {
            layout.left.push(ColumnMeta::selection());
        }

        for spec in specs.iter().filter(|spec| !spec.hidden) {
            let meta = ColumnMeta::resolve(spec);
            match spec.fixed {
                FixedSide::Left => layout.left.push(meta),
                FixedSide::None => layout.center.push(meta),
                FixedSide::Right => layout.right.push(meta),
            }
        }

        log::trace!(
            "Resolved columns: {} left, {} center, {} right",
            layout.left.len(),
            layout.center.len(),
            layout.right.len()
        );
        layout
    }

    /// All columns, left to right.
    pub fn iter(&self) -> impl Iterator<Item = &ColumnMeta> {
        self.left.iter().chain(&self.center).chain(&self.right)
    }

    /// Number of resolved columns, including the selection column.
    pub fn len(&self) -> usize {
        self.left.len() + self.center.len() + self.right.len()
    }

    /// Whether no columns resolved.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find a column by key.
    pub fn find(&self, key: &str) -> Option<&ColumnMeta> {
        self.iter().find(|meta| meta.key() == key)
    }

    /// Whether a left-fixed group exists.
    pub fn has_left(&self) -> bool {
        !self.left.is_empty()
    }

    /// Whether a right-fixed group exists.
    pub fn has_right(&self) -> bool {
        !self.right.is_empty()
    }
}
