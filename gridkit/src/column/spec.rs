//! Declared column descriptions.

use serde::{Deserialize, Serialize};

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// What kind of value a column holds. Drives default alignment and classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Semantic {
    Text,
    Number,
    Integer,
    Currency,
    Percent,
    Date,
    Time,
    Datetime,
}

impl Semantic {
    /// Number, integer, currency and percent columns.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Number | Self::Integer | Self::Currency | Self::Percent
        )
    }

    /// Date, time and datetime columns.
    pub fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::Time | Self::Datetime)
    }
}

/// The role a column plays in the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[default]
    Data,
    Actions,
    Status,
    Meta,
}

/// Which edge, if any, a column is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedSide {
    #[default]
    None,
    Left,
    Right,
}

/// An explicit column width: a number of pixels or a CSS-like string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WidthValue {
    Px(f64),
    Text(String),
}

impl WidthValue {
    /// Pixel value, if this width can be resolved.
    ///
    /// Accepts plain numbers and `"<n>px"` strings. Anything else (percentages,
    /// `auto`, garbage) is unresolvable.
    pub fn to_px(&self) -> Option<f64> {
        let px = match self {
            Self::Px(px) => *px,
            Self::Text(text) => {
                let text = text.trim();
                let number = text.strip_suffix("px").unwrap_or(text).trim_end();
                number.parse::<f64>().ok()?
            }
        };
        (px.is_finite() && px >= 0.0).then_some(px)
    }
}

impl From<f64> for WidthValue {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

impl From<u32> for WidthValue {
    fn from(px: u32) -> Self {
        Self::Px(f64::from(px))
    }
}

impl From<&str> for WidthValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for WidthValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A declared column.
///
/// # Examples
///
/// ```
/// use gridkit::column::{ColumnSpec, FixedSide, Semantic};
///
/// let columns = vec![
///     ColumnSpec::new("id", "ID").width(80).fixed(FixedSide::Left),
///     ColumnSpec::new("name", "Name").flex(2.0),
///     ColumnSpec::new("cost", "Cost").semantic(Semantic::Currency),
/// ];
/// assert_eq!(columns.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSpec {
    pub key: String,
    pub title: String,
    pub align: Option<Alignment>,
    pub width: Option<WidthValue>,
    pub min_width: Option<f64>,
    pub max_width: Option<f64>,
    pub flex: Option<f64>,
    pub semantic: Option<Semantic>,
    pub intent: Intent,
    pub fixed: FixedSide,
    pub hidden: bool,
}

impl ColumnSpec {
    /// Create a column with the given key and title.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set an explicit alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    /// Set an explicit width.
    pub fn width(mut self, width: impl Into<WidthValue>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Set the minimum width.
    pub fn min_width(mut self, px: f64) -> Self {
        self.min_width = Some(px);
        self
    }

    /// Set the maximum width.
    pub fn max_width(mut self, px: f64) -> Self {
        self.max_width = Some(px);
        self
    }

    /// Set the flex factor.
    pub fn flex(mut self, factor: f64) -> Self {
        self.flex = Some(factor);
        self
    }

    /// Set the semantic value type.
    pub fn semantic(mut self, semantic: Semantic) -> Self {
        self.semantic = Some(semantic);
        self
    }

    /// Set the column intent.
    pub fn intent(mut self, intent: Intent) -> Self {
        self.intent = intent;
        self
    }

    /// Pin the column to an edge.
    pub fn fixed(mut self, side: FixedSide) -> Self {
        self.fixed = side;
        self
    }

    /// Hide the column.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}
