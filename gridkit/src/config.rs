//! Grid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Smallest row height the engine will divide by.
pub(crate) const MIN_ROW_HEIGHT: f64 = 1.0;

/// Per-grid configuration.
///
/// Row height is fixed and uniform for every row; variable-height rows are not
/// supported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Height of every body row in pixels.
    pub row_height: f64,

    /// Height of the sticky header band in pixels.
    pub header_height: f64,

    /// Extra rows materialized above and below the visible window.
    pub overscan: usize,

    /// Stripe odd rows.
    pub zebra: bool,

    /// Tint the row under the pointer.
    pub highlight_on_hover: bool,

    /// Body height reserved when there are too few rows to fill it, and the
    /// height of the empty/loading blocks.
    pub fallback_body_height: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_height: 48.0,
            header_height: 48.0,
            overscan: 4,
            zebra: false,
            highlight_on_hover: true,
            fallback_body_height: 240.0,
        }
    }
}

impl GridConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row height.
    pub fn row_height(mut self, height: f64) -> Self {
        self.row_height = height;
        self
    }

    /// Set the header height.
    pub fn header_height(mut self, height: f64) -> Self {
        self.header_height = height;
        self
    }

    /// Set the overscan row count.
    pub fn overscan(mut self, rows: usize) -> Self {
        self.overscan = rows;
        self
    }

    /// Enable or disable zebra striping.
    pub fn zebra(mut self, zebra: bool) -> Self {
        self.zebra = zebra;
        self
    }

    /// Enable or disable hover highlighting.
    pub fn highlight_on_hover(mut self, highlight: bool) -> Self {
        self.highlight_on_hover = highlight;
        self
    }

    /// Set the fallback body height.
    pub fn fallback_body_height(mut self, height: f64) -> Self {
        self.fallback_body_height = height;
        self
    }

    /// Row height clamped so window arithmetic never divides by zero.
    pub(crate) fn effective_row_height(&self) -> f64 {
        if self.row_height.is_finite() {
            self.row_height.max(MIN_ROW_HEIGHT)
        } else {
            MIN_ROW_HEIGHT
        }
    }

    /// Header height clamped to a finite, non-negative value.
    pub(crate) fn effective_header_height(&self) -> f64 {
        if self.header_height.is_finite() {
            self.header_height.max(0.0)
        } else {
            0.0
        }
    }

    /// Fallback body height clamped to a finite, non-negative value.
    pub(crate) fn effective_fallback_body_height(&self) -> f64 {
        if self.fallback_body_height.is_finite() {
            self.fallback_body_height.max(0.0)
        } else {
            0.0
        }
    }

    /// Check that all dimensions are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.row_height.is_finite() || self.row_height <= 0.0 {
            return Err(GridError::InvalidConfig(format!(
                "row_height must be a positive number, got {}",
                self.row_height
            )));
        }
        if !self.header_height.is_finite() || self.header_height < 0.0 {
            return Err(GridError::InvalidConfig(format!(
                "header_height must be zero or positive, got {}",
                self.header_height
            )));
        }
        if !self.fallback_body_height.is_finite() || self.fallback_body_height < 0.0 {
            return Err(GridError::InvalidConfig(format!(
                "fallback_body_height must be zero or positive, got {}",
                self.fallback_body_height
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded grid config from {}", path.display());
        Ok(config)
    }
}
