use serde::{Deserialize, Serialize};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }
}

/// Row tint colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub base: Rgb,
    pub zebra: Rgb,
    pub hover: Rgb,
    pub selected: Rgb,
    pub selected_hover: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            base: Rgb::WHITE,
            zebra: Rgb::hex(0xF8FAFC),
            hover: Rgb::hex(0xF1F5F9),
            selected: Rgb::hex(0xEEF2FF),
            selected_hover: Rgb::hex(0xE0E7FF),
        }
    }
}
