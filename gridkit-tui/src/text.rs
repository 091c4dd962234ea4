//! Fitting cell text into fixed-width column slots.

use gridkit::column::Alignment;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Terminal columns taken by `c`; control characters take none.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Text placed inside a slot: the visible part and its column offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fitted {
    pub offset: usize,
    pub text: String,
}

/// Fit `s` into `slot` columns with the column's alignment.
///
/// Text wider than the slot keeps its leading characters and ends in an
/// ellipsis; it then fills the slot, so alignment has no effect.
pub fn fit(s: &str, slot: usize, align: Alignment) -> Fitted {
    let width = display_width(s);
    if width <= slot {
        let free = slot - width;
        let offset = match align {
            Alignment::Left => 0,
            Alignment::Center => free / 2,
            Alignment::Right => free,
        };
        return Fitted {
            offset,
            text: s.to_string(),
        };
    }

    let mut text = String::new();
    if slot > 0 {
        let budget = slot - 1;
        let mut used = 0;
        for ch in s.chars() {
            used += char_width(ch);
            if used > budget {
                break;
            }
            text.push(ch);
        }
        text.push(ELLIPSIS);
    }
    Fitted { offset: 0, text }
}
