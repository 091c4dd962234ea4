use std::ops::Range;

use gridkit::render::Rgb;

use crate::text::char_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::new(15, 23, 42),
            bg: Rgb::WHITE,
            bold: false,
            wide_continuation: false,
        }
    }
}

/// Foreground attributes for written text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pen {
    pub fg: Rgb,
    pub bold: bool,
}

impl Pen {
    pub fn new(fg: Rgb) -> Self {
        Self { fg, bold: false }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[cfg(test)]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Paint the background of one line between two columns.
    pub fn fill(&mut self, y: u16, columns: Range<u16>, bg: Rgb) {
        for x in columns {
            if let Some(cell) = self.get_mut(x, y) {
                *cell = Cell {
                    bg,
                    ..Cell::default()
                };
            }
        }
    }

    /// Write `text` starting at column `x`, dropping anything outside `clip`.
    ///
    /// `x` may be negative (a horizontally scrolled group); characters left of
    /// the clip are skipped, not shifted. Backgrounds are preserved.
    pub fn put_str(&mut self, x: i32, y: u16, text: &str, clip: Range<i32>, pen: Pen) {
        let clip = clip.start.max(0)..clip.end.min(i32::from(self.width));
        let mut cursor = x;
        for ch in text.chars() {
            let width = char_width(ch).max(1) as i32;
            let fits = cursor >= clip.start && cursor + width <= clip.end;
            if fits {
                if let Some(cell) = u16::try_from(cursor)
                    .ok()
                    .and_then(|col| self.get_mut(col, y))
                {
                    cell.char = ch;
                    cell.fg = pen.fg;
                    cell.bold = pen.bold;
                    cell.wide_continuation = false;
                }
                for extra in 1..width {
                    if let Some(cell) = u16::try_from(cursor + extra)
                        .ok()
                        .and_then(|col| self.get_mut(col, y))
                    {
                        cell.wide_continuation = true;
                    }
                }
            }
            cursor += width;
            if cursor >= clip.end {
                break;
            }
        }
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}
