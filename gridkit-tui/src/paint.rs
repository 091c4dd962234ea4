//! Paints a composed [`GridFrame`] into a cell buffer.
//!
//! Each column group is painted in its own clip band: the left group at the
//! viewport's left edge, the right group against the right edge, and the
//! center group offset by the horizontal scroll and clipped between them.

use std::ops::Range;

use gridkit::column::ColumnMeta;
use gridkit::render::{Body, GridFrame, Rgb, SelectAllState, Tracks};
use gridkit::viewport::ScrollSnapshot;

use crate::buffer::{Buffer, Pen};
use crate::text::{display_width, fit};
use crate::viewport::{CELL_HEIGHT, px_to_column, px_to_line};

const TEXT: Rgb = Rgb::hex(0x0F172A);
const MUTED: Rgb = Rgb::hex(0x64748B);
const HEADER_BG: Rgb = Rgb::hex(0xE2E8F0);
const SHADOW: Rgb = Rgb::hex(0x94A3B8);
const STATUS_BG: Rgb = Rgb::hex(0x1E293B);
const STATUS_FG: Rgb = Rgb::hex(0xF1F5F9);

/// One column group positioned on screen.
struct Band<'f> {
    columns: &'f [ColumnMeta],
    tracks: &'f Tracks,
    /// Terminal column of the group's left edge; negative when scrolled off.
    origin: i32,
    clip: Range<i32>,
}

impl Band<'_> {
    /// Write one text per column on line `y`.
    fn write<'t>(
        &self,
        buffer: &mut Buffer,
        y: u16,
        texts: impl IntoIterator<Item = &'t str>,
        pen: Pen,
    ) {
        let offsets = self.tracks.offsets();
        for ((column, text), (offset, width)) in self
            .columns
            .iter()
            .zip(texts)
            .zip(offsets.iter().zip(&self.tracks.widths))
        {
            let x = self.origin + px_to_column(*offset);
            // Keep one blank cell between columns.
            let slot = px_to_column(*width).saturating_sub(1).max(0) as usize;
            let fitted = fit(text, slot, column.align);
            let x = x + fitted.offset as i32;
            buffer.put_str(x, y, &fitted.text, self.clip.clone(), pen);
        }
    }
}

fn bands<'f, O>(frame: &'f GridFrame<'_, O>, snapshot: &ScrollSnapshot) -> [Band<'f>; 3] {
    let tracks = &frame.tracks;
    let left_end = px_to_column(tracks.left_x() + tracks.left.total());
    let right_start = px_to_column(tracks.right_x(snapshot));
    let width = px_to_column(snapshot.viewport_width);
    [
        Band {
            columns: &frame.columns.left,
            tracks: &tracks.left,
            origin: px_to_column(tracks.left_x()),
            clip: 0..left_end,
        },
        Band {
            columns: &frame.columns.center,
            tracks: &tracks.center,
            origin: px_to_column(tracks.center_x(snapshot)),
            clip: left_end..right_start,
        },
        Band {
            columns: &frame.columns.right,
            tracks: &tracks.right,
            origin: right_start,
            clip: right_start..width,
        },
    ]
}

fn select_all_glyph(state: Option<SelectAllState>) -> &'static str {
    match state {
        None => "",
        Some(state) if state.disabled => " · ",
        Some(state) if state.checked => "[x]",
        Some(state) if state.indeterminate => "[-]",
        Some(_) => "[ ]",
    }
}

fn lines(px: f64) -> u16 {
    (px / CELL_HEIGHT).ceil().max(0.0) as u16
}

/// Paint the grid into the top `grid_lines` lines and `status` below it.
pub fn paint(
    buffer: &mut Buffer,
    frame: &GridFrame<'_, String>,
    snapshot: &ScrollSnapshot,
    grid_lines: u16,
    status: &str,
) {
    let width = buffer.width();
    let header_lines = lines(frame.header_height).min(grid_lines);
    let bands = bands(frame, snapshot);

    for y in 0..header_lines {
        buffer.fill(y, 0..width, HEADER_BG);
    }
    if header_lines > 0 {
        let y = header_lines - 1;
        let pen = Pen::new(TEXT).bold();
        for band in &bands {
            let titles = band.columns.iter().map(|column| {
                if column.is_selection() {
                    select_all_glyph(frame.select_all)
                } else {
                    column.title()
                }
            });
            band.write(buffer, y, titles, pen);
        }
    }

    match &frame.body {
        Body::Rows(rows) => {
            for row in rows {
                let top = px_to_line(row.viewport_y);
                let Ok(top) = u16::try_from(top) else { continue };
                if top < header_lines || top >= grid_lines {
                    continue;
                }
                let bottom = top.saturating_add(lines(row.height).max(1)).min(grid_lines);
                for y in top..bottom {
                    buffer.fill(y, 0..width, row.fill);
                }
                let pen = Pen::new(TEXT);
                let cells = [&row.cells.left, &row.cells.center, &row.cells.right];
                for (band, texts) in bands.iter().zip(cells) {
                    band.write(buffer, top, texts.iter().map(String::as_str), pen);
                }
            }
        }
        Body::Empty { height, content } | Body::Loading { height, content } => {
            let block = lines(*height).min(grid_lines.saturating_sub(header_lines));
            let y = header_lines + block / 2;
            if y < grid_lines {
                let x = (usize::from(width).saturating_sub(display_width(content)) / 2) as i32;
                buffer.put_str(x, y, content, 0..i32::from(width), Pen::new(MUTED));
            }
        }
    }

    paint_shadows(buffer, frame, &bands, grid_lines);

    if grid_lines < buffer.height() {
        buffer.fill(grid_lines, 0..width, STATUS_BG);
        buffer.put_str(0, grid_lines, status, 0..i32::from(width), Pen::new(STATUS_FG));
    }
}

/// Mark the edges of fixed groups while content is hidden beneath them.
fn paint_shadows<O>(
    buffer: &mut Buffer,
    frame: &GridFrame<'_, O>,
    bands: &[Band<'_>; 3],
    grid_lines: u16,
) {
    let [left, _, right] = bands;
    let edges = [
        (frame.shadows.left, left.clip.end - 1),
        (frame.shadows.right, right.clip.start),
    ];
    for (visible, x) in edges {
        let Ok(x) = u16::try_from(x) else { continue };
        if !visible {
            continue;
        }
        for y in 0..grid_lines {
            if let Some(cell) = buffer.get_mut(x, y) {
                cell.char = '│';
                cell.fg = SHADOW;
                cell.bold = false;
                cell.wide_continuation = false;
            }
        }
    }
}
