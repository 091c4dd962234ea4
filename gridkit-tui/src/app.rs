//! The interactive deployments grid.
//!
//! The app is the grid's controlling host: it owns the selected-key set and
//! hands the grid a fresh [`SelectionDescriptor`] whenever that set changes.
//! Scrolling moves the host-owned offsets and notifies the tracker; the
//! snapshot only reaches the grid when the frame clock fires.

use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use gridkit::prelude::*;
use gridkit::render::GroupTracks;

use crate::cells::{self, DeployCells};
use crate::dataset::Deployment;
use crate::paint;
use crate::terminal::Terminal;
use crate::viewport::{CELL_HEIGHT, CELL_WIDTH, FrameClock, TerminalViewport, lines_to_px};

/// Lines below the grid reserved for the status bar.
const STATUS_LINES: u16 = 1;

/// Rows scrolled per wheel notch.
const WHEEL_ROWS: f64 = 3.0;

const HORIZONTAL_STEP: f64 = 8.0 * CELL_WIDTH;

type SharedSelection = Rc<RefCell<HashSet<RowKey>>>;

/// Descriptor over the current selection that writes changes back to it.
fn descriptor<'a>(selected: &SharedSelection) -> SelectionDescriptor<'a, Deployment> {
    let sink = Rc::clone(selected);
    SelectionDescriptor::multiple(selected.borrow().iter().cloned())
        .selectable(cells::is_selectable)
        .on_change(move |change| {
            *sink.borrow_mut() = change.key_set();
        })
}

/// Scrollable content size: widest of tracks and viewport, header plus body.
fn content_size(grid: &DataGrid<'_, Deployment>, viewport_width: f64) -> (f64, f64) {
    let config = grid.grid_config();
    let width = GroupTracks::new(grid.columns(), viewport_width).content_width;
    let body = if grid.is_loading() {
        config.fallback_body_height
    } else {
        grid.content_height()
    };
    (width, config.header_height + body)
}

pub struct App<'a> {
    grid: DataGrid<'a, Deployment>,
    selected: SharedSelection,
    state: GridState,
    tracker: ViewportTracker<TerminalViewport, FrameClock>,
    renderer: DeployCells,
    grid_lines: u16,
    /// Terminal line of the last pointer event.
    pointer_line: Option<u16>,
    dirty: bool,
    quit: bool,
}

impl<'a> App<'a> {
    pub fn new(rows: &'a [Deployment], config: GridConfig, (width, height): (u16, u16)) -> Self {
        let selected = SharedSelection::default();
        let grid = DataGrid::new(rows, cells::columns())
            .config(config)
            .selection(descriptor(&selected));

        let grid_lines = height.saturating_sub(STATUS_LINES);
        let mut viewport = TerminalViewport::new(width, grid_lines);
        let (content_width, content_height) = content_size(&grid, viewport.width());
        viewport.set_content(content_width, content_height);

        let tracker = ViewportTracker::attach(viewport, FrameClock::new());
        let state = GridState::with_snapshot(tracker.snapshot());
        log::info!("Showing {} deployments", grid.len());

        Self {
            grid,
            selected,
            state,
            tracker,
            renderer: DeployCells,
            grid_lines,
            pointer_line: None,
            dirty: true,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// How long to wait for input before the next frame is due.
    pub fn timeout(&self) -> Duration {
        self.tracker.scheduler().timeout()
    }

    /// Run the pending frame if it is due.
    pub fn tick(&mut self) {
        let Some(id) = self.tracker.scheduler_mut().take_due() else {
            return;
        };
        if let Some(snapshot) = self.tracker.on_frame(id) {
            self.state.set_snapshot(snapshot);
            // Rows moved under a still pointer.
            if let Some(line) = self.pointer_line {
                let y = self.pointer_y(line);
                self.grid.hover_at(&mut self.state, y);
            }
            self.dirty = true;
        }
    }

    /// Repaint if anything changed since the last draw.
    pub fn draw(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        if !self.dirty {
            return Ok(());
        }
        let frame = self.grid.compose(&self.state, &self.renderer);
        let status = self.status_line(&frame.window);
        terminal.draw(|buffer| {
            paint::paint(
                buffer,
                &frame,
                self.state.snapshot(),
                self.grid_lines,
                &status,
            );
        })?;
        self.dirty = false;
        Ok(())
    }

    fn status_line(&self, window: &VirtualWindow) -> String {
        let summary = self.grid.summary().unwrap_or_default();
        let zebra = if self.grid.grid_config().zebra { "on" } else { "off" };
        format!(
            " {}/{} selected │ rows {}-{} of {} │ zebra {} │ space toggle · a all · z zebra · L loading · q quit",
            summary.selected,
            summary.selectable,
            window.start + usize::from(!window.is_empty()),
            window.end,
            self.grid.len(),
            zebra,
        )
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key(key),
            Event::Mouse(mouse) => self.on_mouse(mouse),
            Event::Resize(width, height) => self.on_resize(width, height),
            _ => {}
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        let row_height = self.grid.grid_config().row_height;
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit = true,
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.scroll(0.0, row_height),
            KeyCode::Char('k') | KeyCode::Up => self.scroll(0.0, -row_height),
            KeyCode::PageDown => self.scroll(0.0, self.page_height()),
            KeyCode::PageUp => self.scroll(0.0, -self.page_height()),
            KeyCode::Char('h') | KeyCode::Left => self.scroll(-HORIZONTAL_STEP, 0.0),
            KeyCode::Char('l') | KeyCode::Right => self.scroll(HORIZONTAL_STEP, 0.0),
            KeyCode::Char(' ') => self.toggle_hovered(),
            KeyCode::Char('a') => self.toggle_all(),
            KeyCode::Char('z') => self.toggle_zebra(),
            KeyCode::Char('L') => self.toggle_loading(),
            _ => {}
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        let wheel = WHEEL_ROWS * self.grid.grid_config().row_height;
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll(0.0, wheel),
            MouseEventKind::ScrollUp => self.scroll(0.0, -wheel),
            MouseEventKind::ScrollRight => self.scroll(HORIZONTAL_STEP, 0.0),
            MouseEventKind::ScrollLeft => self.scroll(-HORIZONTAL_STEP, 0.0),
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.hover(mouse.row),
            MouseEventKind::Down(MouseButton::Left) => {
                self.hover(mouse.row);
                self.click(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    fn on_resize(&mut self, width: u16, height: u16) {
        self.grid_lines = height.saturating_sub(STATUS_LINES);
        self.tracker.container_mut().resize(width, self.grid_lines);
        self.sync_content();
    }

    // -------------------------------------------------------------------------
    // Viewport
    // -------------------------------------------------------------------------

    fn page_height(&self) -> f64 {
        let config = self.grid.grid_config();
        (self.tracker.container().height() - config.header_height).max(config.row_height)
    }

    fn scroll(&mut self, dx: f64, dy: f64) {
        if self.tracker.container_mut().scroll_by(dx, dy) {
            self.tracker.notify(ViewportEvent::Scroll);
        }
    }

    /// Push the content size to the container after rows, columns or the
    /// viewport changed.
    fn sync_content(&mut self) {
        let (width, height) = content_size(&self.grid, self.tracker.container().width());
        self.tracker.container_mut().set_content(width, height);
        self.tracker.notify(ViewportEvent::Resize);
        self.dirty = true;
    }

    /// Viewport-relative pixel y at the middle of a terminal line.
    fn pointer_y(&self, line: u16) -> Option<f64> {
        (line < self.grid_lines && !self.grid.is_loading())
            .then(|| lines_to_px(line) + CELL_HEIGHT / 2.0)
    }

    fn hover(&mut self, line: u16) {
        self.pointer_line = Some(line);
        let y = self.pointer_y(line);
        if self.grid.hover_at(&mut self.state, y) {
            self.dirty = true;
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    fn click(&mut self, column: u16, line: u16) {
        let Some(y) = self.pointer_y(line) else {
            return;
        };
        if y < self.grid.grid_config().header_height {
            let on_checkbox = self
                .grid
                .columns()
                .left
                .first()
                .filter(|meta| meta.is_selection())
                .is_some_and(|meta| f64::from(column) * CELL_WIDTH < meta.track_width());
            if on_checkbox {
                self.toggle_all();
            }
            return;
        }
        let Some(key) = self
            .grid
            .row_at(&self.state, y)
            .map(|item| item.key.clone())
        else {
            return;
        };
        if self.grid.toggle_row(&key) {
            self.sync_selection();
        }
    }

    fn toggle_hovered(&mut self) {
        let Some(key) = self.state.hovered().cloned() else {
            return;
        };
        if self.grid.toggle_row(&key) {
            self.sync_selection();
        }
    }

    fn toggle_all(&mut self) {
        if self.grid.toggle_all() {
            self.sync_selection();
        }
    }

    /// Hand the grid the selection written by its last `on_change`.
    fn sync_selection(&mut self) {
        self.grid.set_selection(Some(descriptor(&self.selected)));
        log::debug!("{} deployments selected", self.selected.borrow().len());
        self.dirty = true;
    }

    // -------------------------------------------------------------------------
    // Display toggles
    // -------------------------------------------------------------------------

    fn toggle_zebra(&mut self) {
        let config = self.grid.grid_config();
        let config = config.clone().zebra(!config.zebra);
        self.grid.set_config(config);
        self.dirty = true;
    }

    fn toggle_loading(&mut self) {
        self.grid.set_loading(!self.grid.is_loading());
        if self.grid.is_loading() {
            self.grid.hover_at(&mut self.state, None);
        }
        self.sync_content();
    }
}

/// Event loop: paint when dirty, wait for input until the next frame is due,
/// then run the frame.
pub fn run(terminal: &mut Terminal, app: &mut App<'_>) -> io::Result<()> {
    while !app.should_quit() {
        app.draw(terminal)?;
        for event in terminal.poll(app.timeout())? {
            app.handle(event);
        }
        app.tick();
    }
    Ok(())
}
