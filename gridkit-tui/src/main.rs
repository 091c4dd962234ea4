mod app;
mod buffer;
mod cells;
mod dataset;
mod paint;
mod paths;
mod terminal;
mod text;
mod viewport;

use std::error::Error;
use std::fs::{self, File};
use std::path::PathBuf;

use gridkit::GridConfig;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::terminal::Terminal;

const DEPLOYMENTS: usize = 10_000;

/// One body row and the header each take one terminal line.
fn host_defaults() -> GridConfig {
    GridConfig::new()
        .row_height(viewport::CELL_HEIGHT)
        .header_height(viewport::CELL_HEIGHT)
        .fallback_body_height(10.0 * viewport::CELL_HEIGHT)
}

fn log_level() -> LevelFilter {
    std::env::var("GRIDKIT_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Debug)
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    WriteLogger::init(log_level(), Config::default(), File::create(path)?)?;
    Ok(())
}

/// Config from the command-line path or the config dir; defaults when the
/// file is missing or invalid.
fn load_config(path: Option<PathBuf>) -> GridConfig {
    let Some(path) = path.or_else(paths::config_file) else {
        return host_defaults();
    };
    if !path.exists() {
        log::debug!("No config at {}, using defaults", path.display());
        return host_defaults();
    }
    match GridConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring {}: {e}", path.display());
            host_defaults()
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging()?;

    let config = load_config(std::env::args_os().nth(1).map(PathBuf::from));
    let rows = dataset::generate(DEPLOYMENTS, chrono::Local::now().date_naive());

    let mut terminal = Terminal::new()?;
    let mut app = App::new(&rows, config, terminal.size());
    let result = app::run(&mut terminal, &mut app);

    drop(app);
    drop(terminal);
    if let Err(e) = &result {
        log::error!("Exited with error: {e}");
    }
    result?;
    Ok(())
}
