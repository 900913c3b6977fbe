//! Terminal front end for the ticklist core.
//!
//! # Responsibility
//! - Parse CLI flags, initialize logging, open storage.
//! - Hand a hydrated task list service to the TUI shell.

mod app;
mod event_handler;
mod render;
mod state;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;
use ticklist_core::db::open_db;
use ticklist_core::{
    default_log_level, init_logging, MemorySlotRepository, SlotRepository, SqliteSlotRepository,
    TaskListService,
};

use crate::app::TuiApp;
use crate::state::AppState;

const DB_FILE_NAME: &str = "ticklist.sqlite3";

/// Minimal persistent task list for the terminal.
#[derive(Debug, Parser)]
#[command(name = "ticklist", version, about)]
struct Cli {
    /// Directory holding the task database and log files.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level for the rolling log file (trace|debug|info|warn|error).
    #[arg(long)]
    log_level: Option<String>,

    /// Keep the list in memory only; nothing is persisted.
    #[arg(long)]
    ephemeral: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = resolve_data_dir(cli.data_dir)?;
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data directory `{}`", data_dir.display()))?;

    let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
    let log_dir = data_dir.join("logs");
    let log_dir = log_dir
        .to_str()
        .ok_or_else(|| anyhow!("data directory path is not valid UTF-8"))?;
    init_logging(level, log_dir).map_err(|err| anyhow!(err))?;

    let result = if cli.ephemeral {
        run(MemorySlotRepository::new())
    } else {
        let conn = open_db(data_dir.join(DB_FILE_NAME)).context("failed to open task database")?;
        run(SqliteSlotRepository::new(&conn))
    };

    info!(
        "event=app_exit module=tui status={}",
        if result.is_ok() { "ok" } else { "error" }
    );
    result
}

fn run<R: SlotRepository>(repo: R) -> Result<()> {
    let mut service = TaskListService::new(repo);
    service.hydrate().context("failed to load persisted tasks")?;

    let mut state = AppState::new(service);
    let mut tui = TuiApp::new()?;
    tui.run(&mut state)
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match flag {
        Some(dir) => dir,
        None => dirs::data_dir()
            .ok_or_else(|| anyhow!("no platform data directory available; pass --data-dir"))?
            .join("ticklist"),
    };
    // Logging init requires an absolute directory.
    if dir.is_absolute() {
        Ok(dir)
    } else {
        Ok(std::env::current_dir()
            .context("failed to resolve current directory")?
            .join(dir))
    }
}
