//! TUI application shell and main loop.
//!
//! # Responsibility
//! - Own the terminal lifecycle (raw mode, alternate screen, cursor).
//! - Pump crossterm events through the key handler and re-render after
//!   every handled event.
//!
//! # Invariants
//! - The terminal is restored on every exit path: normal return, error,
//!   Drop and panic.

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use ticklist_core::SlotRepository;

use crate::event_handler::{handle_key_event, KeyEventResult};
use crate::render::render_app;
use crate::state::AppState;

/// Terminal shell around the view state.
pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Prevents double cleanup in Drop.
    cleaned_up: bool,
}

impl TuiApp {
    /// Enters raw mode and the alternate screen.
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;

        install_terminal_panic_hook();

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("failed to create terminal")?;

        Ok(Self {
            terminal,
            cleaned_up: false,
        })
    }

    /// Runs the event loop until the user quits or an action fails.
    pub fn run<R: SlotRepository>(&mut self, state: &mut AppState<R>) -> Result<()> {
        let result = self.run_event_loop(state);
        // Restore the terminal before the error (if any) is printed.
        self.cleanup_terminal();
        result
    }

    fn run_event_loop<R: SlotRepository>(&mut self, state: &mut AppState<R>) -> Result<()> {
        loop {
            self.terminal
                .draw(|frame| render_app(frame, state))
                .context("failed to draw frame")?;

            // Each event is handled to completion (transition, slot
            // write, re-render) before the next one is read.
            match event::read().context("failed to read terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match handle_key_event(key.code, key.modifiers, state)
                        .context("failed to apply task list action")?
                    {
                        KeyEventResult::Exit => return Ok(()),
                        KeyEventResult::Continue => {}
                    }
                }
                _ => {}
            }
        }
    }

    fn cleanup_terminal(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;

        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        self.cleanup_terminal();
    }
}

/// Restores the terminal before earlier panic hooks run, so panic
/// output lands on a usable screen.
fn install_terminal_panic_hook() {
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        previous_hook(panic_info);
    }));
}
