//! Addon step: optional addon archives chosen before the workflow advances.
//!
//! Provides:
//! - the download shortcuts and the "What kind of addons?" dialog
//! - a non-blocking native file picker feeding the shared workflow state
//! - a plain-text dump for `--dump-tui`

mod addons_app;
mod addons_ui;

pub use addons_app::{
    AddonsView, Control, InputResult, CONFIRM_BUTTON, HELP_BUTTON, PICK_BUTTON,
    PICK_PENDING_NOTE, STEP_TITLE,
};
pub use addons_ui::{draw, dump_step, help_text};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Puts the terminal back even when the loop bails out early.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err).context("failed to enter the alternate screen");
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    }
}

/// Run the addon step until the user confirms or quits.
pub fn run(view: &mut AddonsView) -> Result<InputResult> {
    use std::io::IsTerminal;

    if !io::stdout().is_terminal() {
        anyhow::bail!(
            "No TTY detected. The TUI requires an interactive terminal.\n\
             Use `oai addons --addon <file>` for scripted runs."
        );
    }

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    run_loop(&mut terminal, view)
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    view: &mut AddonsView,
) -> Result<InputResult> {
    loop {
        terminal.draw(|f| draw(f, view))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                match view.handle_input(key) {
                    InputResult::Continue => {}
                    result => return Ok(result),
                }
            }
        }

        // Redraw happens every iteration, so the flag only needs draining.
        view.tick();
    }
}
