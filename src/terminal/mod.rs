//! Terminal lifecycle for the picker demo.
//!
//! [`TerminalManager`] puts the terminal into raw mode on the alternate
//! screen with mouse capture and hands it back when dropped, even when the
//! event loop exits early with an error.
//!
//! ```no_run
//! use elpick::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut term = TerminalManager::new()?;
//!     term.terminal().draw(|_frame| {})?;
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};

/// Restores the terminal on drop. Cleanup runs at most once.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore now. Later calls, including the one from `Drop`, do nothing.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }

    pub fn is_cleaned_up(&self) -> bool {
        self.cleaned_up
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the TUI.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter TUI mode and clear the screen.
    ///
    /// If any step fails the terminal is restored before the error is
    /// returned.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        if let Err(err) = enter_tui_mode(&mut stdout) {
            guard.cleanup();
            return Err(err.into());
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Current terminal size.
    pub fn size(&self) -> Result<Rect> {
        Ok(self.terminal.size()?.into())
    }

    /// Restore the terminal before the manager is dropped, e.g. to print
    /// results to the main screen.
    pub fn restore(&mut self) {
        self.guard.cleanup();
    }
}
