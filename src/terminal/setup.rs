//! Entering and leaving TUI mode.
//!
//! The picker demo needs mouse motion events for hover, so mouse capture is
//! part of TUI mode. `leave_tui_mode` never fails; it is called from `Drop`
//! and from the panic hook.

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter the alternate screen with mouse capture (clicks, motion, wheel)
/// and a hidden text cursor.
///
/// Raw mode is enabled separately by the caller.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture, Hide)
}

/// Restore the terminal: raw mode off, mouse capture off, main screen back,
/// cursor visible. Errors are ignored so this is safe to call repeatedly.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Best-effort restore on stdout, used when nothing else can be trusted.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
