//! Panic hook that hands the terminal back before the panic is reported.
//!
//! A panicking selection handler propagates out of the event loop; without
//! this hook the message would be printed into the alternate screen with raw
//! mode still on.

use super::setup::emergency_restore;
use std::panic;

/// Install the hook. Call before creating the `TerminalManager`, and after
/// `color_eyre::install()` so its report is chained.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_does_not_panic() {
        setup_panic_hook();
        let _ = panic::take_hook();
    }
}
