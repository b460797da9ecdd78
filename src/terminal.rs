use std::io;

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Conventional exit status for a process stopped by SIGINT.
pub const INTERRUPT_EXIT_CODE: i32 = 130;

/// Raw mode and the alternate screen for as long as the guard lives.
/// Dropping it (normal return, `?` propagation or unwinding panic) restores
/// the terminal.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn acquire() -> io::Result<Self> {
        log::debug!("switching terminal to raw mode");
        enable_raw_mode()?;
        // From here on drop undoes whatever was applied.
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore() {
            log::warn!("failed to restore terminal: {e}");
        }
    }
}

/// Leave raw mode and the alternate screen. Safe to call more than once.
pub fn restore() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), Show, LeaveAlternateScreen);
    raw.and(screen)
}

/// Signals delivered from outside (`kill -INT`, `kill -TERM`) bypass the
/// input loop; restore the terminal and exit without a report.
pub fn install_interrupt_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        let _ = restore();
        eprintln!("\nExiting typer...");
        std::process::exit(INTERRUPT_EXIT_CODE);
    })
}
