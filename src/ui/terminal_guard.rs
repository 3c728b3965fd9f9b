//! Terminal state guard for guaranteed cleanup.
//!
//! Restores the terminal when the application exits, whether normally, via
//! early return, or panic.

use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture},
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Guard that restores terminal state when dropped.
///
/// Create it right after enabling raw mode so an early `?` return still
/// leaves the alternate screen and releases mouse capture.
pub struct TerminalGuard {
    active: bool,
}

impl Default for TerminalGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalGuard {
    pub fn new() -> Self {
        Self { active: true }
    }

    /// Perform manual cleanup and prevent Drop from running cleanup again.
    pub fn cleanup(&mut self) -> anyhow::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore_terminal()
    }
}

fn restore_terminal() -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    disable_raw_mode()?;
    execute!(
        stdout,
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    stdout.flush()?;
    Ok(())
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = restore_terminal() {
                tracing::debug!(error = %e, "Terminal cleanup failed in Drop");
            }
        }
    }
}

/// Install a panic hook that restores terminal state before printing the
/// panic message. Call early in `main`, before any terminal setup.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = disable_raw_mode() {
            tracing::debug!(error = %e, "Failed to disable raw mode in panic hook");
        }
        let mut stdout = io::stdout();
        if let Err(e) = execute!(
            stdout,
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        ) {
            tracing::debug!(error = %e, "Failed to restore terminal screen in panic hook");
        }
        if let Err(e) = stdout.flush() {
            tracing::debug!(error = %e, "Failed to flush stdout after panic cleanup");
        }

        original_hook(panic_info);
    }));
}
