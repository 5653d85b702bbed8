use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};

use crate::error::{DrawError, Result};

/// Puts the terminal into raw mode on the alternate screen for as long as it
/// lives. Dropping the session restores the previous screen.
pub struct TerminalSession<W: Write> {
    out: W,
    active: bool,
}

impl TerminalSession<io::Stdout> {
    pub fn stdout() -> Result<Self> {
        Self::enter(io::stdout())
    }
}

impl<W: Write> TerminalSession<W> {
    pub fn enter(mut out: W) -> Result<Self> {
        terminal::enable_raw_mode().map_err(|err| DrawError::Backend(err.to_string()))?;
        if let Err(err) = execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All)) {
            terminal::disable_raw_mode().ok();
            return Err(err.into());
        }
        Ok(Self { out, active: true })
    }

    /// Leave the alternate screen and raw mode. Safe to call more than once.
    pub fn leave(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode().map_err(|err| DrawError::Backend(err.to_string()))
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        self.leave().ok();
    }
}
