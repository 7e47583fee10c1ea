//! Full-screen terminal session.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use crossterm::{execute, queue};
use tracing::warn;

/// Raw-mode alternate screen, restored on drop.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    /// Enters raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched.
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide, EnableFocusChange) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self { out })
    }

    /// Clears the screen and draws `lines` centered, then sets the title.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn draw(&mut self, lines: &[String], title: &str) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let top = top_row(lines.len(), rows);

        queue!(self.out, SetTitle(title), Clear(ClearType::All))?;
        for (offset, line) in lines.iter().enumerate() {
            let row = top.saturating_add(offset as u16);
            if row >= rows {
                break;
            }
            queue!(self.out, MoveTo(left_column(line, cols), row), Print(line))?;
        }
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(e) = execute!(
            self.out,
            DisableFocusChange,
            Show,
            LeaveAlternateScreen,
            SetTitle("")
        ) {
            warn!("Failed to restore terminal: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("Failed to leave raw mode: {}", e);
        }
    }
}

/// First row of a block of `height` lines centered in `rows`.
pub fn top_row(height: usize, rows: u16) -> u16 {
    let height = u16::try_from(height).unwrap_or(u16::MAX);
    rows.saturating_sub(height) / 2
}

/// First column of `line` centered in `cols`.
pub fn left_column(line: &str, cols: u16) -> u16 {
    let width = u16::try_from(line.chars().count()).unwrap_or(u16::MAX);
    cols.saturating_sub(width) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centering() {
        assert_eq!(top_row(4, 24), 10);
        assert_eq!(top_row(40, 24), 0);
        assert_eq!(left_column("25:00", 80), 37);
        assert_eq!(left_column("◉ ○ ○ ○", 17), 5);
        assert_eq!(left_column(&"x".repeat(100), 80), 0);
    }
}
