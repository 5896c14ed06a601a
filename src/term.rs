/// Terminal output helper: clear the display, write raw text, flush.
use std::io::Write;

use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

/// The two primitives the emitter needs, plus an explicit flush.
pub trait Terminal {
    /// Clear the whole display and put the cursor back at the top-left cell.
    fn clear_all(&mut self) -> Result<()>;
    /// Write `text` as-is. No line break is appended.
    fn write(&mut self, text: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}

/// `Terminal` over any byte sink, using crossterm's escape sequences.
pub struct AnsiTerminal<W: Write> {
    out: W,
}

impl<W: Write> AnsiTerminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Terminal for AnsiTerminal<W> {
    fn clear_all(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))
            .context("Failed to clear terminal")
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .context("Failed to write to terminal")
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush().context("Failed to flush terminal")
    }
}
