//! Line-oriented frame output for pipes and dumb terminals.
//!
//! Each frame is preceded by a clear-screen and cursor-home sequence, then
//! written verbatim. No raw mode, no alternate screen.

use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

use crate::core::{Frame, FrameSink};

pub struct PlainSink<W: Write> {
    out: W,
    clear: bool,
}

impl<W: Write> PlainSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, clear: true }
    }

    /// Skip the clear/home sequence and append frames one after another.
    pub fn without_clear(mut self) -> Self {
        self.clear = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for PlainSink<W> {
    type Error = io::Error;

    fn show(&mut self, frame: &Frame) -> io::Result<()> {
        if self.clear {
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
            self.out.queue(cursor::MoveTo(0, 0))?;
        }
        self.out.write_all(frame.as_str().as_bytes())?;
        self.out.flush()
    }
}
