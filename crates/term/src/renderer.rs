//! TerminalRenderer: flushes frames to a real terminal.
//!
//! The first frame (and any frame after a size change or [`invalidate`]) is a
//! full redraw. Later frames only rewrite the runs of cells that changed.
//!
//! [`invalidate`]: TerminalRenderer::invalidate

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::core::{Frame, FrameSink};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Frame>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        tracing::debug!("terminal entered alternate screen");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        tracing::debug!("terminal restored");
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, diffing against the previously drawn one when possible.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) if prev.width() == frame.width() && prev.height() == frame.height() => {
                encode_diff_into(prev, frame, &mut self.buf)?;
            }
            _ => encode_full_into(frame, &mut self.buf)?,
        }
        self.flush_buf()?;
        self.last = Some(frame.clone());
        Ok(())
    }

    /// Write a one-line status message at `row`, clearing the rest of the line.
    pub fn draw_status(&mut self, row: u16, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::MoveTo(0, row))?;
        self.buf.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        self.buf.queue(Print(text))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl FrameSink for TerminalRenderer {
    type Error = anyhow::Error;

    fn show(&mut self, frame: &Frame) -> Result<()> {
        self.draw(frame)
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// Lines are separated by `\r\n` because raw mode disables the implicit
/// carriage return.
pub fn encode_full_into(frame: &Frame, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let rows = frame.height();
    for (y, line) in frame.lines().enumerate() {
        out.queue(Print(line))?;
        if y + 1 < rows {
            out.queue(Print("\r\n"))?;
        }
    }
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &Frame, next: &Frame, out: &mut Vec<u8>) -> Result<()> {
    for_each_changed_run(prev, next, |x, y, run| {
        out.queue(cursor::MoveTo(x, y))?;
        out.queue(Print(run))?;
        Ok(())
    })
}

fn for_each_changed_run(
    prev: &Frame,
    next: &Frame,
    mut f: impl FnMut(u16, u16, &str) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: every row is one dirty run.
        for (y, line) in next.lines().enumerate() {
            f(0, cell_coord(y)?, line)?;
        }
        return Ok(());
    }

    let mut run = String::new();
    for (y, (a, b)) in prev.lines().zip(next.lines()).enumerate() {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let w = b.len();

        let mut x = 0;
        while x < w {
            if a.get(x) == b.get(x) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && a.get(x) != b.get(x) {
                x += 1;
            }
            run.clear();
            run.extend(&b[start..x]);
            f(cell_coord(start)?, cell_coord(y)?, &run)?;
        }
    }

    Ok(())
}

fn cell_coord(v: usize) -> Result<u16> {
    u16::try_from(v).with_context(|| format!("cell {v} is beyond terminal coordinates"))
}
