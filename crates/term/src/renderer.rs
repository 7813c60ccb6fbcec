//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a size change) is a full redraw;
//! after that, only runs of changed cells are rewritten. The presented
//! buffer is swapped into the renderer so the caller can reuse its old
//! buffer without cloning.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: Option<FrameBuffer>,
    queue: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
            queue: Vec::with_capacity(64 * 1024),
        }
    }

    /// Current terminal size in cells.
    pub fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.queue.clear();
        self.queue.queue(terminal::EnterAlternateScreen)?;
        self.queue.queue(cursor::Hide)?;
        self.queue.queue(terminal::DisableLineWrap)?;
        self.flush_queue()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.queue.clear();
        self.queue.queue(ResetColor)?;
        self.queue.queue(terminal::EnableLineWrap)?;
        self.queue.queue(cursor::Show)?;
        self.queue.queue(terminal::LeaveAlternateScreen)?;
        self.flush_queue()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Present a frame, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer`, recomposite into it each tick, and
    /// pass it here; the previous frame comes back in its place.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let mut prev = self
            .prev
            .take()
            .unwrap_or_else(|| FrameBuffer::new(0, 0));

        self.queue.clear();
        if prev.width() != fb.width() || prev.height() != fb.height() {
            Self::encode_full(fb, &mut self.queue)?;
            prev.resize(fb.width(), fb.height());
        } else {
            Self::encode_diff(&prev, fb, &mut self.queue)?;
        }
        self.flush_queue()?;

        std::mem::swap(&mut prev, fb);
        self.prev = Some(prev);
        Ok(())
    }

    fn flush_queue(&mut self) -> Result<()> {
        self.stdout.write_all(&self.queue)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn encode_full(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
        let mut style: Option<CellStyle> = None;
        for y in 0..fb.height() {
            out.queue(cursor::MoveTo(0, y))?;
            for x in 0..fb.width() {
                write_cell(out, fb.get(x, y).unwrap_or_default(), &mut style)?;
            }
        }
        out.queue(ResetColor)?;
        Ok(())
    }

    fn encode_diff(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
        let mut style: Option<CellStyle> = None;
        for y in 0..next.height() {
            let mut x = 0;
            while x < next.width() {
                if prev.get(x, y) == next.get(x, y) {
                    x += 1;
                    continue;
                }
                // Start of a changed run: move once, then write until the
                // buffers agree again.
                out.queue(cursor::MoveTo(x, y))?;
                while x < next.width() && prev.get(x, y) != next.get(x, y) {
                    write_cell(out, next.get(x, y).unwrap_or_default(), &mut style)?;
                    x += 1;
                }
            }
        }
        out.queue(ResetColor)?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn write_cell(out: &mut Vec<u8>, cell: Cell, current: &mut Option<CellStyle>) -> Result<()> {
    if *current != Some(cell.style) {
        out.queue(SetForegroundColor(rgb_to_color(cell.style.fg)))?;
        out.queue(SetBackgroundColor(rgb_to_color(cell.style.bg)))?;
        *current = Some(cell.style);
    }
    out.queue(Print(cell.ch))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
