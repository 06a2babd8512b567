//! TerminalRenderer: writes framebuffers to the terminal.
//!
//! The game screen is small (a 22-row board frame plus the score panel), so
//! the unit of redraw is a whole row: a row is rewritten when any of its cells
//! changed since the previous frame. The first frame, a resize, or
//! [`TerminalRenderer::invalidate`] clears the screen and writes every row.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor, execute, queue,
    style::{self, Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use log::{debug, trace};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

impl From<Rgb> for style::Color {
    fn from(rgb: Rgb) -> Self {
        style::Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    /// Last frame written, `None` until the first draw or after invalidation.
    prev: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    /// Renderer bound to stdout.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            prev: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )
        .context("enter alternate screen")?;
        self.prev = None;
        Ok(())
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        execute!(
            self.out,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )
        .context("leave alternate screen")?;
        terminal::disable_raw_mode().context("disable raw mode")
    }

    /// Force the next draw to repaint the whole screen (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Write the rows of `fb` that changed, then keep `fb` as the previous
    /// frame.
    ///
    /// The buffers are swapped rather than cloned: on return `fb` holds an
    /// older frame that the caller repaints before the next draw. Returns the
    /// number of rows written.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<u16> {
        self.buf.clear();
        let rows = encode_frame_into(self.prev.as_ref(), fb, &mut self.buf)?;

        if !self.buf.is_empty() {
            self.out.write_all(&self.buf)?;
            self.out.flush()?;
        }

        let prev = self.prev.get_or_insert_with(|| FrameBuffer::new(0, 0));
        std::mem::swap(prev, fb);
        Ok(rows)
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

/// Encode the rows of `next` that differ from `prev` into `out`.
///
/// Without a previous frame of the same size the screen is cleared and every
/// row is encoded. Returns the number of rows encoded.
pub fn encode_frame_into(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<u16> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        debug!("full redraw {}x{}", next.width(), next.height());
        queue!(out, terminal::Clear(ClearType::All))?;
    }

    let mut current: Option<CellStyle> = None;
    let mut rows = 0;
    for y in 0..next.height() {
        if prev.is_some_and(|p| p.row(y) == next.row(y)) {
            continue;
        }
        queue!(out, cursor::MoveTo(0, y))?;
        encode_cells_into(next.row(y), &mut current, out)?;
        rows += 1;
    }

    if rows > 0 {
        queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    }
    trace!("encoded {} rows", rows);
    Ok(rows)
}

/// Print `cells`, emitting style commands only where the style changes.
fn encode_cells_into(cells: &[Cell], current: &mut Option<CellStyle>, out: &mut Vec<u8>) -> Result<()> {
    for cell in cells {
        if *current != Some(cell.style) {
            // Attribute reset also clears colors, so it goes first.
            queue!(
                out,
                SetAttribute(Attribute::Reset),
                SetForegroundColor(cell.style.fg.into()),
                SetBackgroundColor(cell.style.bg.into())
            )?;
            if cell.style.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            if cell.style.dim {
                queue!(out, SetAttribute(Attribute::Dim))?;
            }
            *current = Some(cell.style);
        }
        queue!(out, Print(cell.ch))?;
    }
    Ok(())
}
