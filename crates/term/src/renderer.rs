//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Only runs of cells that changed since the previous frame are written,
//! which keeps a 60 Hz redraw cheap even over slow terminals.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Previously presented frame; `None` forces a full redraw.
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    /// Raw mode is on and `exit` still has to run.
    active: bool,
    /// The terminal accepted the key event type flags on `enter`.
    key_event_types: bool,
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
            buf: Vec::with_capacity(32 * 1024),
            active: false,
            key_event_types: false,
        }
    }

    /// Switch to raw mode on the alternate screen with the cursor hidden.
    ///
    /// Where the terminal supports it, key events carry press/repeat/release
    /// kinds so the host can ignore auto-repeat. If any step fails the
    /// terminal is restored before the error is returned.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.active = true;
        self.key_event_types = terminal::supports_keyboard_enhancement().unwrap_or(false);

        self.buf.clear();
        let entered = encode_enter_into(&mut self.buf, self.key_event_types)
            .and_then(|_| self.flush_buf());
        if entered.is_err() {
            let _ = self.exit();
        }
        entered
    }

    /// Restore the terminal to the state `enter` found it in.
    ///
    /// Raw mode is always switched off, even when writing the restore
    /// sequence fails.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        self.buf.clear();
        let restored = encode_exit_into(&mut self.buf, self.key_event_types)
            .and_then(|_| self.flush_buf());
        finish_exit(restored, || {
            terminal::disable_raw_mode().context("disable raw mode")
        })
    }

    /// Force the next present to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Present a frame and swap buffers.
    ///
    /// On return `fb` holds the *previous* frame, ready to be drawn over.
    /// Callers keep one framebuffer and pass it in every frame.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
                prev.resize(fb.width(), fb.height());
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout
            .write_all(&self.buf)
            .and_then(|_| self.stdout.flush())
            .context("write frame to terminal")
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Encode the terminal setup sequence into `out`.
pub fn encode_enter_into(out: &mut Vec<u8>, key_event_types: bool) -> Result<()> {
    out.queue(terminal::EnterAlternateScreen)?;
    out.queue(cursor::Hide)?;
    out.queue(terminal::DisableLineWrap)?;
    if key_event_types {
        out.queue(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    Ok(())
}

/// Encode the sequence undoing [`encode_enter_into`] into `out`.
pub fn encode_exit_into(out: &mut Vec<u8>, key_event_types: bool) -> Result<()> {
    if key_event_types {
        out.queue(PopKeyboardEnhancementFlags)?;
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Run `disable_raw` whatever happened before it; the first error wins.
fn finish_exit(restored: Result<()>, disable_raw: impl FnOnce() -> Result<()>) -> Result<()> {
    let disabled = disable_raw();
    restored.and(disabled)
}

/// Tracks the last style emitted so runs of equal style cost nothing.
#[derive(Default)]
struct StyleState {
    current: Option<CellStyle>,
}

impl StyleState {
    fn print(&mut self, out: &mut Vec<u8>, cell: Cell) -> Result<()> {
        if self.current != Some(cell.style) {
            apply_style_into(out, cell.style)?;
            self.current = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style = StyleState::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for cell in fb.row(y) {
            style.print(out, *cell)?;
        }
    }
    finish(out)
}

/// Encode only the changed runs between `prev` and `next` into `out`.
///
/// Frames of different sizes are treated as fully dirty.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style = StyleState::default();
    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        let row = next.row(y);
        for cell in &row[x as usize..(x + len) as usize] {
            style.print(out, *cell)?;
        }
        Ok(())
    })?;
    finish(out)
}

fn finish(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for every maximal run of differing cells.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let same_size = prev.width() == next.width() && prev.height() == next.height();

    for y in 0..next.height() {
        let new_row = next.row(y);
        if !same_size {
            if !new_row.is_empty() {
                f(0, y, next.width())?;
            }
            continue;
        }

        let old_row = prev.row(y);
        let mut run_start: Option<usize> = None;
        for (x, (a, b)) in old_row.iter().zip(new_row).enumerate() {
            match (a == b, run_start) {
                (false, None) => run_start = Some(x),
                (true, Some(start)) => {
                    f(start as u16, y, (x - start) as u16)?;
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            f(start as u16, y, (new_row.len() - start) as u16)?;
        }
    }

    Ok(())
}
