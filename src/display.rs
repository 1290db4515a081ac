/// Terminal renderer. All screen I/O lives here.
///
/// The game draws on a fixed 800×800 logical canvas; this renderer scales
/// that canvas onto whatever grid of cells the terminal currently has.
/// Commands are queued and only reach the terminal on `present`.

use std::io::{self, Write};

use asteroid_shooter::assets::{Font, Sprite};
use asteroid_shooter::platform::{Rect, Renderer};
use asteroid_shooter::{HEIGHT, WIDTH};
use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal, QueueableCommand,
};

/// Fonts at least this large are drawn bold.
const BOLD_FONT_SIZE: u16 = 100;

pub struct TerminalRenderer<'a, W: Write> {
    out: &'a mut W,
    cols: u16,
    rows: u16,
}

impl<'a, W: Write> TerminalRenderer<'a, W> {
    pub fn new(out: &'a mut W) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(TerminalRenderer { out, cols, rows })
    }

    /// Logical units covered by one terminal cell, horizontally.
    fn cell_width(&self) -> i32 {
        (WIDTH + self.cols as i32 - 1) / (self.cols.max(1) as i32)
    }

    /// Terminal cell containing logical point (x, y), if it is on screen.
    fn to_cell(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if !(0..WIDTH).contains(&x) || !(0..HEIGHT).contains(&y) {
            return None;
        }
        let col = x as i64 * self.cols as i64 / WIDTH as i64;
        let row = y as i64 * self.rows as i64 / HEIGHT as i64;
        Some((col as u16, row as u16))
    }
}

impl<W: Write> Renderer for TerminalRenderer<'_, W> {
    fn begin_frame(&mut self) -> io::Result<()> {
        // Pick up resizes between frames
        let (cols, rows) = terminal::size()?;
        self.cols = cols.max(1);
        self.rows = rows.max(1);
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn blit(&mut self, sprite: &Sprite, x: i32, y: i32) -> io::Result<()> {
        let (art_cols, art_rows) = sprite.art_size();
        self.out.queue(style::SetForegroundColor(sprite.color))?;

        for (r, line) in sprite.art.iter().enumerate() {
            let ly = y + r as i32 * sprite.height() / art_rows as i32;
            for (c, ch) in line.chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                let lx = x + c as i32 * sprite.width() / art_cols as i32;
                if let Some((col, row)) = self.to_cell(lx, ly) {
                    self.out.queue(cursor::MoveTo(col, row))?;
                    self.out.queue(Print(ch))?;
                }
            }
        }
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> io::Result<()> {
        if rect.w <= 0 || rect.h <= 0 {
            return Ok(());
        }
        let Some((c0, r0)) = self.to_cell(rect.x.max(0), rect.y.max(0)) else {
            return Ok(());
        };
        let right = (rect.x + rect.w - 1).min(WIDTH - 1);
        let bottom = (rect.y + rect.h - 1).min(HEIGHT - 1);
        let Some((c1, r1)) = self.to_cell(right, bottom) else {
            return Ok(());
        };

        let line = "█".repeat((c1 - c0 + 1) as usize);
        self.out.queue(style::SetForegroundColor(color))?;
        for row in r0..=r1 {
            self.out.queue(cursor::MoveTo(c0, row))?;
            self.out.queue(Print(&line))?;
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, font: Font, color: Color, x: i32, y: i32) -> io::Result<()> {
        let Some((col, row)) = self.to_cell(x.max(0), y.max(0)) else {
            return Ok(());
        };
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(color))?;
        if font.size >= BOLD_FONT_SIZE {
            self.out.queue(style::SetAttribute(Attribute::Bold))?;
            self.out.queue(Print(text))?;
            self.out.queue(style::SetAttribute(Attribute::Reset))?;
        } else {
            self.out.queue(Print(text))?;
        }
        Ok(())
    }

    fn text_width(&self, text: &str, _font: Font) -> i32 {
        text.chars().count() as i32 * self.cell_width()
    }

    fn present(&mut self) -> io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}
