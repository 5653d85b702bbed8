use std::io::{self, Write};

use blake3::Hash;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};

use crate::canvas::Canvas;
use crate::cell::{Cell, CellStyle, Color};
use crate::error::{DrawError, Result};
use crate::geometry::{Area, Point, Size};
use crate::terminal::Terminal;

/// Terminal surface backed by `crossterm`, writing to any [`Write`] handle.
///
/// Cell writes land in a back buffer. `flush` rewrites only the rows whose
/// fingerprint changed since the previous flush.
pub struct CrosstermTerminal<W: Write> {
    out: W,
    frame: Canvas,
    flushed: Vec<Option<Hash>>,
}

impl CrosstermTerminal<io::Stdout> {
    /// Backend over stdout sized to the current terminal window.
    pub fn stdout() -> Result<Self> {
        let (width, height) = crossterm::terminal::size()?;
        Self::new(io::stdout(), Size::new(width as i32, height as i32))
    }
}

impl<W: Write> CrosstermTerminal<W> {
    pub fn new(out: W, size: Size) -> Result<Self> {
        Ok(Self {
            out,
            frame: Canvas::new(Area::from_size(size))?,
            flushed: vec![None; size.height.max(0) as usize],
        })
    }

    /// Forget what was flushed so the next flush repaints everything.
    pub fn invalidate(&mut self) {
        self.flushed.fill(None);
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    fn write_row(&mut self, y: i32, cells: &[Cell]) -> io::Result<()> {
        queue!(self.out, MoveTo(0, y as u16))?;
        let mut current: Option<CellStyle> = None;
        for cell in cells.iter().filter(|cell| !cell.continuation) {
            if current != Some(cell.style) {
                write_style(&mut self.out, &cell.style)?;
                current = Some(cell.style);
            }
            queue!(self.out, Print(cell.rune))?;
        }
        queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)
    }
}

impl<W: Write> Terminal for CrosstermTerminal<W> {
    fn size(&self) -> Size {
        self.frame.size()
    }

    fn set_cell(&mut self, point: Point, rune: char, style: &CellStyle) -> Result<()> {
        self.frame.overwrite_cell(point, rune, style).map(|_| ())
    }

    fn clear(&mut self) -> Result<()> {
        self.frame.clear();
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let dirty: Vec<(i32, Vec<Cell>, Hash)> = self
            .frame
            .rows()
            .filter_map(|(y, cells)| {
                let hash = row_fingerprint(cells);
                match self.flushed.get(y as usize) {
                    Some(Some(previous)) if *previous == hash => None,
                    _ => Some((y, cells.to_vec(), hash)),
                }
            })
            .collect();

        for (y, cells, hash) in dirty {
            self.write_row(y, &cells)?;
            if let Some(slot) = self.flushed.get_mut(y as usize) {
                *slot = Some(hash);
            }
        }
        self.out.flush().map_err(DrawError::from)
    }

    /// Reallocate the back buffer; the next flush repaints every row.
    fn resize(&mut self, size: Size) -> Result<()> {
        self.frame = Canvas::new(Area::from_size(size))?;
        self.flushed = vec![None; size.height as usize];
        Ok(())
    }
}

fn write_style(out: &mut impl Write, style: &CellStyle) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(term_color(style.fg)),
        SetBackgroundColor(term_color(style.bg))
    )?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if style.inverse {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Default => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::White => TermColor::Grey,
        Color::BrightBlack => TermColor::DarkGrey,
        Color::BrightRed => TermColor::Red,
        Color::BrightGreen => TermColor::Green,
        Color::BrightYellow => TermColor::Yellow,
        Color::BrightBlue => TermColor::Blue,
        Color::BrightMagenta => TermColor::Magenta,
        Color::BrightCyan => TermColor::Cyan,
        Color::BrightWhite => TermColor::White,
        Color::Indexed(value) => TermColor::AnsiValue(value),
        Color::Rgb { r, g, b } => TermColor::Rgb { r, g, b },
    }
}

fn row_fingerprint(cells: &[Cell]) -> Hash {
    let mut hasher = blake3::Hasher::new();
    for cell in cells {
        hasher.update(&(cell.rune as u32).to_le_bytes());
        hasher.update(&[cell.continuation as u8]);
        hasher.update(&color_bytes(cell.style.fg));
        hasher.update(&color_bytes(cell.style.bg));
        hasher.update(&[cell.style.bold as u8
            | (cell.style.italic as u8) << 1
            | (cell.style.underline as u8) << 2
            | (cell.style.inverse as u8) << 3]);
    }
    hasher.finalize()
}

fn color_bytes(color: Color) -> [u8; 4] {
    match color {
        Color::Indexed(value) => [1, value, 0, 0],
        Color::Rgb { r, g, b } => [2, r, g, b],
        named => [0, named_index(named), 0, 0],
    }
}

fn named_index(color: Color) -> u8 {
    match color {
        Color::Default => 0,
        Color::Black => 1,
        Color::Red => 2,
        Color::Green => 3,
        Color::Yellow => 4,
        Color::Blue => 5,
        Color::Magenta => 6,
        Color::Cyan => 7,
        Color::White => 8,
        Color::BrightBlack => 9,
        Color::BrightRed => 10,
        Color::BrightGreen => 11,
        Color::BrightYellow => 12,
        Color::BrightBlue => 13,
        Color::BrightMagenta => 14,
        Color::BrightCyan => 15,
        Color::BrightWhite => 16,
        Color::Indexed(_) | Color::Rgb { .. } => u8::MAX,
    }
}
