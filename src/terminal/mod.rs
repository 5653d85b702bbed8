//! Terminal surface contract consumed by the drawing core.
//!
//! The core only ever writes cells through [`Terminal::set_cell`]; it never
//! reads back what is on screen. Backends decide when pending cells become
//! visible in [`Terminal::flush`].

mod memory;

pub use memory::MemoryTerminal;

use crate::cell::CellStyle;
use crate::error::Result;
use crate::geometry::{Point, Size};

pub trait Terminal {
    /// Current size of the surface in cells.
    fn size(&self) -> Size;

    /// Stage a cell write at an absolute coordinate.
    fn set_cell(&mut self, point: Point, rune: char, style: &CellStyle) -> Result<()>;

    /// Blank every pending cell.
    fn clear(&mut self) -> Result<()>;

    /// Make the pending frame visible.
    fn flush(&mut self) -> Result<()>;

    /// Reallocate the surface after the window changed size. Pending cells
    /// are dropped.
    fn resize(&mut self, size: Size) -> Result<()>;
}
