use crate::cell::{Cell, CellStyle};
use crate::error::{DrawError, Result};
use crate::geometry::{Area, Point, Size};
use crate::terminal::Terminal;
use crate::width::rune_width;

/// Dense grid of cells covering one region of the terminal.
///
/// Cells are addressed in canvas-local coordinates: `(0, 0)` is the top-left
/// corner of the region regardless of where the region sits on screen.
#[derive(Debug, Clone)]
pub struct Canvas {
    region: Area,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(region: Area) -> Result<Self> {
        if region.is_empty() {
            return Err(DrawError::InvalidRegion(region));
        }
        let len = region.width() as usize * region.height() as usize;
        Ok(Self {
            region,
            cells: vec![Cell::default(); len],
        })
    }

    /// Local area of the canvas, always anchored at the origin.
    pub fn area(&self) -> Area {
        Area::from_size(self.size())
    }

    /// Region of the terminal this canvas is applied onto.
    pub fn absolute(&self) -> Area {
        self.region
    }

    pub fn size(&self) -> Size {
        self.region.size()
    }

    pub fn cell(&self, point: Point) -> Result<&Cell> {
        let idx = self.index(point)?;
        Ok(&self.cells[idx])
    }

    /// Write `rune` at `point`, returning the number of cells it occupies.
    pub fn set_cell(&mut self, point: Point, rune: char, style: &CellStyle) -> Result<usize> {
        let idx = self.index(point)?;
        if self.cells[idx].continuation {
            return Err(DrawError::PartialWriteConflict(point));
        }

        let width = self.fitting_width(point, rune)?;

        // The old rune may have been full-width; release its right half.
        if let Some(next) = self.right_of(point) {
            if self.cells[next].continuation {
                self.cells[next] = Cell::default();
            }
        }

        self.cells[idx] = Cell::new(rune, *style);
        if width == 2 {
            let next = idx + 1;
            // Taking over the head of another full-width rune orphans its tail.
            if let Some(tail) = self.right_of(point.offset(1, 0)) {
                if occupied_width(&self.cells[next]) == 2 {
                    self.cells[tail] = Cell::default();
                }
            }
            self.cells[next] = Cell::continuation_of(*style);
        }
        Ok(width)
    }

    /// Like [`Canvas::set_cell`], except that writing into the right half of
    /// a full-width rune blanks that rune instead of failing. Terminal
    /// surfaces behave this way.
    pub(crate) fn overwrite_cell(&mut self, point: Point, rune: char, style: &CellStyle) -> Result<usize> {
        let idx = self.index(point)?;
        self.fitting_width(point, rune)?;
        if self.cells[idx].continuation {
            // Continuations never sit in column 0.
            self.cells[idx - 1] = Cell::default();
            self.cells[idx] = Cell::default();
        }
        self.set_cell(point, rune, style)
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Copy every cell onto `terminal`, offset by the canvas's region.
    pub fn apply(&self, terminal: &mut dyn Terminal) -> Result<()> {
        let size = self.size();
        for y in 0..size.height {
            for x in 0..size.width {
                let cell = &self.cells[(y * size.width + x) as usize];
                if cell.continuation {
                    continue;
                }
                let target = Point::new(self.region.min.x + x, self.region.min.y + y);
                terminal.set_cell(target, cell.rune, &cell.style)?;
            }
        }
        Ok(())
    }

    /// Iterate rows as `(y, cells)` in canvas-local coordinates.
    pub fn rows(&self) -> impl Iterator<Item = (i32, &[Cell])> + '_ {
        self.cells
            .chunks(self.region.width() as usize)
            .enumerate()
            .map(|(y, row)| (y as i32, row))
    }

    fn index(&self, point: Point) -> Result<usize> {
        let area = self.area();
        if !area.contains(point) {
            return Err(DrawError::OutOfBounds { point, area });
        }
        Ok((point.y * area.width() + point.x) as usize)
    }

    /// Width of `rune`, or `OutOfBounds` when its right half would fall past
    /// the last column.
    fn fitting_width(&self, point: Point, rune: char) -> Result<usize> {
        let width = rune_width(rune);
        if point.x + width as i32 > self.region.width() {
            return Err(DrawError::OutOfBounds {
                point: point.offset(width as i32 - 1, 0),
                area: self.area(),
            });
        }
        Ok(width)
    }

    fn right_of(&self, point: Point) -> Option<usize> {
        self.index(point.offset(1, 0)).ok()
    }
}

fn occupied_width(cell: &Cell) -> usize {
    if cell.continuation { 0 } else { rune_width(cell.rune) }
}
