use std::str::FromStr;

use serde::Deserialize;

use crate::canvas::Canvas;
use crate::cell::CellStyle;
use crate::error::{DrawError, Result};
use crate::geometry::{Area, Point};

/// Glyph set used for borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Light,
    Double,
    Round,
}

struct BoxGlyphs {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

impl LineStyle {
    fn glyphs(self) -> BoxGlyphs {
        match self {
            LineStyle::Light => BoxGlyphs {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
            },
            LineStyle::Double => BoxGlyphs {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                horizontal: '═',
                vertical: '║',
            },
            LineStyle::Round => BoxGlyphs {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
            },
        }
    }
}

impl FromStr for LineStyle {
    type Err = DrawError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "double" => Ok(Self::Double),
            "round" => Ok(Self::Round),
            other => Err(DrawError::InvalidOption(format!(
                "unsupported line style `{other}`"
            ))),
        }
    }
}

/// Draw a box along the perimeter of `area` (canvas-local coordinates).
pub fn draw_box(canvas: &mut Canvas, area: Area, line_style: LineStyle, style: &CellStyle) -> Result<()> {
    if area.width() < 2 || area.height() < 2 {
        return Err(DrawError::InvalidRegion(area));
    }
    let canvas_area = canvas.area();
    for corner in [area.min, area.max.offset(-1, -1)] {
        if !canvas_area.contains(corner) {
            return Err(DrawError::OutOfBounds {
                point: corner,
                area: canvas_area,
            });
        }
    }

    let glyphs = line_style.glyphs();
    let (left, top) = (area.min.x, area.min.y);
    let (right, bottom) = (area.max.x - 1, area.max.y - 1);

    for x in left + 1..right {
        canvas.set_cell(Point::new(x, top), glyphs.horizontal, style)?;
        canvas.set_cell(Point::new(x, bottom), glyphs.horizontal, style)?;
    }
    for y in top + 1..bottom {
        canvas.set_cell(Point::new(left, y), glyphs.vertical, style)?;
        canvas.set_cell(Point::new(right, y), glyphs.vertical, style)?;
    }
    canvas.set_cell(Point::new(left, top), glyphs.top_left, style)?;
    canvas.set_cell(Point::new(right, top), glyphs.top_right, style)?;
    canvas.set_cell(Point::new(left, bottom), glyphs.bottom_left, style)?;
    canvas.set_cell(Point::new(right, bottom), glyphs.bottom_right, style)?;
    Ok(())
}
