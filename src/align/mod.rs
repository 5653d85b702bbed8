//! Alignment of an inner rectangle or a line of text inside an outer area.
//!
//! Everything here is a pure function of its inputs.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::{DrawError, Result};
use crate::geometry::{Area, Point, Size};
use crate::width::text_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl FromStr for HAlign {
    type Err = DrawError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(DrawError::InvalidOption(format!(
                "unsupported horizontal alignment `{other}`"
            ))),
        }
    }
}

impl TryFrom<i32> for HAlign {
    type Error = DrawError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Self::Left),
            1 => Ok(Self::Center),
            2 => Ok(Self::Right),
            other => Err(DrawError::InvalidOption(format!(
                "unsupported horizontal alignment {other}"
            ))),
        }
    }
}

impl FromStr for VAlign {
    type Err = DrawError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "middle" => Ok(Self::Middle),
            "bottom" => Ok(Self::Bottom),
            other => Err(DrawError::InvalidOption(format!(
                "unsupported vertical alignment `{other}`"
            ))),
        }
    }
}

impl TryFrom<i32> for VAlign {
    type Error = DrawError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Self::Top),
            1 => Ok(Self::Middle),
            2 => Ok(Self::Bottom),
            other => Err(DrawError::InvalidOption(format!(
                "unsupported vertical alignment {other}"
            ))),
        }
    }
}

/// Shift `inner` horizontally so it sits inside `outer` as requested.
///
/// A negative gap (inner wider than outer) is applied as is and moves the
/// inner area partly outside; callers check the fit beforehand.
pub fn align_horizontal(outer: Area, inner: Area, align: HAlign) -> Area {
    let gap = outer.width() - inner.width();
    let gap = match align {
        HAlign::Left => 0,
        HAlign::Center => gap / 2,
        HAlign::Right => gap,
    };
    inner.translate(outer.min.x + gap - inner.min.x, 0)
}

/// Shift `inner` vertically so it sits inside `outer` as requested.
pub fn align_vertical(outer: Area, inner: Area, align: VAlign) -> Area {
    let gap = outer.height() - inner.height();
    let gap = match align {
        VAlign::Top => 0,
        VAlign::Middle => gap / 2,
        VAlign::Bottom => gap,
    };
    inner.translate(0, outer.min.y + gap - inner.min.y)
}

/// Place a rectangle of `size` inside `outer`.
pub fn align_rectangle(outer: Area, size: Size, h: HAlign, v: VAlign) -> Area {
    let inner = Area::new(outer.min, outer.min.offset(size.width, size.height));
    align_vertical(outer, align_horizontal(outer, inner, h), v)
}

/// Starting point for a single line of `text` inside `area`.
///
/// Text wider than the area starts at the area's left edge so the caller's
/// overrun policy decides what gets cut.
pub fn align_text(area: Area, text: &str, h: HAlign, v: VAlign) -> Point {
    let width = (text_width(text) as i32).min(area.width());
    align_rectangle(area, Size::new(width, 1.min(area.height())), h, v).min
}
