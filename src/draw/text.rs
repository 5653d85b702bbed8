use std::borrow::Cow;
use std::str::FromStr;

use serde::Deserialize;

use crate::canvas::Canvas;
use crate::cell::CellStyle;
use crate::error::{DrawError, Result};
use crate::geometry::Point;
use crate::width::{rune_width, text_width};

/// Rune written in place of truncated text under [`OverrunMode::ThreeDot`].
pub const ELLIPSIS: char = '…';

/// What happens when text is wider than the space available for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrunMode {
    /// Overflow is an error.
    #[default]
    Strict,
    /// Cut at the last rune that fits completely.
    Trim,
    /// Like `Trim`, with the last visible cell replaced by an ellipsis.
    ThreeDot,
}

impl FromStr for OverrunMode {
    type Err = DrawError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "trim" => Ok(Self::Trim),
            "three_dot" | "threedot" | "ellipsis" => Ok(Self::ThreeDot),
            other => Err(DrawError::InvalidOption(format!(
                "unsupported overrun mode `{other}`"
            ))),
        }
    }
}

impl TryFrom<i32> for OverrunMode {
    type Error = DrawError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Self::Strict),
            1 => Ok(Self::Trim),
            2 => Ok(Self::ThreeDot),
            other => Err(DrawError::InvalidOption(format!(
                "unsupported overrun mode {other}"
            ))),
        }
    }
}

/// Options for [`draw_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextOptions {
    pub style: CellStyle,
    /// Exclusive right boundary in canvas columns; the canvas width when unset.
    pub max_x: Option<i32>,
    pub overrun: OverrunMode,
}

impl TextOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }

    pub fn max_x(mut self, max_x: i32) -> Self {
        self.max_x = Some(max_x);
        self
    }

    pub fn overrun(mut self, mode: OverrunMode) -> Self {
        self.overrun = mode;
        self
    }
}

/// Draw a single line of `text` onto the canvas starting at `start`.
///
/// Runes advance the cursor by their display width. On error the canvas may
/// hold some of the text and must not be shown as is.
///
/// `start` and `max_x` are validated before anything else, so even empty text
/// fails when placed outside the canvas.
pub fn draw_text(canvas: &mut Canvas, text: &str, start: Point, options: &TextOptions) -> Result<()> {
    let area = canvas.area();
    if !area.contains(start) {
        return Err(DrawError::OutOfBounds { point: start, area });
    }

    let max_x = match options.max_x {
        Some(max_x) if max_x <= 0 || max_x > area.max.x => {
            return Err(DrawError::InvalidOption(format!(
                "max_x {max_x} must be in 1..={}",
                area.max.x
            )));
        }
        Some(max_x) => max_x,
        None => area.max.x,
    };

    if text.is_empty() {
        return Ok(());
    }

    let max_cells = (max_x - start.x).max(0) as usize;
    let visible = trim_text(text, max_cells, options.overrun)?;

    let mut cursor = start;
    for rune in visible.chars() {
        let width = canvas.set_cell(cursor, rune, &options.style)?;
        cursor.x += width as i32;
    }
    Ok(())
}

/// The part of `text` that fits into `max_cells` columns under `mode`.
pub fn trim_text(text: &str, max_cells: usize, mode: OverrunMode) -> Result<Cow<'_, str>> {
    let needed = text_width(text);
    if needed <= max_cells {
        return Ok(Cow::Borrowed(text));
    }

    match mode {
        OverrunMode::Strict => Err(DrawError::TextOverflow {
            needed,
            available: max_cells,
        }),
        OverrunMode::Trim => {
            let mut used = 0;
            let end = text
                .char_indices()
                .find(|(_, rune)| {
                    used += rune_width(*rune);
                    used > max_cells
                })
                .map(|(idx, _)| idx)
                .unwrap_or(text.len());
            Ok(Cow::Borrowed(&text[..end]))
        }
        OverrunMode::ThreeDot => {
            if max_cells == 0 {
                return Ok(Cow::Borrowed(""));
            }
            // Keep runes while they leave the last column for the ellipsis.
            let budget = max_cells - rune_width(ELLIPSIS);
            let mut used = 0;
            let mut trimmed = String::with_capacity(text.len());
            for rune in text.chars() {
                used += rune_width(rune);
                if used > budget {
                    break;
                }
                trimmed.push(rune);
            }
            trimmed.push(ELLIPSIS);
            Ok(Cow::Owned(trimmed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Color;
    use crate::geometry::Area;

    fn canvas(w: i32, h: i32) -> Canvas {
        Canvas::new(Area::rect(0, 0, w, h)).unwrap()
    }

    fn row(canvas: &Canvas, y: i32) -> String {
        canvas
            .rows()
            .nth(y as usize)
            .map(|(_, cells)| {
                cells
                    .iter()
                    .filter(|cell| !cell.continuation)
                    .map(|cell| cell.rune)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn draw(w: i32, text: &str, mode: OverrunMode) -> Result<String> {
        let mut cvs = canvas(w, 1);
        draw_text(&mut cvs, text, Point::new(0, 0), &TextOptions::new().overrun(mode))?;
        Ok(row(&cvs, 0))
    }

    #[test]
    fn start_outside_canvas_fails() {
        let mut cvs = canvas(2, 2);
        let err = draw_text(&mut cvs, "", Point::new(2, 2), &TextOptions::new()).unwrap_err();
        assert!(matches!(err, DrawError::OutOfBounds { .. }));
    }

    #[test]
    fn empty_text_draws_nothing() {
        assert_eq!(draw(1, "", OverrunMode::Strict).unwrap(), " ");
    }

    #[test]
    fn max_x_is_validated() {
        let mut cvs = canvas(1, 1);
        for max_x in [-1, 0, 2] {
            let err = draw_text(&mut cvs, "", Point::new(0, 0), &TextOptions::new().max_x(max_x))
                .unwrap_err();
            assert!(matches!(err, DrawError::InvalidOption(_)), "max_x {max_x}");
        }
    }

    #[test]
    fn strict_overflow_fails_without_writing() {
        let mut cvs = canvas(1, 1);
        let err = draw_text(&mut cvs, "ab", Point::new(0, 0), &TextOptions::new()).unwrap_err();
        assert!(matches!(err, DrawError::TextOverflow { needed: 2, available: 1 }));
        assert_eq!(row(&cvs, 0), " ");

        assert!(matches!(
            draw(1, "界", OverrunMode::Strict),
            Err(DrawError::TextOverflow { .. })
        ));
    }

    #[test]
    fn strict_respects_max_x() {
        let mut cvs = canvas(3, 2);
        let err = draw_text(&mut cvs, "ab", Point::new(1, 1), &TextOptions::new().max_x(2))
            .unwrap_err();
        assert!(matches!(err, DrawError::TextOverflow { .. }));
    }

    #[test]
    fn strict_exact_fit_places_every_rune() {
        let mut cvs = canvas(10, 1);
        draw_text(&mut cvs, "你好，世界", Point::new(0, 0), &TextOptions::new()).unwrap();
        for (x, rune) in [(0, '你'), (2, '好'), (4, '，'), (6, '世'), (8, '界')] {
            assert_eq!(cvs.cell(Point::new(x, 0)).unwrap().rune, rune);
            assert!(cvs.cell(Point::new(x + 1, 0)).unwrap().continuation);
        }
    }

    #[test]
    fn trim_cuts_at_last_fitting_rune() {
        assert_eq!(draw(1, "ab", OverrunMode::Trim).unwrap(), "a");
        assert_eq!(draw(1, "界", OverrunMode::Trim).unwrap(), " ");
        assert_eq!(draw(2, "abcdef", OverrunMode::Trim).unwrap(), "ab");
        assert_eq!(draw(2, "ab界", OverrunMode::Trim).unwrap(), "ab");
        assert_eq!(draw(2, "a界", OverrunMode::Trim).unwrap(), "a ");
    }

    #[test]
    fn three_dot_replaces_last_cell() {
        assert_eq!(draw(1, "ab", OverrunMode::ThreeDot).unwrap(), "…");
        assert_eq!(draw(1, "界", OverrunMode::ThreeDot).unwrap(), "…");
        assert_eq!(draw(2, "abcdef", OverrunMode::ThreeDot).unwrap(), "a…");
        assert_eq!(draw(2, "ab界", OverrunMode::ThreeDot).unwrap(), "a…");
        assert_eq!(draw(2, "a界", OverrunMode::ThreeDot).unwrap(), "a…");
        assert_eq!(draw(4, "ab界cd", OverrunMode::ThreeDot).unwrap(), "ab… ");
    }

    #[test]
    fn nothing_fits_past_max_x() {
        let mut cvs = canvas(3, 1);
        let options = TextOptions::new().max_x(1).overrun(OverrunMode::ThreeDot);
        draw_text(&mut cvs, "abc", Point::new(2, 0), &options).unwrap();
        assert_eq!(row(&cvs, 0), "   ");
    }

    #[test]
    fn draws_with_offset_and_style() {
        let mut cvs = canvas(3, 2);
        let red = CellStyle::new().fg(Color::Red);
        draw_text(&mut cvs, "ab", Point::new(1, 1), &TextOptions::new().style(red)).unwrap();
        assert_eq!(row(&cvs, 1), " ab");
        assert_eq!(cvs.cell(Point::new(2, 1)).unwrap().style.fg, Color::Red);
        assert_eq!(cvs.cell(Point::new(0, 1)).unwrap().style.fg, Color::Default);
    }

    #[test]
    fn half_width_symbols_take_one_cell() {
        assert_eq!(draw(3, "⇄࿃°", OverrunMode::Strict).unwrap(), "⇄࿃°");
    }

    #[test]
    fn overrun_mode_parsing() {
        assert_eq!("trim".parse::<OverrunMode>().unwrap(), OverrunMode::Trim);
        assert_eq!(OverrunMode::try_from(2).unwrap(), OverrunMode::ThreeDot);
        assert!(matches!(
            OverrunMode::try_from(-1),
            Err(DrawError::InvalidOption(_))
        ));
        assert!("wrap".parse::<OverrunMode>().is_err());
    }
}
