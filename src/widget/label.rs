use crate::align::{HAlign, VAlign, align_text};
use crate::canvas::Canvas;
use crate::cell::CellStyle;
use crate::draw::{OverrunMode, TextOptions, draw_text};
use crate::error::WidgetError;
use crate::geometry::Size;
use crate::width::text_width;

use super::{Widget, WidgetOptions};

/// Single line of text placed inside the widget area.
#[derive(Debug, Clone)]
pub struct Label {
    name: String,
    text: String,
    style: CellStyle,
    overrun: OverrunMode,
    h_align: HAlign,
    v_align: VAlign,
    minimum_size: Size,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            name: "label".to_string(),
            text: text.into(),
            style: CellStyle::default(),
            overrun: OverrunMode::ThreeDot,
            h_align: HAlign::Left,
            v_align: VAlign::Top,
            minimum_size: Size::default(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }

    pub fn overrun(mut self, mode: OverrunMode) -> Self {
        self.overrun = mode;
        self
    }

    pub fn align(mut self, h: HAlign, v: VAlign) -> Self {
        self.h_align = h;
        self.v_align = v;
        self
    }

    /// Require room for the whole text on one line.
    pub fn require_full_text(mut self) -> Self {
        self.minimum_size = Size::new(text_width(&self.text).max(1) as i32, 1);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Widget for Label {
    fn name(&self) -> &str {
        &self.name
    }

    fn draw(&self, canvas: &mut Canvas) -> Result<(), WidgetError> {
        let start = align_text(canvas.area(), &self.text, self.h_align, self.v_align);
        let options = TextOptions::new().style(self.style).overrun(self.overrun);
        draw_text(canvas, &self.text, start, &options)?;
        Ok(())
    }

    fn options(&self) -> WidgetOptions {
        WidgetOptions {
            minimum_size: self.minimum_size,
            ..WidgetOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Area, Point};

    fn row(canvas: &Canvas, y: usize) -> String {
        canvas
            .rows()
            .nth(y)
            .map(|(_, cells)| cells.iter().map(|cell| cell.rune).collect())
            .unwrap_or_default()
    }

    #[test]
    fn centers_text() {
        let mut cvs = Canvas::new(Area::rect(4, 4, 11, 7)).unwrap();
        Label::new("abc")
            .align(HAlign::Center, VAlign::Middle)
            .draw(&mut cvs)
            .unwrap();
        assert_eq!(row(&cvs, 1), "  abc  ");
        assert_eq!(row(&cvs, 0), "       ");
    }

    #[test]
    fn long_text_gets_an_ellipsis() {
        let mut cvs = Canvas::new(Area::rect(0, 0, 4, 1)).unwrap();
        Label::new("overflowing").draw(&mut cvs).unwrap();
        assert_eq!(row(&cvs, 0), "ove…");
    }

    #[test]
    fn strict_label_reports_overflow() {
        let mut cvs = Canvas::new(Area::rect(0, 0, 2, 1)).unwrap();
        let err = Label::new("abc")
            .overrun(OverrunMode::Strict)
            .draw(&mut cvs)
            .unwrap_err();
        assert!(err.to_string().contains("text needs 3 cells"));
        assert_eq!(cvs.cell(Point::new(0, 0)).unwrap().rune, ' ');
    }

    #[test]
    fn full_text_requirement_sets_minimum_size() {
        let label = Label::new("界ab").require_full_text();
        assert_eq!(label.options().minimum_size, Size::new(4, 1));
        assert!(Label::new("x").options().minimum_size.is_zero());
    }
}
