//! Widget capability contract.
//!
//! The container drawer hands each widget a canvas sized and positioned to the
//! widget's target area; the widget may only draw inside it.

mod label;

pub use label::Label;

use crate::canvas::Canvas;
use crate::error::WidgetError;
use crate::geometry::Size;

/// Size requirements a widget reports to its container. Zero components mean
/// "no requirement".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WidgetOptions {
    /// Below this size the container shows the resize indicator instead.
    pub minimum_size: Size,
    /// The widget never gets more than this.
    pub maximum_size: Size,
    /// Width:height ratio the target area is shrunk to.
    pub ratio: Size,
}

pub trait Widget: Send + Sync {
    /// Identity used when reporting draw failures.
    fn name(&self) -> &str {
        "widget"
    }

    fn draw(&self, canvas: &mut Canvas) -> Result<(), WidgetError>;

    fn options(&self) -> WidgetOptions {
        WidgetOptions::default()
    }
}
