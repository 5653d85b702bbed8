//! Error types shared by the canvas, text layout and container drawer.

mod types;

pub use types::{DrawError, DrawStage, DrawTreeError, NodeFailure, Result, RuntimeError, WidgetError};
