//! Drawing primitives that write onto a [`Canvas`](crate::Canvas).

mod border;
mod text;

pub use border::{LineStyle, draw_box};
pub use text::{ELLIPSIS, OverrunMode, TextOptions, draw_text, trim_text};
