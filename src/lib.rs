//! Layout and rendering core for terminal dashboards.
//!
//! A dashboard is a tree of rectangular containers. Leaves hold widgets that
//! draw onto private canvases; the drawer walks the tree, handles borders,
//! alignment and "too small" indicators, and applies every canvas onto a
//! [`Terminal`]. Text placement understands full-width runes and the three
//! overrun policies in [`OverrunMode`].

pub mod align;
pub mod canvas;
pub mod cell;
pub mod container;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod runtime;
pub mod terminal;
pub mod theme;
pub mod widget;
pub mod width;

pub use align::{HAlign, VAlign, align_rectangle, align_text};
pub use canvas::Canvas;
pub use cell::{Cell, CellStyle, Color};
pub use container::{
    ContainerNode, ContainerOptions, ContainerTree, DrawConfig, Drawer, FocusTracker, NodeId,
    Split, draw_tree,
};
pub use draw::{LineStyle, OverrunMode, TextOptions, draw_box, draw_text, trim_text};
pub use error::{
    DrawError, DrawStage, DrawTreeError, NodeFailure, Result, RuntimeError, WidgetError,
};
pub use geometry::{Area, Point, Size};
pub use layout::{Constraint, Direction};
pub use logging::{FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, MemorySink};
pub use metrics::{DrawMetrics, MetricSnapshot};
pub use render::{CrosstermTerminal, TerminalSession};
pub use runtime::{Dashboard, RuntimeResult};
pub use terminal::{MemoryTerminal, Terminal};
pub use theme::Theme;
pub use widget::{Label, Widget, WidgetOptions};
pub use width::{rune_width, text_width};
