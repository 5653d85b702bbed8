use std::fmt;

use thiserror::Error;

use crate::container::NodeId;
use crate::geometry::{Area, Point};

/// Unified result type for buffer-level drawing operations.
pub type Result<T> = std::result::Result<T, DrawError>;

/// Error type widgets return from their own draw call.
pub type WidgetError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by canvases, text layout and tree construction.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("invalid region {0:?}: width and height must be positive")]
    InvalidRegion(Area),
    #[error("point {point:?} falls outside of {area:?}")]
    OutOfBounds { point: Point, area: Area },
    #[error("cannot write at {0:?}: cell is the continuation of a full-width rune")]
    PartialWriteConflict(Point),
    #[error("invalid option: {0}")]
    InvalidOption(String),
    #[error("text needs {needed} cells, only {available} available")]
    TextOverflow { needed: usize, available: usize },
    #[error("widget `{widget}` failed to draw: {source}")]
    WidgetDraw {
        widget: String,
        #[source]
        source: WidgetError,
    },
    #[error("container {0} not found")]
    NodeNotFound(NodeId),
    #[error("container {0} already holds a widget or children")]
    NodeOccupied(NodeId),
    #[error("terminal backend error: {0}")]
    Backend(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Step of the per-container draw that produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawStage {
    Resize,
    Border,
    Widget,
}

impl DrawStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawStage::Resize => "resize",
            DrawStage::Border => "border",
            DrawStage::Widget => "widget",
        }
    }
}

/// One container that failed during a tree draw.
#[derive(Debug)]
pub struct NodeFailure {
    pub node: NodeId,
    pub stage: DrawStage,
    pub error: DrawError,
}

/// Every failure collected while walking the container tree.
#[derive(Debug, Default)]
pub struct DrawTreeError {
    pub failures: Vec<NodeFailure>,
}

impl DrawTreeError {
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.failures.iter().map(|failure| failure.node)
    }

    pub(crate) fn push(&mut self, node: NodeId, stage: DrawStage, error: DrawError) {
        self.failures.push(NodeFailure { node, stage, error });
    }
}

impl fmt::Display for DrawTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} container(s) failed to draw", self.failures.len())?;
        for failure in &self.failures {
            write!(
                f,
                "; {} ({}): {}",
                failure.node,
                failure.stage.as_str(),
                failure.error
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for DrawTreeError {}

/// Errors surfaced by the [`Dashboard`](crate::Dashboard) handle.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Draw(#[from] DrawTreeError),
    #[error("terminal error: {0}")]
    Terminal(#[from] DrawError),
    #[error("dashboard lock poisoned")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_error_lists_each_failure() {
        let mut err = DrawTreeError::default();
        err.push(
            NodeId::from_index(2),
            DrawStage::Widget,
            DrawError::Backend("boom".into()),
        );
        let rendered = err.to_string();
        assert!(rendered.starts_with("1 container(s) failed to draw"));
        assert!(rendered.contains("#2 (widget)"));
        assert_eq!(err.nodes().collect::<Vec<_>>(), vec![NodeId::from_index(2)]);
    }
}
