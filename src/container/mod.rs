//! Container tree: the nested rectangular regions of a dashboard and the
//! walk that draws them.

mod draw;
mod focus;
mod tree;

pub use draw::{DrawConfig, Drawer, draw_tree};
pub use focus::FocusTracker;
pub use tree::{ContainerNode, ContainerOptions, ContainerTree, NodeId, Split};
