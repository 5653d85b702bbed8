use super::NodeId;

/// Tracks which container currently holds keyboard focus.
///
/// Input routing moves the focus; the drawer only asks [`is_focused`] to pick
/// a border color.
///
/// [`is_focused`]: FocusTracker::is_focused
#[derive(Debug, Default, Clone)]
pub struct FocusTracker {
    current: Option<NodeId>,
    previous: Option<NodeId>,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&mut self, node: NodeId) {
        if self.current != Some(node) {
            self.previous = self.current.replace(node);
        }
    }

    /// Drop focus, but only if `node` is the one holding it.
    pub fn release(&mut self, node: NodeId) {
        if self.current == Some(node) {
            self.previous = self.current.take();
        }
    }

    pub fn clear(&mut self) {
        if self.current.is_some() {
            self.previous = self.current.take();
        }
    }

    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    pub fn previous(&self) -> Option<NodeId> {
        self.previous
    }

    pub fn is_focused(&self, node: NodeId) -> bool {
        self.current == Some(node)
    }
}
