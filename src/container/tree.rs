use std::fmt;

use crate::align::{HAlign, VAlign};
use crate::cell::Color;
use crate::draw::LineStyle;
use crate::error::{DrawError, Result};
use crate::geometry::Area;
use crate::layout::{Constraint, Direction, split_area};
use crate::widget::Widget;

use super::FocusTracker;

/// Stable index of a container inside its [`ContainerTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a container divides its area between its two children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    pub direction: Direction,
    /// Size rule of the first child; the second child takes the rest.
    pub first: Constraint,
}

impl Split {
    /// Left and right children.
    pub fn row(first: Constraint) -> Self {
        Self {
            direction: Direction::Row,
            first,
        }
    }

    /// Top and bottom children.
    pub fn column(first: Constraint) -> Self {
        Self {
            direction: Direction::Column,
            first,
        }
    }
}

/// Per-container drawing options.
///
/// Colors left as `None` are inherited from the nearest ancestor that sets
/// them, then from the theme.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerOptions {
    pub border: Option<LineStyle>,
    pub border_title: Option<String>,
    pub title_align: HAlign,
    pub border_color: Option<Color>,
    pub focused_color: Option<Color>,
    pub h_align: HAlign,
    pub v_align: VAlign,
    /// Cells left empty between the usable area and the widget.
    pub padding: i32,
}

impl ContainerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn border(mut self, line_style: LineStyle) -> Self {
        self.border = Some(line_style);
        self
    }

    pub fn title(mut self, title: impl Into<String>, align: HAlign) -> Self {
        self.border_title = Some(title.into());
        self.title_align = align;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn focused_color(mut self, color: Color) -> Self {
        self.focused_color = Some(color);
        self
    }

    pub fn align(mut self, h: HAlign, v: VAlign) -> Self {
        self.h_align = h;
        self.v_align = v;
        self
    }

    pub fn padding(mut self, padding: i32) -> Self {
        self.padding = padding.max(0);
        self
    }
}

/// A rectangular region of the screen holding either two children, one
/// widget, or nothing.
pub struct ContainerNode {
    area: Area,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    split: Option<Split>,
    widget: Option<Box<dyn Widget>>,
    options: ContainerOptions,
}

impl ContainerNode {
    fn new(parent: Option<NodeId>, options: ContainerOptions) -> Self {
        Self {
            area: Area::default(),
            parent,
            children: Vec::new(),
            split: None,
            widget: None,
            options,
        }
    }

    /// Absolute area on the terminal.
    pub fn area(&self) -> Area {
        self.area
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn split(&self) -> Option<Split> {
        self.split
    }

    pub fn widget(&self) -> Option<&dyn Widget> {
        self.widget.as_deref()
    }

    pub fn options(&self) -> &ContainerOptions {
        &self.options
    }

    pub fn has_border(&self) -> bool {
        self.options.border.is_some()
    }

    /// Area left for content once the border is taken out.
    pub fn usable(&self) -> Area {
        if self.has_border() {
            self.area.shrink(1)
        } else {
            self.area
        }
    }
}

impl fmt::Debug for ContainerNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerNode")
            .field("area", &self.area)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("split", &self.split)
            .field("widget", &self.widget.as_ref().map(|w| w.name().to_string()))
            .field("options", &self.options)
            .finish()
    }
}

/// Arena of containers addressed by [`NodeId`], with exactly one root.
#[derive(Debug)]
pub struct ContainerTree {
    nodes: Vec<ContainerNode>,
    root: NodeId,
    focus: FocusTracker,
}

impl ContainerTree {
    pub fn new(area: Area, options: ContainerOptions) -> Self {
        let mut root = ContainerNode::new(None, options);
        root.area = area;
        Self {
            nodes: vec![root],
            root: NodeId(0),
            focus: FocusTracker::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Result<&ContainerNode> {
        self.nodes.get(id.0).ok_or(DrawError::NodeNotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut ContainerNode> {
        self.nodes.get_mut(id.0).ok_or(DrawError::NodeNotFound(id))
    }

    /// Divide a childless, widgetless container into two children.
    pub fn split(
        &mut self,
        parent: NodeId,
        split: Split,
        first: ContainerOptions,
        second: ContainerOptions,
    ) -> Result<(NodeId, NodeId)> {
        let node = self.node(parent)?;
        if node.widget.is_some() || !node.children.is_empty() {
            return Err(DrawError::NodeOccupied(parent));
        }

        let first_id = NodeId(self.nodes.len());
        let second_id = NodeId(self.nodes.len() + 1);
        self.nodes.push(ContainerNode::new(Some(parent), first));
        self.nodes.push(ContainerNode::new(Some(parent), second));

        let node = self.node_mut(parent)?;
        node.split = Some(split);
        node.children = vec![first_id, second_id];
        self.layout_from(parent);
        Ok((first_id, second_id))
    }

    /// Place a widget into a leaf container, replacing any previous widget.
    pub fn set_widget(&mut self, id: NodeId, widget: impl Widget + 'static) -> Result<()> {
        let node = self.node_mut(id)?;
        if !node.children.is_empty() {
            return Err(DrawError::NodeOccupied(id));
        }
        node.widget = Some(Box::new(widget));
        Ok(())
    }

    pub fn clear_widget(&mut self, id: NodeId) -> Result<Option<Box<dyn Widget>>> {
        Ok(self.node_mut(id)?.widget.take())
    }

    pub fn set_options(&mut self, id: NodeId, options: ContainerOptions) -> Result<()> {
        self.node_mut(id)?.options = options;
        Ok(())
    }

    /// Move the root to `area` and lay out every descendant again.
    /// Children always share their parent's usable area.
    pub fn resize(&mut self, area: Area) {
        self.nodes[self.root.0].area = area;
        self.layout_from(self.root);
    }

    fn layout_from(&mut self, start: NodeId) {
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            let Some(split) = node.split else {
                continue;
            };
            let children = node.children.clone();
            let areas = split_area(node.usable(), split.direction, &[split.first], children.len());
            for (child, area) in children.iter().zip(areas) {
                self.nodes[child.0].area = area;
            }
            stack.extend(children.iter().rev());
        }
    }

    /// Every container, parents before children, first child before second.
    pub fn pre_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev());
        }
        order
    }

    /// First color set on `id` or its ancestors by `pick`.
    pub fn inherited<F>(&self, id: NodeId, pick: F) -> Option<Color>
    where
        F: Fn(&ContainerOptions) -> Option<Color>,
    {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.nodes.get(current.0)?;
            if let Some(color) = pick(&node.options) {
                return Some(color);
            }
            cursor = node.parent;
        }
        None
    }

    pub fn focus(&self) -> &FocusTracker {
        &self.focus
    }

    pub fn focus_mut(&mut self) -> &mut FocusTracker {
        &mut self.focus
    }
}
