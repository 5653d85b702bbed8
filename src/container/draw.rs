use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::align::{VAlign, align_horizontal, align_text, align_vertical};
use crate::canvas::Canvas;
use crate::cell::CellStyle;
use crate::draw::{OverrunMode, TextOptions, draw_box, draw_text};
use crate::error::{DrawError, DrawStage, DrawTreeError, Result};
use crate::geometry::{Area, Point, Size};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::{DrawMetrics, PassSummary};
use crate::terminal::Terminal;
use crate::theme::Theme;
use crate::widget::WidgetOptions;

use super::{ContainerNode, ContainerTree, NodeId};

/// Configuration knobs for the tree drawer.
#[derive(Clone)]
pub struct DrawConfig {
    pub theme: Theme,
    /// Optional structured logger for draw failures and pass summaries.
    pub logger: Option<Logger>,
    /// Metrics accumulator updated after every pass.
    pub metrics: Option<Arc<Mutex<DrawMetrics>>>,
    /// Target field used when emitting log events.
    pub log_target: String,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            logger: None,
            metrics: None,
            log_target: "dashgrid::draw".to_string(),
        }
    }
}

impl DrawConfig {
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(DrawMetrics::new())));
        }
    }

    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    pub fn metrics_handle(&self) -> Option<Arc<Mutex<DrawMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

/// Walks a [`ContainerTree`] and puts every container onto a terminal.
///
/// Each container is drawn through its own canvas: first its border, then its
/// widget, then its children, so children layer on top of their parent. A
/// failing container does not stop the walk; all failures come back together.
#[derive(Clone, Default)]
pub struct Drawer {
    config: DrawConfig,
}

type StepResult = std::result::Result<(), (DrawStage, DrawError)>;

impl Drawer {
    pub fn new(config: DrawConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut DrawConfig {
        &mut self.config
    }

    pub fn draw_tree(
        &self,
        tree: &ContainerTree,
        terminal: &mut dyn Terminal,
    ) -> std::result::Result<(), DrawTreeError> {
        let mut failures = DrawTreeError::default();
        let mut pass = PassSummary::default();

        for id in tree.pre_order() {
            pass.visited += 1;
            if let Err((stage, error)) = self.draw_container(tree, id, terminal, &mut pass) {
                self.log_failure(id, stage, &error);
                failures.push(id, stage, error);
            }
        }
        pass.failed = failures.len() as u64;

        self.record_pass(&pass);
        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures)
        }
    }

    fn draw_container(
        &self,
        tree: &ContainerTree,
        id: NodeId,
        terminal: &mut dyn Terminal,
        pass: &mut PassSummary,
    ) -> StepResult {
        let node = tree
            .node(id)
            .map_err(|error| (DrawStage::Border, error))?;

        if node.usable().is_empty() {
            pass.degraded += 1;
            return self
                .draw_resize(node.area(), terminal)
                .map_err(|error| (DrawStage::Resize, error));
        }

        self.draw_border(tree, id, node, terminal)
            .map_err(|error| (DrawStage::Border, error))?;
        self.draw_widget(node, terminal, pass)
    }

    fn draw_border(
        &self,
        tree: &ContainerTree,
        id: NodeId,
        node: &ContainerNode,
        terminal: &mut dyn Terminal,
    ) -> Result<()> {
        let Some(line_style) = node.options().border else {
            return Ok(());
        };

        let theme = &self.config.theme;
        let color = if tree.focus().is_focused(id) {
            tree.inherited(id, |o| o.focused_color)
                .unwrap_or(theme.focused_color)
        } else {
            tree.inherited(id, |o| o.border_color)
                .unwrap_or(theme.border_color)
        };
        let style = CellStyle::new().fg(color);

        let mut canvas = Canvas::new(node.area())?;
        let outline = canvas.area();
        draw_box(&mut canvas, outline, line_style, &style)?;

        if let Some(title) = node.options().border_title.as_deref() {
            // The title sits between the top corners.
            let slot = Area::rect(1, 0, outline.max.x - 1, 1);
            if !slot.is_empty() && !title.is_empty() {
                let start = align_text(slot, title, node.options().title_align, VAlign::Top);
                let options = TextOptions::new()
                    .style(style)
                    .max_x(slot.max.x)
                    .overrun(OverrunMode::ThreeDot);
                draw_text(&mut canvas, title, start, &options)?;
            }
        }

        canvas.apply(terminal)
    }

    fn draw_widget(
        &self,
        node: &ContainerNode,
        terminal: &mut dyn Terminal,
        pass: &mut PassSummary,
    ) -> StepResult {
        let Some(widget) = node.widget() else {
            return Ok(());
        };

        let options = widget.options();
        let target = widget_area(node, &options);
        let need = if options.minimum_size.width > 0 && options.minimum_size.height > 0 {
            options.minimum_size
        } else {
            Size::new(1, 1)
        };

        if target.width() < need.width || target.height() < need.height {
            pass.degraded += 1;
            return self
                .draw_resize(node.usable(), terminal)
                .map_err(|error| (DrawStage::Resize, error));
        }

        let mut canvas = Canvas::new(target).map_err(|error| (DrawStage::Widget, error))?;
        widget.draw(&mut canvas).map_err(|source| {
            (
                DrawStage::Widget,
                DrawError::WidgetDraw {
                    widget: widget.name().to_string(),
                    source,
                },
            )
        })?;
        pass.widget_draws += 1;
        canvas
            .apply(terminal)
            .map_err(|error| (DrawStage::Widget, error))
    }

    /// Show the resize glyph in the top-left corner of `area`. Areas without
    /// a single whole cell are left alone.
    fn draw_resize(&self, area: Area, terminal: &mut dyn Terminal) -> Result<()> {
        if area.is_empty() {
            return Ok(());
        }

        let mut canvas = Canvas::new(area)?;
        let glyph = self.config.theme.indicator().to_string();
        let options = TextOptions::new().overrun(OverrunMode::Trim);
        draw_text(&mut canvas, &glyph, Point::new(0, 0), &options)?;
        canvas.apply(terminal)
    }

    fn log_failure(&self, id: NodeId, stage: DrawStage, error: &DrawError) {
        if let Some(logger) = self.config.logger.as_ref() {
            let event = event_with_fields(
                LogLevel::Warn,
                &self.config.log_target,
                "container_draw_failed",
                [
                    json_kv("node", json!(id.index())),
                    json_kv("stage", json!(stage.as_str())),
                    json_kv("error", json!(error.to_string())),
                ],
            );
            let _ = logger.log_event(event);
        }
    }

    fn record_pass(&self, pass: &PassSummary) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_pass(pass);
            }
        }

        if let Some(logger) = self.config.logger.as_ref() {
            let event = event_with_fields(
                LogLevel::Debug,
                &self.config.log_target,
                "tree_drawn",
                [
                    json_kv("nodes", json!(pass.visited)),
                    json_kv("degraded", json!(pass.degraded)),
                    json_kv("widget_draws", json!(pass.widget_draws)),
                    json_kv("failed", json!(pass.failed)),
                ],
            );
            let _ = logger.log_event(event);
        }
    }
}

/// Draw `tree` with the default configuration.
pub fn draw_tree(
    tree: &ContainerTree,
    terminal: &mut dyn Terminal,
) -> std::result::Result<(), DrawTreeError> {
    Drawer::default().draw_tree(tree, terminal)
}

/// Area the widget of `node` is drawn into: the usable area minus padding,
/// capped by the widget's maximum size and ratio, then aligned.
/// Negative padding counts as none, so the widget never leaves the usable area.
fn widget_area(node: &ContainerNode, options: &WidgetOptions) -> Area {
    let padded = node.usable().shrink(node.options().padding.max(0));

    let mut adjusted = padded;
    let max = options.maximum_size;
    if max.width > 0 && adjusted.width() > max.width {
        adjusted.max.x = adjusted.min.x + max.width;
    }
    if max.height > 0 && adjusted.height() > max.height {
        adjusted.max.y = adjusted.min.y + max.height;
    }
    adjusted = adjusted.with_ratio(options.ratio);

    let adjusted = align_horizontal(padded, adjusted, node.options().h_align);
    align_vertical(padded, adjusted, node.options().v_align)
}
