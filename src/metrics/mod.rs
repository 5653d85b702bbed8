use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Counts gathered during one tree draw.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    pub visited: u64,
    pub degraded: u64,
    pub widget_draws: u64,
    pub failed: u64,
}

/// Running totals across draw passes.
#[derive(Debug, Default, Clone)]
pub struct DrawMetrics {
    passes: u64,
    failed_passes: u64,
    nodes_visited: u64,
    degraded_nodes: u64,
    widget_draws: u64,
    failed_nodes: u64,
}

impl DrawMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_pass(&mut self, pass: &PassSummary) {
        self.passes = self.passes.saturating_add(1);
        if pass.failed > 0 {
            self.failed_passes = self.failed_passes.saturating_add(1);
        }
        self.nodes_visited = self.nodes_visited.saturating_add(pass.visited);
        self.degraded_nodes = self.degraded_nodes.saturating_add(pass.degraded);
        self.widget_draws = self.widget_draws.saturating_add(pass.widget_draws);
        self.failed_nodes = self.failed_nodes.saturating_add(pass.failed);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            passes: self.passes,
            failed_passes: self.failed_passes,
            nodes_visited: self.nodes_visited,
            degraded_nodes: self.degraded_nodes,
            widget_draws: self.widget_draws,
            failed_nodes: self.failed_nodes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub passes: u64,
    pub failed_passes: u64,
    pub nodes_visited: u64,
    pub degraded_nodes: u64,
    pub widget_draws: u64,
    pub failed_nodes: u64,
}

impl MetricSnapshot {
    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("passes".to_string(), json!(self.passes));
        map.insert("failed_passes".to_string(), json!(self.failed_passes));
        map.insert("nodes_visited".to_string(), json!(self.nodes_visited));
        map.insert("degraded_nodes".to_string(), json!(self.degraded_nodes));
        map.insert("widget_draws".to_string(), json!(self.widget_draws));
        map.insert("failed_nodes".to_string(), json!(self.failed_nodes));
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "draw_metrics", self.as_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_accumulate() {
        let mut metrics = DrawMetrics::new();
        metrics.record_pass(&PassSummary {
            visited: 3,
            degraded: 1,
            widget_draws: 2,
            failed: 0,
        });
        metrics.record_pass(&PassSummary {
            visited: 3,
            degraded: 0,
            widget_draws: 1,
            failed: 1,
        });

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.passes, 2);
        assert_eq!(snapshot.failed_passes, 1);
        assert_eq!(snapshot.nodes_visited, 6);
        assert_eq!(snapshot.widget_draws, 3);

        let event = snapshot.to_log_event("dashgrid::metrics");
        assert_eq!(event.message, "draw_metrics");
        assert_eq!(event.field("failed_nodes"), Some(&json!(1)));
    }
}
