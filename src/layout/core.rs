use serde::Deserialize;

use crate::geometry::Area;

/// Axis along which a container is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Children sit side by side, left to right.
    Row,
    /// Children are stacked, top to bottom.
    Column,
}

/// Space distribution rule for one child of a split.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    Fixed(u16),
    Percent(u8),
    Min(u16),
    Max(u16),
    Flex(u16),
}

/// Divide `area` along `direction`, one child per constraint. Children beyond
/// the constraint list behave as `Flex(1)`.
pub fn split_area(area: Area, direction: Direction, constraints: &[Constraint], children: usize) -> Vec<Area> {
    let axis_length = match direction {
        Direction::Row => area.width(),
        Direction::Column => area.height(),
    };
    let spans = distribute(axis_length.max(0) as u32, children, constraints, Constraint::Flex(1));

    let mut cursor = match direction {
        Direction::Row => area.min.x,
        Direction::Column => area.min.y,
    };
    spans
        .into_iter()
        .map(|span| {
            let span = span as i32;
            let child = match direction {
                Direction::Row => Area::rect(cursor, area.min.y, cursor + span, area.max.y),
                Direction::Column => Area::rect(area.min.x, cursor, area.max.x, cursor + span),
            };
            cursor += span;
            child
        })
        .collect()
}

fn distribute(
    distributable: u32,
    child_count: usize,
    raw_constraints: &[Constraint],
    default_constraint: Constraint,
) -> Vec<u32> {
    if child_count == 0 {
        return Vec::new();
    }

    let mut segments: Vec<Segment> = (0..child_count)
        .map(|idx| {
            let constraint = raw_constraints
                .get(idx)
                .copied()
                .unwrap_or(default_constraint);
            Segment::from_constraint(constraint, distributable)
        })
        .collect();

    let mut used: u32 = segments.iter().map(|s| s.length).sum();
    if used > distributable {
        shrink_segments(&mut segments, used - distributable);
        used = segments.iter().map(|s| s.length).sum();
    }

    // Fixed sizes that still overflow are cut from the end.
    if used > distributable {
        let mut over = used - distributable;
        for segment in segments.iter_mut().rev() {
            let cut = over.min(segment.length);
            segment.length -= cut;
            over -= cut;
        }
    }

    let remaining = distributable.saturating_sub(segments.iter().map(|s| s.length).sum());
    if remaining > 0 {
        distribute_flex(&mut segments, remaining);
    }

    segments.into_iter().map(|segment| segment.length).collect()
}

#[derive(Debug, Clone)]
struct Segment {
    length: u32,
    min: u32,
    max: Option<u32>,
    flex: u32,
}

impl Segment {
    fn from_constraint(constraint: Constraint, distributable: u32) -> Self {
        match constraint {
            Constraint::Fixed(value) => Self::locked(value as u32),
            Constraint::Percent(percent) => {
                let percent = percent.min(100) as u32;
                Self::locked((distributable * percent + 50) / 100)
            }
            Constraint::Min(min) => Self {
                length: min as u32,
                min: min as u32,
                max: None,
                flex: 1,
            },
            Constraint::Max(max) => Self {
                length: 0,
                min: 0,
                max: Some(max as u32),
                flex: 1,
            },
            Constraint::Flex(weight) => Self {
                length: 0,
                min: 0,
                max: None,
                flex: weight.max(1) as u32,
            },
        }
    }

    fn locked(value: u32) -> Self {
        Self {
            length: value,
            min: value,
            max: Some(value),
            flex: 0,
        }
    }
}

fn shrink_segments(segments: &mut [Segment], mut over: u32) {
    while over > 0 {
        let mut changed = false;
        for segment in segments.iter_mut() {
            if segment.length > segment.min {
                segment.length -= 1;
                over -= 1;
                changed = true;
                if over == 0 {
                    break;
                }
            }
        }

        if !changed {
            break;
        }
    }
}

fn distribute_flex(segments: &mut [Segment], remaining: u32) {
    let total_flex: u32 = segments.iter().map(|s| s.flex).sum();
    if total_flex == 0 {
        return;
    }

    let mut leftover = remaining;
    for segment in segments.iter_mut().filter(|s| s.flex > 0) {
        let share = (remaining * segment.flex) / total_flex;
        let addition = share.min(leftover).min(segment.headroom());
        segment.length += addition;
        leftover -= addition;
    }

    // Hand out rounding leftovers one cell at a time.
    let count = segments.len();
    let mut idx = 0;
    let mut attempts = 0;
    while leftover > 0 && attempts < count * 4 {
        let segment = &mut segments[idx % count];
        if segment.flex > 0 && segment.headroom() > 0 {
            segment.length += 1;
            leftover -= 1;
        }
        idx += 1;
        attempts += 1;
    }
}

impl Segment {
    fn headroom(&self) -> u32 {
        self.max
            .map(|max| max.saturating_sub(self.length))
            .unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribute_single_child() {
        assert_eq!(distribute(80, 1, &[], Constraint::Flex(1)), vec![80]);
    }

    #[test]
    fn percent_split_of_a_row() {
        let parts = split_area(Area::rect(0, 0, 10, 4), Direction::Row, &[Constraint::Percent(30)], 2);
        assert_eq!(parts, vec![Area::rect(0, 0, 3, 4), Area::rect(3, 0, 10, 4)]);
    }

    #[test]
    fn fixed_split_of_a_column() {
        let parts = split_area(Area::rect(2, 1, 8, 11), Direction::Column, &[Constraint::Fixed(3)], 2);
        assert_eq!(parts, vec![Area::rect(2, 1, 8, 4), Area::rect(2, 4, 8, 11)]);
    }

    #[test]
    fn oversized_fixed_is_cut_to_fit() {
        let parts = split_area(Area::rect(0, 0, 4, 1), Direction::Row, &[Constraint::Fixed(9)], 2);
        assert_eq!(parts, vec![Area::rect(0, 0, 4, 1), Area::rect(4, 0, 4, 1)]);
    }

    #[test]
    fn min_and_max_constraints_are_respected() {
        let spans = distribute(20, 3, &[Constraint::Min(6), Constraint::Max(4)], Constraint::Flex(1));
        assert!(spans[0] >= 6);
        assert!(spans[1] <= 4);
        assert_eq!(spans.iter().sum::<u32>(), 20);
    }

    #[test]
    fn flex_weights_share_proportionally() {
        let spans = distribute(9, 2, &[Constraint::Flex(2), Constraint::Flex(1)], Constraint::Flex(1));
        assert_eq!(spans, vec![6, 3]);
    }
}
