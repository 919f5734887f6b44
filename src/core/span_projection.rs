use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::primitives::millis_between;
use crate::core::{EventSpan, Instant, Window};

/// Smallest rendered width, so zero-length spans stay visible and clickable.
pub const MIN_VISIBLE_WIDTH_PERCENT: f64 = 0.5;
pub const MAX_PERCENT: f64 = 100.0;

/// Horizontal placement of one span inside a window, in percent of the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedSpan {
    pub left_percent: f64,
    pub width_percent: f64,
    pub visible: bool,
}

impl ProjectedSpan {
    #[must_use]
    pub fn right_percent(self) -> f64 {
        self.left_percent + self.width_percent
    }
}

/// Unclamped position of `instant` along the window, in percent.
///
/// Precondition: `window.start < window.end`.
#[must_use]
pub fn position_percent(window: Window, instant: Instant) -> f64 {
    let total = window_millis(window);
    millis_between(window.start, instant) / total * MAX_PERCENT
}

/// Projects one event span onto the window.
///
/// Visibility is decided on the raw geometry: a span that ends before the
/// window or starts after it is hidden. The rendered left edge is then
/// clamped into `[0, 100]` and the width into `[0.5, 100]`, so a span
/// straddling a boundary is drawn truncated at the edge.
///
/// Precondition: `window.start < window.end`.
#[must_use]
pub fn project(window: Window, span: EventSpan) -> ProjectedSpan {
    let total = window_millis(window);
    let left = millis_between(window.start, span.start) / total * MAX_PERCENT;
    let width = millis_between(span.start, span.end) / total * MAX_PERCENT;

    ProjectedSpan {
        left_percent: left.clamp(0.0, MAX_PERCENT),
        width_percent: width.clamp(MIN_VISIBLE_WIDTH_PERCENT, MAX_PERCENT),
        visible: !(left > MAX_PERCENT || left + width < 0.0),
    }
}

/// Projects many spans against one shared window, preserving input order.
#[must_use]
pub fn project_spans(window: Window, spans: &[EventSpan]) -> Vec<ProjectedSpan> {
    #[cfg(feature = "parallel-projection")]
    {
        spans.par_iter().map(|span| project(window, *span)).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        spans.iter().map(|span| project(window, *span)).collect()
    }
}

fn window_millis(window: Window) -> f64 {
    let total = millis_between(window.start, window.end);
    debug_assert!(total > 0.0, "span projection requires start < end");
    total
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{MIN_VISIBLE_WIDTH_PERCENT, project};
    use crate::core::{EventSpan, Window};

    fn hour(h: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|date| date.and_hms_opt(h, 0, 0))
            .expect("valid instant")
    }

    #[test]
    fn straddling_span_is_visible_and_clamped_to_left_edge() {
        let window = Window::new(hour(10), hour(20)).expect("window");
        let projected = project(window, EventSpan::new(hour(8), hour(12)));

        assert!(projected.visible);
        assert_eq!(projected.left_percent, 0.0);
        assert!((projected.width_percent - 40.0).abs() <= 1e-9);
    }

    #[test]
    fn zero_length_span_gets_minimum_width() {
        let window = Window::new(hour(0), hour(20)).expect("window");
        let projected = project(window, EventSpan::new(hour(5), hour(5)));

        assert!(projected.visible);
        assert_eq!(projected.width_percent, MIN_VISIBLE_WIDTH_PERCENT);
    }
}
