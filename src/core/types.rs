use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{format_instant, instant_serde};
use crate::error::{TimelineError, TimelineResult};

/// Local wall-clock instant. The engine never reasons about time zones.
pub type Instant = NaiveDateTime;

/// Visible time window.
///
/// Core layout functions require `start < end`; constructing through
/// [`Window::new`] checks it, literal construction leaves it to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    #[serde(with = "instant_serde")]
    pub start: Instant,
    #[serde(with = "instant_serde")]
    pub end: Instant,
}

impl Window {
    pub fn new(start: Instant, end: Instant) -> TimelineResult<Self> {
        if start >= end {
            return Err(TimelineError::InvalidWindow {
                start: format_instant(start),
                end: format_instant(end),
            });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn duration(self) -> TimeDelta {
        self.end - self.start
    }

    /// Whole elapsed days between start and end, truncated.
    #[must_use]
    pub fn day_span(self) -> i64 {
        self.duration().num_days()
    }

    /// Inclusive at both ends.
    #[must_use]
    pub fn contains(self, instant: Instant) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// Absolute time span of one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventSpan {
    #[serde(with = "instant_serde")]
    pub start: Instant,
    #[serde(with = "instant_serde")]
    pub end: Instant,
}

impl EventSpan {
    #[must_use]
    pub const fn new(start: Instant, end: Instant) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn duration(self) -> TimeDelta {
        self.end - self.start
    }
}
