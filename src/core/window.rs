use crate::core::primitives::shift_days;
use crate::core::{Instant, NavigationDirection, RangeSelector, Window};

/// Visible window ending at `cursor` and spanning the range's day count.
#[must_use]
pub fn resolve(cursor: Instant, range: RangeSelector) -> Window {
    Window {
        start: shift_days(cursor, -range.days()),
        end: cursor,
    }
}

/// Moves the cursor one full range backwards or forwards.
///
/// There is no bounds checking beyond saturation at the calendar limits.
#[must_use]
pub fn navigate(cursor: Instant, range: RangeSelector, direction: NavigationDirection) -> Instant {
    shift_days(cursor, direction.sign() * range.days())
}

/// Cursor default: the latest event end, or `now` when there are no events.
#[must_use]
pub fn initial_cursor<I>(event_ends: I, now: Instant) -> Instant
where
    I: IntoIterator<Item = Instant>,
{
    event_ends.into_iter().max().unwrap_or(now)
}
