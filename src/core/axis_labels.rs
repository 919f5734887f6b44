use chrono::{Datelike, NaiveDate, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::primitives::{ceil_to_hour, start_of_day};
use crate::core::{Instant, RangeSelector, Window};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelFormat {
    /// `HH:mm`
    HourMinute,
    /// `MMM d`
    MonthDay,
}

impl LabelFormat {
    /// `chrono` strftime pattern for the primary label line.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::HourMinute => "%H:%M",
            Self::MonthDay => "%b %-d",
        }
    }
}

/// One axis label / gridline anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    #[serde(with = "crate::core::primitives::instant_serde")]
    pub instant: Instant,
    pub format: LabelFormat,
    pub show_full_date: bool,
}

/// How candidate label instants are enumerated for one resolution tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStrategy {
    /// Every whole hour inside the window.
    Hourly,
    /// Fixed hours of each calendar day touched by the window.
    DayHours(&'static [u32]),
    /// Start of every other calendar day, counted from the first day.
    AlternateDays,
    /// Start of days that open a month or satisfy `day % 3 == 1`.
    MonthCadence,
}

impl LabelStrategy {
    #[must_use]
    pub const fn format(self) -> LabelFormat {
        match self {
            Self::Hourly | Self::DayHours(_) => LabelFormat::HourMinute,
            Self::AlternateDays | Self::MonthCadence => LabelFormat::MonthDay,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelTier {
    /// Inclusive upper bound on whole window days; `None` is unbounded.
    pub max_day_span: Option<i64>,
    pub strategy: LabelStrategy,
}

/// Resolution tiers, ordered by ascending window length.
pub const LABEL_TIERS: [LabelTier; 5] = [
    LabelTier {
        max_day_span: Some(1),
        strategy: LabelStrategy::Hourly,
    },
    LabelTier {
        max_day_span: Some(3),
        strategy: LabelStrategy::DayHours(&[0, 6, 12, 18]),
    },
    LabelTier {
        max_day_span: Some(7),
        strategy: LabelStrategy::DayHours(&[0, 12]),
    },
    LabelTier {
        max_day_span: Some(14),
        strategy: LabelStrategy::AlternateDays,
    },
    LabelTier {
        max_day_span: None,
        strategy: LabelStrategy::MonthCadence,
    },
];

/// Picks the first tier whose bound admits `day_span`.
#[must_use]
pub fn select_tier(day_span: i64) -> LabelTier {
    LABEL_TIERS
        .iter()
        .copied()
        .find(|tier| tier.max_day_span.is_none_or(|max| day_span <= max))
        .unwrap_or(LABEL_TIERS[LABEL_TIERS.len() - 1])
}

/// Axis labels for `window`.
///
/// Resolution follows the actual elapsed days of the window, not the range
/// tag, so non-standard windows still get a sensible density. The result is
/// strictly ascending, never empty, and every instant lies inside
/// `[window.start, window.end]`.
///
/// Precondition: `window.start <= window.end`.
#[must_use]
pub fn labels(window: Window, range: RangeSelector) -> Vec<Label> {
    debug_assert!(
        window.start <= window.end,
        "axis labels require an ordered window"
    );

    let tier = select_tier(window.day_span());
    trace!(
        range = range.tag(),
        day_span = window.day_span(),
        strategy = ?tier.strategy,
        "select axis label tier"
    );
    labels_for_tier(window, tier)
}

/// Runs one tier's strategy against `window`, with clipping and fallback.
#[must_use]
pub fn labels_for_tier(window: Window, tier: LabelTier) -> Vec<Label> {
    let format = tier.strategy.format();
    let mut out = match tier.strategy {
        LabelStrategy::Hourly => hourly_labels(window),
        LabelStrategy::DayHours(hours) => day_hour_labels(window, hours),
        LabelStrategy::AlternateDays => day_start_labels(window, |index, _| index % 2 == 0),
        LabelStrategy::MonthCadence => {
            day_start_labels(window, |_, day| day.day() == 1 || day.day() % 3 == 1)
        }
    };

    // Sub-hour windows can miss every boundary.
    if out.is_empty() {
        out.push(Label {
            instant: window.start,
            format,
            show_full_date: true,
        });
    }

    debug_assert!(
        out.windows(2).all(|pair| pair[0].instant < pair[1].instant),
        "axis labels must be strictly ascending"
    );
    out
}

fn hourly_labels(window: Window) -> Vec<Label> {
    let mut out = Vec::new();
    let mut cursor = ceil_to_hour(window.start);
    while let Some(instant) = cursor {
        if instant > window.end {
            break;
        }
        out.push(Label {
            instant,
            format: LabelFormat::HourMinute,
            show_full_date: instant.hour() == 0,
        });
        cursor = instant.checked_add_signed(TimeDelta::hours(1));
    }
    out
}

fn day_hour_labels(window: Window, hours: &[u32]) -> Vec<Label> {
    calendar_days(window)
        .flat_map(|day| hours.iter().filter_map(move |hour| day.and_hms_opt(*hour, 0, 0)))
        .filter(|instant| window.contains(*instant))
        .map(|instant| Label {
            instant,
            format: LabelFormat::HourMinute,
            show_full_date: instant.hour() == 0,
        })
        .collect()
}

fn day_start_labels<F>(window: Window, keep: F) -> Vec<Label>
where
    F: Fn(usize, NaiveDate) -> bool,
{
    calendar_days(window)
        .enumerate()
        .filter(|(index, day)| keep(*index, *day))
        .map(|(_, day)| start_of_day(day))
        .filter(|instant| window.contains(*instant))
        .map(|instant| Label {
            instant,
            format: LabelFormat::MonthDay,
            show_full_date: true,
        })
        .collect()
}

/// Every calendar date from the window's first day through its last, inclusive.
fn calendar_days(window: Window) -> impl Iterator<Item = NaiveDate> {
    let last = window.end.date();
    window
        .start
        .date()
        .iter_days()
        .take_while(move |day| *day <= last)
}
