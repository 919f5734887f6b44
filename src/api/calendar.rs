use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::{Event, Sentiment};
use crate::render::Color;

use super::label_text_formatter::{format_clock, format_month_title};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub event_id: String,
    pub title: String,
    pub sentiment: Sentiment,
    pub fill: Color,
    /// `HH:mm - HH:mm`
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub entries: Vec<CalendarEntry>,
}

/// Month grid for the calendar view, laid out Sunday-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub title: String,
    /// Empty cells before the 1st so it lands under its weekday column.
    pub leading_blank_days: u32,
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    #[must_use]
    pub fn day(&self, day_of_month: u32) -> Option<&CalendarDay> {
        self.days.get(day_of_month.checked_sub(1)? as usize)
    }
}

/// Builds the month containing `today`.
///
/// An event is listed on a day when it starts or ends on that date; events
/// spanning a day without touching it at either end are not repeated.
#[must_use]
pub fn build_calendar_month(events: &[Event], today: NaiveDate) -> CalendarMonth {
    let first = today.with_day(1).unwrap_or(today);
    let next_month = first.checked_add_months(Months::new(1));

    let days = first
        .iter_days()
        .take_while(|day| next_month.is_none_or(|next| *day < next))
        .map(|date| CalendarDay {
            date,
            entries: events
                .iter()
                .filter(|event| event.start.date() == date || event.end.date() == date)
                .map(calendar_entry)
                .collect(),
        })
        .collect();

    CalendarMonth {
        title: format_month_title(first),
        leading_blank_days: first.weekday().num_days_from_sunday(),
        days,
    }
}

fn calendar_entry(event: &Event) -> CalendarEntry {
    CalendarEntry {
        event_id: event.id.clone(),
        title: event.title.clone(),
        sentiment: event.sentiment,
        fill: Color::from_rgb_hex(event.sentiment.fill_rgb()),
        tooltip: format!("{} - {}", format_clock(event.start), format_clock(event.end)),
    }
}
