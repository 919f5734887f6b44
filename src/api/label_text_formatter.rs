use chrono::{NaiveDate, Timelike};

use crate::core::{Event, Instant, Label};

const FULL_DATE_PATTERN: &str = "%b %-d, %Y";
const EVENT_INSTANT_PATTERN: &str = "%b %-d, %Y %H:%M";
const CLOCK_PATTERN: &str = "%H:%M";
const MONTH_TITLE_PATTERN: &str = "%B %Y";

/// Primary label line in the label's own format (`HH:mm` or `MMM d`).
#[must_use]
pub fn format_label_text(label: &Label) -> String {
    label.instant.format(label.format.pattern()).to_string()
}

/// Secondary `MMM d, yyyy` line, present only when the label asks for it.
#[must_use]
pub fn format_label_date(label: &Label) -> Option<String> {
    label
        .show_full_date
        .then(|| label.instant.format(FULL_DATE_PATTERN).to_string())
}

/// Labels at midnight hug their tick instead of centering on it.
#[must_use]
pub fn is_day_boundary(label: &Label) -> bool {
    label.instant.hour() == 0
}

#[must_use]
pub fn format_event_instant(instant: Instant) -> String {
    instant.format(EVENT_INSTANT_PATTERN).to_string()
}

#[must_use]
pub fn format_clock(instant: Instant) -> String {
    instant.format(CLOCK_PATTERN).to_string()
}

#[must_use]
pub fn format_month_title(date: NaiveDate) -> String {
    date.format(MONTH_TITLE_PATTERN).to_string()
}

/// Hover text for a timeline bar: title, time range, then description.
#[must_use]
pub fn event_tooltip(event: &Event) -> String {
    format!(
        "{}\n{} - {}\n{}",
        event.title,
        format_event_instant(event.start),
        format_event_instant(event.end),
        event.description_text().unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{format_label_date, format_label_text, format_month_title};
    use crate::core::{Label, LabelFormat};

    fn label(format: LabelFormat, show_full_date: bool) -> Label {
        Label {
            instant: NaiveDate::from_ymd_opt(2024, 2, 5)
                .and_then(|date| date.and_hms_opt(6, 0, 0))
                .expect("valid instant"),
            format,
            show_full_date,
        }
    }

    #[test]
    fn hour_minute_labels_use_24h_clock() {
        let label = label(LabelFormat::HourMinute, false);
        assert_eq!(format_label_text(&label), "06:00");
        assert_eq!(format_label_date(&label), None);
    }

    #[test]
    fn month_day_labels_carry_full_date_line() {
        let label = label(LabelFormat::MonthDay, true);
        assert_eq!(format_label_text(&label), "Feb 5");
        assert_eq!(format_label_date(&label).as_deref(), Some("Feb 5, 2024"));
    }

    #[test]
    fn month_title_spells_out_month() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 1).expect("date");
        assert_eq!(format_month_title(date), "November 2024");
    }
}
