use chrono::{NaiveDate, NaiveDateTime};
use event_timeline::api::build_calendar_month;
use event_timeline::core::{Event, Sentiment};

fn at(month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid instant")
}

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).expect("valid date")
}

#[test]
fn month_grid_covers_every_day_with_sunday_offset() {
    let month = build_calendar_month(&[], date(2, 14));

    assert_eq!(month.title, "February 2024");
    assert_eq!(month.days.len(), 29);
    assert_eq!(month.leading_blank_days, 4);
    assert_eq!(month.days[0].date, date(2, 1));
    assert_eq!(month.days[28].date, date(2, 29));
    assert!(month.days.iter().all(|day| day.entries.is_empty()));
    assert!(month.day(0).is_none());
    assert!(month.day(30).is_none());
}

#[test]
fn month_starting_on_sunday_has_no_blank_cells() {
    let month = build_calendar_month(&[], date(9, 30));
    assert_eq!(month.title, "September 2024");
    assert_eq!(month.leading_blank_days, 0);
    assert_eq!(month.days.len(), 30);
}

#[test]
fn events_appear_on_start_and_end_days_only() {
    let spanning = Event::new("Migration", "db", at(2, 3, 10, 0), at(2, 5, 12, 0))
        .expect("event")
        .with_sentiment(Sentiment::Negative);
    let crossing = Event::new("Freeze", "ops", at(1, 31, 22, 0), at(2, 1, 6, 0)).expect("event");
    let earlier = Event::new("Kickoff", "team", at(1, 10, 9, 0), at(1, 10, 10, 0)).expect("event");

    let month = build_calendar_month(&[spanning.clone(), crossing.clone(), earlier], date(2, 14));

    let day = |n| month.day(n).expect("day in month");
    assert_eq!(day(1).entries.len(), 1);
    assert_eq!(day(1).entries[0].event_id, crossing.id);

    assert_eq!(day(3).entries.len(), 1);
    assert!(day(4).entries.is_empty());
    assert_eq!(day(5).entries.len(), 1);

    let entry = &day(3).entries[0];
    assert_eq!(entry.event_id, spanning.id);
    assert_eq!(entry.title, "Migration");
    assert_eq!(entry.tooltip, "10:00 - 12:00");
    assert_eq!(entry.sentiment, Sentiment::Negative);
    assert_eq!(entry.fill.to_hex(), "#ef4444");

    let listed: usize = month.days.iter().map(|day| day.entries.len()).sum();
    assert_eq!(listed, 3);
}

#[test]
fn single_day_event_is_listed_once() {
    let event = Event::new("Standup", "team", at(3, 12, 9, 0), at(3, 12, 9, 15)).expect("event");
    let month = build_calendar_month(std::slice::from_ref(&event), date(3, 1));

    let entries: Vec<_> = month
        .days
        .iter()
        .flat_map(|day| day.entries.iter())
        .collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(month.day(12).map(|day| day.entries.len()), Some(1));
}
