use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use event_timeline::core::{
    NavigationDirection, RangeSelector, Window, initial_cursor, navigate, resolve,
};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid instant")
}

#[test]
fn window_ends_at_cursor_and_spans_range_days() {
    let cursor = at(2024, 1, 4, 0, 0);
    for range in RangeSelector::ALL {
        let window = resolve(cursor, range);
        assert_eq!(window.end, cursor);
        assert_eq!(window.duration(), TimeDelta::days(range.days()));
        assert_eq!(window.day_span(), range.days());
    }
}

#[test]
fn three_day_window_starts_three_days_back() {
    let window = resolve(at(2024, 1, 4, 0, 0), RangeSelector::ThreeDays);
    assert_eq!(window.start, at(2024, 1, 1, 0, 0));
}

#[test]
fn one_month_range_is_thirty_days() {
    let window = resolve(at(2024, 3, 31, 8, 0), RangeSelector::OneMonth);
    assert_eq!(window.start, at(2024, 3, 1, 8, 0));
}

#[test]
fn navigation_moves_by_exactly_one_range() {
    let cursor = at(2024, 6, 15, 13, 45);
    let back = navigate(cursor, RangeSelector::OneWeek, NavigationDirection::Prev);
    let forward = navigate(cursor, RangeSelector::OneWeek, NavigationDirection::Next);

    assert_eq!(back, at(2024, 6, 8, 13, 45));
    assert_eq!(forward, at(2024, 6, 22, 13, 45));
}

#[test]
fn prev_then_next_restores_cursor() {
    let cursor = at(2024, 2, 28, 23, 59);
    for range in RangeSelector::ALL {
        let back = navigate(cursor, range, NavigationDirection::Prev);
        assert_eq!(navigate(back, range, NavigationDirection::Next), cursor);
    }
}

#[test]
fn navigation_saturates_at_calendar_limits() {
    let moved = navigate(
        NaiveDateTime::MAX,
        RangeSelector::OneMonth,
        NavigationDirection::Next,
    );
    assert_eq!(moved, NaiveDateTime::MAX);

    let moved = navigate(
        NaiveDateTime::MIN,
        RangeSelector::OneDay,
        NavigationDirection::Prev,
    );
    assert_eq!(moved, NaiveDateTime::MIN);
}

#[test]
fn initial_cursor_prefers_latest_event_end() {
    let now = at(2030, 1, 1, 0, 0);
    let ends = [at(2024, 1, 3, 10, 0), at(2024, 1, 9, 8, 0), at(2024, 1, 5, 0, 0)];
    assert_eq!(initial_cursor(ends, now), at(2024, 1, 9, 8, 0));
}

#[test]
fn initial_cursor_falls_back_to_now_without_events() {
    let now = at(2030, 1, 1, 0, 0);
    assert_eq!(initial_cursor(Vec::new(), now), now);
}

#[test]
fn window_constructor_rejects_unordered_bounds() {
    let start = at(2024, 1, 2, 0, 0);
    assert!(Window::new(start, start).is_err());
    assert!(Window::new(start, at(2024, 1, 1, 0, 0)).is_err());
    assert!(Window::new(start, at(2024, 1, 3, 0, 0)).is_ok());
}

#[test]
fn range_tags_round_trip_through_from_str() {
    for range in RangeSelector::ALL {
        let parsed: RangeSelector = range.tag().parse().expect("known tag");
        assert_eq!(parsed, range);
    }
    assert!("6hours".parse::<RangeSelector>().is_err());
    assert_eq!(RangeSelector::default(), RangeSelector::ThreeDays);
}
