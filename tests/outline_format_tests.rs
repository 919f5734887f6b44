use chrono::{NaiveDate, NaiveDateTime};
use event_timeline::core::Event;
use event_timeline::extensions::{
    DEFAULT_OUTLINE_LANE, UNTITLED_EVENT, events_to_outline, outline_to_events,
};

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .expect("valid instant")
}

#[test]
fn export_writes_header_lane_tag_and_description() {
    let events = vec![
        Event::new("Deploy api", "ops", at(2, 12), at(2, 13))
            .expect("event")
            .with_description("Rolled out behind the canary flag."),
        Event::new("Retro", "team", at(3, 9), at(3, 10)).expect("event"),
    ];

    let text = events_to_outline(&events);
    assert_eq!(
        text,
        "2024-01-02T12:00:00.000 - 2024-01-02T13:00:00.000: Deploy api #ops\n\
         Rolled out behind the canary flag.\n\
         \n\
         2024-01-03T09:00:00.000 - 2024-01-03T10:00:00.000: Retro #team"
    );
}

#[test]
fn import_splits_title_lane_and_tags() {
    let text = "2024-01-02T12:00:00 - 2024-01-02T13:00:00: Deploy #ops api #release\n\
                first line\n\
                second line\n";

    let parsed = outline_to_events(text);
    assert_eq!(parsed.skipped, 0);
    assert_eq!(parsed.events.len(), 1);

    let event = &parsed.events[0];
    assert_eq!(event.title, "Deploy api");
    assert_eq!(event.lane, "ops");
    assert_eq!(event.tags, vec!["release".to_owned()]);
    assert_eq!(event.description_text(), Some("first line\nsecond line"));
    assert_eq!(event.start, at(2, 12));
    assert_eq!(event.end, at(2, 13));
    assert!(event.validate().is_ok());
}

#[test]
fn import_defaults_lane_and_title() {
    let parsed = outline_to_events("2024-01-02 - 2024-01-03: #\n");
    assert_eq!(parsed.events.len(), 1);
    assert_eq!(parsed.events[0].lane, DEFAULT_OUTLINE_LANE);
    assert_eq!(parsed.events[0].title, "#");

    let parsed = outline_to_events("2024-01-02 - 2024-01-03: #ops\n");
    assert_eq!(parsed.events[0].title, UNTITLED_EVENT);
    assert_eq!(parsed.events[0].lane, "ops");
}

#[test]
fn blocks_with_inverted_range_are_skipped() {
    let text = "2024-01-03T00:00 - 2024-01-02T00:00: Backwards #ops\n\
                ignored description\n\
                \n\
                2024-01-04T00:00 - 2024-01-04T02:00: Fine #ops\n";

    let parsed = outline_to_events(text);
    assert_eq!(parsed.skipped, 1);
    assert_eq!(parsed.events.len(), 1);
    assert_eq!(parsed.events[0].title, "Fine");
    assert_eq!(parsed.events[0].description, None);
}

#[test]
fn text_without_headers_yields_nothing() {
    let parsed = outline_to_events("just some notes\n\nand more notes");
    assert!(parsed.events.is_empty());
    assert_eq!(parsed.skipped, 0);
}

#[test]
fn exported_outline_reimports_with_fresh_ids() {
    let original = vec![
        Event::new("Deploy api", "ops", at(2, 12), at(2, 13))
            .expect("event")
            .with_description("canary"),
        Event::new("Retro", "team", at(3, 9), at(3, 10)).expect("event"),
    ];

    let parsed = outline_to_events(&events_to_outline(&original));
    assert_eq!(parsed.events.len(), original.len());
    for (before, after) in original.iter().zip(&parsed.events) {
        assert_ne!(before.id, after.id);
        assert_eq!(before.title, after.title);
        assert_eq!(before.lane, after.lane);
        assert_eq!(before.start, after.start);
        assert_eq!(before.end, after.end);
        assert_eq!(before.description_text(), after.description_text());
    }
}

#[test]
fn export_appends_event_tags_after_lane() {
    let events = vec![
        Event::new("Deploy api", "ops", at(2, 12), at(2, 13))
            .expect("event")
            .with_tag("release")
            .with_tag("backend"),
    ];

    let text = events_to_outline(&events);
    assert_eq!(
        text,
        "2024-01-02T12:00:00.000 - 2024-01-02T13:00:00.000: Deploy api #ops #release #backend"
    );

    let parsed = outline_to_events(&text);
    let event = &parsed.events[0];
    assert_eq!(event.title, "Deploy api");
    assert_eq!(event.lane, "ops");
    assert_eq!(event.tags, vec!["release".to_owned(), "backend".to_owned()]);
}

#[test]
fn hash_words_in_titles_and_spaced_lanes_do_not_survive_reimport() {
    let events = vec![
        Event::new("Fix #123 crash", "ops", at(2, 12), at(2, 13)).expect("event"),
        Event::new("Retro", "ops team", at(3, 9), at(3, 10)).expect("event"),
    ];

    let parsed = outline_to_events(&events_to_outline(&events));
    assert_eq!(parsed.events.len(), 2);

    let fix = &parsed.events[0];
    assert_eq!(fix.title, "Fix crash");
    assert_eq!(fix.lane, "123");
    assert_eq!(fix.tags, vec!["ops".to_owned()]);

    let retro = &parsed.events[1];
    assert_eq!(retro.title, "Retro team");
    assert_eq!(retro.lane, "ops");
    assert!(retro.tags.is_empty());
}
