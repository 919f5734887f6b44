use chrono::{NaiveDate, NaiveDateTime};
use event_timeline::api::{EventStorage, EventStore, FileStorage};
use event_timeline::TimelineError;
use event_timeline::core::Event;

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 4, day)
        .and_then(|date| date.and_hms_opt(hour, 30, 0))
        .expect("valid instant")
}

#[test]
fn missing_key_reads_as_none() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::open(dir.path()).expect("open");
    assert_eq!(storage.read("timeline-events").expect("read"), None);
}

#[test]
fn open_creates_nested_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("state").join("timeline");
    let storage = FileStorage::open(&nested).expect("open");
    assert!(nested.is_dir());
    assert_eq!(storage.dir(), nested.as_path());
}

#[test]
fn write_then_read_and_remove() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut storage = FileStorage::open(dir.path()).expect("open");

    storage.write("events", "[]").expect("write");
    assert!(dir.path().join("events.json").is_file());
    assert_eq!(storage.read("events").expect("read").as_deref(), Some("[]"));

    storage.write("events", "[1]").expect("overwrite");
    assert_eq!(storage.read("events").expect("read").as_deref(), Some("[1]"));
    assert!(!dir.path().join(".events.json.tmp").exists());

    storage.remove("events").expect("remove");
    storage.remove("events").expect("remove twice");
    assert_eq!(storage.read("events").expect("read"), None);
}

#[test]
fn store_survives_reopen_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let event = Event::new("Standup", "team", at(3, 9), at(3, 10))
        .expect("event")
        .with_tag("daily");

    {
        let storage = FileStorage::open(dir.path()).expect("open");
        let mut store = EventStore::open(storage).expect("store");
        store.add(event.clone()).expect("add");
    }

    let storage = FileStorage::open(dir.path()).expect("reopen");
    let store = EventStore::open(storage).expect("store");
    assert_eq!(store.events(), std::slice::from_ref(&event));
}

#[test]
fn keys_that_leave_the_directory_are_rejected() {
    let root = tempfile::tempdir().expect("tempdir");
    let dir = root.path().join("store");
    let mut storage = FileStorage::open(&dir).expect("open");

    for key in ["../escape", "nested/key", "win\\key", ".hidden", ""] {
        assert!(
            matches!(storage.write(key, "[]"), Err(TimelineError::Storage(_))),
            "key {key:?} should be rejected"
        );
        assert!(storage.read(key).is_err());
        assert!(storage.remove(key).is_err());
    }
    assert!(!root.path().join("escape.json").exists());
}

#[test]
fn store_opened_with_escaping_key_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::open(dir.path()).expect("open");
    assert!(matches!(
        EventStore::open_with_key(storage, "../outside"),
        Err(TimelineError::Storage(_))
    ));
}
