use indexmap::IndexSet;
use tracing::{debug, trace, warn};

use crate::core::{Event, EventPatch, Instant};
use crate::error::{TimelineError, TimelineResult};

use super::storage::EventStorage;

/// Key the event collection is persisted under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "timeline-events";

/// Owned, versioned event collection.
///
/// Every mutation builds the next snapshot, persists the whole collection in
/// one write, and only then commits it in memory. A rejected event or a
/// failed write leaves both memory and storage as they were.
pub struct EventStore<S: EventStorage> {
    storage: S,
    key: String,
    events: Vec<Event>,
    version: u64,
}

impl<S: EventStorage> EventStore<S> {
    /// Loads the collection stored under [`DEFAULT_STORAGE_KEY`].
    pub fn open(storage: S) -> TimelineResult<Self> {
        Self::open_with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Loads the collection stored under `key`.
    ///
    /// A missing key yields an empty collection. A snapshot that fails to
    /// parse is logged and also yields an empty collection; storage read
    /// failures are returned.
    pub fn open_with_key(storage: S, key: impl Into<String>) -> TimelineResult<Self> {
        let key = key.into();
        let events = match storage.read(&key)? {
            None => Vec::new(),
            Some(raw) => match decode_snapshot(&raw) {
                Ok(events) => events,
                Err(err) => {
                    warn!(key = %key, error = %err, "discarding unreadable event snapshot");
                    Vec::new()
                }
            },
        };
        debug!(key = %key, count = events.len(), "event store opened");

        Ok(Self {
            storage,
            key,
            events,
            version: 0,
        })
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Bumped once per committed mutation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Distinct lanes in first-seen order.
    #[must_use]
    pub fn lanes(&self) -> IndexSet<&str> {
        self.events.iter().map(|event| event.lane.as_str()).collect()
    }

    #[must_use]
    pub fn latest_end(&self) -> Option<Instant> {
        self.events.iter().map(|event| event.end).max()
    }

    pub fn add(&mut self, event: Event) -> TimelineResult<()> {
        event.validate()?;
        if self.get(&event.id).is_some() {
            return Err(TimelineError::DuplicateEvent(event.id));
        }

        let mut next = self.events.clone();
        next.push(event);
        self.commit(next)?;
        trace!(count = self.events.len(), "event added");
        Ok(())
    }

    /// Removes and returns the event with `id`.
    pub fn remove(&mut self, id: &str) -> TimelineResult<Event> {
        let index = self.index_of(id)?;
        let mut next = self.events.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        trace!(count = self.events.len(), "event removed");
        Ok(removed)
    }

    /// Merges `patch` into the event with `id` and returns the updated event.
    pub fn update(&mut self, id: &str, patch: &EventPatch) -> TimelineResult<&Event> {
        let index = self.index_of(id)?;
        let updated = self.events[index].patched(patch);
        updated.validate()?;

        let mut next = self.events.clone();
        next[index] = updated;
        self.commit(next)?;
        trace!(id, "event updated");
        Ok(&self.events[index])
    }

    /// Replaces the whole collection.
    ///
    /// Every event must validate and ids must be unique; otherwise nothing
    /// changes.
    pub fn import(&mut self, events: Vec<Event>) -> TimelineResult<()> {
        let mut seen = IndexSet::with_capacity(events.len());
        for event in &events {
            event.validate()?;
            if !seen.insert(event.id.as_str()) {
                return Err(TimelineError::DuplicateEvent(event.id.clone()));
            }
        }

        let count = events.len();
        self.commit(events)?;
        debug!(count, "event collection imported");
        Ok(())
    }

    /// Drops every event and removes the persisted snapshot.
    pub fn clear(&mut self) -> TimelineResult<()> {
        self.storage.remove(&self.key)?;
        self.events.clear();
        self.version = self.version.saturating_add(1);
        debug!(key = %self.key, "event collection cleared");
        Ok(())
    }

    fn index_of(&self, id: &str) -> TimelineResult<usize> {
        self.events
            .iter()
            .position(|event| event.id == id)
            .ok_or_else(|| TimelineError::UnknownEvent(id.to_owned()))
    }

    fn commit(&mut self, next: Vec<Event>) -> TimelineResult<()> {
        let snapshot = encode_snapshot(&next)?;
        self.storage.write(&self.key, &snapshot)?;
        self.events = next;
        self.version = self.version.saturating_add(1);
        Ok(())
    }
}

/// Serializes a collection in the persisted snapshot layout.
pub fn encode_snapshot(events: &[Event]) -> TimelineResult<String> {
    Ok(serde_json::to_string(events)?)
}

/// Parses a persisted snapshot, re-hydrating ISO-8601 strings to instants.
pub fn decode_snapshot(raw: &str) -> TimelineResult<Vec<Event>> {
    Ok(serde_json::from_str(raw)?)
}
