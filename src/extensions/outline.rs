//! Lightweight outline text format.
//!
//! Each event is one header line followed by optional description lines:
//!
//! ```text
//! 2024-01-02T12:00:00.000 - 2024-01-02T13:00:00.000: Deploy api #ops #release
//! Rolled out behind the canary flag.
//! ```
//!
//! The first `#tag` names the lane; further tags are kept as event tags.
//!
//! The format is lossy for text the header grammar cannot carry: a `#word`
//! inside a title reads back as a tag (or as the lane), and whitespace in a
//! lane or tag splits it into separate words.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::core::{Event, Instant, Sentiment, format_instant, parse_instant};

pub const DEFAULT_OUTLINE_LANE: &str = "default";
pub const UNTITLED_EVENT: &str = "Untitled Event";

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineImport {
    pub events: Vec<Event>,
    /// Headers whose range was present but inverted or empty.
    pub skipped: usize,
}

/// Renders events as outline blocks separated by a blank line.
#[must_use]
pub fn events_to_outline(events: &[Event]) -> String {
    events
        .iter()
        .map(|event| {
            let mut block = format!(
                "{} - {}: {} #{}",
                format_instant(event.start),
                format_instant(event.end),
                event.title,
                event.lane
            );
            for tag in &event.tags {
                block.push_str(" #");
                block.push_str(tag);
            }
            if let Some(description) = event.description_text() {
                block.push('\n');
                block.push_str(description);
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Parses outline text into events with fresh ids.
///
/// Lines before the first header are ignored. A header whose end is not
/// after its start is skipped together with its description lines.
#[must_use]
pub fn outline_to_events(text: &str) -> OutlineImport {
    let mut events = Vec::new();
    let mut skipped = 0usize;
    let mut current: Option<PendingEvent> = None;
    let mut discarding = false;

    for line in text.lines() {
        if let Some(header) = parse_header(line) {
            if let Some(pending) = current.take() {
                events.push(pending.finish());
            }
            if header.end > header.start {
                current = Some(PendingEvent::from_header(header));
                discarding = false;
            } else {
                skipped += 1;
                discarding = true;
                warn!(line, "skipping outline event with inverted range");
            }
            continue;
        }

        if discarding {
            continue;
        }
        if let Some(pending) = current.as_mut() {
            pending.description.push(line);
        }
    }
    if let Some(pending) = current.take() {
        events.push(pending.finish());
    }

    debug!(count = events.len(), skipped, "parsed outline text");
    OutlineImport { events, skipped }
}

#[derive(Debug)]
struct OutlineHeader<'a> {
    start: Instant,
    end: Instant,
    text: &'a str,
}

fn parse_header(line: &str) -> Option<OutlineHeader<'_>> {
    let (range, text) = line.split_once(": ")?;
    let (start, end) = range.split_once(" - ")?;
    Some(OutlineHeader {
        start: parse_instant(start).ok()?,
        end: parse_instant(end).ok()?,
        text,
    })
}

#[derive(Debug)]
struct PendingEvent<'a> {
    start: Instant,
    end: Instant,
    title: String,
    tags: Vec<&'a str>,
    description: Vec<&'a str>,
}

impl<'a> PendingEvent<'a> {
    fn from_header(header: OutlineHeader<'a>) -> Self {
        let (tags, words): (Vec<&str>, Vec<&str>) = header
            .text
            .split_whitespace()
            .partition(|word| word.len() > 1 && word.starts_with('#'));
        Self {
            start: header.start,
            end: header.end,
            title: words.join(" "),
            tags: tags.into_iter().map(|tag| &tag[1..]).collect(),
            description: Vec::new(),
        }
    }

    fn finish(self) -> Event {
        let description = self.description.join("\n").trim().to_owned();
        let mut tags = self.tags.into_iter();
        let lane = tags.next().unwrap_or(DEFAULT_OUTLINE_LANE).to_owned();
        let title = if self.title.is_empty() {
            UNTITLED_EVENT.to_owned()
        } else {
            self.title
        };

        let mut event = Event {
            id: Uuid::new_v4().to_string(),
            title,
            description: (!description.is_empty()).then_some(description),
            start: self.start,
            end: self.end,
            lane,
            sentiment: Sentiment::Neutral,
            links: Vec::new(),
            tags: Vec::new(),
            color: None,
        };
        for tag in tags {
            event.add_tag(tag);
        }
        event
    }
}
