use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::core::{Event, EventLink, Sentiment, parse_instant};
use crate::error::{TimelineError, TimelineResult};

/// Outcome counts for one JSON import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

impl ImportReport {
    #[must_use]
    pub fn has_skipped(self) -> bool {
        self.skipped > 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsonImport {
    pub events: Vec<Event>,
    pub report: ImportReport,
}

/// Lenient shape of an incoming record; every field may be absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEventRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
    #[serde(default)]
    lane: Option<String>,
    #[serde(default)]
    sentiment: Option<Sentiment>,
    #[serde(default)]
    links: Option<Vec<EventLink>>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    color: Option<String>,
}

impl RawEventRecord {
    fn into_event(self) -> Result<Event, String> {
        let title = non_blank(self.title).ok_or("missing title")?;
        let lane = non_blank(self.lane).ok_or("missing lane")?;
        let start = self
            .start_date
            .as_deref()
            .ok_or("missing startDate")
            .and_then(|raw| parse_instant(raw).map_err(|_| "unparseable startDate"))?;
        let end = self
            .end_date
            .as_deref()
            .ok_or("missing endDate")
            .and_then(|raw| parse_instant(raw).map_err(|_| "unparseable endDate"))?;
        if end <= start {
            return Err("endDate must be after startDate".to_owned());
        }

        Ok(Event {
            id: non_blank(self.id).unwrap_or_else(|| Uuid::new_v4().to_string()),
            title,
            description: self.description,
            start,
            end,
            lane,
            sentiment: self.sentiment.unwrap_or_default(),
            links: self.links.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
            color: self.color,
        })
    }
}

/// Parses an exported event list, keeping only valid records.
///
/// The payload must be a JSON array. Records without a title or lane, with
/// unparseable dates, with `endDate <= startDate`, or repeating an earlier
/// id are skipped and counted. Missing ids get a random UUID; missing
/// sentiment, links and tags fall back to neutral and empty lists.
pub fn parse_events_json(input: &str) -> TimelineResult<JsonImport> {
    let payload: Value = serde_json::from_str(input)
        .map_err(|e| TimelineError::InvalidData(format!("failed to parse events json: {e}")))?;
    let Value::Array(records) = payload else {
        return Err(TimelineError::InvalidData(
            "events json must be an array".to_owned(),
        ));
    };

    let mut events = Vec::with_capacity(records.len());
    let mut seen_ids = HashSet::with_capacity(records.len());
    let mut skipped = 0usize;

    for (index, record) in records.into_iter().enumerate() {
        let parsed = serde_json::from_value::<RawEventRecord>(record)
            .map_err(|e| e.to_string())
            .and_then(RawEventRecord::into_event)
            .and_then(|event| {
                if seen_ids.insert(event.id.clone()) {
                    Ok(event)
                } else {
                    Err(format!("duplicate id `{}`", event.id))
                }
            });

        match parsed {
            Ok(event) => events.push(event),
            Err(reason) => {
                skipped += 1;
                warn!(index, reason = %reason, "skipping invalid event record");
            }
        }
    }

    let report = ImportReport {
        imported: events.len(),
        skipped,
    };
    debug!(imported = report.imported, skipped, "parsed events json");
    Ok(JsonImport { events, report })
}

/// Pretty JSON export of the collection. An empty collection is rejected.
pub fn export_events_json(events: &[Event]) -> TimelineResult<String> {
    if events.is_empty() {
        return Err(TimelineError::InvalidData(
            "no events to export".to_owned(),
        ));
    }
    Ok(serde_json::to_string_pretty(events)?)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
