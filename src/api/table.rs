use serde::{Deserialize, Serialize};

use crate::core::{Event, EventLink, Sentiment};

use super::label_text_formatter::format_event_instant;

/// One row of the list view, pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTableRow {
    pub event_id: String,
    pub title: String,
    pub description: Option<String>,
    pub lane: String,
    pub start_text: String,
    pub end_text: String,
    pub sentiment: Sentiment,
    pub links: Vec<EventLink>,
    pub tags: Vec<String>,
}

/// Rows in collection order.
#[must_use]
pub fn build_table_rows(events: &[Event]) -> Vec<EventTableRow> {
    events
        .iter()
        .map(|event| EventTableRow {
            event_id: event.id.clone(),
            title: event.title.clone(),
            description: event.description_text().map(str::to_owned),
            lane: event.lane.clone(),
            start_text: format_event_instant(event.start),
            end_text: format_event_instant(event.end),
            sentiment: event.sentiment,
            links: event.links.clone(),
            tags: event.tags.clone(),
        })
        .collect()
}
