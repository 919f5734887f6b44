use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::primitives::instant_serde;
use crate::core::{EventSpan, Instant};
use crate::error::{TimelineError, TimelineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// Bar fill used by the timeline and calendar views, `0xRRGGBB`.
    #[must_use]
    pub const fn fill_rgb(self) -> u32 {
        match self {
            Self::Positive => 0x22_c5_5e,
            Self::Negative => 0xef_44_44,
            Self::Neutral => 0x3b_82_f6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkKind {
    Jira,
    AppDynamics,
    LoadRunner,
    Confluence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLink {
    #[serde(rename = "type")]
    pub kind: LinkKind,
    pub url: String,
    pub title: String,
}

impl EventLink {
    pub fn new(
        kind: LinkKind,
        url: impl Into<String>,
        title: impl Into<String>,
    ) -> TimelineResult<Self> {
        let link = Self {
            kind,
            url: url.into(),
            title: title.into(),
        };
        if link.url.trim().is_empty() || link.title.trim().is_empty() {
            return Err(TimelineError::InvalidData(
                "link url and title must both be non-empty".to_owned(),
            ));
        }
        Ok(link)
    }
}

/// One timeline event as stored and exchanged.
///
/// Field names on the wire keep the persisted layout (`startDate`,
/// `endDate`), so snapshots written by earlier versions load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "startDate", with = "instant_serde")]
    pub start: Instant,
    #[serde(rename = "endDate", with = "instant_serde")]
    pub end: Instant,
    pub lane: String,
    #[serde(default)]
    pub sentiment: Sentiment,
    #[serde(default)]
    pub links: Vec<EventLink>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Event {
    /// Builds a validated event with a fresh random id.
    pub fn new(
        title: impl Into<String>,
        lane: impl Into<String>,
        start: Instant,
        end: Instant,
    ) -> TimelineResult<Self> {
        let event = Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            start,
            end,
            lane: lane.into(),
            sentiment: Sentiment::default(),
            links: Vec::new(),
            tags: Vec::new(),
            color: None,
        };
        event.validate()?;
        Ok(event)
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = sentiment;
        self
    }

    #[must_use]
    pub fn with_link(mut self, link: EventLink) -> Self {
        self.links.push(link);
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl AsRef<str>) -> Self {
        self.add_tag(tag);
        self
    }

    /// Adds a trimmed tag unless it is blank or already present.
    pub fn add_tag(&mut self, tag: impl AsRef<str>) -> bool {
        let tag = tag.as_ref().trim();
        if tag.is_empty() || self.tags.iter().any(|existing| existing == tag) {
            return false;
        }
        self.tags.push(tag.to_owned());
        true
    }

    #[must_use]
    pub fn span(&self) -> EventSpan {
        EventSpan::new(self.start, self.end)
    }

    /// Description if present and non-blank.
    #[must_use]
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }

    pub fn validate(&self) -> TimelineResult<()> {
        let reason = if self.id.trim().is_empty() {
            Some("id must be non-empty")
        } else if self.title.trim().is_empty() {
            Some("title must be non-empty")
        } else if self.lane.trim().is_empty() {
            Some("lane must be non-empty")
        } else if self.end <= self.start {
            Some("end must be after start")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(TimelineError::InvalidEvent {
                id: self.id.clone(),
                reason: reason.to_owned(),
            }),
            None => Ok(()),
        }
    }

    /// Returns a copy with the patch's present fields merged in.
    ///
    /// The merged event is not validated here; callers decide when to check.
    #[must_use]
    pub fn patched(&self, patch: &EventPatch) -> Self {
        let mut next = self.clone();
        if let Some(title) = &patch.title {
            next.title.clone_from(title);
        }
        if let Some(description) = &patch.description {
            next.description.clone_from(description);
        }
        if let Some(start) = patch.start {
            next.start = start;
        }
        if let Some(end) = patch.end {
            next.end = end;
        }
        if let Some(lane) = &patch.lane {
            next.lane.clone_from(lane);
        }
        if let Some(sentiment) = patch.sentiment {
            next.sentiment = sentiment;
        }
        if let Some(links) = &patch.links {
            next.links.clone_from(links);
        }
        if let Some(tags) = &patch.tags {
            next.tags.clone_from(tags);
        }
        if let Some(color) = &patch.color {
            next.color.clone_from(color);
        }
        next
    }
}

/// Partial update for an existing event. `None` leaves a field untouched.
///
/// Optional event fields use a nested option: `Some(None)` clears them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub start: Option<Instant>,
    pub end: Option<Instant>,
    pub lane: Option<String>,
    pub sentiment: Option<Sentiment>,
    pub links: Option<Vec<EventLink>>,
    pub tags: Option<Vec<String>>,
    pub color: Option<Option<String>>,
}

impl EventPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
