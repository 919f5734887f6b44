mod calendar;
mod engine_config;
mod event_store;
mod json_contract;
mod label_cache;
mod label_text_formatter;
mod storage;
mod table;
mod timeline_frame_builder;

pub use calendar::{CalendarDay, CalendarEntry, CalendarMonth, build_calendar_month};
pub use engine_config::TimelineEngineConfig;
pub use event_store::{DEFAULT_STORAGE_KEY, EventStore, decode_snapshot, encode_snapshot};
pub use json_contract::{ImportReport, JsonImport, export_events_json, parse_events_json};
pub use label_cache::LabelCacheStats;
pub use label_text_formatter::{
    event_tooltip, format_clock, format_event_instant, format_label_date, format_label_text,
    format_month_title, is_day_boundary,
};
pub use storage::{EventStorage, FileStorage, MemoryStorage};
pub use table::{EventTableRow, build_table_rows};
pub use timeline_frame_builder::build_timeline_frame;

use chrono::{Local, NaiveDate};
use tracing::{debug, trace};

use crate::core::{
    Event, EventPatch, Instant, Label, NavigationDirection, RangeSelector, Window, initial_cursor,
    labels, navigate, resolve,
};
use crate::error::{TimelineError, TimelineResult};
use crate::extensions::{events_to_outline, outline_to_events};
use crate::interaction::{ControlAction, ControlState, ViewMode};
use crate::render::{Renderer, TimelineFrame};

use label_cache::{AxisLabelCache, LabelCacheKey};

/// Stateful facade over the event store, toolbar state and layout core.
///
/// The cursor is the right edge of the visible window. It follows the latest
/// event end whenever the collection changes and is non-empty.
pub struct TimelineEngine<S: EventStorage, R: Renderer> {
    store: EventStore<S>,
    renderer: R,
    cursor: Instant,
    controls: ControlState,
    label_cache: AxisLabelCache,
}

impl<S: EventStorage, R: Renderer> TimelineEngine<S, R> {
    /// Opens the store and places the cursor at the latest event end, or at
    /// the current local time when there are no events.
    pub fn new(storage: S, renderer: R, config: TimelineEngineConfig) -> TimelineResult<Self> {
        Self::new_at(storage, renderer, config, Local::now().naive_local())
    }

    /// Same as [`TimelineEngine::new`] with an explicit "now".
    pub fn new_at(
        storage: S,
        renderer: R,
        config: TimelineEngineConfig,
        now: Instant,
    ) -> TimelineResult<Self> {
        config.validate()?;
        let store = EventStore::open_with_key(storage, config.storage_key.clone())?;
        let cursor = initial_cursor(store.events().iter().map(|event| event.end), now);
        debug!(
            events = store.len(),
            cursor = %cursor,
            range = %config.default_range,
            "timeline engine opened"
        );

        Ok(Self {
            store,
            renderer,
            cursor,
            controls: ControlState::new(config.default_range, config.default_view),
            label_cache: AxisLabelCache::with_capacity(config.label_cache_capacity),
        })
    }

    #[must_use]
    pub fn cursor(&self) -> Instant {
        self.cursor
    }

    /// Moves the cursor to `cursor`; returns `false` and keeps the old cursor
    /// when the resolved window would be empty (at the calendar's lower limit).
    pub fn set_cursor(&mut self, cursor: Instant) -> bool {
        if !has_extent(cursor, self.controls.range) {
            debug!(%cursor, "cursor rejected: empty window");
            return false;
        }
        self.cursor = cursor;
        true
    }

    #[must_use]
    pub fn range(&self) -> RangeSelector {
        self.controls.range
    }

    #[must_use]
    pub fn view(&self) -> ViewMode {
        self.controls.view
    }

    #[must_use]
    pub fn controls(&self) -> ControlState {
        self.controls
    }

    pub fn set_range(&mut self, range: RangeSelector) {
        self.controls.range = range;
    }

    pub fn reset_range(&mut self) {
        self.controls.range = RangeSelector::ThreeDays;
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.controls.view = view;
    }

    /// Moves the cursor one range length in `direction`; returns the new cursor.
    /// The cursor stays put when the move would leave an empty window.
    pub fn navigate(&mut self, direction: NavigationDirection) -> Instant {
        let target = navigate(self.cursor, self.controls.range, direction);
        if has_extent(target, self.controls.range) {
            self.cursor = target;
            trace!(cursor = %self.cursor, ?direction, "timeline navigated");
        } else {
            debug!(cursor = %self.cursor, ?direction, "navigation stopped at calendar limit");
        }
        self.cursor
    }

    /// Applies a toolbar action; returns `true` if cursor, range or view changed.
    pub fn apply_control(&mut self, action: ControlAction) -> bool {
        match action {
            ControlAction::Navigate { direction } => {
                let before = self.cursor;
                before != self.navigate(direction)
            }
            other => self.controls.apply(other),
        }
    }

    #[must_use]
    pub fn window(&self) -> Window {
        resolve(self.cursor, self.controls.range)
    }

    /// Axis labels for the current window, memoized by `(window, range)`.
    pub fn labels(&mut self) -> Vec<Label> {
        let window = self.window();
        let range = self.controls.range;
        self.label_cache
            .get_or_compute(LabelCacheKey { window, range }, || labels(window, range))
    }

    #[must_use]
    pub fn label_cache_stats(&self) -> LabelCacheStats {
        self.label_cache.stats()
    }

    pub fn clear_label_cache(&mut self) {
        self.label_cache.clear();
    }

    pub fn build_frame(&mut self) -> TimelineFrame {
        let window = self.window();
        let labels = self.labels();
        build_timeline_frame(self.store.events(), window, self.controls.range, &labels)
    }

    pub fn render(&mut self) -> TimelineResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn calendar_month(&self, today: NaiveDate) -> CalendarMonth {
        build_calendar_month(self.store.events(), today)
    }

    #[must_use]
    pub fn table_rows(&self) -> Vec<EventTableRow> {
        build_table_rows(self.store.events())
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        self.store.events()
    }

    #[must_use]
    pub fn store(&self) -> &EventStore<S> {
        &self.store
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn add_event(&mut self, event: Event) -> TimelineResult<()> {
        self.store.add(event)?;
        self.follow_latest_end();
        Ok(())
    }

    pub fn remove_event(&mut self, id: &str) -> TimelineResult<Event> {
        let removed = self.store.remove(id)?;
        self.follow_latest_end();
        Ok(removed)
    }

    pub fn update_event(&mut self, id: &str, patch: &EventPatch) -> TimelineResult<&Event> {
        self.store.update(id, patch)?;
        self.follow_latest_end();
        self.store
            .get(id)
            .ok_or_else(|| TimelineError::UnknownEvent(id.to_owned()))
    }

    /// Replaces the whole collection.
    pub fn import_events(&mut self, events: Vec<Event>) -> TimelineResult<()> {
        self.store.import(events)?;
        self.follow_latest_end();
        Ok(())
    }

    /// Removes every event; the cursor stays where it was.
    pub fn clear_events(&mut self) -> TimelineResult<()> {
        self.store.clear()
    }

    /// Parses a JSON array and replaces the collection when at least one
    /// record is valid. Malformed JSON is an error; invalid records are only
    /// counted.
    pub fn import_json(&mut self, input: &str) -> TimelineResult<ImportReport> {
        let JsonImport { events, report } = parse_events_json(input)?;
        if report.imported > 0 {
            self.import_events(events)?;
        }
        debug!(
            imported = report.imported,
            skipped = report.skipped,
            "json import applied"
        );
        Ok(report)
    }

    pub fn export_json(&self) -> TimelineResult<String> {
        export_events_json(self.store.events())
    }

    /// Parses outline text and replaces the collection when it yields events.
    pub fn import_outline(&mut self, text: &str) -> TimelineResult<ImportReport> {
        let parsed = outline_to_events(text);
        let report = ImportReport {
            imported: parsed.events.len(),
            skipped: parsed.skipped,
        };
        if report.imported > 0 {
            self.import_events(parsed.events)?;
        }
        Ok(report)
    }

    #[must_use]
    pub fn export_outline(&self) -> String {
        events_to_outline(self.store.events())
    }

    fn follow_latest_end(&mut self) {
        if let Some(latest) = self.store.latest_end() {
            self.cursor = latest;
        }
    }
}

fn has_extent(cursor: Instant, range: RangeSelector) -> bool {
    let window = resolve(cursor, range);
    window.start < window.end
}
