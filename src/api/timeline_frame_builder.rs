use indexmap::IndexMap;

use crate::core::{
    Event, EventSpan, Label, ProjectedSpan, RangeSelector, Window, position_percent, project_spans,
};
use crate::render::{AxisLabelPrimitive, Color, EventBar, LaneRow, TextHAlign, TimelineFrame};

use super::label_text_formatter::{
    event_tooltip, format_label_date, format_label_text, is_day_boundary,
};

/// Materializes the timeline view for one render cycle.
///
/// `labels` must come from the same `window`; lanes appear in first-seen
/// order and bars keep collection order inside each lane. Hidden events are
/// kept with `visible == false` so hosts can still hit-test by id.
#[must_use]
pub fn build_timeline_frame(
    events: &[Event],
    window: Window,
    range: RangeSelector,
    labels: &[Label],
) -> TimelineFrame {
    let mut frame = TimelineFrame::new(window, range);
    frame.labels = labels
        .iter()
        .map(|label| axis_label_primitive(window, label))
        .collect();

    let spans: Vec<EventSpan> = events.iter().map(Event::span).collect();
    let projected = project_spans(window, &spans);

    let mut lanes: IndexMap<&str, Vec<EventBar>> = IndexMap::new();
    for (event, projected) in events.iter().zip(projected) {
        lanes
            .entry(event.lane.as_str())
            .or_default()
            .push(event_bar(event, projected));
    }
    frame.lanes = lanes
        .into_iter()
        .map(|(lane, bars)| LaneRow {
            lane: lane.to_owned(),
            bars,
        })
        .collect();

    frame
}

fn axis_label_primitive(window: Window, label: &Label) -> AxisLabelPrimitive {
    AxisLabelPrimitive {
        instant: label.instant,
        left_percent: position_percent(window, label.instant),
        text: format_label_text(label),
        date_text: format_label_date(label),
        h_align: if is_day_boundary(label) {
            TextHAlign::Start
        } else {
            TextHAlign::Center
        },
    }
}

fn event_bar(event: &Event, projected: ProjectedSpan) -> EventBar {
    EventBar {
        event_id: event.id.clone(),
        title: event.title.clone(),
        projected,
        fill: Color::from_rgb_hex(event.sentiment.fill_rgb()),
        tooltip: event_tooltip(event),
    }
}
