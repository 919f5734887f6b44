//! Pure timeline layout: window resolution, axis labels and span projection.
//!
//! Nothing in here performs I/O or holds state between calls.

pub mod axis_labels;
pub mod event;
pub mod primitives;
pub mod range;
pub mod span_projection;
pub mod types;
pub mod window;

pub use axis_labels::{
    LABEL_TIERS, Label, LabelFormat, LabelStrategy, LabelTier, labels, labels_for_tier,
    select_tier,
};
pub use event::{Event, EventLink, EventPatch, LinkKind, Sentiment};
pub use primitives::{format_instant, parse_instant};
pub use range::{NavigationDirection, RangeSelector};
pub use span_projection::{
    MIN_VISIBLE_WIDTH_PERCENT, ProjectedSpan, position_percent, project, project_spans,
};
pub use types::{EventSpan, Instant, Window};
pub use window::{initial_cursor, navigate, resolve};
