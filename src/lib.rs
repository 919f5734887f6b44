//! event-timeline: layout engine for event timelines.
//!
//! The `core` module holds the pure layout math (window resolution, axis
//! labels, span projection). `api` wraps it with a persisted event store and
//! derives the timeline, calendar and table view models that hosts render.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig};
pub use error::{TimelineError, TimelineResult};
