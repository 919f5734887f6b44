//! Format adapters that sit beside the core layout engine.
//!
//! Keep adapters free of store and engine state; they only convert between
//! text and event lists.

pub mod outline;

pub use outline::{
    DEFAULT_OUTLINE_LANE, OutlineImport, UNTITLED_EVENT, events_to_outline, outline_to_events,
};
