use serde::{Deserialize, Serialize};

use crate::core::{NavigationDirection, RangeSelector};

/// Which presentation of the event collection is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Timeline,
    Calendar,
    List,
}

/// User input from the timeline toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControlAction {
    Navigate { direction: NavigationDirection },
    SetRange { range: RangeSelector },
    /// Back to the default three-day range; the cursor stays put.
    ResetRange,
    SetView { view: ViewMode },
}

/// Toolbar state: the selected range and view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ControlState {
    pub range: RangeSelector,
    pub view: ViewMode,
}

impl ControlState {
    #[must_use]
    pub fn new(range: RangeSelector, view: ViewMode) -> Self {
        Self { range, view }
    }

    /// Applies a non-navigation action; returns `true` if anything changed.
    ///
    /// Navigation moves the cursor, which the engine owns, so it is a no-op here.
    pub fn apply(&mut self, action: ControlAction) -> bool {
        let before = *self;
        match action {
            ControlAction::Navigate { .. } => {}
            ControlAction::SetRange { range } => self.range = range,
            ControlAction::ResetRange => self.range = RangeSelector::ThreeDays,
            ControlAction::SetView { view } => self.view = view,
        }
        before != *self
    }
}
