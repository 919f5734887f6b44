use serde::{Deserialize, Serialize};

use crate::core::{RangeSelector, Window};
use crate::error::{TimelineError, TimelineResult};
use crate::render::{AxisLabelPrimitive, LaneRow};

/// Backend-agnostic scene for one timeline draw pass.
///
/// Every horizontal coordinate is a percentage of the window, so backends
/// only scale by their own width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineFrame {
    pub window: Window,
    pub range: RangeSelector,
    pub labels: Vec<AxisLabelPrimitive>,
    pub lanes: Vec<LaneRow>,
}

impl TimelineFrame {
    #[must_use]
    pub fn new(window: Window, range: RangeSelector) -> Self {
        Self {
            window,
            range,
            labels: Vec::new(),
            lanes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: AxisLabelPrimitive) -> Self {
        self.labels.push(label);
        self
    }

    #[must_use]
    pub fn with_lane(mut self, lane: LaneRow) -> Self {
        self.lanes.push(lane);
        self
    }

    /// Vertical gridline positions; one per axis label.
    pub fn gridlines(&self) -> impl Iterator<Item = f64> + '_ {
        self.labels.iter().map(|label| label.left_percent)
    }

    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.lanes.iter().map(|lane| lane.bars.len()).sum()
    }

    #[must_use]
    pub fn visible_bar_count(&self) -> usize {
        self.lanes.iter().map(|lane| lane.visible_bars().count()).sum()
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if self.window.start >= self.window.end {
            return Err(TimelineError::InvalidWindow {
                start: crate::core::format_instant(self.window.start),
                end: crate::core::format_instant(self.window.end),
            });
        }

        for label in &self.labels {
            label.validate()?;
        }
        if !self
            .labels
            .windows(2)
            .all(|pair| pair[0].instant < pair[1].instant)
        {
            return Err(TimelineError::InvalidData(
                "axis labels must be strictly ascending".to_owned(),
            ));
        }

        for lane in &self.lanes {
            for bar in &lane.bars {
                bar.validate()?;
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.lanes.is_empty()
    }
}
