use serde::{Deserialize, Serialize};

use crate::core::{Instant, ProjectedSpan};
use crate::core::span_projection::{MAX_PERCENT, MIN_VISIBLE_WIDTH_PERCENT};
use crate::error::{TimelineError, TimelineResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    #[must_use]
    pub fn from_rgb_hex(rgb: u32) -> Self {
        let channel = |shift: u32| f64::from((rgb >> shift) & 0xff) / 255.0;
        Self::rgba(channel(16), channel(8), channel(0), 1.0)
    }

    /// `#rrggbb`, ignoring alpha.
    #[must_use]
    pub fn to_hex(self) -> String {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }

    pub fn validate(self) -> TimelineResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(TimelineError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to the label's tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Start,
    Center,
}

/// One axis tick with its label text, positioned in percent of the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabelPrimitive {
    #[serde(with = "crate::core::primitives::instant_serde")]
    pub instant: Instant,
    pub left_percent: f64,
    pub text: String,
    pub date_text: Option<String>,
    pub h_align: TextHAlign,
}

impl AxisLabelPrimitive {
    pub fn validate(&self) -> TimelineResult<()> {
        if self.text.is_empty() {
            return Err(TimelineError::InvalidData(
                "axis label text must not be empty".to_owned(),
            ));
        }
        if !self.left_percent.is_finite()
            || !(-PERCENT_EPSILON..=MAX_PERCENT + PERCENT_EPSILON).contains(&self.left_percent)
        {
            return Err(TimelineError::InvalidData(format!(
                "axis label position {} is outside the window",
                self.left_percent
            )));
        }
        Ok(())
    }
}

/// Draw command for one event bar inside a lane row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBar {
    pub event_id: String,
    pub title: String,
    pub projected: ProjectedSpan,
    pub fill: Color,
    pub tooltip: String,
}

impl EventBar {
    pub fn validate(&self) -> TimelineResult<()> {
        let ProjectedSpan {
            left_percent,
            width_percent,
            ..
        } = self.projected;
        if !left_percent.is_finite() || !(0.0..=MAX_PERCENT).contains(&left_percent) {
            return Err(TimelineError::InvalidData(format!(
                "bar `{}` left {left_percent} must be within [0, 100]",
                self.event_id
            )));
        }
        if !width_percent.is_finite()
            || !(MIN_VISIBLE_WIDTH_PERCENT..=MAX_PERCENT).contains(&width_percent)
        {
            return Err(TimelineError::InvalidData(format!(
                "bar `{}` width {width_percent} must be within [0.5, 100]",
                self.event_id
            )));
        }
        self.fill.validate()
    }
}

/// Events of one lane, in collection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneRow {
    pub lane: String,
    pub bars: Vec<EventBar>,
}

impl LaneRow {
    pub fn visible_bars(&self) -> impl Iterator<Item = &EventBar> {
        self.bars.iter().filter(|bar| bar.projected.visible)
    }
}

const PERCENT_EPSILON: f64 = 1e-9;
