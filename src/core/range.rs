use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimelineError;

/// Named visible-range selection. Each variant maps to a fixed day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RangeSelector {
    #[serde(rename = "1day")]
    OneDay,
    #[default]
    #[serde(rename = "3days")]
    ThreeDays,
    #[serde(rename = "1week")]
    OneWeek,
    #[serde(rename = "2weeks")]
    TwoWeeks,
    #[serde(rename = "1month")]
    OneMonth,
}

impl RangeSelector {
    pub const ALL: [Self; 5] = [
        Self::OneDay,
        Self::ThreeDays,
        Self::OneWeek,
        Self::TwoWeeks,
        Self::OneMonth,
    ];

    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::OneDay => 1,
            Self::ThreeDays => 3,
            Self::OneWeek => 7,
            Self::TwoWeeks => 14,
            Self::OneMonth => 30,
        }
    }

    /// Stable tag used in persisted state and on the command line.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::OneDay => "1day",
            Self::ThreeDays => "3days",
            Self::OneWeek => "1week",
            Self::TwoWeeks => "2weeks",
            Self::OneMonth => "1month",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::OneDay => "1 Day",
            Self::ThreeDays => "3 Days",
            Self::OneWeek => "1 Week",
            Self::TwoWeeks => "2 Weeks",
            Self::OneMonth => "1 Month",
        }
    }
}

impl fmt::Display for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for RangeSelector {
    type Err = TimelineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|range| range.tag() == value.trim())
            .ok_or_else(|| TimelineError::InvalidData(format!("unknown range selector `{value}`")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationDirection {
    Prev,
    Next,
}

impl NavigationDirection {
    #[must_use]
    pub const fn sign(self) -> i64 {
        match self {
            Self::Prev => -1,
            Self::Next => 1,
        }
    }
}
