use crate::consts::DEFAULT_LOCALE_TAG;
use crate::types::WeekdayIndex;
use serde::{Deserialize, Serialize};

/// Width of weekday labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayFormat {
    Narrow,
    #[default]
    Short,
    Long,
}

/// Width of month labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthFormat {
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
    Narrow,
    Short,
    #[default]
    Long,
}

/// Width of day-of-month labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayFormat {
    #[default]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    pub weekday: WeekdayFormat,
    pub month:   MonthFormat,
    pub day:     DayFormat,
}

/// Week alignment and label formatting. Pure configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocaleConfig {
    pub locale:         String,
    pub week_starts_on: WeekdayIndex,
    pub format_options: FormatOptions,
}

impl LocaleConfig {
    /// `en-US` labels with weeks starting on `week_starts_on`
    pub fn starting_on(week_starts_on: WeekdayIndex) -> Self {
        Self {
            week_starts_on,
            ..Self::default()
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            locale:         DEFAULT_LOCALE_TAG.to_owned(),
            week_starts_on: WeekdayIndex::SUNDAY,
            format_options: FormatOptions::default(),
        }
    }
}
