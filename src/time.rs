use crate::consts::{HOURS_12H, HOURS_24H, MINUTES_PER_HOUR};
use crate::prelude::*;
use crate::types::ConfigError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, SubsecRound};
use serde::{Deserialize, Serialize};

/// Clock face of a time picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum TimeFormat {
    #[display(fmt = "12h")]
    #[serde(rename = "12h")]
    H12,
    #[default]
    #[display(fmt = "24h")]
    #[serde(rename = "24h")]
    H24,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    #[display(fmt = "AM")]
    Am,
    #[display(fmt = "PM")]
    Pm,
}

/// `date_part`'s calendar day at `time_part`'s hour, minute and second.
///
/// Sub-second precision is dropped.
pub fn combine(date_part: NaiveDateTime, time_part: NaiveDateTime) -> NaiveDateTime {
    at_time(date_part.date(), time_part.time())
}

/// `date` at `time` truncated to whole seconds.
pub fn at_time(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time.trunc_subsecs(0))
}

/// Same day at `hour:minute:00`. Out-of-range components leave `instant` unchanged.
pub fn with_hour_minute(instant: NaiveDateTime, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveTime::from_hms_opt(hour, minute, 0).map_or(instant, |time| instant.date().and_time(time))
}

/// Converts a 12-hour clock reading to a 24-hour hour. Values above 12 are
/// treated as already being on a 24-hour clock.
pub const fn to_24h(hour: u32, meridiem: Meridiem) -> u32 {
    match (meridiem, hour) {
        (Meridiem::Am, HOURS_12H) => 0,
        (Meridiem::Pm, h) if h < HOURS_12H => h + HOURS_12H,
        (_, h) => h,
    }
}

/// Splits a 24-hour hour into the 12-hour reading and its meridiem.
pub const fn to_12h(hour: u32) -> (u32, Meridiem) {
    let meridiem = if hour >= HOURS_12H { Meridiem::Pm } else { Meridiem::Am };
    let reading = match hour % HOURS_12H {
        0 => HOURS_12H,
        h => h,
    };
    (reading, meridiem)
}

/// Hours a picker offers: `1..=12` for 12h, `0..=23` for 24h.
pub fn hour_options(format: TimeFormat) -> Vec<u32> {
    match format {
        TimeFormat::H12 => (1..=HOURS_12H).collect(),
        TimeFormat::H24 => (0..HOURS_24H).collect(),
    }
}

/// Minutes a picker offers in increments of `step`.
///
/// # Errors
/// Returns `ConfigError::InvalidMinuteStep` if `step` is 0 or above 60.
pub fn minute_options(step: u32) -> Result<Vec<u32>, ConfigError> {
    validate_minute_step(step)?;
    Ok((0..MINUTES_PER_HOUR / step).map(|i| i * step).collect())
}

/// # Errors
/// Returns `ConfigError::InvalidMinuteStep` if `step` is 0 or above 60.
pub const fn validate_minute_step(step: u32) -> Result<(), ConfigError> {
    if step == 0 || step > MINUTES_PER_HOUR {
        return Err(ConfigError::InvalidMinuteStep(step));
    }
    Ok(())
}

/// Time picker settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimePickerConfig {
    pub format:      TimeFormat,
    pub minute_step: u32,
}

impl Default for TimePickerConfig {
    fn default() -> Self {
        Self {
            format:      TimeFormat::H24,
            minute_step: 1,
        }
    }
}

/// Label a picker shows for `instant`: `h:mm AM` or `HH:mm`.
pub fn time_label(instant: NaiveDateTime, format: TimeFormat) -> String {
    match format {
        TimeFormat::H12 => instant.format("%-I:%M %p").to_string(),
        TimeFormat::H24 => instant.format("%H:%M").to_string(),
    }
}
