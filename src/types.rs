use crate::consts::{MAX_WEEKDAY, SATURDAY, SUNDAY};
use crate::prelude::*;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error type for invalid calendar configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Weekday index outside `0..=6`.
    #[error("Invalid weekday index: {0} (must be 0-6)")]
    InvalidWeekday(u8),

    /// Minute step that does not fit in an hour.
    #[error("Invalid minute step: {0} (must be 1-60)")]
    InvalidMinuteStep(u32),

    /// Minimum date lies after the maximum date.
    #[error("Invalid date bounds: min ({min}) is after max ({max})")]
    InvertedBounds { min: NaiveDate, max: NaiveDate },

    /// Month number outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u32),

    /// Year the date arithmetic cannot represent.
    #[error("Invalid year: {0}")]
    InvalidYear(i32),
}

/// A weekday index guaranteed to be in the range `0..=6`, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekdayIndex(u8);

impl WeekdayIndex {
    pub const SUNDAY: Self = Self(SUNDAY);
    pub const MONDAY: Self = Self(1);
    pub const SATURDAY: Self = Self(SATURDAY);

    /// Creates a new weekday index, validating that it's <= 6
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidWeekday` if the value is > 6.
    pub const fn new(value: u8) -> Result<Self, ConfigError> {
        if value > MAX_WEEKDAY {
            return Err(ConfigError::InvalidWeekday(value));
        }
        Ok(Self(value))
    }

    /// Returns the index as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Weekday index of a calendar day
    pub fn of(date: NaiveDate) -> Self {
        Self::from(date.weekday())
    }

    pub const fn from_weekday(weekday: Weekday) -> Self {
        Self(match weekday {
            Weekday::Sun => 0,
            Weekday::Mon => 1,
            Weekday::Tue => 2,
            Weekday::Wed => 3,
            Weekday::Thu => 4,
            Weekday::Fri => 5,
            Weekday::Sat => 6,
        })
    }

    pub const fn to_weekday(self) -> Weekday {
        match self.0 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// Saturday or Sunday
    pub const fn is_weekend(self) -> bool {
        self.0 == SATURDAY || self.0 == SUNDAY
    }

    /// Days from `week_start` forward to this weekday, in `0..7`
    pub const fn offset_from(self, week_start: Self) -> u8 {
        (self.0 + 7 - week_start.0) % 7
    }
}

impl Default for WeekdayIndex {
    fn default() -> Self {
        Self::SUNDAY
    }
}

impl TryFrom<u8> for WeekdayIndex {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeekdayIndex> for u8 {
    fn from(index: WeekdayIndex) -> Self {
        index.0
    }
}

impl From<Weekday> for WeekdayIndex {
    fn from(weekday: Weekday) -> Self {
        Self::from_weekday(weekday)
    }
}

impl fmt::Display for WeekdayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Grid shape and navigation step of a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    #[default]
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "day")]
    Day,
}

/// How clicks accumulate into a selection value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    #[display(fmt = "single")]
    Single,
    #[display(fmt = "multiple")]
    Multiple,
    #[display(fmt = "range")]
    Range,
}

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[display(fmt = "previous")]
    Previous,
    #[display(fmt = "next")]
    Next,
}

/// Calendar day of an instant, dropping the time of day.
#[inline]
pub fn day_of(instant: NaiveDateTime) -> NaiveDate {
    instant.date()
}

/// Midnight at the start of a calendar day.
#[inline]
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Two instants share year, month and day.
#[inline]
pub fn same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    day_of(a) == day_of(b)
}
