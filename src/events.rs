//! Event overlay matching.
//!
//! [`events_at`] compares full instants. A day cell has no time of day, so
//! [`events_on`] pins it to midnight before matching: an event without an end
//! whose start is later than midnight does not show on its own day under that
//! rule. Hosts that want such events on their start day use
//! [`events_touching`], which compares calendar days instead.

use crate::types::{day_of, start_of_day};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id:         String,
    pub title:      String,
    pub start:      NaiveDateTime,
    /// `end >= start` is assumed, not checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end:        Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color:      Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

impl CalendarEvent {
    pub fn new(id: impl Into<String>, title: impl Into<String>, start: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start,
            end: None,
            color: None,
            text_color: None,
        }
    }

    #[must_use]
    pub fn ending(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    #[must_use]
    pub fn colored(mut self, color: impl Into<String>, text_color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self.text_color = Some(text_color.into());
        self
    }

    /// `start <= instant` and, when an end is set, `end >= instant`.
    pub fn covers(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && self.end.is_none_or(|end| end >= instant)
    }

    /// The event's span shares at least one calendar day with `date`.
    pub fn touches(&self, date: NaiveDate) -> bool {
        day_of(self.start) <= date && self.end.is_none_or(|end| day_of(end) >= date)
    }
}

/// Events covering `instant`, in input order.
pub fn events_at(instant: NaiveDateTime, events: &[CalendarEvent]) -> Vec<&CalendarEvent> {
    events.iter().filter(|event| event.covers(instant)).collect()
}

/// Events covering midnight at the start of `date`, in input order.
pub fn events_on(date: NaiveDate, events: &[CalendarEvent]) -> Vec<&CalendarEvent> {
    events_at(start_of_day(date), events)
}

/// Events whose calendar-day span includes `date`, in input order.
pub fn events_touching(date: NaiveDate, events: &[CalendarEvent]) -> Vec<&CalendarEvent> {
    events.iter().filter(|event| event.touches(date)).collect()
}
