//! Selection state machine.
//!
//! A [`Selection`] owns the current [`SelectionValue`] for one
//! [`SelectionMode`] and, in range mode, the anchor of a range that has been
//! started but not finished. Day clicks go through [`Selection::click`], which
//! returns a [`Signal`] telling the host whether anything changed and whether a
//! range was just completed.

use crate::constraints::ConstraintSet;
use crate::time::{at_time, combine};
use crate::types::{SelectionMode, day_of, start_of_day};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Error type for restoring host-stored selection state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// The stored value has a shape the mode cannot hold.
    #[error("A {kind} selection value does not belong to {mode} mode")]
    ModeMismatch { mode: SelectionMode, kind: &'static str },
}

/// Inclusive range of calendar days. Either end may be unset.
///
/// When both ends are set, `start <= end`. A range with only one known day
/// always stores it as `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "RangeRepr")]
pub struct DateRange {
    start: Option<NaiveDate>,
    end:   Option<NaiveDate>,
}

#[derive(Deserialize)]
struct RangeRepr {
    #[serde(default)]
    start: Option<NaiveDate>,
    #[serde(default)]
    end:   Option<NaiveDate>,
}

impl From<RangeRepr> for DateRange {
    fn from(repr: RangeRepr) -> Self {
        match (repr.start, repr.end) {
            (Some(a), Some(b)) => Self::new(a, b),
            (Some(day), None) | (None, Some(day)) => Self::open(day),
            (None, None) => Self::default(),
        }
    }
}

impl DateRange {
    /// Complete range between two days in either order.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            start: Some(a.min(b)),
            end:   Some(a.max(b)),
        }
    }

    /// Range with a start and no end yet.
    pub const fn open(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end:   None,
        }
    }

    pub const fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Inclusive containment. An incomplete range contains nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }
}

/// The value a selection holds. Exactly one shape is valid per mode, plus
/// `Empty` which every mode accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum SelectionValue {
    #[default]
    Empty,
    SingleDate(NaiveDateTime),
    DateSet(BTreeSet<NaiveDate>),
    DateRange(DateRange),
}

impl SelectionValue {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::SingleDate(_) => "singleDate",
            Self::DateSet(_) => "dateSet",
            Self::DateRange(_) => "dateRange",
        }
    }

    pub const fn belongs_to(&self, mode: SelectionMode) -> bool {
        matches!(
            (self, mode),
            (Self::Empty, _)
                | (Self::SingleDate(_), SelectionMode::Single)
                | (Self::DateSet(_), SelectionMode::Multiple)
                | (Self::DateRange(_), SelectionMode::Range)
        )
    }

    /// Whether a day cell shows as selected.
    ///
    /// A complete range selects every day it contains; a range with only a
    /// start selects that start day.
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        match self {
            Self::Empty => false,
            Self::SingleDate(instant) => day_of(*instant) == date,
            Self::DateSet(dates) => dates.contains(&date),
            Self::DateRange(range) if range.is_complete() => range.contains(date),
            Self::DateRange(range) => range.start() == Some(date),
        }
    }
}

/// A range that has its first day and is waiting for the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeInProgress {
    pub anchor: NaiveDate,
    pub hover:  Option<NaiveDate>,
}

impl RangeInProgress {
    pub const fn new(anchor: NaiveDate) -> Self {
        Self { anchor, hover: None }
    }

    /// Days between the anchor and the pointer, for live highlighting.
    pub fn preview(&self) -> Option<DateRange> {
        self.hover.map(|hover| DateRange::new(self.anchor, hover))
    }
}

/// Outcome of an interaction.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Nothing changed.
    Ignored,
    /// The selection value changed.
    Changed,
    /// The selection value changed and now holds this completed range.
    RangeCompleted(DateRange),
}

impl Signal {
    pub const fn is_change(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    pub const fn completed_range(&self) -> Option<DateRange> {
        match self {
            Self::RangeCompleted(range) => Some(*range),
            Self::Ignored | Self::Changed => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    mode:        SelectionMode,
    value:       SelectionValue,
    pending:     Option<RangeInProgress>,
    time_picker: bool,
}

impl Selection {
    pub const fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            value: SelectionValue::Empty,
            pending: None,
            time_picker: false,
        }
    }

    /// Keeps the time of day of a single-date value when another day is clicked.
    #[must_use]
    pub fn with_time_picker(mut self, enabled: bool) -> Self {
        self.time_picker = enabled;
        self
    }

    /// Rebuilds a selection from a value the host stored.
    ///
    /// A range value with only a start re-arms that start as the anchor.
    ///
    /// # Errors
    /// Returns `SelectionError::ModeMismatch` if `value` has a shape `mode`
    /// cannot hold.
    pub fn restore(mode: SelectionMode, value: SelectionValue) -> Result<Self, SelectionError> {
        if !value.belongs_to(mode) {
            return Err(SelectionError::ModeMismatch {
                mode,
                kind: value.kind(),
            });
        }

        let pending = match &value {
            SelectionValue::DateRange(range) if !range.is_complete() => range.start().map(RangeInProgress::new),
            _ => None,
        };
        Ok(Self {
            mode,
            value,
            pending,
            time_picker: false,
        })
    }

    pub const fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub const fn value(&self) -> &SelectionValue {
        &self.value
    }

    pub fn into_value(self) -> SelectionValue {
        self.value
    }

    pub const fn pending(&self) -> Option<&RangeInProgress> {
        self.pending.as_ref()
    }

    /// Switches mode, discarding the value and any range in progress.
    pub fn set_mode(&mut self, mode: SelectionMode) -> Signal {
        if mode == self.mode {
            return Signal::Ignored;
        }
        tracing::debug!(from = %self.mode, to = %mode, "selection mode changed, resetting value");
        self.mode = mode;
        self.pending = None;
        self.value = SelectionValue::Empty;
        Signal::Changed
    }

    pub fn clear(&mut self) -> Signal {
        self.pending = None;
        if self.value == SelectionValue::Empty {
            return Signal::Ignored;
        }
        self.value = SelectionValue::Empty;
        Signal::Changed
    }

    /// Feeds a day click into the machine.
    ///
    /// Clicks on days `constraints` disables are ignored and leave the
    /// selection untouched.
    pub fn click(&mut self, date: NaiveDate, constraints: &ConstraintSet) -> Signal {
        if let Some(reason) = constraints.disabled_reason(date) {
            tracing::trace!(%date, %reason, "ignoring click on disabled day");
            return Signal::Ignored;
        }

        match self.mode {
            SelectionMode::Single => self.click_single(date),
            SelectionMode::Multiple => self.click_multiple(date),
            SelectionMode::Range => self.click_range(date),
        }
    }

    fn click_single(&mut self, date: NaiveDate) -> Signal {
        let instant = match self.value {
            SelectionValue::SingleDate(held) if self.time_picker => combine(start_of_day(date), held),
            _ => start_of_day(date),
        };
        self.value = SelectionValue::SingleDate(instant);
        Signal::Changed
    }

    fn click_multiple(&mut self, date: NaiveDate) -> Signal {
        match &mut self.value {
            SelectionValue::DateSet(dates) => {
                if !dates.remove(&date) {
                    dates.insert(date);
                }
            },
            other => *other = SelectionValue::DateSet(BTreeSet::from([date])),
        }
        Signal::Changed
    }

    fn click_range(&mut self, date: NaiveDate) -> Signal {
        match self.pending.take() {
            Some(progress) => {
                let range = DateRange::new(progress.anchor, date);
                tracing::debug!(start = ?range.start(), end = ?range.end(), "range completed");
                self.value = SelectionValue::DateRange(range);
                Signal::RangeCompleted(range)
            },
            None => {
                tracing::debug!(anchor = %date, "range anchor set");
                self.pending = Some(RangeInProgress::new(date));
                self.value = SelectionValue::DateRange(DateRange::open(date));
                Signal::Changed
            },
        }
    }

    /// Records the day under the pointer while a range is in progress.
    /// Returns whether the preview changed.
    pub fn hover(&mut self, date: NaiveDate) -> bool {
        match &mut self.pending {
            Some(progress) if progress.hover != Some(date) => {
                progress.hover = Some(date);
                true
            },
            _ => false,
        }
    }

    /// The pointer left the grid.
    pub fn leave(&mut self) {
        if let Some(progress) = &mut self.pending {
            progress.hover = None;
        }
    }

    /// Applies a time of day to a single-date value.
    pub fn set_time(&mut self, time: NaiveTime) -> Signal {
        match &mut self.value {
            SelectionValue::SingleDate(instant) => {
                let updated = at_time(instant.date(), time);
                if updated == *instant {
                    return Signal::Ignored;
                }
                *instant = updated;
                Signal::Changed
            },
            _ => Signal::Ignored,
        }
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.value.is_selected(date)
    }

    /// Range mode only: inside the committed range, or inside the
    /// anchor-to-pointer preview while a range is in progress.
    pub fn is_in_range(&self, date: NaiveDate) -> bool {
        if self.mode != SelectionMode::Range {
            return false;
        }
        let committed = matches!(&self.value, SelectionValue::DateRange(range) if range.contains(date));
        committed
            || self
                .pending
                .and_then(|progress| progress.preview())
                .is_some_and(|preview| preview.contains(date))
    }
}
