//! Date-selection engine for calendar pickers.
//!
//! The crate computes what a calendar shows and how clicks change what is
//! selected; rendering stays with the host. A typical interaction:
//!
//! 1. [`step`] moves the reference date when the user navigates.
//! 2. [`grid`] lists the days to display for the current [`CalendarView`].
//! 3. [`decorate`] marks each day as disabled, selected, in range, today or
//!    out of month, and attaches the [`CalendarEvent`]s that cover it.
//! 4. [`Selection::click`] feeds a day click into the selection state machine
//!    and reports a [`Signal`].
//!
//! All dates are naive local calendar dates.

mod cell;
mod config;
mod constraints;
mod consts;
mod events;
mod format;
mod grid;
mod locale;
mod navigate;
mod prelude;
mod selection;
mod time;
mod types;

pub use cell::{CellContext, DayCell, EventMatching, decorate, decorate_day};
pub use config::CalendarConfig;
pub use constraints::{ConstraintSet, DisabledReason};
pub use consts::*;
pub use events::{CalendarEvent, events_at, events_on, events_touching};
pub use format::{day_label, month_label, view_title, weekday_header_labels, weekday_label};
pub use grid::{
    days_between, end_of_week, first_of_month, grid, last_of_month, start_of_week, week_number, weekday_headers,
    weeks,
};
pub use locale::{DayFormat, FormatOptions, LocaleConfig, MonthFormat, WeekdayFormat};
pub use navigate::{period_start, selectable_months, selectable_years, step, with_month, with_year};
pub use selection::{DateRange, RangeInProgress, Selection, SelectionError, SelectionValue, Signal};
pub use time::{
    Meridiem, TimeFormat, TimePickerConfig, at_time, combine, hour_options, minute_options, time_label, to_12h,
    to_24h, validate_minute_step, with_hour_minute,
};
pub use types::{CalendarView, ConfigError, Direction, SelectionMode, WeekdayIndex, day_of, same_day, start_of_day};
