//! Visible day grids and week arithmetic.
//!
//! Every week-boundary and weekday-index computation in the crate goes through
//! this module, so the selection machine and event matcher never do their own
//! date arithmetic.

use crate::consts::{DAYS_IN_WEEK, DECEMBER, MIN_DAY};
use crate::locale::LocaleConfig;
use crate::prelude::*;
use crate::types::{CalendarView, WeekdayIndex};
use chrono::{Duration, NaiveDate};

/// Shifts a day by `days`, saturating at the edges of the representable range.
pub(crate) fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

/// First day of the week containing `date`.
pub fn start_of_week(date: NaiveDate, week_starts_on: WeekdayIndex) -> NaiveDate {
    let offset = WeekdayIndex::of(date).offset_from(week_starts_on);
    shift_days(date, -i64::from(offset))
}

/// Last day of the week containing `date`.
pub fn end_of_week(date: NaiveDate, week_starts_on: WeekdayIndex) -> NaiveDate {
    shift_days(start_of_week(date, week_starts_on), i64::from(DAYS_IN_WEEK) - 1)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(MIN_DAY).unwrap_or(date)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let last = if date.month() == DECEMBER {
        date.with_day(31)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, MIN_DAY).and_then(|d| d.pred_opt())
    };
    last.unwrap_or(date)
}

/// Every day in the closed interval `[start, end]`, ascending.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Days to display for `view` around `reference`.
///
/// Month and week grids are padded to whole weeks aligned on
/// `locale.week_starts_on`, so their length is always a multiple of 7.
/// The day view is the reference day alone.
pub fn grid(reference: NaiveDate, view: CalendarView, locale: &LocaleConfig) -> Vec<NaiveDate> {
    let week_start = locale.week_starts_on;
    match view {
        CalendarView::Month => days_between(
            start_of_week(first_of_month(reference), week_start),
            end_of_week(last_of_month(reference), week_start),
        ),
        CalendarView::Week => days_between(
            start_of_week(reference, week_start),
            end_of_week(reference, week_start),
        ),
        CalendarView::Day => vec![reference],
    }
}

/// Splits a grid into rows of one week each.
pub fn weeks(days: &[NaiveDate]) -> std::slice::Chunks<'_, NaiveDate> {
    days.chunks(usize::from(DAYS_IN_WEEK))
}

/// Weekdays in column order for the configured week start.
pub fn weekday_headers(locale: &LocaleConfig) -> [WeekdayIndex; 7] {
    let start = locale.week_starts_on.to_weekday();
    let mut headers = [locale.week_starts_on; 7];
    let mut weekday = start;
    for header in &mut headers {
        *header = WeekdayIndex::from(weekday);
        weekday = weekday.succ();
    }
    headers
}

/// Week of the year for `date`.
///
/// Week 1 is the week containing 1 January; weeks begin on
/// `locale.week_starts_on`. The last days of December belong to week 1 of
/// the following year when that week contains the new year's first day.
pub fn week_number(date: NaiveDate, locale: &LocaleConfig) -> u32 {
    let week_start = locale.week_starts_on;
    let this_week = start_of_week(date, week_start);

    let next_year_first_week = NaiveDate::from_ymd_opt(date.year() + 1, 1, MIN_DAY)
        .map(|d| start_of_week(d, week_start));
    if next_year_first_week.is_some_and(|first| this_week >= first) {
        return 1;
    }

    let first_week = NaiveDate::from_ymd_opt(date.year(), 1, MIN_DAY)
        .map_or(this_week, |d| start_of_week(d, week_start));
    let weeks_elapsed = (this_week - first_week).num_days() / i64::from(DAYS_IN_WEEK);
    u32::try_from(weeks_elapsed + 1).unwrap_or(1)
}
