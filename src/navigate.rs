use crate::constraints::ConstraintSet;
use crate::consts::{DAYS_IN_WEEK, DECEMBER, JANUARY, MIN_DAY, YEAR_SELECTOR_SPAN};
use crate::grid::{first_of_month, last_of_month, shift_days, start_of_week};
use crate::locale::LocaleConfig;
use crate::prelude::*;
use crate::types::{CalendarView, ConfigError, Direction};
use chrono::{Months, NaiveDate};

/// Moves `reference` one view unit in `direction`.
///
/// Months step by calendar month with the day clamped to the target month's
/// length (31 January + 1 month is the last day of February). Weeks step by 7
/// days and days by 1. Saturates at the edges of the representable range.
pub fn step(reference: NaiveDate, direction: Direction, view: CalendarView) -> NaiveDate {
    match (view, direction) {
        (CalendarView::Month, Direction::Next) => reference.checked_add_months(Months::new(1)).unwrap_or(reference),
        (CalendarView::Month, Direction::Previous) => {
            reference.checked_sub_months(Months::new(1)).unwrap_or(reference)
        },
        (CalendarView::Week, Direction::Next) => shift_days(reference, i64::from(DAYS_IN_WEEK)),
        (CalendarView::Week, Direction::Previous) => shift_days(reference, -i64::from(DAYS_IN_WEEK)),
        (CalendarView::Day, Direction::Next) => shift_days(reference, 1),
        (CalendarView::Day, Direction::Previous) => shift_days(reference, -1),
    }
}

/// First day of the period `view` shows around `reference`: the month's
/// first day, the week's first day, or the day itself.
pub fn period_start(reference: NaiveDate, view: CalendarView, locale: &LocaleConfig) -> NaiveDate {
    match view {
        CalendarView::Month => first_of_month(reference),
        CalendarView::Week => start_of_week(reference, locale.week_starts_on),
        CalendarView::Day => reference,
    }
}

/// Builds year/month/day, clamping the day to the month's length.
fn clamped(year: i32, month: u32, day: u32) -> Result<NaiveDate, ConfigError> {
    let first = NaiveDate::from_ymd_opt(year, month, MIN_DAY).ok_or(ConfigError::InvalidYear(year))?;
    let last = last_of_month(first);
    Ok(first.with_day(day.min(last.day())).unwrap_or(last))
}

/// Moves `date` to `year`, keeping month and day (29 February clamps to the 28th).
///
/// # Errors
/// Returns `ConfigError::InvalidYear` if the year is outside chrono's range.
pub fn with_year(date: NaiveDate, year: i32) -> Result<NaiveDate, ConfigError> {
    clamped(year, date.month(), date.day())
}

/// Moves `date` to `month` of the same year, clamping the day.
///
/// # Errors
/// Returns `ConfigError::InvalidMonth` if `month` is not in `1..=12`.
pub fn with_month(date: NaiveDate, month: u32) -> Result<NaiveDate, ConfigError> {
    if !(JANUARY..=DECEMBER).contains(&month) {
        return Err(ConfigError::InvalidMonth(month));
    }
    clamped(date.year(), month, date.day())
}

/// Years offered by a year selector: the reference year ± 50, limited to the
/// years `constraints` leave reachable.
pub fn selectable_years(reference: NaiveDate, constraints: &ConstraintSet) -> Vec<i32> {
    let year = reference.year();
    ((year - YEAR_SELECTOR_SPAN)..=(year + YEAR_SELECTOR_SPAN))
        .filter(|y| constraints.min_date.is_none_or(|min| *y >= min.year()))
        .filter(|y| constraints.max_date.is_none_or(|max| *y <= max.year()))
        .collect()
}

/// Months of `year` with at least one day inside `[min_date, max_date]`.
pub fn selectable_months(year: i32, constraints: &ConstraintSet) -> Vec<u32> {
    (JANUARY..=DECEMBER)
        .filter(|&month| {
            let Some(first) = NaiveDate::from_ymd_opt(year, month, MIN_DAY) else {
                return false;
            };
            let last = last_of_month(first);
            constraints.min_date.is_none_or(|min| last >= min) && constraints.max_date.is_none_or(|max| first <= max)
        })
        .collect()
}
