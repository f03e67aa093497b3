//! English header and label text.

use crate::grid::{end_of_week, start_of_week};
use crate::locale::{DayFormat, LocaleConfig, MonthFormat, WeekdayFormat};
use crate::prelude::*;
use crate::types::{CalendarView, WeekdayIndex};
use chrono::NaiveDate;

const WEEKDAY_NAMES: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Shortens a long name to its first `len` characters.
fn abbreviate(name: &str, len: usize) -> &str {
    name.char_indices().nth(len).map_or(name, |(idx, _)| &name[..idx])
}

pub fn weekday_label(weekday: WeekdayIndex, format: WeekdayFormat) -> &'static str {
    let name = WEEKDAY_NAMES[usize::from(weekday.get())];
    match format {
        WeekdayFormat::Narrow => abbreviate(name, 1),
        WeekdayFormat::Short => abbreviate(name, 3),
        WeekdayFormat::Long => name,
    }
}

/// Label for month number `month` (`1..=12`). Out-of-range months yield an empty label.
pub fn month_label(month: u32, format: MonthFormat) -> String {
    let Some(name) = month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(usize::try_from(idx).ok()?))
    else {
        return String::new();
    };
    match format {
        MonthFormat::Numeric => month.to_string(),
        MonthFormat::TwoDigit => format!("{month:02}"),
        MonthFormat::Narrow => abbreviate(name, 1).to_owned(),
        MonthFormat::Short => abbreviate(name, 3).to_owned(),
        MonthFormat::Long => (*name).to_owned(),
    }
}

pub fn day_label(date: NaiveDate, format: DayFormat) -> String {
    match format {
        DayFormat::Numeric => date.day().to_string(),
        DayFormat::TwoDigit => format!("{:02}", date.day()),
    }
}

/// Column headers for a month or week grid, in the locale's weekday format.
pub fn weekday_header_labels(locale: &LocaleConfig) -> Vec<&'static str> {
    crate::grid::weekday_headers(locale)
        .iter()
        .map(|&weekday| weekday_label(weekday, locale.format_options.weekday))
        .collect()
}

/// Header title for the period `view` shows around `reference`.
///
/// - month: `May 2024`
/// - week: `Apr 28 - May 4, 2024`, or `May 5 - 11, 2024` inside one month
/// - day: `Tuesday, May 14, 2024`
pub fn view_title(reference: NaiveDate, view: CalendarView, locale: &LocaleConfig) -> String {
    match view {
        CalendarView::Month => reference.format("%B %Y").to_string(),
        CalendarView::Week => {
            let start = start_of_week(reference, locale.week_starts_on);
            let end = end_of_week(reference, locale.week_starts_on);
            if (start.year(), start.month()) == (end.year(), end.month()) {
                format!("{} - {}", start.format("%b %-d"), end.format("%-d, %Y"))
            } else {
                format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
            }
        },
        CalendarView::Day => reference.format("%A, %B %-d, %Y").to_string(),
    }
}
