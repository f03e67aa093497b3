use crate::prelude::*;
use crate::types::{ConfigError, WeekdayIndex, day_of};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Rule that made a day ineligible, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DisabledReason {
    #[display(fmt = "before minimum date {_0}")]
    BeforeMin(NaiveDate),
    #[display(fmt = "after maximum date {_0}")]
    AfterMax(NaiveDate),
    #[display(fmt = "date is disabled")]
    DisabledDate,
    #[display(fmt = "weekday {_0} is disabled")]
    DisabledWeekday(WeekdayIndex),
    #[display(fmt = "weekends are disabled")]
    Weekend,
}

/// Declarative eligibility rules. Evaluated fresh for every day.
///
/// Every field defaults to "no restriction", so an empty set disables nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConstraintSet {
    pub min_date:              Option<NaiveDate>,
    pub max_date:              Option<NaiveDate>,
    pub disabled_dates:        BTreeSet<NaiveDate>,
    pub disabled_days_of_week: BTreeSet<WeekdayIndex>,
    pub disable_weekends:      bool,
}

impl ConstraintSet {
    #[must_use]
    pub fn with_min_date(mut self, min: NaiveDate) -> Self {
        self.min_date = Some(min);
        self
    }

    #[must_use]
    pub fn with_max_date(mut self, max: NaiveDate) -> Self {
        self.max_date = Some(max);
        self
    }

    #[must_use]
    pub fn with_disabled_date(mut self, date: NaiveDate) -> Self {
        self.disabled_dates.insert(date);
        self
    }

    /// Disables the calendar day of `instant`; its time of day is dropped.
    #[must_use]
    pub fn with_disabled_instant(self, instant: NaiveDateTime) -> Self {
        self.with_disabled_date(day_of(instant))
    }

    #[must_use]
    pub fn with_disabled_dates<I>(mut self, dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        self.disabled_dates.extend(dates);
        self
    }

    #[must_use]
    pub fn with_disabled_weekday(mut self, weekday: WeekdayIndex) -> Self {
        self.disabled_days_of_week.insert(weekday);
        self
    }

    #[must_use]
    pub fn with_weekends_disabled(mut self, disabled: bool) -> Self {
        self.disable_weekends = disabled;
        self
    }

    /// Checks that the bounds are ordered.
    ///
    /// # Errors
    /// Returns `ConfigError::InvertedBounds` if `min_date > max_date`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (self.min_date, self.max_date) {
            (Some(min), Some(max)) if min > max => {
                tracing::debug!(%min, %max, "constraint bounds are inverted");
                Err(ConfigError::InvertedBounds { min, max })
            },
            _ => Ok(()),
        }
    }

    /// First rule that disables `date`, checking bounds, explicit dates,
    /// weekdays and finally weekends.
    pub fn disabled_reason(&self, date: NaiveDate) -> Option<DisabledReason> {
        if let Some(min) = self.min_date.filter(|min| date < *min) {
            return Some(DisabledReason::BeforeMin(min));
        }
        if let Some(max) = self.max_date.filter(|max| date > *max) {
            return Some(DisabledReason::AfterMax(max));
        }
        if self.disabled_dates.contains(&date) {
            return Some(DisabledReason::DisabledDate);
        }

        let weekday = WeekdayIndex::of(date);
        if self.disabled_days_of_week.contains(&weekday) {
            return Some(DisabledReason::DisabledWeekday(weekday));
        }
        if self.disable_weekends && weekday.is_weekend() {
            return Some(DisabledReason::Weekend);
        }
        None
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.disabled_reason(date).is_some()
    }

    /// Same as [`Self::is_disabled`] for the calendar day of `instant`.
    pub fn is_disabled_at(&self, instant: NaiveDateTime) -> bool {
        self.is_disabled(day_of(instant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::days_between;
    use crate::test_utils::{at, date};

    #[test]
    fn test_empty_set_disables_nothing() {
        let set = ConstraintSet::default();
        for day in days_between(date(2024, 1, 1), date(2024, 12, 31)) {
            assert!(!set.is_disabled(day), "{day} should be enabled");
        }
    }

    #[test]
    fn test_bounds_are_strict() {
        let set = ConstraintSet::default()
            .with_min_date(date(2024, 5, 10))
            .with_max_date(date(2024, 5, 20));

        assert_eq!(set.disabled_reason(date(2024, 5, 9)), Some(DisabledReason::BeforeMin(date(2024, 5, 10))));
        assert!(!set.is_disabled(date(2024, 5, 10)));
        assert!(!set.is_disabled(date(2024, 5, 20)));
        assert_eq!(set.disabled_reason(date(2024, 5, 21)), Some(DisabledReason::AfterMax(date(2024, 5, 20))));
    }

    #[test]
    fn test_disabled_dates_ignore_time_of_day() {
        let set = ConstraintSet::default().with_disabled_instant(at(2024, 5, 14, 15, 30));

        assert!(set.is_disabled(date(2024, 5, 14)));
        assert!(set.is_disabled_at(at(2024, 5, 14, 0, 0)));
        assert!(set.is_disabled_at(at(2024, 5, 14, 23, 59)));
        assert!(!set.is_disabled(date(2024, 5, 15)));
    }

    #[test]
    fn test_reason_precedence() {
        struct TestCase {
            set:         ConstraintSet,
            day:         NaiveDate,
            expected:    Option<DisabledReason>,
            description: &'static str,
        }

        // 2024-05-04 is a Saturday
        let saturday = date(2024, 5, 4);
        let cases = [
            TestCase {
                set:         ConstraintSet::default()
                    .with_min_date(date(2024, 6, 1))
                    .with_disabled_date(saturday)
                    .with_weekends_disabled(true),
                day:         saturday,
                expected:    Some(DisabledReason::BeforeMin(date(2024, 6, 1))),
                description: "min bound wins over everything",
            },
            TestCase {
                set:         ConstraintSet::default()
                    .with_disabled_date(saturday)
                    .with_disabled_weekday(WeekdayIndex::SATURDAY),
                day:         saturday,
                expected:    Some(DisabledReason::DisabledDate),
                description: "explicit date wins over weekday",
            },
            TestCase {
                set:         ConstraintSet::default()
                    .with_disabled_weekday(WeekdayIndex::SATURDAY)
                    .with_weekends_disabled(true),
                day:         saturday,
                expected:    Some(DisabledReason::DisabledWeekday(WeekdayIndex::SATURDAY)),
                description: "weekday wins over weekend flag",
            },
            TestCase {
                set:         ConstraintSet::default().with_weekends_disabled(true),
                day:         saturday,
                expected:    Some(DisabledReason::Weekend),
                description: "weekend flag",
            },
            TestCase {
                set:         ConstraintSet::default().with_weekends_disabled(true),
                day:         date(2024, 5, 3),
                expected:    None,
                description: "friday is not a weekend",
            },
        ];

        for case in &cases {
            assert_eq!(case.set.disabled_reason(case.day), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_weekends_cover_saturday_and_sunday() {
        let set = ConstraintSet::default().with_weekends_disabled(true);
        let disabled: Vec<NaiveDate> = days_between(date(2024, 4, 28), date(2024, 5, 4))
            .into_iter()
            .filter(|d| set.is_disabled(*d))
            .collect();
        assert_eq!(disabled, vec![date(2024, 4, 28), date(2024, 5, 4)]);
    }

    #[test]
    fn test_adding_rules_is_monotonic() {
        let base = ConstraintSet::default()
            .with_min_date(date(2024, 1, 10))
            .with_max_date(date(2024, 12, 20))
            .with_disabled_date(date(2024, 7, 4));

        let tightened = [
            base.clone().with_disabled_date(date(2024, 3, 13)),
            base.clone().with_disabled_weekday(WeekdayIndex::MONDAY),
            base.clone().with_min_date(date(2024, 2, 1)),
            base.clone().with_max_date(date(2024, 11, 1)),
            base.clone().with_weekends_disabled(true),
        ];

        for day in days_between(date(2023, 12, 25), date(2025, 1, 5)) {
            if !base.is_disabled(day) {
                continue;
            }
            for set in &tightened {
                assert!(set.is_disabled(day), "{day} re-enabled by {set:?}");
            }
        }
    }

    #[test]
    fn test_validate() {
        assert!(ConstraintSet::default().validate().is_ok());

        let set = ConstraintSet::default()
            .with_min_date(date(2024, 5, 2))
            .with_max_date(date(2024, 5, 1));
        assert_eq!(
            set.validate(),
            Err(ConfigError::InvertedBounds {
                min: date(2024, 5, 2),
                max: date(2024, 5, 1),
            })
        );
    }

    #[test]
    fn test_serde() {
        let json = r#"{
            "minDate": "2024-05-01",
            "disabledDates": ["2024-05-14"],
            "disabledDaysOfWeek": [1, 3],
            "disableWeekends": true
        }"#;
        let set: ConstraintSet = serde_json::from_str(json).unwrap();

        assert_eq!(set.min_date, Some(date(2024, 5, 1)));
        assert_eq!(set.max_date, None);
        assert!(set.disabled_dates.contains(&date(2024, 5, 14)));
        assert!(set.disabled_days_of_week.contains(&WeekdayIndex::MONDAY));
        assert!(set.disable_weekends);

        let result: Result<ConstraintSet, _> = serde_json::from_str(r#"{"disabledDaysOfWeek": [7]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(DisabledReason::Weekend.to_string(), "weekends are disabled");
        assert_eq!(
            DisabledReason::BeforeMin(date(2024, 5, 1)).to_string(),
            "before minimum date 2024-05-01"
        );
    }
}
