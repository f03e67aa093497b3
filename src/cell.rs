use crate::constraints::ConstraintSet;
use crate::consts::DEFAULT_VISIBLE_EVENTS;
use crate::events::{CalendarEvent, events_on, events_touching};
use crate::prelude::*;
use crate::selection::Selection;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How events are matched against day cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventMatching {
    /// Instant comparison against the cell's midnight.
    #[default]
    Midnight,
    /// Calendar-day overlap.
    CalendarDay,
}

/// Everything a host supplies to decorate one render of the grid.
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a> {
    /// Day the grid was generated from; days in other months are "out of month".
    pub reference:   NaiveDate,
    pub today:       NaiveDate,
    pub constraints: &'a ConstraintSet,
    pub events:      &'a [CalendarEvent],
    pub selection:   &'a Selection,
    pub matching:    EventMatching,
}

/// Render state of one grid day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell<'a> {
    pub date:            NaiveDate,
    pub is_today:        bool,
    pub is_selected:     bool,
    pub is_in_range:     bool,
    pub is_disabled:     bool,
    pub is_out_of_month: bool,
    pub events:          Vec<&'a CalendarEvent>,
}

impl<'a> DayCell<'a> {
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// First `limit` events, the ones a cell has room to list.
    pub fn visible_events(&self, limit: usize) -> &[&'a CalendarEvent] {
        &self.events[..self.events.len().min(limit)]
    }

    /// Events beyond `limit`, shown as "+N more".
    pub fn hidden_event_count(&self, limit: usize) -> usize {
        self.events.len().saturating_sub(limit)
    }

    pub fn default_visible_events(&self) -> &[&'a CalendarEvent] {
        self.visible_events(DEFAULT_VISIBLE_EVENTS)
    }

    /// Out-of-month days render only when the host shows other months.
    pub const fn is_rendered(&self, show_other_months: bool) -> bool {
        show_other_months || !self.is_out_of_month
    }

    /// Disabled cells reject activation.
    pub const fn is_clickable(&self) -> bool {
        !self.is_disabled
    }
}

pub fn decorate_day<'a>(date: NaiveDate, context: &CellContext<'a>) -> DayCell<'a> {
    let events = match context.matching {
        EventMatching::Midnight => events_on(date, context.events),
        EventMatching::CalendarDay => events_touching(date, context.events),
    };

    DayCell {
        date,
        is_today: date == context.today,
        is_selected: context.selection.is_selected(date),
        is_in_range: context.selection.is_in_range(date),
        is_disabled: context.constraints.is_disabled(date),
        is_out_of_month: (date.year(), date.month()) != (context.reference.year(), context.reference.month()),
        events,
    }
}

/// Decorates every day of a grid, keeping grid order.
pub fn decorate<'a>(days: &[NaiveDate], context: &CellContext<'a>) -> Vec<DayCell<'a>> {
    days.iter().map(|&date| decorate_day(date, context)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::grid;
    use crate::locale::LocaleConfig;
    use crate::types::{CalendarView, SelectionMode};
    use crate::test_utils::{at, date};

    fn events() -> Vec<CalendarEvent> {
        (0..5)
            .map(|i| CalendarEvent::new(format!("e{i}"), format!("Event {i}"), at(2024, 5, 14, 0, 0)))
            .chain([CalendarEvent::new("noon", "Noon", at(2024, 5, 15, 12, 0)).colored("#00f", "#fff")])
            .collect()
    }

    #[test]
    fn test_decorate_month_grid() {
        let constraints = ConstraintSet::default().with_weekends_disabled(true);
        let events = events();
        let mut selection = Selection::new(SelectionMode::Range);
        let _ = selection.click(date(2024, 5, 13), &constraints);
        let _ = selection.click(date(2024, 5, 16), &constraints);

        let context = CellContext {
            reference:   date(2024, 5, 1),
            today:       date(2024, 5, 20),
            constraints: &constraints,
            events:      &events,
            selection:   &selection,
            matching:    EventMatching::Midnight,
        };
        let days = grid(context.reference, CalendarView::Month, &LocaleConfig::default());
        let cells = decorate(&days, &context);

        assert_eq!(cells.len(), days.len());
        assert_eq!(cells.iter().map(|c| c.date).collect::<Vec<_>>(), days);

        let by_date = |d: NaiveDate| cells.iter().find(|c| c.date == d).unwrap();

        // 2024-04-28 is a Sunday in April
        let first = by_date(date(2024, 4, 28));
        assert!(first.is_out_of_month);
        assert!(first.is_disabled);
        assert!(!first.is_clickable());
        assert!(!first.is_rendered(false));
        assert!(first.is_rendered(true));

        assert!(by_date(date(2024, 5, 20)).is_today);
        assert_eq!(cells.iter().filter(|c| c.is_today).count(), 1);

        let in_range: Vec<NaiveDate> = cells.iter().filter(|c| c.is_in_range).map(|c| c.date).collect();
        assert_eq!(in_range, vec![date(2024, 5, 13), date(2024, 5, 14), date(2024, 5, 15), date(2024, 5, 16)]);
        assert!(by_date(date(2024, 5, 14)).is_selected);

        let busy = by_date(date(2024, 5, 14));
        assert!(busy.has_events());
        assert_eq!(busy.default_visible_events().len(), 3);
        assert_eq!(busy.hidden_event_count(DEFAULT_VISIBLE_EVENTS), 2);
        assert_eq!(busy.hidden_event_count(10), 0);
        assert_eq!(busy.visible_events(10).len(), 5);

        // The noon event misses its own day under midnight matching
        assert!(!by_date(date(2024, 5, 15)).events.iter().any(|e| e.id == "noon"));
    }

    #[test]
    fn test_calendar_day_matching() {
        let constraints = ConstraintSet::default();
        let events = events();
        let selection = Selection::new(SelectionMode::Single);
        let context = CellContext {
            reference:   date(2024, 5, 1),
            today:       date(2024, 5, 1),
            constraints: &constraints,
            events:      &events,
            selection:   &selection,
            matching:    EventMatching::CalendarDay,
        };

        let cell = decorate_day(date(2024, 5, 15), &context);
        let noon: Vec<&str> = cell.events.iter().filter(|e| e.id == "noon").map(|e| e.title.as_str()).collect();
        assert_eq!(noon, vec!["Noon"]);
        assert_eq!(cell.events.len(), 6);
        assert!(!cell.is_in_range);
        assert!(!cell.is_selected);
    }

    #[test]
    fn test_hover_preview_marks_cells() {
        let constraints = ConstraintSet::default();
        let mut selection = Selection::new(SelectionMode::Range);
        let _ = selection.click(date(2024, 5, 10), &constraints);
        let _ = selection.hover(date(2024, 5, 8));

        let context = CellContext {
            reference:   date(2024, 5, 1),
            today:       date(2024, 5, 1),
            constraints: &constraints,
            events:      &[],
            selection:   &selection,
            matching:    EventMatching::default(),
        };
        let locale = LocaleConfig::default();
        let mut days = grid(date(2024, 5, 1), CalendarView::Week, &locale);
        days.extend(grid(date(2024, 5, 8), CalendarView::Week, &locale));
        let previewed: Vec<NaiveDate> = decorate(&days, &context)
            .into_iter()
            .filter(|c| c.is_in_range)
            .map(|c| c.date)
            .collect();
        assert_eq!(previewed, vec![date(2024, 5, 8), date(2024, 5, 9), date(2024, 5, 10)]);

        // Only the anchor counts as selected mid-range
        assert!(decorate_day(date(2024, 5, 10), &context).is_selected);
        assert!(!decorate_day(date(2024, 5, 9), &context).is_selected);
    }
}
