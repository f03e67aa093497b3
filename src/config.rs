use crate::cell::EventMatching;
use crate::constraints::ConstraintSet;
use crate::locale::LocaleConfig;
use crate::selection::Selection;
use crate::time::{TimePickerConfig, validate_minute_step};
use crate::types::{CalendarView, ConfigError, SelectionMode};
use serde::{Deserialize, Serialize};

/// Host-facing picker settings, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarConfig {
    pub view:              CalendarView,
    pub selection_mode:    SelectionMode,
    pub locale:            LocaleConfig,
    pub constraints:       ConstraintSet,
    /// `None` hides the time picker.
    pub time_picker:       Option<TimePickerConfig>,
    pub event_matching:    EventMatching,
    pub show_other_months: bool,
    pub show_week_numbers: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            view:              CalendarView::Month,
            selection_mode:    SelectionMode::Single,
            locale:            LocaleConfig::default(),
            constraints:       ConstraintSet::default(),
            time_picker:       None,
            event_matching:    EventMatching::Midnight,
            show_other_months: true,
            show_week_numbers: false,
        }
    }
}

impl CalendarConfig {
    /// # Errors
    /// Returns the first `ConfigError` found in the constraints or the
    /// time picker settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.constraints.validate()?;
        if let Some(picker) = &self.time_picker {
            validate_minute_step(picker.minute_step).inspect_err(|err| {
                tracing::debug!(%err, "time picker config rejected");
            })?;
        }
        Ok(())
    }

    /// Empty selection for the configured mode.
    pub fn selection(&self) -> Selection {
        Selection::new(self.selection_mode).with_time_picker(self.time_picker.is_some())
    }
}
