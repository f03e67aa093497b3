/// Days in a week, and the row width of every month/week grid
pub const DAYS_IN_WEEK: u8 = 7;

/// Largest month grid: six full weeks
pub const MAX_GRID_DAYS: usize = 42;

/// Weekday index for Sunday (indices count from Sunday = 0)
pub const SUNDAY: u8 = 0;
/// Weekday index for Saturday
pub const SATURDAY: u8 = 6;
/// Highest valid weekday index
pub const MAX_WEEKDAY: u8 = 6;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// First day of month
pub const MIN_DAY: u32 = 1;

/// Years offered on either side of the reference year by the year selector
pub const YEAR_SELECTOR_SPAN: i32 = 50;

/// Events shown inside a day cell before collapsing into "+N more"
pub const DEFAULT_VISIBLE_EVENTS: usize = 3;

/// Minutes in an hour, the upper bound for a minute step
pub const MINUTES_PER_HOUR: u32 = 60;
/// Hours shown by a 12-hour clock
pub const HOURS_12H: u32 = 12;
/// Hours shown by a 24-hour clock
pub const HOURS_24H: u32 = 24;

/// Locale tag used when none is configured
pub const DEFAULT_LOCALE_TAG: &str = "en-US";
