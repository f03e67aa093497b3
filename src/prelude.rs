//! Prelude module for calendar_select crate.
//!
//! Re-exports commonly used derive macros from derive_more and the chrono
//! accessor traits every component reaches for.

#[allow(unused_imports)]
pub use chrono::{Datelike, Timelike};
#[allow(unused_imports)]
pub use derive_more::{Display, From, Into};
