//! # pto-time
//!
//! Dates, weekdays, holidays and the per-year day classifier.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Holiday records supplied by an external source.
pub mod holiday;

/// `Weekday` — day of the week.
pub mod weekday;

/// Per-year day classification (`YearCalendar`, `DayKind`).
pub mod year_calendar;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{Date, DateRange};
pub use holiday::{Holiday, HolidayCategory};
pub use weekday::Weekday;
pub use year_calendar::{DayKind, YearCalendar};
