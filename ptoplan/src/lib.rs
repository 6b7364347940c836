//! # ptoplan
//!
//! Plan paid time off around public holidays and weekends.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `pto-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use ptoplan::optimizer::optimize;
//! use ptoplan::time::{Date, Holiday};
//!
//! let holidays = vec![
//!     Holiday::public(Date::from_ymd(2025, 11, 27).unwrap(), "Thanksgiving Day"),
//! ];
//! let plan = optimize(2025, &holidays, 1).unwrap();
//! assert_eq!(plan.total_days_off, 4);
//! assert_eq!(plan.total_pto_used, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use pto_core as core;

/// Date, weekday, holiday, and year-calendar types.
pub use pto_time as time;

/// Candidate generation and optimal selection.
pub use pto_optimizer as optimizer;
