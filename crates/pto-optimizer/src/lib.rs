//! # pto-optimizer
//!
//! Chooses where to spend a yearly PTO budget so that, together with
//! weekends and public holidays, it buys the most contiguous time off.
//!
//! The pipeline is:
//!
//! 1. [`YearCalendar`](pto_time::YearCalendar) classifies every day of the
//!    year as holiday, weekend or workday.
//! 2. [`generator`] grows a run from every day and emits every affordable
//!    prefix as a [`VacationCandidate`].
//! 3. [`IndexedCandidates`] deduplicates, orders by end date and links each
//!    candidate to its latest non-overlapping predecessor.
//! 4. [`select`] runs the budgeted weighted-interval DP, giving zero weight to
//!    breaks shorter than the minimum desired length.
//! 5. [`assemble`] returns the chosen breaks chronologically with their actual
//!    totals.
//!
//! [`Planner`] wires the steps together.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Result assembly.
pub mod assembler;

/// `VacationCandidate`.
pub mod candidate;

/// Planner configuration and defaults.
pub mod config;

/// Candidate generation.
pub mod generator;

/// Deduplication and predecessor indexing.
pub mod indexer;

/// End-to-end planner with defensive bounds.
pub mod planner;

/// Budgeted weighted-interval DP.
pub mod selector;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use assembler::{assemble, VacationPlan};
pub use candidate::VacationCandidate;
pub use config::{PlannerConfig, MIN_DESIRED_LENGTH};
pub use generator::{generate, generate_from_calendar, generate_with_stats, GenerationStats};
pub use indexer::{dedup_candidates, IndexedCandidates};
pub use planner::{optimize, Planner};
pub use selector::{select, Selection};
