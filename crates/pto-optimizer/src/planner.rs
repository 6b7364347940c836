//! `Planner` — the end-to-end entry point.
//!
//! Runs classifier → generator → indexer → selector → assembler for one
//! request, with defensive bounds on the budget and the candidate count so
//! the DP table of a single request stays small.

use tracing::debug;

use pto_core::errors::{Error, Result};
use pto_time::{Holiday, YearCalendar};

use crate::assembler::{assemble, VacationPlan};
use crate::config::PlannerConfig;
use crate::generator::generate_with_stats;
use crate::indexer::IndexedCandidates;
use crate::selector::select;

/// Plans PTO for a year under a [`PlannerConfig`].
///
/// A planner holds no per-request state; one instance can serve any number
/// of requests, from any thread.
///
/// # Example
///
/// ```
/// use pto_optimizer::Planner;
/// use pto_time::{Date, Holiday};
///
/// let holidays = vec![Holiday::public(Date::from_ymd(2025, 12, 25).unwrap(), "Christmas Day")];
/// let plan = Planner::default().plan(2025, &holidays, 5).unwrap();
///
/// assert!(plan.total_pto_used <= 5);
/// assert!(plan.total_days_off >= 9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Create a planner after validating `config`.
    ///
    /// # Errors
    /// Returns the validation error of [`PlannerConfig::validate`].
    pub fn new(config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Compute the optimal plan for `year` with `budget` PTO days.
    ///
    /// Non-public holidays and holidays dated outside `year` are ignored.  A
    /// zero or negative budget yields a plan of zero-cost breaks only.
    ///
    /// # Errors
    /// * `Error::Date` if `year` is outside the supported range.
    /// * `Error::LimitExceeded` if `budget` or the candidate count exceeds
    ///   the configured bounds.
    #[tracing::instrument(skip(self, holidays), fields(holidays = holidays.len()))]
    pub fn plan(&self, year: u16, holidays: &[Holiday], budget: i32) -> Result<VacationPlan> {
        let candidates = self.candidates(year, holidays, budget)?;
        let min_len = self.config.min_desired_length();
        let selection = select(&candidates, budget, min_len);
        let plan = assemble(&candidates, &selection, min_len);
        debug!(
            chosen = plan.len(),
            total_days_off = plan.total_days_off,
            total_pto_used = plan.total_pto_used,
            has_short_breaks = plan.has_short_breaks,
            "plan assembled"
        );
        Ok(plan)
    }

    /// Generate and index the candidates `plan` would choose from.
    ///
    /// # Errors
    /// Same as [`Planner::plan`].
    pub fn candidates(
        &self,
        year: u16,
        holidays: &[Holiday],
        budget: i32,
    ) -> Result<IndexedCandidates> {
        let max_budget = self.config.max_budget();
        if budget > 0 && budget as u32 > max_budget {
            return Err(Error::LimitExceeded {
                what: "PTO budget",
                value: budget as usize,
                limit: max_budget as usize,
            });
        }

        let calendar = YearCalendar::new(year, holidays)?;
        debug!(
            year,
            public_holidays = calendar.holiday_count(),
            "classified planning year"
        );

        let cap = self.config.pto_per_candidate(budget);
        let (candidates, stats) = generate_with_stats(&calendar, cap);
        debug!(?stats, "candidate generation finished");
        if candidates.len() > self.config.max_candidates() {
            return Err(Error::LimitExceeded {
                what: "candidate count",
                value: candidates.len(),
                limit: self.config.max_candidates(),
            });
        }

        Ok(IndexedCandidates::new(candidates))
    }
}

/// Plan `year` with the default configuration.
///
/// # Errors
/// Same as [`Planner::plan`].
pub fn optimize(year: u16, holidays: &[Holiday], budget: i32) -> Result<VacationPlan> {
    Planner::default().plan(year, holidays, budget)
}
