//! Planner configuration.

use pto_core::{ensure, errors::Result, DayCount};

/// Breaks shorter than this many days get zero weight in the optimizer.
pub const MIN_DESIRED_LENGTH: DayCount = 4;

/// Upper bound on PTO a single generated candidate may consume.
pub const DEFAULT_PTO_PER_CANDIDATE: DayCount = 10;

/// Per-candidate cap used when the budget is zero or negative.
pub const FALLBACK_PTO_PER_CANDIDATE: DayCount = 5;

/// Largest budget accepted by [`Planner`](crate::Planner): a whole leap year.
pub const DEFAULT_MAX_BUDGET: DayCount = 366;

/// Largest candidate count accepted by [`Planner`](crate::Planner).
pub const DEFAULT_MAX_CANDIDATES: usize = 20_000;

/// Tunables for a planning run.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use pto_optimizer::PlannerConfig;
///
/// let config = PlannerConfig::new()
///     .with_min_desired_length(5)
///     .with_max_pto_per_candidate(Some(8));
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.pto_per_candidate(20), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PlannerConfig {
    /// Minimum break length (days) that counts toward the objective.
    min_desired_length: DayCount,
    /// Fixed per-candidate PTO cap; `None` derives it from the budget.
    max_pto_per_candidate: Option<DayCount>,
    /// Defensive bound on the requested budget.
    max_budget: DayCount,
    /// Defensive bound on the number of generated candidates.
    max_candidates: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_desired_length: MIN_DESIRED_LENGTH,
            max_pto_per_candidate: None,
            max_budget: DEFAULT_MAX_BUDGET,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

impl PlannerConfig {
    /// Creates a configuration with the defaults.
    ///
    /// Defaults: minimum length 4, budget-derived per-candidate cap,
    /// `max_budget = 366`, `max_candidates = 20_000`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum desired break length.
    pub fn with_min_desired_length(mut self, days: DayCount) -> Self {
        self.min_desired_length = days;
        self
    }

    /// Fixes the per-candidate PTO cap (`None` restores the budget-derived cap).
    pub fn with_max_pto_per_candidate(mut self, cap: Option<DayCount>) -> Self {
        self.max_pto_per_candidate = cap;
        self
    }

    /// Sets the largest accepted budget.
    pub fn with_max_budget(mut self, max_budget: DayCount) -> Self {
        self.max_budget = max_budget;
        self
    }

    /// Sets the largest accepted candidate count.
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// Minimum break length that counts toward the objective.
    pub fn min_desired_length(&self) -> DayCount {
        self.min_desired_length
    }

    /// The explicitly configured per-candidate cap, if any.
    pub fn max_pto_per_candidate(&self) -> Option<DayCount> {
        self.max_pto_per_candidate
    }

    /// Largest accepted budget.
    pub fn max_budget(&self) -> DayCount {
        self.max_budget
    }

    /// Largest accepted candidate count.
    pub fn max_candidates(&self) -> usize {
        self.max_candidates
    }

    /// Per-candidate PTO cap for a run with the given total budget.
    ///
    /// Without an explicit cap this is `min(10, budget)`, or 5 when the
    /// budget is zero or negative.
    pub fn pto_per_candidate(&self, budget: i32) -> DayCount {
        self.max_pto_per_candidate.unwrap_or_else(|| {
            if budget > 0 {
                DEFAULT_PTO_PER_CANDIDATE.min(budget as DayCount)
            } else {
                FALLBACK_PTO_PER_CANDIDATE
            }
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns `Error::Precondition` if the minimum length or the candidate
    /// bound is zero.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.min_desired_length >= 1,
            "min_desired_length must be >= 1, got {}",
            self.min_desired_length
        );
        ensure!(
            self.max_candidates >= 1,
            "max_candidates must be >= 1, got {}",
            self.max_candidates
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = PlannerConfig::default();
        assert_eq!(c.min_desired_length(), 4);
        assert_eq!(c.max_pto_per_candidate(), None);
        assert_eq!(c.max_budget(), 366);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn derived_cap_follows_budget() {
        let c = PlannerConfig::new();
        assert_eq!(c.pto_per_candidate(3), 3);
        assert_eq!(c.pto_per_candidate(25), 10);
        assert_eq!(c.pto_per_candidate(0), 5);
        assert_eq!(c.pto_per_candidate(-2), 5);
    }

    #[test]
    fn explicit_cap_wins() {
        let c = PlannerConfig::new().with_max_pto_per_candidate(Some(2));
        assert_eq!(c.pto_per_candidate(25), 2);
        assert_eq!(c.pto_per_candidate(0), 2);
    }

    #[test]
    fn zero_min_length_is_invalid() {
        let c = PlannerConfig::new().with_min_desired_length(0);
        assert!(c.validate().is_err());
        let c = PlannerConfig::new().with_max_candidates(0);
        assert!(c.validate().is_err());
    }
}
