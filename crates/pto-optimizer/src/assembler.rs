//! Result assembly: from chosen ids to a chronological plan.

use pto_core::DayCount;
use pto_time::Date;

use crate::candidate::VacationCandidate;
use crate::indexer::IndexedCandidates;
use crate::selector::Selection;

/// The optimal set of breaks for one year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VacationPlan {
    /// Chosen breaks, sorted by start date, pairwise non-overlapping.
    pub vacations: Vec<VacationCandidate>,
    /// Sum of the breaks' actual lengths.
    pub total_days_off: DayCount,
    /// Sum of PTO booked.
    pub total_pto_used: DayCount,
    /// Whether any chosen break is shorter than `min_desired_length`.
    pub has_short_breaks: bool,
    /// The minimum desired length the plan was optimised with.
    pub min_desired_length: DayCount,
}

impl VacationPlan {
    /// Return `true` if no break was chosen.
    pub fn is_empty(&self) -> bool {
        self.vacations.is_empty()
    }

    /// Number of chosen breaks.
    pub fn len(&self) -> usize {
        self.vacations.len()
    }

    /// Month (1–12) of the earliest break, where a calendar view would open.
    pub fn first_month(&self) -> Option<u8> {
        self.vacations.first().map(|v| v.start.month())
    }

    /// Breaks shorter than the minimum desired length.
    pub fn short_breaks(&self) -> impl Iterator<Item = &VacationCandidate> + '_ {
        self.vacations
            .iter()
            .filter(move |v| v.is_short(self.min_desired_length))
    }

    /// Every day to book as PTO, in date order.
    pub fn pto_dates(&self) -> Vec<Date> {
        self.vacations.iter().flat_map(|v| v.pto_dates()).collect()
    }
}

/// Turn a [`Selection`] into a [`VacationPlan`].
///
/// Totals are recomputed from the candidates themselves, so they are the
/// actual lengths and costs regardless of the weights the selector used.
pub fn assemble(
    candidates: &IndexedCandidates,
    selection: &Selection,
    min_desired_length: DayCount,
) -> VacationPlan {
    let mut vacations: Vec<VacationCandidate> = selection
        .chosen_ids
        .iter()
        .filter_map(|&id| candidates.by_id(id))
        .cloned()
        .collect();
    vacations.sort_by_key(|v| (v.start, v.end));

    let total_days_off = vacations.iter().map(|v| v.total_days).sum();
    let total_pto_used = vacations.iter().map(|v| v.pto_used).sum();
    let has_short_breaks = vacations.iter().any(|v| v.is_short(min_desired_length));

    VacationPlan {
        vacations,
        total_days_off,
        total_pto_used,
        has_short_breaks,
        min_desired_length,
    }
}
