//! Budgeted weighted interval scheduling.
//!
//! Candidates are processed in end-date order.  `best(i, p)` is the largest
//! adjusted value reachable with the first `i` candidates and at most `p` PTO:
//!
//! ```text
//! best(i, p) = max( best(i-1, p),
//!                   weight(c_i) + best(pred(i)+1, p - pto(c_i))   if p >= pto(c_i) )
//! ```
//!
//! `weight` is the break length for breaks of at least the minimum desired
//! length and zero below it, so short breaks still cost PTO but never pull the
//! objective up.  The reported totals are always the actual lengths.

use tracing::trace;

use pto_core::DayCount;

use crate::indexer::IndexedCandidates;

/// Outcome of [`select`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Chosen candidate ids, in end-date order.
    pub chosen_ids: Vec<usize>,
    /// Optimal adjusted objective value.
    pub adjusted_value: DayCount,
    /// Sum of the chosen candidates' actual lengths.
    pub actual_total_days: DayCount,
    /// Sum of the chosen candidates' PTO costs.
    pub actual_pto_used: DayCount,
}

impl Selection {
    /// Return `true` if nothing was chosen.
    pub fn is_empty(&self) -> bool {
        self.chosen_ids.is_empty()
    }
}

/// One DP table entry: the best adjusted value and whether the candidate of
/// this row is part of the solution achieving it.
#[derive(Debug, Clone, Copy, Default)]
struct DpCell {
    value: DayCount,
    take: bool,
}

/// Row-major `(n + 1) × (budget + 1)` table.
struct DpTable {
    width: usize,
    cells: Vec<DpCell>,
}

impl DpTable {
    fn new(rows: usize, width: usize) -> Self {
        Self {
            width,
            cells: vec![DpCell::default(); rows * width],
        }
    }

    fn get(&self, row: usize, p: usize) -> DpCell {
        self.cells[row * self.width + p]
    }

    fn set(&mut self, row: usize, p: usize, cell: DpCell) {
        self.cells[row * self.width + p] = cell;
    }
}

/// Choose the non-overlapping candidates maximising the adjusted total
/// within `budget` PTO.
///
/// A negative budget behaves like zero: only zero-cost candidates remain
/// affordable.  When including and excluding a candidate tie, it is excluded,
/// and among equally good budgets the smallest is used.
pub fn select(
    candidates: &IndexedCandidates,
    budget: i32,
    min_desired_length: DayCount,
) -> Selection {
    let n = candidates.len();
    if n == 0 {
        return Selection::default();
    }
    let budget = budget.max(0) as usize;
    let mut table = DpTable::new(n + 1, budget + 1);

    for (idx, c) in candidates.iter().enumerate() {
        let row = idx + 1;
        let cost = c.pto_used as usize;
        let weight = c.weight(min_desired_length);
        let resume_row = c.predecessor.map_or(0, |j| j + 1);

        for p in 0..=budget {
            let exclude = table.get(row - 1, p).value;
            let cell = if p >= cost {
                let include = weight + table.get(resume_row, p - cost).value;
                if include > exclude {
                    DpCell {
                        value: include,
                        take: true,
                    }
                } else {
                    DpCell {
                        value: exclude,
                        take: false,
                    }
                }
            } else {
                DpCell {
                    value: exclude,
                    take: false,
                }
            };
            table.set(row, p, cell);
        }
    }

    // smallest budget reaching the maximum
    let mut best_p = 0;
    for p in 1..=budget {
        if table.get(n, p).value > table.get(n, best_p).value {
            best_p = p;
        }
    }
    let adjusted_value = table.get(n, best_p).value;

    let mut chosen_ids = Vec::new();
    let (mut actual_total_days, mut actual_pto_used) = (0, 0);
    let (mut row, mut p) = (n, best_p);
    while row > 0 {
        if table.get(row, p).take {
            let c = &candidates.as_slice()[row - 1];
            chosen_ids.push(c.id);
            actual_total_days += c.total_days;
            actual_pto_used += c.pto_used;
            p -= c.pto_used as usize;
            row = c.predecessor.map_or(0, |j| j + 1);
        } else {
            row -= 1;
        }
    }
    chosen_ids.reverse();

    trace!(
        candidates = n,
        budget,
        best_p,
        adjusted_value,
        chosen = chosen_ids.len(),
        "dp selection finished"
    );

    Selection {
        chosen_ids,
        adjusted_value,
        actual_total_days,
        actual_pto_used,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::VacationCandidate;
    use pto_time::Date;

    fn day(n: i32) -> Date {
        Date::from_ymd(2025, 1, 1).unwrap() + n
    }

    fn cand(id: usize, start: i32, end: i32, pto: u32) -> VacationCandidate {
        VacationCandidate::new(id, day(start), day(end), pto)
    }

    #[test]
    fn empty_candidates_give_empty_selection() {
        let sel = select(&IndexedCandidates::default(), 10, 4);
        assert_eq!(sel, Selection::default());
    }

    #[test]
    fn two_disjoint_long_breaks_are_both_taken() {
        let idx = IndexedCandidates::new(vec![
            cand(0, 0, 7, 3),
            cand(1, 20, 27, 4),
            cand(2, 5, 12, 5),
        ]);
        let sel = select(&idx, 7, 4);
        assert_eq!(sel.chosen_ids, vec![0, 1]);
        assert_eq!(sel.actual_total_days, 16);
        assert_eq!(sel.actual_pto_used, 7);
    }

    #[test]
    fn long_break_beats_shorter_ones() {
        // Two 3-day breaks (6 days total) against one 5-day break.
        let idx = IndexedCandidates::new(vec![
            cand(0, 0, 2, 1),
            cand(1, 10, 12, 1),
            cand(2, 20, 24, 2),
        ]);
        let sel = select(&idx, 2, 4);
        assert_eq!(sel.chosen_ids, vec![2]);
        assert_eq!(sel.actual_total_days, 5);
    }

    #[test]
    fn budget_is_respected() {
        let idx = IndexedCandidates::new(vec![cand(0, 0, 9, 5), cand(1, 12, 16, 3)]);
        let sel = select(&idx, 4, 4);
        assert_eq!(sel.chosen_ids, vec![1]);
        assert!(sel.actual_pto_used <= 4);
    }

    #[test]
    fn zero_budget_keeps_free_breaks_only() {
        let idx = IndexedCandidates::new(vec![cand(0, 0, 4, 0), cand(1, 10, 20, 3)]);
        for budget in [0, -3] {
            let sel = select(&idx, budget, 4);
            assert_eq!(sel.chosen_ids, vec![0]);
            assert_eq!(sel.actual_pto_used, 0);
        }
    }

    #[test]
    fn equal_value_prefers_cheaper_budget() {
        // Same length, different cost: the cheaper one is reached first.
        let idx = IndexedCandidates::new(vec![cand(0, 0, 5, 4), cand(1, 1, 6, 2)]);
        let sel = select(&idx, 6, 4);
        assert_eq!(sel.chosen_ids, vec![1]);
        assert_eq!(sel.actual_pto_used, 2);
    }
}
