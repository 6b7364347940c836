//! Interval indexing: deduplication, end-date ordering and predecessor links.
//!
//! The selector walks candidates in end-date order and, when it takes
//! candidate `i`, continues from the latest candidate that finishes strictly
//! before `i` starts.  This module prepares exactly that view.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::debug;

use pto_time::Date;

use crate::candidate::VacationCandidate;

/// Collapse candidates sharing the same `(start, end)` span.
///
/// The survivor is the one with the larger `total_days`, ties broken by
/// fewer `pto_used`; further ties keep the first seen.  The result is ordered
/// by `(start, end)`.
pub fn dedup_candidates(candidates: Vec<VacationCandidate>) -> Vec<VacationCandidate> {
    let mut unique: BTreeMap<(Date, Date), VacationCandidate> = BTreeMap::new();
    for c in candidates {
        let key = (c.start, c.end);
        let replace = match unique.get(&key) {
            Some(existing) => {
                c.total_days > existing.total_days
                    || (c.total_days == existing.total_days && c.pto_used < existing.pto_used)
            }
            None => true,
        };
        if replace {
            unique.insert(key, c);
        }
    }
    unique.into_values().collect()
}

/// Candidates sorted by end date with their predecessor links filled in.
#[derive(Debug, Clone, Default)]
pub struct IndexedCandidates {
    candidates: Vec<VacationCandidate>,
    positions: HashMap<usize, usize>,
}

impl IndexedCandidates {
    /// Deduplicate, sort by end date and link each candidate to its latest
    /// non-overlapping predecessor.
    ///
    /// Ids come out unique: a repeated id is replaced by the next id above
    /// the largest one supplied, in `(start, end)` order.  Equal end dates are ordered by
    /// start date, then id, so the layout is deterministic.
    pub fn new(candidates: Vec<VacationCandidate>) -> Self {
        let mut candidates = dedup_candidates(candidates);
        renumber_duplicate_ids(&mut candidates);
        candidates.sort_by_key(|c| (c.end, c.start, c.id));

        let ends: Vec<Date> = candidates.iter().map(|c| c.end).collect();
        for (i, c) in candidates.iter_mut().enumerate() {
            // ends[..i] is sorted, so the candidates ending before `start`
            // form a prefix.
            let before = ends[..i].partition_point(|&e| e < c.start);
            c.predecessor = before.checked_sub(1);
        }

        let positions = candidates
            .iter()
            .enumerate()
            .map(|(pos, c)| (c.id, pos))
            .collect();
        Self {
            candidates,
            positions,
        }
    }

    /// Number of indexed candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Return `true` if there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates in end-date order.
    pub fn as_slice(&self) -> &[VacationCandidate] {
        &self.candidates
    }

    /// Iterate candidates in end-date order.
    pub fn iter(&self) -> std::slice::Iter<'_, VacationCandidate> {
        self.candidates.iter()
    }

    /// The candidate at end-date position `pos`.
    pub fn get(&self, pos: usize) -> Option<&VacationCandidate> {
        self.candidates.get(pos)
    }

    /// Look a candidate up by id.
    pub fn by_id(&self, id: usize) -> Option<&VacationCandidate> {
        self.positions.get(&id).map(|&pos| &self.candidates[pos])
    }

    /// Consume the index, returning the sorted candidates.
    pub fn into_inner(self) -> Vec<VacationCandidate> {
        self.candidates
    }
}

fn renumber_duplicate_ids(candidates: &mut [VacationCandidate]) {
    let mut next = candidates.iter().map(|c| c.id + 1).max().unwrap_or(0);
    let mut seen = HashSet::with_capacity(candidates.len());
    for c in candidates.iter_mut() {
        if !seen.insert(c.id) {
            debug!(id = c.id, start = %c.start, end = %c.end, renumbered = next, "duplicate candidate id");
            c.id = next;
            seen.insert(next);
            next += 1;
        }
    }
}

impl<'a> IntoIterator for &'a IndexedCandidates {
    type Item = &'a VacationCandidate;
    type IntoIter = std::slice::Iter<'a, VacationCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
