//! Candidate generation.
//!
//! From every day of the year a run is grown forward: free days (weekends,
//! public holidays) are absorbed at no cost, workdays consume PTO until the
//! per-candidate cap is spent, and the first unaffordable workday ends the
//! run.  Every prefix of every run is a candidate, so the optimizer sees
//! both the long bridges and every shorter way of cutting them.

use tracing::{debug, warn};

use pto_core::{errors::Result, DayCount};
use pto_time::{Holiday, YearCalendar};

use crate::candidate::VacationCandidate;
use crate::indexer::dedup_candidates;

/// Counters collected while generating candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Run prefixes considered for emission.
    pub runs_emitted: usize,
    /// Prefixes whose exact workday count disagreed with the running PTO
    /// counter.  Always zero for a consistent calendar.
    pub drift_rejections: usize,
    /// Prefixes dropped because another candidate had the same span.
    pub duplicates_merged: usize,
    /// Candidates left after deduplication.
    pub candidates: usize,
}

/// Generate the deduplicated candidates of `year`.
///
/// `max_pto_per_candidate` caps the PTO any single candidate may consume.
///
/// # Errors
/// Returns `Error::Date` if `year` is outside the supported date range.
pub fn generate(
    year: u16,
    holidays: &[Holiday],
    max_pto_per_candidate: DayCount,
) -> Result<Vec<VacationCandidate>> {
    let calendar = YearCalendar::new(year, holidays)?;
    Ok(generate_with_stats(&calendar, max_pto_per_candidate).0)
}

/// Generate candidates from an already classified year.
pub fn generate_from_calendar(
    calendar: &YearCalendar,
    max_pto_per_candidate: DayCount,
) -> Vec<VacationCandidate> {
    generate_with_stats(calendar, max_pto_per_candidate).0
}

/// Generate candidates and report generation counters.
///
/// Candidates are deduplicated by `(start, end)` and numbered `0..n` in
/// `(start, end)` order.
pub fn generate_with_stats(
    calendar: &YearCalendar,
    max_pto_per_candidate: DayCount,
) -> (Vec<VacationCandidate>, GenerationStats) {
    let days = calendar.day_count();
    let mut stats = GenerationStats::default();
    let mut raw = Vec::new();

    for start in 0..days {
        let mut pto: DayCount = 0;
        for current in start..days {
            if !calendar.is_free_at(current) {
                if pto < max_pto_per_candidate {
                    pto += 1;
                } else {
                    break;
                }
            }

            stats.runs_emitted += 1;
            let exact = calendar.workdays_between_offsets(start, current);
            if exact != pto {
                stats.drift_rejections += 1;
                warn!(
                    start = %calendar.date_at(start),
                    end = %calendar.date_at(current),
                    counted = pto,
                    exact,
                    "PTO counter drifted from calendar, dropping run"
                );
                continue;
            }
            raw.push(VacationCandidate::from_calendar(
                0,
                calendar,
                calendar.date_at(start),
                calendar.date_at(current),
            ));
        }
    }

    let before = raw.len();
    let mut candidates = dedup_candidates(raw);
    for (id, c) in candidates.iter_mut().enumerate() {
        c.id = id;
    }
    stats.duplicates_merged = before - candidates.len();
    stats.candidates = candidates.len();

    debug!(
        year = calendar.year(),
        cap = max_pto_per_candidate,
        runs = stats.runs_emitted,
        candidates = stats.candidates,
        "generated vacation candidates"
    );
    (candidates, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pto_time::Date;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn pto_matches_calendar_for_every_candidate() {
        let holidays = vec![
            Holiday::public(date(2025, 1, 1), "New Year"),
            Holiday::public(date(2025, 5, 1), "Labour Day"),
            Holiday::public(date(2025, 12, 25), "Christmas Day"),
            Holiday::public(date(2025, 12, 26), "Boxing Day"),
        ];
        let cal = YearCalendar::new(2025, &holidays).unwrap();
        let (cands, stats) = generate_with_stats(&cal, 3);
        assert_eq!(stats.drift_rejections, 0);
        assert_eq!(stats.candidates, cands.len());
        for c in &cands {
            assert_eq!(c.pto_used, cal.workdays_in(c.start, c.end));
            assert!(c.pto_used <= 3);
            assert_eq!(c.total_days as i32, c.start.days_between(c.end) + 1);
        }
    }

    #[test]
    fn runs_stop_at_first_unaffordable_workday() {
        // No holidays; cap 1.  From Saturday 2025-01-04 the run is
        // Sat, Sun, Mon (1 PTO), and Tuesday ends it.
        let cal = YearCalendar::new(2025, &[]).unwrap();
        let cands = generate_from_calendar(&cal, 1);
        let from_sat: Vec<_> = cands.iter().filter(|c| c.start == date(2025, 1, 4)).collect();
        let ends: Vec<Date> = from_sat.iter().map(|c| c.end).collect();
        assert_eq!(ends, [date(2025, 1, 4), date(2025, 1, 5), date(2025, 1, 6)]);
        assert_eq!(from_sat[2].pto_used, 1);
        assert_eq!(from_sat[2].weekends.len(), 2);
    }

    #[test]
    fn runs_never_cross_year_end() {
        let cal = YearCalendar::new(2025, &[]).unwrap();
        let cands = generate_from_calendar(&cal, 10);
        assert!(cands.iter().all(|c| c.end <= date(2025, 12, 31)));
        assert!(cands.iter().any(|c| c.end == date(2025, 12, 31)));
    }

    #[test]
    fn zero_cost_runs_are_candidates() {
        let cal = YearCalendar::new(2025, &[]).unwrap();
        let cands = generate_from_calendar(&cal, 0);
        assert!(!cands.is_empty());
        assert!(cands.iter().all(|c| c.pto_used == 0));
        // the longest pure-weekend span is two days
        assert_eq!(cands.iter().map(|c| c.total_days).max(), Some(2));
    }

    #[test]
    fn ids_are_dense_and_ordered() {
        let cands = generate(2024, &[], 2).unwrap();
        for (i, c) in cands.iter().enumerate() {
            assert_eq!(c.id, i);
        }
        assert!(cands
            .windows(2)
            .all(|w| (w[0].start, w[0].end) < (w[1].start, w[1].end)));
    }

    #[test]
    fn holiday_names_are_attached() {
        let xmas = date(2025, 12, 25);
        let cands = generate(2025, &[Holiday::public(xmas, "Christmas Day")], 2).unwrap();
        let c = cands
            .iter()
            .find(|c| c.start == xmas && c.end == xmas)
            .unwrap();
        assert_eq!(c.pto_used, 0);
        assert_eq!(c.holiday_names().collect::<Vec<_>>(), ["Christmas Day"]);
    }
}
