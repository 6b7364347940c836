//! Property tests over random holiday sets and budgets.

use proptest::prelude::*;

use pto_optimizer::{generate_with_stats, optimize, IndexedCandidates, Planner, PlannerConfig};
use pto_time::{Date, Holiday, YearCalendar};

const YEAR: u16 = 2025;

fn holidays_from(offsets: &[usize]) -> Vec<Holiday> {
    let first = Date::first_of_year(YEAR).unwrap();
    offsets
        .iter()
        .map(|&o| Holiday::public(first + o as i32, format!("Holiday {o}")))
        .collect()
}

fn holiday_offsets() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..365, 0..15)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn generated_pto_equals_workdays_in_range(offsets in holiday_offsets(), cap in 0u32..8) {
        let cal = YearCalendar::new(YEAR, &holidays_from(&offsets)).unwrap();
        let (candidates, stats) = generate_with_stats(&cal, cap);
        prop_assert_eq!(stats.drift_rejections, 0);
        for c in &candidates {
            let exact = Date::range_inclusive(c.start, c.end)
                .filter(|&d| !d.weekday().is_weekend() && cal.holiday(d).is_none())
                .count() as u32;
            prop_assert_eq!(c.pto_used, exact);
            prop_assert!(c.pto_used <= cap);
        }
    }

    #[test]
    fn predecessors_are_latest_compatible(offsets in holiday_offsets(), cap in 1u32..5) {
        let cal = YearCalendar::new(YEAR, &holidays_from(&offsets)).unwrap();
        let (candidates, _) = generate_with_stats(&cal, cap);
        let idx = IndexedCandidates::new(candidates);
        let sorted = idx.as_slice();
        for (i, c) in sorted.iter().enumerate() {
            let expected = (0..i).rev().find(|&j| sorted[j].end < c.start);
            prop_assert_eq!(c.predecessor, expected);
        }
    }

    #[test]
    fn plans_are_feasible(offsets in holiday_offsets(), budget in -2i32..15) {
        let plan = optimize(YEAR, &holidays_from(&offsets), budget).unwrap();
        prop_assert!(plan.total_pto_used <= budget.max(0) as u32);
        for w in plan.vacations.windows(2) {
            prop_assert!(w[0].end < w[1].start, "{:?} overlaps {:?}", w[0], w[1]);
        }
        let days: u32 = plan.vacations.iter().map(|v| v.total_days).sum();
        let pto: u32 = plan.vacations.iter().map(|v| v.pto_used).sum();
        prop_assert_eq!(days, plan.total_days_off);
        prop_assert_eq!(pto, plan.total_pto_used);
        if budget <= 0 {
            prop_assert!(plan.vacations.iter().all(|v| v.pto_used == 0));
        }
    }

    #[test]
    fn more_budget_never_hurts(offsets in holiday_offsets(), budget in 0i32..14) {
        let holidays = holidays_from(&offsets);
        let planner = Planner::new(PlannerConfig::new().with_max_pto_per_candidate(Some(6))).unwrap();
        let smaller = planner.plan(YEAR, &holidays, budget).unwrap();
        let larger = planner.plan(YEAR, &holidays, budget + 1).unwrap();
        prop_assert!(
            larger.total_days_off >= smaller.total_days_off,
            "budget {} gave {} days, budget {} gave {}",
            budget, smaller.total_days_off, budget + 1, larger.total_days_off
        );
    }

    #[test]
    fn more_budget_never_hurts_with_default_cap(offsets in holiday_offsets(), budget in 0i32..14) {
        let holidays = holidays_from(&offsets);
        let smaller = optimize(YEAR, &holidays, budget).unwrap();
        let larger = optimize(YEAR, &holidays, budget + 1).unwrap();
        prop_assert!(
            larger.total_days_off >= smaller.total_days_off,
            "budget {} gave {} days, budget {} gave {}",
            budget, smaller.total_days_off, budget + 1, larger.total_days_off
        );
    }

    #[test]
    fn planning_is_deterministic(offsets in holiday_offsets(), budget in 0i32..12) {
        let holidays = holidays_from(&offsets);
        let first = optimize(YEAR, &holidays, budget).unwrap();
        let second = optimize(YEAR, &holidays, budget).unwrap();
        prop_assert_eq!(first, second);
    }
}
