use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pto_optimizer::{generate_with_stats, select, IndexedCandidates, Planner};
use pto_time::{Date, Holiday, YearCalendar};

fn holidays_2025() -> Vec<Holiday> {
    [
        (1, 1, "New Year's Day"),
        (4, 18, "Good Friday"),
        (4, 21, "Easter Monday"),
        (5, 1, "Labour Day"),
        (5, 29, "Ascension Day"),
        (6, 9, "Whit Monday"),
        (10, 3, "Unity Day"),
        (12, 25, "Christmas Day"),
        (12, 26, "Boxing Day"),
    ]
    .into_iter()
    .map(|(m, d, name)| Holiday::public(Date::from_ymd(2025, m, d).unwrap(), name))
    .collect()
}

fn bench_generation(c: &mut Criterion) {
    let calendar = YearCalendar::new(2025, &holidays_2025()).unwrap();
    c.bench_function("generate_cap_10", |b| {
        b.iter(|| generate_with_stats(black_box(&calendar), black_box(10)))
    });
}

fn bench_selection(c: &mut Criterion) {
    let calendar = YearCalendar::new(2025, &holidays_2025()).unwrap();
    let (candidates, _) = generate_with_stats(&calendar, 10);
    let indexed = IndexedCandidates::new(candidates);
    c.bench_function("select_budget_30", |b| {
        b.iter(|| select(black_box(&indexed), black_box(30), 4))
    });
}

fn bench_plan(c: &mut Criterion) {
    let holidays = holidays_2025();
    let planner = Planner::default();
    c.bench_function("plan_budget_25", |b| {
        b.iter(|| planner.plan(2025, black_box(&holidays), black_box(25)))
    });
}

criterion_group!(benches, bench_generation, bench_selection, bench_plan);
criterion_main!(benches);
