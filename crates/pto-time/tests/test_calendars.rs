//! Integration tests for `YearCalendar`.

use proptest::prelude::*;

use pto_time::{Date, DayKind, Holiday, YearCalendar};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn us_2025() -> Vec<Holiday> {
    vec![
        Holiday::public(date(2025, 1, 1), "New Year's Day"),
        Holiday::public(date(2025, 1, 20), "Martin Luther King Jr. Day"),
        Holiday::public(date(2025, 5, 26), "Memorial Day"),
        Holiday::public(date(2025, 7, 4), "Independence Day"),
        Holiday::public(date(2025, 9, 1), "Labor Day"),
        Holiday::public(date(2025, 11, 27), "Thanksgiving Day"),
        Holiday::public(date(2025, 12, 25), "Christmas Day"),
    ]
}

#[test]
fn classification_follows_weekend_rule_off_holidays() {
    let cal = YearCalendar::new(2025, &us_2025()).unwrap();
    for (d, kind) in cal.days() {
        match kind {
            DayKind::Holiday(h) => {
                assert_eq!(h.date, d);
                assert!(kind.is_free());
            }
            DayKind::Weekend => assert!(d.weekday().is_weekend()),
            DayKind::Workday => assert!(!d.weekday().is_weekend()),
        }
    }
    // 261 weekdays minus 7 weekday holidays
    assert_eq!(cal.workdays_in(cal.first_day(), cal.last_day()), 254);
}

#[test]
fn holidays_in_range_are_ordered() {
    let cal = YearCalendar::new(2025, &us_2025()).unwrap();
    let names: Vec<String> = cal
        .holidays_in(date(2025, 5, 1), date(2025, 9, 30))
        .into_iter()
        .map(|h| h.name)
        .collect();
    assert_eq!(names, ["Memorial Day", "Independence Day", "Labor Day"]);
}

#[test]
fn holiday_bridge_needs_no_pto() {
    let cal = YearCalendar::new(2025, &us_2025()).unwrap();
    // Friday 07-04 is a holiday, then the weekend
    assert_eq!(cal.workdays_in(date(2025, 7, 4), date(2025, 7, 6)), 0);
    assert_eq!(cal.workday_dates_in(date(2025, 7, 3), date(2025, 7, 7)), vec![date(2025, 7, 3), date(2025, 7, 7)]);
}

proptest! {
    #[test]
    fn prefix_counts_match_direct_count(
        offsets in proptest::collection::vec(0usize..365, 0..20),
        a in 0usize..365,
        b in 0usize..365,
    ) {
        let first = date(2025, 1, 1);
        let holidays: Vec<Holiday> = offsets
            .iter()
            .map(|&o| Holiday::public(first + o as i32, format!("H{o}")))
            .collect();
        let cal = YearCalendar::new(2025, &holidays).unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let start = cal.date_at(lo);
        let end = cal.date_at(hi);
        let direct = Date::range_inclusive(start, end)
            .filter(|&d| cal.classify(d).is_workday())
            .count() as u32;
        prop_assert_eq!(cal.workdays_in(start, end), direct);
    }
}
