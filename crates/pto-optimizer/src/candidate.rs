//! `VacationCandidate` — one contiguous break the optimizer may choose.

use pto_core::DayCount;
use pto_time::{Date, Holiday, YearCalendar};

/// A contiguous span of days off: free days plus the workdays booked as PTO
/// to join them.
///
/// `start` and `end` are both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VacationCandidate {
    /// Identifier, unique within one generated candidate set.
    pub id: usize,
    /// First day off.
    pub start: Date,
    /// Last day off.
    pub end: Date,
    /// Calendar length of the break, `end - start + 1`.
    pub total_days: DayCount,
    /// Workdays inside the break, i.e. PTO that must be booked.
    pub pto_used: DayCount,
    /// Public holidays falling inside the break.
    pub holidays: Vec<Holiday>,
    /// Saturdays and Sundays inside the break (holidays included).
    pub weekends: Vec<Date>,
    /// Position (in end-date order) of the latest candidate ending before
    /// `start`.  Filled in by [`IndexedCandidates`](crate::IndexedCandidates).
    pub predecessor: Option<usize>,
}

impl VacationCandidate {
    /// Build the candidate `[start, end]` against a year calendar, counting
    /// PTO, holidays and weekends exactly from the calendar.
    pub fn from_calendar(id: usize, calendar: &YearCalendar, start: Date, end: Date) -> Self {
        Self {
            id,
            start,
            end,
            total_days: (start.days_between(end) + 1) as DayCount,
            pto_used: calendar.workdays_in(start, end),
            holidays: calendar.holidays_in(start, end),
            weekends: calendar.weekends_in(start, end),
            predecessor: None,
        }
    }

    /// Build a bare candidate with a given cost and no holiday detail.
    ///
    /// Useful when the candidate set comes from somewhere other than the
    /// generator.
    pub fn new(id: usize, start: Date, end: Date, pto_used: DayCount) -> Self {
        Self {
            id,
            start,
            end,
            total_days: (start.days_between(end) + 1) as DayCount,
            pto_used,
            holidays: Vec::new(),
            weekends: Vec::new(),
            predecessor: None,
        }
    }

    /// Return `true` if `date` lies in the break.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Return `true` if the two breaks share at least one day.
    pub fn overlaps(&self, other: &VacationCandidate) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Return `true` if the break is shorter than `min_desired_length`.
    pub fn is_short(&self, min_desired_length: DayCount) -> bool {
        self.total_days < min_desired_length
    }

    /// Objective weight: the real length for breaks of at least
    /// `min_desired_length` days, zero otherwise.
    pub fn weight(&self, min_desired_length: DayCount) -> DayCount {
        if self.is_short(min_desired_length) {
            0
        } else {
            self.total_days
        }
    }

    /// Names of the holidays inside the break.
    pub fn holiday_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.holidays.iter().map(|h| h.name.as_str())
    }

    /// The days in the break that are neither weekend nor holiday: the days
    /// to book as PTO.
    pub fn pto_dates(&self) -> Vec<Date> {
        Date::range_inclusive(self.start, self.end)
            .filter(|d| !d.weekday().is_weekend())
            .filter(|d| self.holidays.iter().all(|h| h.date != *d))
            .collect()
    }
}
