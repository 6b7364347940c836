//! Day classification for a single planning year.
//!
//! [`YearCalendar`] combines the weekend rule with an externally supplied
//! holiday list and answers, for every date of one year, whether it is a
//! holiday, a weekend or a workday.  Range queries ("how many workdays between
//! these two dates?") are answered in constant time from a prefix-sum table,
//! since the candidate generator asks that question for every span it grows.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::date::Date;
use crate::holiday::Holiday;
use pto_core::errors::Result;

/// Classification of a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind<'a> {
    /// A public holiday.  Takes precedence over [`DayKind::Weekend`] for
    /// naming, although the date is still a weekend day.
    Holiday(&'a Holiday),
    /// Saturday or Sunday.
    Weekend,
    /// A regular working day; taking it off costs one PTO day.
    Workday,
}

impl DayKind<'_> {
    /// Return `true` for a working day.
    pub fn is_workday(&self) -> bool {
        matches!(self, DayKind::Workday)
    }

    /// Return `true` for a day that is free without spending PTO.
    pub fn is_free(&self) -> bool {
        !self.is_workday()
    }
}

/// Holidays and weekends of one calendar year.
///
/// Only public holidays dated inside the year are retained; other categories
/// and adjacent-year observed dates are dropped at construction.
#[derive(Debug, Clone)]
pub struct YearCalendar {
    year: u16,
    first: Date,
    holidays: BTreeMap<Date, Holiday>,
    free: Vec<bool>,
    // workdays_before[i] = number of workdays at offsets [0, i)
    workdays_before: Vec<u32>,
}

impl YearCalendar {
    /// Build the calendar of `year` from an external holiday list.
    ///
    /// # Errors
    /// Returns `Error::Date` if `year` is outside the supported date range.
    pub fn new(year: u16, holidays: &[Holiday]) -> Result<Self> {
        let first = Date::first_of_year(year)?;
        let last = Date::last_of_year(year)?;

        let mut retained: BTreeMap<Date, Holiday> = BTreeMap::new();
        for holiday in holidays {
            if !holiday.is_public() {
                trace!(date = %holiday.date, name = %holiday.name, category = %holiday.category, "skipping non-public holiday");
                continue;
            }
            if holiday.date < first || holiday.date > last {
                debug!(date = %holiday.date, name = %holiday.name, year, "ignoring holiday outside planning year");
                continue;
            }
            if let Some(existing) = retained.get(&holiday.date) {
                trace!(date = %holiday.date, kept = %existing.name, dropped = %holiday.name, "duplicate holiday date");
                continue;
            }
            retained.insert(holiday.date, holiday.clone());
        }

        let free: Vec<bool> = Date::range_inclusive(first, last)
            .map(|d| d.weekday().is_weekend() || retained.contains_key(&d))
            .collect();
        let mut workdays_before = Vec::with_capacity(free.len() + 1);
        workdays_before.push(0);
        let mut acc = 0u32;
        for &is_free in &free {
            if !is_free {
                acc += 1;
            }
            workdays_before.push(acc);
        }

        Ok(Self {
            year,
            first,
            holidays: retained,
            free,
            workdays_before,
        })
    }

    /// The planning year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// January 1 of the planning year.
    pub fn first_day(&self) -> Date {
        self.first
    }

    /// December 31 of the planning year.
    pub fn last_day(&self) -> Date {
        self.first + (self.free.len() as i32 - 1)
    }

    /// Number of days in the year (365 or 366).
    pub fn day_count(&self) -> usize {
        self.free.len()
    }

    /// Zero-based offset of `date` from January 1, if it lies in the year.
    pub fn offset_of(&self, date: Date) -> Option<usize> {
        let off = self.first.days_between(date);
        (off >= 0 && (off as usize) < self.free.len()).then_some(off as usize)
    }

    /// The date at zero-based `offset` from January 1.
    ///
    /// # Panics
    /// Panics if `offset >= self.day_count()`.
    pub fn date_at(&self, offset: usize) -> Date {
        assert!(offset < self.free.len(), "offset {offset} outside year");
        self.first + offset as i32
    }

    /// Return `true` if the day at `offset` is free (weekend or holiday).
    pub fn is_free_at(&self, offset: usize) -> bool {
        self.free[offset]
    }

    /// Workdays at offsets `[from, to]`, both ends inclusive.
    pub fn workdays_between_offsets(&self, from: usize, to: usize) -> u32 {
        if to < from {
            return 0;
        }
        self.workdays_before[to + 1] - self.workdays_before[from]
    }

    /// Classify `date`.
    ///
    /// Dates outside the year carry no holiday information and are classified
    /// by the weekend rule alone.
    pub fn classify(&self, date: Date) -> DayKind<'_> {
        if let Some(h) = self.holidays.get(&date) {
            DayKind::Holiday(h)
        } else if date.weekday().is_weekend() {
            DayKind::Weekend
        } else {
            DayKind::Workday
        }
    }

    /// Iterate the whole year as `(date, classification)` pairs.
    pub fn days(&self) -> impl Iterator<Item = (Date, DayKind<'_>)> + '_ {
        Date::range_inclusive(self.first_day(), self.last_day()).map(move |d| (d, self.classify(d)))
    }

    /// The public holiday on `date`, if any.
    pub fn holiday(&self, date: Date) -> Option<&Holiday> {
        self.holidays.get(&date)
    }

    /// All retained public holidays in date order.
    pub fn holidays(&self) -> impl Iterator<Item = &Holiday> + '_ {
        self.holidays.values()
    }

    /// Number of retained public holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Public holidays in `[start, end]`, in date order.
    pub fn holidays_in(&self, start: Date, end: Date) -> Vec<Holiday> {
        if end < start {
            return Vec::new();
        }
        self.holidays.range(start..=end).map(|(_, h)| h.clone()).collect()
    }

    /// Saturdays and Sundays in `[start, end]`, holidays included.
    pub fn weekends_in(&self, start: Date, end: Date) -> Vec<Date> {
        Date::range_inclusive(start, end)
            .filter(|d| d.weekday().is_weekend())
            .collect()
    }

    /// Workdays in `[start, end]`, both ends inclusive.
    pub fn workdays_in(&self, start: Date, end: Date) -> u32 {
        match (self.offset_of(start), self.offset_of(end)) {
            (Some(from), Some(to)) => self.workdays_between_offsets(from, to),
            _ => Date::range_inclusive(start, end)
                .filter(|&d| self.classify(d).is_workday())
                .count() as u32,
        }
    }

    /// The workdays in `[start, end]`: the days that must be booked as PTO
    /// to be off for the whole span.
    pub fn workday_dates_in(&self, start: Date, end: Date) -> Vec<Date> {
        Date::range_inclusive(start, end)
            .filter(|&d| self.classify(d).is_workday())
            .collect()
    }
}
