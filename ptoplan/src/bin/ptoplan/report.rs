use std::fmt;

use pto_core::DayCount;
use pto_optimizer::{IndexedCandidates, VacationCandidate, VacationPlan};
use pto_time::Date;

struct DayLabel(Date);

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0.weekday().short_name(), self.0)
    }
}

struct Span<'a>(&'a VacationCandidate);

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        write!(
            f,
            "{} – {}: {} days off, {} PTO",
            DayLabel(v.start),
            DayLabel(v.end),
            v.total_days,
            v.pto_used
        )
    }
}

fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    items: impl IntoIterator<Item = T>,
) -> fmt::Result {
    let mut items = items.into_iter().peekable();
    if items.peek().is_none() {
        return Ok(());
    }
    write!(f, "   {label}: ")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    writeln!(f)
}

/// Human-readable summary of a plan.
pub struct PlanReport<'a> {
    year: u16,
    plan: &'a VacationPlan,
}

impl<'a> PlanReport<'a> {
    pub fn new(year: u16, plan: &'a VacationPlan) -> Self {
        Self { year, plan }
    }
}

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, plan) = (self.year, self.plan);
        if plan.is_empty() {
            return writeln!(f, "No breaks worth taking in {year} within this budget.");
        }

        writeln!(
            f,
            "{year}: {} days off for {} PTO days in {} breaks",
            plan.total_days_off,
            plan.total_pto_used,
            plan.len()
        )?;
        for (i, v) in plan.vacations.iter().enumerate() {
            let short = if v.is_short(plan.min_desired_length) { " (short)" } else { "" };
            writeln!(f, "\n#{} {}{short}", i + 1, Span(v))?;
            write_joined(f, "holidays", v.holiday_names())?;
            write_joined(f, "book", v.pto_dates().into_iter().map(DayLabel))?;
        }
        if plan.has_short_breaks {
            writeln!(
                f,
                "\nNote: includes breaks shorter than {} days; they were needed to use the budget well.",
                plan.min_desired_length
            )?;
        }
        Ok(())
    }
}

/// One line per candidate of at least `min_len` days, in end-date order.
pub struct CandidateReport<'a> {
    candidates: &'a IndexedCandidates,
    min_len: DayCount,
}

impl<'a> CandidateReport<'a> {
    pub fn new(candidates: &'a IndexedCandidates, min_len: DayCount) -> Self {
        Self { candidates, min_len }
    }
}

impl fmt::Display for CandidateReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut shown = 0usize;
        for c in self.candidates.iter().filter(|c| !c.is_short(self.min_len)) {
            writeln!(f, "[{}] {}", c.id, Span(c))?;
            shown += 1;
        }
        writeln!(
            f,
            "{shown} of {} candidates have at least {} days",
            self.candidates.len(),
            self.min_len
        )
    }
}
