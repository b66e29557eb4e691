//! Calendar arithmetic for service length, retirement date and monthly stepping

use chrono::{Datelike, Months, NaiveDate};

/// Whole months elapsed from `start` to `end`.
///
/// A month only counts once the day-of-month of `end` has reached the
/// day-of-month of `start`. Never negative.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let years = end.year() - start.year();
    let mut months = end.month() as i32 - start.month() as i32;

    if end.day() < start.day() {
        months -= 1;
    }

    (years * 12 + months).max(0) as u32
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month
    date.with_day(1).unwrap_or(date)
}

/// Retirement date for an employee born on `date_of_birth`.
///
/// The employee retires on the last day of the month *following* the month in
/// which they reach `retirement_age_years`. Only the birth month matters, so a
/// 29 February birthday needs no special handling.
pub fn retirement_date(date_of_birth: NaiveDate, retirement_age_years: u32) -> NaiveDate {
    // Birth month start + age years + 2 months lands on the first day of the
    // month after the retirement month; one day back is its last day.
    month_start(date_of_birth)
        .checked_add_months(Months::new(retirement_age_years * 12 + 2))
        .and_then(|d| d.pred_opt())
        .expect("retirement date within chrono's supported range")
}

/// Lazy iterator over first-of-month dates.
///
/// Yields `month_start(start)`, the next month start, and so on up to and
/// including the month containing `end`. Cloning restarts from the clone
/// point.
#[derive(Debug, Clone)]
pub struct MonthIter {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl MonthIter {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            next: Some(month_start(start)),
            last: month_start(end),
        }
    }
}

impl Iterator for MonthIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|d| *d <= self.last)?;
        self.next = current.checked_add_months(Months::new(1));
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(d) if d <= self.last => {
                let n = months_between(d, self.last) as usize + 1;
                (n, Some(n))
            }
            _ => (0, Some(0)),
        }
    }
}
