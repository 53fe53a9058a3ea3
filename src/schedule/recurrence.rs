use chrono::{Datelike, NaiveDate};

use crate::{
    date::{add_days, add_months, add_years},
    domain::Repeat,
    pay::PayFrequency,
};

/// Upper bound on steps taken by any single recurrence walk.
pub const MAX_RECURRENCE_STEPS: usize = 5000;

const SEMIMONTHLY_SECOND_PAYDAY: u32 = 15;

/// Step rule between two consecutive occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    Days(u32),
    Months(u32),
    Years(u32),
    /// Alternates between the 1st and the 15th of each month.
    SemiMonthly,
}

impl Cadence {
    pub fn for_pay_frequency(frequency: PayFrequency) -> Cadence {
        match frequency {
            PayFrequency::Weekly => Cadence::Days(7),
            PayFrequency::Biweekly => Cadence::Days(14),
            PayFrequency::Semimonthly => Cadence::SemiMonthly,
            PayFrequency::Monthly => Cadence::Months(1),
        }
    }

    /// `None` for [`Repeat::Once`], which never advances.
    pub fn for_repeat(repeat: Repeat) -> Option<Cadence> {
        match repeat {
            Repeat::Once => None,
            Repeat::Weekly => Some(Cadence::Days(7)),
            Repeat::Biweekly => Some(Cadence::Days(14)),
            Repeat::Monthly => Some(Cadence::Months(1)),
            Repeat::Yearly => Some(Cadence::Years(1)),
        }
    }

    pub fn next_date(&self, from: NaiveDate) -> NaiveDate {
        match *self {
            Cadence::Days(days) => add_days(from, i64::from(days)),
            Cadence::Months(months) => {
                add_months(from, i32::try_from(months).unwrap_or(i32::MAX))
            }
            Cadence::Years(years) => add_years(from, i32::try_from(years).unwrap_or(i32::MAX)),
            Cadence::SemiMonthly => next_semimonthly(from),
        }
    }
}

fn next_semimonthly(from: NaiveDate) -> NaiveDate {
    let first_of_month = from.with_day(1).unwrap_or(from);
    match from.day() {
        1 => from.with_day(SEMIMONTHLY_SECOND_PAYDAY).unwrap_or(from),
        2..=SEMIMONTHLY_SECOND_PAYDAY => add_months(first_of_month, 1),
        _ => {
            let next_month = add_months(first_of_month, 1);
            next_month
                .with_day(SEMIMONTHLY_SECOND_PAYDAY)
                .unwrap_or(next_month)
        }
    }
}

/// One step of a recurrence walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    /// Zero-based position in the walk, counted from the anchor.
    pub index: usize,
    pub date: NaiveDate,
}

/// A recurrence rule anchored at a date.
///
/// The rule itself holds no iteration state; every call to
/// [`Recurrence::occurrences`] starts a fresh walk from the anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recurrence {
    anchor: NaiveDate,
    cadence: Cadence,
    limit: Option<u32>,
    max_steps: usize,
}

impl Recurrence {
    pub fn new(anchor: NaiveDate, cadence: Cadence) -> Self {
        Self {
            anchor,
            cadence,
            limit: None,
            max_steps: MAX_RECURRENCE_STEPS,
        }
    }

    /// A rule that yields only the anchor date.
    pub fn single(anchor: NaiveDate) -> Self {
        Self::new(anchor, Cadence::Days(0)).with_limit(Some(1))
    }

    /// Caps the number of occurrences, counting the anchor itself.
    pub fn with_limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn occurrences(&self) -> Occurrences {
        Occurrences {
            cadence: self.cadence,
            next: self.anchor,
            index: 0,
            limit: self.limit.map(|limit| limit as usize),
            max_steps: self.max_steps,
        }
    }

    /// Occurrences that fall within `[start, end]`.
    pub fn between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = Occurrence> + '_ {
        self.occurrences()
            .take_while(move |occurrence| occurrence.date <= end)
            .filter(move |occurrence| occurrence.date >= start)
    }

    /// First occurrence on or after `reference`, walking without an end date.
    pub fn first_on_or_after(&self, reference: NaiveDate) -> Option<Occurrence> {
        self.occurrences().find(|occurrence| occurrence.date >= reference)
    }
}

/// Lazy walk over a [`Recurrence`], bounded by its limit and step cap.
#[derive(Debug, Clone)]
pub struct Occurrences {
    cadence: Cadence,
    next: NaiveDate,
    index: usize,
    limit: Option<usize>,
    max_steps: usize,
}

impl Iterator for Occurrences {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Self::Item> {
        if self.limit.is_some_and(|limit| self.index >= limit) {
            return None;
        }
        if self.index >= self.max_steps {
            tracing::trace!(
                steps = self.index,
                last = %self.next,
                "recurrence walk stopped at step cap"
            );
            return None;
        }
        let occurrence = Occurrence {
            index: self.index,
            date: self.next,
        };
        self.next = self.cadence.next_date(self.next);
        self.index += 1;
        Some(occurrence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn dates(recurrence: &Recurrence, count: usize) -> Vec<NaiveDate> {
        recurrence
            .occurrences()
            .take(count)
            .map(|occurrence| occurrence.date)
            .collect()
    }

    #[test]
    fn semimonthly_split_rule() {
        assert_eq!(Cadence::SemiMonthly.next_date(d(2024, 1, 1)), d(2024, 1, 15));
        assert_eq!(Cadence::SemiMonthly.next_date(d(2024, 1, 2)), d(2024, 2, 1));
        assert_eq!(Cadence::SemiMonthly.next_date(d(2024, 1, 15)), d(2024, 2, 1));
        assert_eq!(Cadence::SemiMonthly.next_date(d(2024, 1, 16)), d(2024, 2, 15));
        assert_eq!(Cadence::SemiMonthly.next_date(d(2024, 12, 31)), d(2025, 1, 15));
    }

    #[test]
    fn semimonthly_settles_into_first_and_fifteenth() {
        let recurrence = Recurrence::new(d(2024, 1, 20), Cadence::SemiMonthly);
        assert_eq!(
            dates(&recurrence, 4),
            vec![d(2024, 1, 20), d(2024, 2, 15), d(2024, 3, 1), d(2024, 3, 15)]
        );
    }

    #[test]
    fn monthly_walk_clamps_and_drifts() {
        let recurrence = Recurrence::new(d(2024, 1, 31), Cadence::Months(1));
        assert_eq!(
            dates(&recurrence, 3),
            vec![d(2024, 1, 31), d(2024, 2, 29), d(2024, 3, 29)]
        );
    }

    #[test]
    fn limit_counts_the_anchor() {
        let recurrence = Recurrence::new(d(2024, 1, 1), Cadence::Days(7)).with_limit(Some(3));
        assert_eq!(recurrence.occurrences().count(), 3);
        assert_eq!(Recurrence::single(d(2024, 1, 1)).occurrences().count(), 1);
    }

    #[test]
    fn zero_step_cadence_is_bounded_by_cap() {
        let recurrence = Recurrence::new(d(2024, 1, 1), Cadence::Days(0));
        assert_eq!(recurrence.occurrences().count(), MAX_RECURRENCE_STEPS);
        let small = recurrence.clone().with_max_steps(10);
        assert_eq!(small.occurrences().count(), 10);
    }

    #[test]
    fn oversized_steps_never_walk_backwards() {
        let start = d(2024, 1, 31);
        assert_eq!(Cadence::Months(u32::MAX).next_date(start), start);
        assert_eq!(Cadence::Years(u32::MAX).next_date(start), start);
        assert_eq!(Cadence::Days(u32::MAX).next_date(start), start);

        let walk = Recurrence::new(start, Cadence::Months(u32::MAX)).with_max_steps(3);
        assert!(walk.occurrences().all(|occurrence| occurrence.date >= start));
    }

    #[test]
    fn walks_restart_from_anchor() {
        let recurrence = Recurrence::new(d(2024, 1, 1), Cadence::Days(14));
        let first: Vec<_> = recurrence.occurrences().take(5).collect();
        let second: Vec<_> = recurrence.occurrences().take(5).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn between_is_inclusive_and_keeps_walk_index() {
        let recurrence = Recurrence::new(d(2024, 1, 1), Cadence::Days(7));
        let inside: Vec<_> = recurrence.between(d(2024, 1, 8), d(2024, 1, 22)).collect();
        assert_eq!(inside.len(), 3);
        assert_eq!(inside[0].index, 1);
        assert_eq!(inside[2].date, d(2024, 1, 22));
    }

    #[test]
    fn first_on_or_after_respects_limit() {
        let recurrence = Recurrence::new(d(2024, 1, 1), Cadence::Months(1)).with_limit(Some(3));
        assert_eq!(
            recurrence.first_on_or_after(d(2024, 2, 10)).map(|o| o.date),
            Some(d(2024, 3, 1))
        );
        assert_eq!(recurrence.first_on_or_after(d(2024, 3, 2)), None);
    }
}
