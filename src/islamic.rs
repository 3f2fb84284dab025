//! Arithmetic (civil) Islamic calendar.
//!
//! Months alternate between 30 and 29 days. Eleven years of every 30-year
//! cycle are leap years, adding a 30th day to the twelfth month. Dates before
//! 1 Muharram 1 AH are computed by extending the cycle backwards and are not
//! historically meaningful.

use crate::consts::{
    ISLAMIC_COMMON_YEAR, ISLAMIC_CYCLE_YEARS, ISLAMIC_EPOCH, ISLAMIC_LEAP_YEARS, MAX_MONTH, MIN_DAY,
};
use crate::prelude::*;
use crate::{Calendar, CanonicalDay, DateError, FromCanonical, ToCanonical};

/// A date in the arithmetic Islamic calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{:02}-{:02}", "year", "month", "day")]
pub struct IslamicDate {
    year: i64,
    month: u8,
    day: u8,
}

impl IslamicDate {
    /// Creates an Islamic date.
    ///
    /// # Errors
    /// Returns `DateError` if the month is outside `1..=12` or the day exceeds
    /// the month's length.
    pub fn new(year: i64, month: u8, day: u8) -> Result<Self, DateError> {
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth {
                calendar: Calendar::Islamic,
                year,
                month,
            });
        }
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(DateError::InvalidDay {
                calendar: Calendar::Islamic,
                year,
                month,
                day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year (AH)
    #[inline]
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Returns the month, `1..=12`
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }
}

impl ToCanonical for IslamicDate {
    fn to_canonical(&self) -> CanonicalDay {
        CanonicalDay::new(fixed_from_islamic(self.year, self.month, self.day))
    }
}

impl FromCanonical for IslamicDate {
    fn from_canonical(day: CanonicalDay) -> Self {
        let date = day.get();

        // 30 * date leaves i64 past about 3e17 days
        let elapsed = i128::from(date) - i128::from(ISLAMIC_EPOCH);
        let mut year = (30 * elapsed + 10646).div_euclid(10631) as i64;
        let mut corrections = 0;
        while date < fixed_from_islamic(year, 1, MIN_DAY) {
            year -= 1;
            corrections += 1;
        }
        while date >= fixed_from_islamic(year + 1, 1, MIN_DAY) {
            year += 1;
            corrections += 1;
        }

        let prior_days = date - fixed_from_islamic(year, 1, MIN_DAY);
        let estimate = (11 * prior_days + 330).div_euclid(325).clamp(1, i64::from(MAX_MONTH));
        let mut month = estimate as u8;
        while month > 1 && date < fixed_from_islamic(year, month, MIN_DAY) {
            month -= 1;
            corrections += 1;
        }
        while month < MAX_MONTH && date >= fixed_from_islamic(year, month + 1, MIN_DAY) {
            month += 1;
            corrections += 1;
        }
        if corrections > 0 {
            tracing::trace!(date, year, month, corrections, "corrected islamic estimate");
        }

        let day_of_month = date - fixed_from_islamic(year, month, MIN_DAY) + 1;
        Self {
            year,
            month,
            day: day_of_month as u8,
        }
    }
}

/// Returns true if `year` is an Islamic leap year (355 days).
pub fn is_leap_year(year: i64) -> bool {
    ISLAMIC_LEAP_YEARS.contains(&year.rem_euclid(ISLAMIC_CYCLE_YEARS))
}

/// Returns the number of days in `month` of `year`.
pub fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month % 2 == 1 || (month == MAX_MONTH && is_leap_year(year)) {
        30
    } else {
        29
    }
}

/// Days from the epoch to the first day of `year`.
fn days_before_year(year: i64) -> i64 {
    let prior_years = year - 1;
    let position = prior_years.rem_euclid(ISLAMIC_CYCLE_YEARS);
    let leap_days_in_cycle = ISLAMIC_LEAP_YEARS
        .iter()
        .filter(|&&leap| leap <= position)
        .count() as i64;
    ISLAMIC_COMMON_YEAR * prior_years
        + ISLAMIC_LEAP_YEARS.len() as i64 * prior_years.div_euclid(ISLAMIC_CYCLE_YEARS)
        + leap_days_in_cycle
}

fn fixed_from_islamic(year: i64, month: u8, day: u8) -> i64 {
    let month = i64::from(month);
    ISLAMIC_EPOCH - 1 + days_before_year(year) + 29 * (month - 1) + month / 2 + i64::from(day)
}
