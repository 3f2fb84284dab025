//! French Revolutionary calendar, astronomical form.
//!
//! Each year begins on the day, reckoned at the Paris meridian, on which the
//! true autumnal equinox falls. Twelve months of 30 days are followed by five
//! or six complementary days, modelled here as month 13. Year I began on
//! 22 September 1792; earlier years are computed by the same rule.

use crate::astro::{estimate_prior_solar_longitude, solar_longitude};
use crate::consts::{
    AUTUMN, EQUINOX_SEARCH_DAYS, FRENCH_COMPLEMENTARY_MONTH, FRENCH_EPOCH, FRENCH_MONTH_DAYS,
    MEAN_TROPICAL_YEAR, MIN_DAY, PARIS_LONGITUDE,
};
use crate::prelude::*;
use crate::{Calendar, CanonicalDay, DateError, FromCanonical, ToCanonical};

/// A date in the French Revolutionary calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{:02}-{:02}", "year", "month", "day")]
pub struct FrenchDate {
    year: i64,
    month: u8,
    day: u8,
}

impl FrenchDate {
    /// Creates a French Revolutionary date. Month 13 holds the
    /// complementary days.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` for a month outside `1..=13` and
    /// `DateError::InvalidDay` for day 31 of a regular month, or for day 6 of
    /// the complementary days in a common year.
    pub fn new(year: i64, month: u8, day: u8) -> Result<Self, DateError> {
        if month == 0 || month > FRENCH_COMPLEMENTARY_MONTH {
            return Err(DateError::InvalidMonth {
                calendar: Calendar::French,
                year,
                month,
            });
        }
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(DateError::InvalidDay {
                calendar: Calendar::French,
                year,
                month,
                day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year of the Republic
    #[inline]
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Returns the month, `1..=13`
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

impl ToCanonical for FrenchDate {
    fn to_canonical(&self) -> CanonicalDay {
        new_year(self.year) + FRENCH_MONTH_DAYS * i64::from(self.month - 1) + i64::from(self.day)
            - 1
    }
}

impl FromCanonical for FrenchDate {
    fn from_canonical(day: CanonicalDay) -> Self {
        let new_year = new_year_on_or_before(day.get());
        let elapsed_years = ((new_year - FRENCH_EPOCH) as f64 / MEAN_TROPICAL_YEAR).round();
        let day_of_year = day.get() - new_year;
        Self {
            year: elapsed_years as i64 + 1,
            month: (day_of_year / FRENCH_MONTH_DAYS + 1) as u8,
            day: (day_of_year % FRENCH_MONTH_DAYS + 1) as u8,
        }
    }
}

/// Canonical day of 1 Vendemiaire of `year`.
pub fn new_year(year: i64) -> CanonicalDay {
    // Half a year past the mean equinox lands in the following spring; the
    // search then steps back to the equinox that opened `year`.
    let spring = FRENCH_EPOCH as f64 + AUTUMN + MEAN_TROPICAL_YEAR * (year - 1) as f64;
    CanonicalDay::new(new_year_on_or_before(spring.floor() as i64))
}

/// Returns true if `year` has six complementary days.
pub fn is_leap_year(year: i64) -> bool {
    new_year(year + 1) - new_year(year) > 365
}

/// Returns the number of days in `month` of `year`.
pub fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= FRENCH_COMPLEMENTARY_MONTH);

    if month < FRENCH_COMPLEMENTARY_MONTH {
        FRENCH_MONTH_DAYS as u8
    } else if is_leap_year(year) {
        6
    } else {
        5
    }
}

/// Universal time of the midnight ending `date` in Paris local mean time.
fn midnight_in_paris(date: i64) -> f64 {
    (date + 1) as f64 - PARIS_LONGITUDE / 360.0
}

/// First day of the French year containing `date`.
fn new_year_on_or_before(date: i64) -> i64 {
    let estimate = estimate_prior_solar_longitude(AUTUMN, midnight_in_paris(date));
    let start = estimate.floor() as i64 - 1;
    let found = (start..)
        .take(EQUINOX_SEARCH_DAYS)
        .find(|&day| (AUTUMN..AUTUMN + 90.0).contains(&solar_longitude(midnight_in_paris(day))));
    found.unwrap_or_else(|| {
        tracing::warn!(date, estimate, "equinox search exhausted, using estimate");
        estimate.floor() as i64
    })
}
