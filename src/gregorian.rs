//! Proleptic Gregorian calendar.

use std::str::FromStr;

use crate::canonical::{PaddedYear, astronomical_year, historical_year};
use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_100_YEARS, DAYS_IN_400_YEARS, DAYS_IN_4_YEARS,
    DAYS_IN_COMMON_YEAR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY,
    LEAP_YEAR_CYCLE, MARCH, MAX_MONTH, MIN_DAY,
};
use crate::prelude::*;
use crate::{Calendar, CanonicalDay, DateError, FromCanonical, ToCanonical};

/// A date in the proleptic Gregorian calendar.
///
/// Years use historical numbering: year -1 (1 BCE) is followed directly by
/// year 1. Year 0 does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{:02}-{:02}", "PaddedYear(*year)", "month", "day")]
pub struct GregorianDate {
    year: i64,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a Gregorian date, validating month and day for the given year.
    ///
    /// # Errors
    /// Returns `DateError::YearZero`, `DateError::InvalidMonth` or
    /// `DateError::InvalidDay` for impossible dates.
    pub fn new(year: i64, month: u8, day: u8) -> Result<Self, DateError> {
        let (year, month, day) = validate_ymd(Calendar::Gregorian, year, month, day, days_in_month)?;
        Ok(Self { year, month, day })
    }

    /// Returns the year (negative before the common era)
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

impl ToCanonical for GregorianDate {
    fn to_canonical(&self) -> CanonicalDay {
        CanonicalDay::new(fixed_from_astronomical(
            astronomical_year(self.year),
            self.month,
            self.day,
        ))
    }
}

impl FromCanonical for GregorianDate {
    fn from_canonical(day: CanonicalDay) -> Self {
        let date = day.get();
        let year = year_from_fixed(date);
        let prior_days = date - fixed_from_astronomical(year, JANUARY, MIN_DAY);
        let correction = if date < fixed_from_astronomical(year, MARCH, MIN_DAY) {
            0
        } else if is_leap_astronomical(year) {
            1
        } else {
            2
        };
        let month = month_from_prior_days(prior_days + correction);
        let day_of_month = date - fixed_from_astronomical(year, month, MIN_DAY) + 1;
        Self {
            year: historical_year(year),
            month,
            day: day_of_month as u8,
        }
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    /// Parses `[-]YYYY-MM-DD`, a leading `-` marking a year before the common era.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s, Calendar::Gregorian)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

/// Returns true if the (historical) `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i64) -> bool {
    is_leap_astronomical(astronomical_year(year))
}

pub(crate) const fn is_leap_astronomical(year: i64) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

/// Returns the number of days in `month` of the (historical) `year`.
///
/// # Panics
/// Panics if `month` is greater than 12. Debug builds also reject month 0.
pub const fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Days in the months before `month`, with February counted as 30 days and
/// corrected afterwards by the caller's leap rule.
pub(crate) const fn month_offset(month: u8, leap: bool) -> i64 {
    let month = month as i64;
    let correction = if month <= 2 {
        0
    } else if leap {
        -1
    } else {
        -2
    };
    (367 * month - 362).div_euclid(12) + correction
}

/// Inverts `month_offset` for a day-of-year count already shifted by the
/// February correction.
pub(crate) const fn month_from_prior_days(shifted_prior_days: i64) -> u8 {
    (12 * shifted_prior_days + 373).div_euclid(367) as u8
}

/// Canonical day of an astronomical Gregorian year, month and day.
pub(crate) const fn fixed_from_astronomical(year: i64, month: u8, day: u8) -> i64 {
    let prior_years = year - 1;
    DAYS_IN_COMMON_YEAR * prior_years
        + prior_years.div_euclid(LEAP_YEAR_CYCLE)
        - prior_years.div_euclid(CENTURY_CYCLE)
        + prior_years.div_euclid(GREGORIAN_CYCLE)
        + month_offset(month, is_leap_astronomical(year))
        + day as i64
}

/// Astronomical Gregorian year containing the canonical day `date`.
pub(crate) const fn year_from_fixed(date: i64) -> i64 {
    let d0 = date - 1;
    let n400 = d0.div_euclid(DAYS_IN_400_YEARS);
    let d1 = d0.rem_euclid(DAYS_IN_400_YEARS);
    let n100 = d1.div_euclid(DAYS_IN_100_YEARS);
    let d2 = d1.rem_euclid(DAYS_IN_100_YEARS);
    let n4 = d2.div_euclid(DAYS_IN_4_YEARS);
    let d3 = d2.rem_euclid(DAYS_IN_4_YEARS);
    let n1 = d3.div_euclid(DAYS_IN_COMMON_YEAR);
    let year = GREGORIAN_CYCLE * n400 + CENTURY_CYCLE * n100 + LEAP_YEAR_CYCLE * n4 + n1;
    // The last day of a leap cycle lands on a fourth remainder year.
    if n100 == 4 || n1 == 4 { year } else { year + 1 }
}

/// Validates a year/month/day triple against a month-length function,
/// shared by the Gregorian and Julian calendars.
pub(crate) fn validate_ymd(
    calendar: Calendar,
    year: i64,
    month: u8,
    day: u8,
    month_length: fn(i64, u8) -> u8,
) -> Result<(i64, u8, u8), DateError> {
    if year == 0 {
        return Err(DateError::YearZero { calendar });
    }
    if month == 0 || month > MAX_MONTH {
        return Err(DateError::InvalidMonth {
            calendar,
            year,
            month,
        });
    }
    if day < MIN_DAY || day > month_length(year, month) {
        return Err(DateError::InvalidDay {
            calendar,
            year,
            month,
            day,
        });
    }
    Ok((year, month, day))
}

/// Splits `[-]YYYY-MM-DD` into its numeric components.
pub(crate) fn parse_ymd(s: &str, calendar: Calendar) -> Result<(i64, u8, u8), DateError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(DateError::EmptyInput);
    }

    let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let parts: Vec<&str> = body.split(DATE_SEPARATOR).collect();
    let [year, month, day] = parts.as_slice() else {
        tracing::debug!(input = s, "date string does not have three components");
        return Err(DateError::InvalidFormat(s.to_owned()));
    };

    let year = parse_digits(year, 4, s)?;
    let month = parse_digits(month, 2, s)?;
    let day = parse_digits(day, 2, s)?;

    if year == 0 {
        return Err(DateError::YearZero { calendar });
    }
    let year = if negative { -year } else { year };
    // Two ASCII digits always fit in a u8.
    Ok((year, month as u8, day as u8))
}

/// Parses a fixed-width run of ASCII digits.
fn parse_digits(part: &str, width: usize, input: &str) -> Result<i64, DateError> {
    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        tracing::debug!(input, part, "malformed date component");
        return Err(DateError::InvalidFormat(input.to_owned()));
    }
    part.parse::<i64>()
        .map_err(|_| DateError::InvalidFormat(input.to_owned()))
}
