//! Proleptic Julian calendar.

use std::str::FromStr;

use crate::canonical::{PaddedYear, astronomical_year, historical_year};
use crate::consts::{
    DAYS_IN_4_YEARS, DAYS_IN_COMMON_YEAR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, JANUARY,
    JULIAN_EPOCH, LEAP_YEAR_CYCLE, MARCH, MAX_MONTH, MIN_DAY,
};
use crate::gregorian::{month_from_prior_days, month_offset, parse_ymd, validate_ymd};
use crate::prelude::*;
use crate::{Calendar, CanonicalDay, DateError, FromCanonical, ToCanonical};

/// A date in the proleptic Julian calendar, with historical year numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{:02}-{:02}", "PaddedYear(*year)", "month", "day")]
pub struct JulianDate {
    year: i64,
    month: u8,
    day: u8,
}

impl JulianDate {
    /// Creates a Julian date.
    ///
    /// # Errors
    /// Returns `DateError` if the year is 0 or the month or day is out of range.
    pub fn new(year: i64, month: u8, day: u8) -> Result<Self, DateError> {
        let (year, month, day) = validate_ymd(Calendar::Julian, year, month, day, days_in_month)?;
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

impl ToCanonical for JulianDate {
    fn to_canonical(&self) -> CanonicalDay {
        CanonicalDay::new(fixed_from_astronomical(
            astronomical_year(self.year),
            self.month,
            self.day,
        ))
    }
}

impl FromCanonical for JulianDate {
    fn from_canonical(day: CanonicalDay) -> Self {
        let date = day.get();
        let year = (4 * (date - JULIAN_EPOCH) + 1464).div_euclid(DAYS_IN_4_YEARS);
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

impl FromStr for JulianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s, Calendar::Julian)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for JulianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JulianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Returns true if the (historical) `year` is a Julian leap year.
///
/// Every fourth astronomical year is leap, so 1 BCE, 5 BCE, ... are leap.
pub const fn is_leap_year(year: i64) -> bool {
    is_leap_astronomical(astronomical_year(year))
}

const fn is_leap_astronomical(year: i64) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == 0
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

const fn fixed_from_astronomical(year: i64, month: u8, day: u8) -> i64 {
    let prior_years = year - 1;
    JULIAN_EPOCH - 1
        + DAYS_IN_COMMON_YEAR * prior_years
        + prior_years.div_euclid(LEAP_YEAR_CYCLE)
        + month_offset(month, is_leap_astronomical(year))
        + day as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GregorianDate;

    fn julian_of(year: i64, month: u8, day: u8) -> JulianDate {
        let day = GregorianDate::new(year, month, day).unwrap().to_canonical();
        JulianDate::from_canonical(day)
    }

    #[test]
    fn test_epoch() {
        assert_eq!(JulianDate::new(1, 1, 1).unwrap().to_canonical().get(), -1);
        assert_eq!(
            JulianDate::from_canonical(CanonicalDay::new(-2)),
            JulianDate::new(-1, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_gregorian_correspondence() {
        assert_eq!(julian_of(1970, 1, 1).to_string(), "1969-12-19");
        assert_eq!(julian_of(2000, 1, 1).to_string(), "1999-12-19");
        assert_eq!(julian_of(1, 1, 1).to_string(), "0001-01-03");
        // Gregorian reform: 15 October 1582 followed 4 October 1582 (Julian)
        assert_eq!(julian_of(1582, 10, 15).to_string(), "1582-10-05");
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(-1));
        assert!(!is_leap_year(-2));
        assert_eq!(days_in_month(1900, 2), 29);
        assert!(JulianDate::new(1900, 2, 29).is_ok());
        assert!(JulianDate::new(1901, 2, 29).is_err());
    }

    #[test]
    fn test_every_valid_date_round_trips() {
        for year in (-400..400).chain(1580..1620).filter(|&year| year != 0) {
            for month in 1..=MAX_MONTH {
                for day in MIN_DAY..=days_in_month(year, month) {
                    let date = JulianDate::new(year, month, day).unwrap();
                    assert_eq!(JulianDate::from_canonical(date.to_canonical()), date);
                }
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_days_in_month_rejects_month_thirteen() {
        days_in_month(2024, 13);
    }

    #[test]
    fn test_round_trip() {
        for day in (-800_000..800_000).step_by(997) {
            let date = JulianDate::from_canonical(CanonicalDay::new(day));
            assert_eq!(date.to_canonical().get(), day, "{date}");
        }
    }

    #[test]
    fn test_parse_and_serde() {
        let date: JulianDate = "-0044-03-15".parse().unwrap();
        assert_eq!(date.year(), -44);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"-0044-03-15\"");
        let parsed: JulianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
    }
}
