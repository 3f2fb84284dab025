//! The canonical day count every conversion passes through.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::DAYS_IN_WEEK;
use crate::prelude::*;

/// Whole days elapsed since the epoch.
///
/// Day 1 is 1 January of year 1 in the proleptic Gregorian calendar (a
/// Monday). Days before it are zero or negative.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CanonicalDay(i64);

impl CanonicalDay {
    /// Creates a canonical day from its raw count.
    #[inline]
    pub const fn new(day: i64) -> Self {
        Self(day)
    }

    /// Returns the raw day count.
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the day of the week.
    ///
    /// ```
    /// use calcal::{CanonicalDay, Weekday};
    ///
    /// assert_eq!(CanonicalDay::new(1).weekday(), Weekday::Monday);
    /// ```
    pub const fn weekday(self) -> Weekday {
        Weekday::from_index(self.0.rem_euclid(DAYS_IN_WEEK))
    }

    /// Latest day on or before `self` that falls on `weekday`.
    pub(crate) const fn weekday_on_or_before(self, weekday: Weekday) -> Self {
        let shift = (self.0 - weekday as i64).rem_euclid(DAYS_IN_WEEK);
        Self(self.0 - shift)
    }
}

impl Add<i64> for CanonicalDay {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Sub<i64> for CanonicalDay {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl Sub for CanonicalDay {
    type Output = i64;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

/// Day of the week, discriminants counted from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    const fn from_index(index: i64) -> Self {
        match index {
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            6 => Self::Saturday,
            _ => Self::Sunday,
        }
    }

    /// ISO 8601 numbering, `1..=7` for Monday through Sunday.
    pub const fn iso_number(self) -> u8 {
        match self {
            Self::Sunday => 7,
            other => other as u8,
        }
    }
}

/// Conversion out of the canonical day count.
pub trait FromCanonical: Sized {
    /// Returns the date that falls on `day`.
    fn from_canonical(day: CanonicalDay) -> Self;
}

/// Conversion into the canonical day count.
///
/// Calendars whose dates name a unique day implement this. The Haab and
/// Tzolkin cycles do not.
pub trait ToCanonical {
    /// Returns the canonical day of this date.
    fn to_canonical(&self) -> CanonicalDay;
}

/// Signed year padded to four digits, with a leading `-` before the common era.
pub(crate) struct PaddedYear(pub i64);

impl fmt::Display for PaddedYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-{:04}", self.0.unsigned_abs())
        } else {
            write!(f, "{:04}", self.0)
        }
    }
}

/// Historical year numbering (no year 0) to astronomical numbering.
pub(crate) const fn astronomical_year(year: i64) -> i64 {
    if year < 0 { year + 1 } else { year }
}

/// Astronomical year numbering back to historical numbering.
pub(crate) const fn historical_year(year: i64) -> i64 {
    if year <= 0 { year - 1 } else { year }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_of_epoch() {
        assert_eq!(CanonicalDay::new(1).weekday(), Weekday::Monday);
        assert_eq!(CanonicalDay::new(0).weekday(), Weekday::Sunday);
        assert_eq!(CanonicalDay::new(-1).weekday(), Weekday::Saturday);
        // 1970-01-01 was a Thursday
        assert_eq!(CanonicalDay::new(719_163).weekday(), Weekday::Thursday);
    }

    #[test]
    fn test_iso_number() {
        assert_eq!(Weekday::Monday.iso_number(), 1);
        assert_eq!(Weekday::Saturday.iso_number(), 6);
        assert_eq!(Weekday::Sunday.iso_number(), 7);
    }

    #[test]
    fn test_weekday_on_or_before() {
        let thursday = CanonicalDay::new(719_163);
        assert_eq!(thursday.weekday_on_or_before(Weekday::Thursday), thursday);
        assert_eq!(
            thursday.weekday_on_or_before(Weekday::Sunday),
            CanonicalDay::new(719_159)
        );
        assert_eq!(
            thursday.weekday_on_or_before(Weekday::Friday),
            CanonicalDay::new(719_157)
        );
    }

    #[test]
    fn test_arithmetic() {
        let day = CanonicalDay::new(10);
        assert_eq!(day + 5, CanonicalDay::new(15));
        assert_eq!(day - 15, CanonicalDay::new(-5));
        assert_eq!(CanonicalDay::new(15) - day, 5);
        assert!(CanonicalDay::new(-3) < day);
    }

    #[test]
    fn test_padded_year() {
        assert_eq!(PaddedYear(1970).to_string(), "1970");
        assert_eq!(PaddedYear(7).to_string(), "0007");
        assert_eq!(PaddedYear(0).to_string(), "0000");
        assert_eq!(PaddedYear(-1).to_string(), "-0001");
        assert_eq!(PaddedYear(-12345).to_string(), "-12345");
    }

    #[test]
    fn test_year_numbering() {
        assert_eq!(astronomical_year(1), 1);
        assert_eq!(astronomical_year(-1), 0);
        assert_eq!(astronomical_year(-44), -43);
        assert_eq!(historical_year(0), -1);
        assert_eq!(historical_year(-43), -44);
        assert_eq!(historical_year(2024), 2024);
    }

    #[test]
    fn test_serde_transparent() {
        let day = CanonicalDay::new(719_163);
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "719163");
        let parsed: CanonicalDay = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, day);
    }

    #[test]
    fn test_display_and_conversions() {
        assert_eq!(CanonicalDay::new(-42).to_string(), "-42");
        let day: CanonicalDay = 5_i64.into();
        let raw: i64 = day.into();
        assert_eq!(raw, 5);
    }
}
