//! Old Hindu solar and lunisolar calendars (Aryabhata's mean reckoning).
//!
//! Years count from the Kali Yuga epoch. Days are reckoned at mean sunrise,
//! a quarter day after midnight. Every duration is an exact multiple of
//! `1 / HINDU_UNITS_PER_DAY` days, so the arithmetic below stays in `i128`
//! and rounds to whole days only at the end.
//!
//! Results may differ by a day from historical almanacs, which used true
//! rather than mean motions.

use std::fmt;

use crate::consts::{
    ARYA_LEAP_THRESHOLD, ARYA_LUNAR_DAY, ARYA_LUNAR_MONTH, ARYA_SOLAR_MONTH, ARYA_SOLAR_YEAR,
    HINDU_EPOCH, HINDU_SUNRISE, HINDU_UNITS_PER_DAY, MAX_MONTH, MIN_DAY,
};
use crate::{Calendar, CanonicalDay, DateError, FromCanonical, ToCanonical};

const MAX_SOLAR_DAY: u8 = 31;
const LUNAR_DAYS_PER_MONTH: i128 = 30;

/// A date in the Old Hindu solar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OldHinduSolarDate {
    year: i64,
    month: u8,
    day: u8,
}

impl OldHinduSolarDate {
    /// Creates an Old Hindu solar date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay` for fields
    /// out of range, and `DateError::Nonexistent` for a day past the end of
    /// its month (solar months have 30 or 31 days).
    pub fn new(year: i64, month: u8, day: u8) -> Result<Self, DateError> {
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth {
                calendar: Calendar::OldHinduSolar,
                year,
                month,
            });
        }
        if day < MIN_DAY || day > MAX_SOLAR_DAY {
            return Err(DateError::InvalidDay {
                calendar: Calendar::OldHinduSolar,
                year,
                month,
                day,
            });
        }
        let date = Self { year, month, day };
        if Self::from_canonical(date.to_canonical()) != date {
            return Err(DateError::Nonexistent {
                calendar: Calendar::OldHinduSolar,
                date: date.to_string(),
            });
        }
        Ok(date)
    }

    /// Returns the year of the Kali Yuga
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

impl fmt::Display for OldHinduSolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl ToCanonical for OldHinduSolarDate {
    fn to_canonical(&self) -> CanonicalDay {
        let position = i128::from(HINDU_EPOCH) * HINDU_UNITS_PER_DAY
            + i128::from(self.year) * ARYA_SOLAR_YEAR
            + i128::from(self.month - 1) * ARYA_SOLAR_MONTH
            + i128::from(self.day - 1) * HINDU_UNITS_PER_DAY
            - HINDU_SUNRISE;
        CanonicalDay::new(ceil_div(position, HINDU_UNITS_PER_DAY))
    }
}

impl FromCanonical for OldHinduSolarDate {
    fn from_canonical(day: CanonicalDay) -> Self {
        let sun = sunrise(day);
        Self {
            year: sun.div_euclid(ARYA_SOLAR_YEAR) as i64,
            month: (sun.div_euclid(ARYA_SOLAR_MONTH).rem_euclid(12) + 1) as u8,
            day: (sun.rem_euclid(ARYA_SOLAR_MONTH) / HINDU_UNITS_PER_DAY + 1) as u8,
        }
    }
}

/// A date in the Old Hindu lunisolar calendar.
///
/// A lunar month takes the number of the solar month in which it ends. When
/// two new moons fall in one solar month, the first lunar month is a leap
/// (adhika) month and carries `leap = true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OldHinduLunarDate {
    year: i64,
    month: u8,
    leap: bool,
    day: u8,
}

impl OldHinduLunarDate {
    /// Creates an Old Hindu lunar date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay` for fields
    /// out of range, and `DateError::Nonexistent` for a leap month that does
    /// not occur in `year` or a lunar day that no sunrise falls in.
    pub fn new(year: i64, month: u8, leap: bool, day: u8) -> Result<Self, DateError> {
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth {
                calendar: Calendar::OldHinduLunar,
                year,
                month,
            });
        }
        if day < MIN_DAY || i128::from(day) > LUNAR_DAYS_PER_MONTH {
            return Err(DateError::InvalidDay {
                calendar: Calendar::OldHinduLunar,
                year,
                month,
                day,
            });
        }
        let date = Self {
            year,
            month,
            leap,
            day,
        };
        if Self::from_canonical(date.to_canonical()) != date {
            tracing::debug!(%date, "lunar date has no sunrise");
            return Err(DateError::Nonexistent {
                calendar: Calendar::OldHinduLunar,
                date: date.to_string(),
            });
        }
        Ok(date)
    }

    /// Returns the year of the Kali Yuga
    #[inline]
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Returns the month, `1..=12`
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns true in an intercalated month
    #[inline]
    pub const fn leap(&self) -> bool {
        self.leap
    }

    /// Returns the lunar day, `1..=30`
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns true if `year` contains a leap month.
    pub const fn is_leap_year(year: i64) -> bool {
        (year as i128 * ARYA_SOLAR_YEAR - ARYA_SOLAR_MONTH).rem_euclid(ARYA_LUNAR_MONTH)
            >= ARYA_LEAP_THRESHOLD
    }
}

impl fmt::Display for OldHinduLunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leap = if self.leap { "L" } else { "" };
        write!(f, "{}-{leap}{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl ToCanonical for OldHinduLunarDate {
    fn to_canonical(&self) -> CanonicalDay {
        // Mina is the last solar month of the previous year
        let mina = (i128::from(self.year) * 12 - 1) * ARYA_SOLAR_MONTH;
        let lunar_new_year = ARYA_LUNAR_MONTH * (mina.div_euclid(ARYA_LUNAR_MONTH) + 1);
        // Regular months numbered from here on come after the leap month
        let after_leap = ceil_div(lunar_new_year - mina, ARYA_SOLAR_MONTH - ARYA_LUNAR_MONTH);
        let month = i128::from(self.month);
        let months_elapsed = if !self.leap && after_leap <= i64::from(self.month) {
            month
        } else {
            month - 1
        };
        let position = i128::from(HINDU_EPOCH) * HINDU_UNITS_PER_DAY
            + lunar_new_year
            + ARYA_LUNAR_MONTH * months_elapsed
            + i128::from(self.day - 1) * ARYA_LUNAR_DAY
            - HINDU_SUNRISE;
        CanonicalDay::new(ceil_div(position, HINDU_UNITS_PER_DAY))
    }
}

impl FromCanonical for OldHinduLunarDate {
    fn from_canonical(day: CanonicalDay) -> Self {
        let sun = sunrise(day);
        let new_moon = sun - sun.rem_euclid(ARYA_LUNAR_MONTH);
        let into_solar_month = new_moon.rem_euclid(ARYA_SOLAR_MONTH);
        let leap = into_solar_month > 0 && into_solar_month <= ARYA_SOLAR_MONTH - ARYA_LUNAR_MONTH;
        Self {
            year: ceil_div(new_moon + ARYA_SOLAR_MONTH, ARYA_SOLAR_YEAR) - 1,
            month: (ceil_div(new_moon, ARYA_SOLAR_MONTH).rem_euclid(12) + 1) as u8,
            leap,
            day: (sun.div_euclid(ARYA_LUNAR_DAY).rem_euclid(LUNAR_DAYS_PER_MONTH) + 1) as u8,
        }
    }
}

/// Sunrise on `day`, in units since the epoch's midnight.
fn sunrise(day: CanonicalDay) -> i128 {
    i128::from(day.get() - HINDU_EPOCH) * HINDU_UNITS_PER_DAY + HINDU_SUNRISE
}

/// Ceiling of `numerator / denominator` for a positive denominator.
fn ceil_div(numerator: i128, denominator: i128) -> i64 {
    -((-numerator).div_euclid(denominator)) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GregorianDate;

    fn day_of(year: i64, month: u8, day: u8) -> CanonicalDay {
        GregorianDate::new(year, month, day).unwrap().to_canonical()
    }

    #[test]
    fn test_epoch() {
        let epoch = CanonicalDay::new(HINDU_EPOCH);
        assert_eq!(OldHinduSolarDate::from_canonical(epoch).to_string(), "0-01-01");
        assert_eq!(OldHinduLunarDate::from_canonical(epoch).to_string(), "0-01-01");
        assert_eq!(crate::JulianDate::from_canonical(epoch).to_string(), "-3102-02-18");
    }

    #[test]
    fn test_known_dates() {
        struct TestCase {
            gregorian: (i64, u8, u8),
            solar: &'static str,
            lunar: &'static str,
        }

        let cases = [
            TestCase {
                gregorian: (1970, 1, 1),
                solar: "5070-09-18",
                lunar: "5070-09-24",
            },
            TestCase {
                gregorian: (2000, 1, 1),
                solar: "5100-09-17",
                lunar: "5100-09-25",
            },
            TestCase {
                gregorian: (2012, 12, 21),
                solar: "5113-09-07",
                lunar: "5113-09-09",
            },
            TestCase {
                gregorian: (2024, 3, 15),
                solar: "5124-11-30",
                lunar: "5124-12-06",
            },
            TestCase {
                gregorian: (2001, 11, 16),
                solar: "5102-08-02",
                lunar: "5102-L09-01",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.gregorian;
            let day = day_of(y, m, d);
            assert_eq!(OldHinduSolarDate::from_canonical(day).to_string(), case.solar);
            assert_eq!(OldHinduLunarDate::from_canonical(day).to_string(), case.lunar);
        }
    }

    #[test]
    fn test_expunged_lunar_day() {
        assert_eq!(
            OldHinduLunarDate::from_canonical(day_of(2000, 1, 15)).to_string(),
            "5100-10-09"
        );
        assert_eq!(
            OldHinduLunarDate::from_canonical(day_of(2000, 1, 16)).to_string(),
            "5100-10-11"
        );
        assert!(matches!(
            OldHinduLunarDate::new(5100, 10, false, 10),
            Err(DateError::Nonexistent { .. })
        ));
        assert!(OldHinduLunarDate::new(5100, 10, false, 11).is_ok());
    }

    #[test]
    fn test_leap_month_exists_only_in_leap_years() {
        assert!(OldHinduLunarDate::is_leap_year(5102));
        assert!(OldHinduLunarDate::new(5102, 9, true, 1).is_ok());
        assert!(!OldHinduLunarDate::is_leap_year(5101));
        assert!(OldHinduLunarDate::new(5101, 9, true, 1).is_err());
    }

    #[test]
    fn test_leap_years_match_leap_months() {
        let start = OldHinduSolarDate::new(5090, 1, 1).unwrap().to_canonical().get();
        let end = OldHinduSolarDate::new(5130, 1, 1).unwrap().to_canonical().get();
        let mut years_with_leap_month = std::collections::BTreeSet::new();
        for day in start..end {
            let date = OldHinduLunarDate::from_canonical(CanonicalDay::new(day));
            if date.leap() {
                years_with_leap_month.insert(date.year());
            }
        }
        for year in 5091..5129 {
            assert_eq!(
                OldHinduLunarDate::is_leap_year(year),
                years_with_leap_month.contains(&year),
                "year {year}"
            );
        }
    }

    #[test]
    fn test_solar_validation() {
        assert!(matches!(
            OldHinduSolarDate::new(5100, 13, 1),
            Err(DateError::InvalidMonth { .. })
        ));
        assert!(matches!(
            OldHinduSolarDate::new(5100, 1, 32),
            Err(DateError::InvalidDay { .. })
        ));
        let month_lengths: Vec<u8> = (1..=12)
            .map(|month| {
                (28..=31)
                    .rev()
                    .find(|&day| OldHinduSolarDate::new(5100, month, day).is_ok())
                    .unwrap()
            })
            .collect();
        assert!(month_lengths.iter().all(|&length| length == 30 || length == 31));
        assert_eq!(month_lengths.iter().map(|&l| i64::from(l)).sum::<i64>(), {
            let start = OldHinduSolarDate::new(5100, 1, 1).unwrap().to_canonical();
            let end = OldHinduSolarDate::new(5101, 1, 1).unwrap().to_canonical();
            end - start
        });
    }

    #[test]
    fn test_round_trip() {
        for day in (-3_700_000..3_700_000).step_by(997) {
            let day = CanonicalDay::new(day);
            let solar = OldHinduSolarDate::from_canonical(day);
            assert_eq!(solar.to_canonical(), day, "{solar}");
            let lunar = OldHinduLunarDate::from_canonical(day);
            assert_eq!(lunar.to_canonical(), day, "{lunar}");
        }
    }

    #[test]
    fn test_ceil_div() {
        assert_eq!(ceil_div(7, 2), 4);
        assert_eq!(ceil_div(6, 2), 3);
        assert_eq!(ceil_div(-7, 2), -3);
        assert_eq!(ceil_div(0, 5), 0);
    }
}
