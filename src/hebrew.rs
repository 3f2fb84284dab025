//! Hebrew lunisolar calendar.
//!
//! Months are numbered from Nisan (1); the year begins on 1 Tishri (7). Leap
//! years add a thirteenth month, Adar II. The start of each year is derived
//! from the molad (mean conjunction) of Tishri, postponed by the four
//! deferral rules.

use crate::consts::{
    BETUTAKPAT_PARTS, DAYS_IN_WEEK, GATARAD_PARTS, HEBREW_ELAPSED_OFFSET, HEBREW_MEAN_YEAR_DEN,
    HEBREW_MEAN_YEAR_NUM, METONIC_CYCLE_YEARS, MIN_DAY, MOLAD_BAHARAD_PARTS, MOLAD_ZAKEN_PARTS,
    MONTH_EXCESS_PARTS, PARTS_PER_DAY,
};
use crate::prelude::*;
use crate::{Calendar, CanonicalDay, DateError, FromCanonical, ToCanonical};

/// Month number of Nisan
pub const NISAN: u8 = 1;
/// Month number of Heshvan
pub const HESHVAN: u8 = 8;
/// Month number of Kislev
pub const KISLEV: u8 = 9;
/// Month number of Tishri, the first month of the year
pub const TISHRI: u8 = 7;
/// Month number of Adar (Adar I in leap years)
pub const ADAR: u8 = 12;
/// Month number of Adar II, present only in leap years
pub const ADAR_II: u8 = 13;

/// A date in the Hebrew calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}-{:02}-{:02}", "year", "month", "day")]
pub struct HebrewDate {
    year: i64,
    month: u8,
    day: u8,
}

impl HebrewDate {
    /// Creates a Hebrew date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` for month 13 in a common year or a
    /// month outside `1..=13`, and `DateError::InvalidDay` if the day
    /// exceeds that month's length in `year`.
    pub fn new(year: i64, month: u8, day: u8) -> Result<Self, DateError> {
        if month == 0 || month > months_in_year(year) {
            return Err(DateError::InvalidMonth {
                calendar: Calendar::Hebrew,
                year,
                month,
            });
        }
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(DateError::InvalidDay {
                calendar: Calendar::Hebrew,
                year,
                month,
                day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year (Anno Mundi)
    #[inline]
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Returns the month, numbered from Nisan
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

impl ToCanonical for HebrewDate {
    fn to_canonical(&self) -> CanonicalDay {
        CanonicalDay::new(fixed_from_hebrew(self.year, self.month, self.day))
    }
}

impl FromCanonical for HebrewDate {
    fn from_canonical(day: CanonicalDay) -> Self {
        let date = day.get();
        let epoch = new_year(1).get();

        let elapsed = i128::from(date) - i128::from(epoch);
        let mut year = (elapsed * i128::from(HEBREW_MEAN_YEAR_DEN))
            .div_euclid(i128::from(HEBREW_MEAN_YEAR_NUM)) as i64
            + 1;
        let mut corrections = 0;
        while date < new_year(year).get() {
            year -= 1;
            corrections += 1;
        }
        while date >= new_year(year + 1).get() {
            year += 1;
            corrections += 1;
        }
        if corrections > 0 {
            tracing::trace!(date, year, corrections, "corrected hebrew year estimate");
        }

        let mut month = if date < fixed_from_hebrew(year, NISAN, MIN_DAY) {
            TISHRI
        } else {
            NISAN
        };
        while date > fixed_from_hebrew(year, month, days_in_month(year, month)) {
            month += 1;
        }

        let day_of_month = date - fixed_from_hebrew(year, month, MIN_DAY) + 1;
        Self {
            year,
            month,
            day: day_of_month as u8,
        }
    }
}

/// Returns true if `year` has thirteen months.
pub const fn is_leap_year(year: i64) -> bool {
    (7 * year + 1).rem_euclid(METONIC_CYCLE_YEARS) < 7
}

/// Returns 13 in leap years and 12 otherwise.
pub const fn months_in_year(year: i64) -> u8 {
    if is_leap_year(year) { ADAR_II } else { ADAR }
}

/// Canonical day of 1 Tishri of `year`.
pub fn new_year(year: i64) -> CanonicalDay {
    CanonicalDay::new(elapsed_days(year) + HEBREW_ELAPSED_OFFSET + 1)
}

/// Number of days in `year`: 353 to 355, or 383 to 385 in leap years.
pub fn days_in_year(year: i64) -> i64 {
    elapsed_days(year + 1) - elapsed_days(year)
}

/// Returns the number of days in `month` of `year`.
pub fn days_in_month(year: i64, month: u8) -> u8 {
    let short = match month {
        2 | 4 | 6 | 10 | ADAR_II => true,
        ADAR => !is_leap_year(year),
        HESHVAN => !has_long_heshvan(year),
        KISLEV => has_short_kislev(year),
        _ => false,
    };
    if short { 29 } else { 30 }
}

/// Heshvan has 30 days in complete years (355 or 385 days).
fn has_long_heshvan(year: i64) -> bool {
    days_in_year(year) % 10 == 5
}

/// Kislev has 29 days in deficient years (353 or 383 days).
fn has_short_kislev(year: i64) -> bool {
    days_in_year(year) % 10 == 3
}

/// Days from the Sunday before the epoch to 1 Tishri of `year`, counting that
/// Sunday as day 0.
fn elapsed_days(year: i64) -> i64 {
    let months_elapsed = (235 * year - 234).div_euclid(METONIC_CYCLE_YEARS);
    // Molad of Tishri: whole days since the epoch week plus parts into the
    // day, which begins at 6 pm. Parts outgrow i64 past about 5e13 years.
    let parts_elapsed =
        i128::from(MOLAD_BAHARAD_PARTS) + i128::from(MONTH_EXCESS_PARTS) * i128::from(months_elapsed);
    let parts_per_day = i128::from(PARTS_PER_DAY);
    let molad_day = 1 + 29 * months_elapsed + parts_elapsed.div_euclid(parts_per_day) as i64;
    let molad_parts = parts_elapsed.rem_euclid(parts_per_day) as i64;
    let weekday = molad_day.rem_euclid(DAYS_IN_WEEK);

    let postponed = molad_parts >= MOLAD_ZAKEN_PARTS
        || (weekday == 2 && molad_parts >= GATARAD_PARTS && !is_leap_year(year))
        || (weekday == 1 && molad_parts >= BETUTAKPAT_PARTS && is_leap_year(year - 1));
    let day = if postponed { molad_day + 1 } else { molad_day };

    // Lo ADU Rosh: never on Sunday, Wednesday or Friday.
    if matches!(day.rem_euclid(DAYS_IN_WEEK), 0 | 3 | 5) {
        day + 1
    } else {
        day
    }
}

fn fixed_from_hebrew(year: i64, month: u8, day: u8) -> i64 {
    let months_before: i64 = if month < TISHRI {
        (TISHRI..=months_in_year(year))
            .chain(NISAN..month)
            .map(|m| i64::from(days_in_month(year, m)))
            .sum()
    } else {
        (TISHRI..month)
            .map(|m| i64::from(days_in_month(year, m)))
            .sum()
    };
    new_year(year).get() - 1 + months_before + i64::from(day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GregorianDate;

    fn hebrew_of(year: i64, month: u8, day: u8) -> HebrewDate {
        HebrewDate::from_canonical(GregorianDate::new(year, month, day).unwrap().to_canonical())
    }

    #[test]
    fn test_epoch() {
        assert_eq!(new_year(1).get(), -1_373_427);
        assert_eq!(
            HebrewDate::from_canonical(CanonicalDay::new(-1_373_427)),
            HebrewDate::new(1, TISHRI, 1).unwrap()
        );
    }

    #[test]
    fn test_known_dates() {
        assert_eq!(hebrew_of(1970, 1, 1).to_string(), "5730-10-23");
        assert_eq!(hebrew_of(2000, 1, 1).to_string(), "5760-10-23");
        assert_eq!(hebrew_of(2024, 3, 15).to_string(), "5784-13-05");
        assert_eq!(hebrew_of(2023, 9, 16).to_string(), "5784-07-01");
        assert_eq!(hebrew_of(2024, 10, 3).to_string(), "5785-07-01");
    }

    #[test]
    fn test_new_year_never_on_forbidden_weekdays() {
        use crate::Weekday;
        for year in 5600..5900 {
            let weekday = new_year(year).weekday();
            assert!(
                !matches!(weekday, Weekday::Sunday | Weekday::Wednesday | Weekday::Friday),
                "Rosh Hashanah {year} on {weekday}"
            );
        }
    }

    #[test]
    fn test_year_lengths() {
        assert_eq!(days_in_year(5783), 355);
        assert_eq!(days_in_year(5784), 383);
        assert_eq!(days_in_year(5785), 355);
        assert_eq!(days_in_year(5760), 385);
        for year in 1..6000 {
            let length = days_in_year(year);
            let allowed: &[i64] = if is_leap_year(year) {
                &[383, 384, 385]
            } else {
                &[353, 354, 355]
            };
            assert!(allowed.contains(&length), "year {year} has {length} days");
        }
    }

    #[test]
    fn test_month_lengths_sum_to_year_length() {
        for year in 5700..5800 {
            let total: i64 = (1..=months_in_year(year))
                .map(|m| i64::from(days_in_month(year, m)))
                .sum();
            assert_eq!(total, days_in_year(year), "year {year}");
        }
    }

    #[test]
    fn test_seven_leap_years_in_any_nineteen() {
        for start in -100..400 {
            let leaps = (start..start + 19).filter(|&y| is_leap_year(y)).count();
            assert_eq!(leaps, 7, "window starting at {start}");
        }
    }

    #[test]
    fn test_invalid_dates() {
        assert!(matches!(
            HebrewDate::new(5783, ADAR_II, 1),
            Err(DateError::InvalidMonth { month: 13, .. })
        ));
        assert!(HebrewDate::new(5784, ADAR_II, 29).is_ok());
        assert!(matches!(
            HebrewDate::new(5784, ADAR_II, 30),
            Err(DateError::InvalidDay { .. })
        ));
        assert!(HebrewDate::new(5784, 0, 1).is_err());
        // 5784 is a deficient leap year (383 days), so Kislev has 29 days
        assert!(HebrewDate::new(5784, KISLEV, 30).is_err());
    }

    #[test]
    fn test_round_trip() {
        for day in (-3_700_000..3_700_000).step_by(1013) {
            let date = HebrewDate::from_canonical(CanonicalDay::new(day));
            assert_eq!(date.to_canonical().get(), day, "{date}");
        }
    }

    #[test]
    fn test_every_valid_date_round_trips() {
        for year in (1..40).chain(5700..5860) {
            for month in 1..=months_in_year(year) {
                for day in MIN_DAY..=days_in_month(year, month) {
                    let date = HebrewDate::new(year, month, day).unwrap();
                    assert_eq!(HebrewDate::from_canonical(date.to_canonical()), date);
                }
            }
        }
    }

    #[test]
    fn test_far_from_epoch() {
        let far = HebrewDate::from_canonical(CanonicalDay::new(1_000_000_000_000_000_000));
        assert_eq!(far.year(), 2_737_874_607_537_124);

        for day in [
            1_000_000_000_000_000,
            -1_000_000_000_000_000,
            1_000_000_000_000_000_000,
            -1_000_000_000_000_000_000,
            9_000_000_000_000_000_000,
            -9_000_000_000_000_000_000,
        ] {
            let date = HebrewDate::from_canonical(CanonicalDay::new(day));
            assert_eq!(date.to_canonical().get(), day, "{date}");
        }
    }

    #[test]
    fn test_every_day_of_a_metonic_cycle() {
        let start = new_year(5771).get();
        let end = new_year(5790).get();
        for day in start..end {
            let date = HebrewDate::from_canonical(CanonicalDay::new(day));
            assert_eq!(date.to_canonical().get(), day, "{date}");
        }
    }
}
