//! ISO 8601 week calendar.

use crate::canonical::{PaddedYear, Weekday};
use crate::consts::{DAYS_IN_WEEK, DECEMBER};
use crate::gregorian::{fixed_from_astronomical, year_from_fixed};
use crate::prelude::*;
use crate::{Calendar, CanonicalDay, DateError, FromCanonical, ToCanonical};

/// A date in the ISO week calendar.
///
/// Week 1 is the week holding the year's first Thursday. Years use
/// astronomical numbering, as ISO 8601 does, so year 0 is 1 BCE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-W{:02}-{}", "PaddedYear(*year)", "week", "weekday")]
pub struct IsoDate {
    year: i64,
    week: u8,
    weekday: u8,
}

impl IsoDate {
    /// Creates an ISO week date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidField` if the week does not exist in `year`
    /// or the weekday is outside `1..=7`.
    pub fn new(year: i64, week: u8, weekday: u8) -> Result<Self, DateError> {
        if week == 0 || i64::from(week) > weeks_in_year(year) {
            return Err(DateError::InvalidField {
                calendar: Calendar::Iso,
                field: "week",
                value: i64::from(week),
            });
        }
        if weekday == 0 || i64::from(weekday) > DAYS_IN_WEEK {
            return Err(DateError::InvalidField {
                calendar: Calendar::Iso,
                field: "weekday",
                value: i64::from(weekday),
            });
        }
        Ok(Self {
            year,
            week,
            weekday,
        })
    }

    /// Returns the ISO year
    #[inline]
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Returns the week, `1..=53`
    #[inline]
    pub const fn week(&self) -> u8 {
        self.week
    }

    /// Returns the weekday, `1..=7` for Monday through Sunday
    #[inline]
    pub const fn weekday(&self) -> u8 {
        self.weekday
    }
}

impl ToCanonical for IsoDate {
    fn to_canonical(&self) -> CanonicalDay {
        CanonicalDay::new(fixed_from_iso(self.year, self.week, self.weekday))
    }
}

impl FromCanonical for IsoDate {
    fn from_canonical(day: CanonicalDay) -> Self {
        let date = day.get();
        let approx = year_from_fixed(date - 3);
        let year = if date >= fixed_from_iso(approx + 1, 1, 1) {
            approx + 1
        } else {
            approx
        };
        let week = (date - fixed_from_iso(year, 1, 1)).div_euclid(DAYS_IN_WEEK) + 1;
        Self {
            year,
            week: week as u8,
            weekday: day.weekday().iso_number(),
        }
    }
}

/// Number of ISO weeks (52 or 53) in the astronomical `year`.
pub fn weeks_in_year(year: i64) -> i64 {
    (fixed_from_iso(year + 1, 1, 1) - fixed_from_iso(year, 1, 1)) / DAYS_IN_WEEK
}

fn fixed_from_iso(year: i64, week: u8, weekday: u8) -> i64 {
    // 28 December always lies in the last ISO week of its year.
    let anchor = CanonicalDay::new(fixed_from_astronomical(year - 1, DECEMBER, 28) - 1)
        .weekday_on_or_before(Weekday::Sunday);
    anchor.get() + DAYS_IN_WEEK * i64::from(week) + i64::from(weekday)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GregorianDate;

    fn iso_of(year: i64, month: u8, day: u8) -> IsoDate {
        IsoDate::from_canonical(GregorianDate::new(year, month, day).unwrap().to_canonical())
    }

    #[test]
    fn test_year_week() {
        for ((y, m, d), expected) in [
            ((1980, 12, 28), (1980, 52, 7)),
            ((1980, 12, 31), (1981, 1, 3)),
            ((1981, 1, 1), (1981, 1, 4)),
            ((1981, 1, 4), (1981, 1, 7)),
            ((1981, 1, 5), (1981, 2, 1)),
            ((1981, 12, 31), (1981, 53, 4)),
            ((1982, 1, 1), (1981, 53, 5)),
            ((2000, 1, 1), (1999, 52, 6)),
            ((1970, 1, 1), (1970, 1, 4)),
            ((2021, 1, 3), (2020, 53, 7)),
        ] {
            let date = iso_of(y, m, d);
            assert_eq!(
                (date.year(), date.week(), date.weekday()),
                expected,
                "{y:04}-{m:02}-{d:02}"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(iso_of(2000, 1, 1).to_string(), "1999-W52-6");
        assert_eq!(iso_of(2023, 3, 13).to_string(), "2023-W11-1");
        assert_eq!(iso_of(-1, 12, 31).to_string(), "0000-W52-7");
    }

    #[test]
    fn test_weeks_in_year() {
        assert_eq!(weeks_in_year(2020), 53);
        assert_eq!(weeks_in_year(2021), 52);
        assert_eq!(weeks_in_year(2026), 53);
        assert!(IsoDate::new(2020, 53, 1).is_ok());
        assert!(matches!(
            IsoDate::new(2021, 53, 1),
            Err(DateError::InvalidField { field: "week", .. })
        ));
    }

    #[test]
    fn test_invalid_weekday() {
        assert!(matches!(
            IsoDate::new(2021, 10, 8),
            Err(DateError::InvalidField { field: "weekday", value: 8, .. })
        ));
        assert!(IsoDate::new(2021, 0, 1).is_err());
    }

    #[test]
    fn test_week_one_holds_january_fourth() {
        for year in 1990..2040 {
            let week_one = IsoDate::new(year, 1, 1).unwrap().to_canonical();
            assert_eq!(week_one.weekday(), Weekday::Monday);
            let january_fourth = GregorianDate::new(year, 1, 4).unwrap().to_canonical();
            assert!((0..7).contains(&(january_fourth - week_one)), "{year}");
        }
    }

    #[test]
    fn test_round_trip() {
        for day in (-400_000..1_000_000).step_by(613) {
            let date = IsoDate::from_canonical(CanonicalDay::new(day));
            assert_eq!(date.to_canonical().get(), day, "{date}");
        }
    }
}
