//! Conversions between a canonical day count and eleven calendar systems.
//!
//! Every date type converts to and from [`CanonicalDay`], so any two
//! calendars meet through it:
//!
//! ```
//! use calcal::{Calendar, parse_gregorian};
//!
//! let day = parse_gregorian("2012-12-21").unwrap();
//! assert_eq!(Calendar::MayanLongCount.format(day), "13.0.0.0.0");
//! assert_eq!(Calendar::Hebrew.format(day), "5773-10-08");
//! ```

mod astro;
mod calendar;
mod canonical;
mod consts;
mod prelude;

pub mod french;
pub mod gregorian;
pub mod hebrew;
pub mod hindu;
pub mod islamic;
pub mod iso;
pub mod julian;
pub mod mayan;

pub use calendar::{Calendar, Conversion, convert_all};
pub use canonical::{CanonicalDay, FromCanonical, ToCanonical, Weekday};
pub use consts::{
    CALENDAR_ROUND_CYCLE, DATE_SEPARATOR, DAYS_IN_WEEK, HAAB_CYCLE, MAX_MONTH, MIN_DAY,
    TZOLKIN_CYCLE,
};
pub use french::FrenchDate;
pub use gregorian::GregorianDate;
pub use hebrew::HebrewDate;
pub use hindu::{OldHinduLunarDate, OldHinduSolarDate};
pub use islamic::IslamicDate;
pub use iso::IsoDate;
pub use julian::JulianDate;
pub use mayan::{
    HaabMonth, MayanCalendarRound, MayanHaab, MayanLongCount, MayanTzolkin, TzolkinName,
};

use crate::prelude::*;

/// Why a date could not be built or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Invalid date format: {_0} (expected [-]YYYY-MM-DD)")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: 0 (the {calendar} calendar has no year zero)")]
    YearZero { calendar: Calendar },
    #[display(fmt = "Invalid month {month} for {calendar} year {year}")]
    InvalidMonth {
        calendar: Calendar,
        year: i64,
        month: u8,
    },
    #[display(fmt = "Invalid day {day} for {calendar} month {year}-{month:02}")]
    InvalidDay {
        calendar: Calendar,
        year: i64,
        month: u8,
        day: u8,
    },
    #[display(fmt = "Invalid {calendar} {field}: {value}")]
    InvalidField {
        calendar: Calendar,
        field: &'static str,
        value: i64,
    },
    #[display(fmt = "{calendar} date {date} does not exist")]
    Nonexistent { calendar: Calendar, date: String },
    #[display(fmt = "{tzolkin} never falls on {haab}")]
    IncompatibleRound {
        tzolkin: MayanTzolkin,
        haab: MayanHaab,
    },
}

impl std::error::Error for DateError {}

/// Error type for the calendar-level operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The date was malformed or does not exist.
    #[error(transparent)]
    InvalidDate(#[from] DateError),

    /// No calendar has this identifier.
    #[error("Unknown calendar: {0}")]
    UnknownCalendar(String),
}

/// Canonical day of a proleptic Gregorian date (historical years, no year 0).
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if the date does not exist.
pub fn to_canonical_from_gregorian(
    year: i64,
    month: u8,
    day: u8,
) -> Result<CanonicalDay, CalendarError> {
    Ok(GregorianDate::new(year, month, day)?.to_canonical())
}

/// Parses a `[-]YYYY-MM-DD` Gregorian date into its canonical day.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` for malformed input or a date that
/// does not exist.
pub fn parse_gregorian(text: &str) -> Result<CanonicalDay, CalendarError> {
    let date: GregorianDate = text.parse()?;
    Ok(date.to_canonical())
}

/// Renders `day` in the calendar named by `calendar_id` (see [`Calendar::id`]).
///
/// # Errors
/// Returns `CalendarError::UnknownCalendar` for an unrecognised identifier.
pub fn format_from_canonical(calendar_id: &str, day: CanonicalDay) -> Result<String, CalendarError> {
    let calendar: Calendar = calendar_id.parse()?;
    Ok(calendar.format(day))
}
