//! The supported calendars, and dispatch from a canonical day to each of them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::french::FrenchDate;
use crate::hebrew::HebrewDate;
use crate::hindu::{OldHinduLunarDate, OldHinduSolarDate};
use crate::islamic::IslamicDate;
use crate::iso::IsoDate;
use crate::mayan::{MayanHaab, MayanLongCount, MayanTzolkin};
use crate::prelude::*;
use crate::{CalendarError, CanonicalDay, FromCanonical, GregorianDate, JulianDate};

/// The calendars a canonical day can be rendered in.
///
/// Serialized as the camelCase identifier accepted by `FromStr`; displayed
/// as an English name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Calendar {
    #[display(fmt = "Gregorian")]
    Gregorian,
    #[display(fmt = "ISO")]
    Iso,
    #[display(fmt = "Julian")]
    Julian,
    #[display(fmt = "Islamic")]
    Islamic,
    #[display(fmt = "Hebrew")]
    Hebrew,
    #[display(fmt = "Mayan Long Count")]
    MayanLongCount,
    #[display(fmt = "Mayan Haab")]
    MayanHaab,
    #[display(fmt = "Mayan Tzolkin")]
    MayanTzolkin,
    #[display(fmt = "French Revolutionary")]
    French,
    #[display(fmt = "Old Hindu Solar")]
    OldHinduSolar,
    #[display(fmt = "Old Hindu Lunar")]
    OldHinduLunar,
}

impl Calendar {
    /// Every calendar, in presentation order
    pub const ALL: [Self; 11] = [
        Self::Gregorian,
        Self::Iso,
        Self::Julian,
        Self::Islamic,
        Self::Hebrew,
        Self::MayanLongCount,
        Self::MayanHaab,
        Self::MayanTzolkin,
        Self::French,
        Self::OldHinduSolar,
        Self::OldHinduLunar,
    ];

    /// Stable identifier, as accepted by `FromStr`
    pub const fn id(self) -> &'static str {
        match self {
            Self::Gregorian => "gregorian",
            Self::Iso => "iso",
            Self::Julian => "julian",
            Self::Islamic => "islamic",
            Self::Hebrew => "hebrew",
            Self::MayanLongCount => "mayanLongCount",
            Self::MayanHaab => "mayanHaab",
            Self::MayanTzolkin => "mayanTzolkin",
            Self::French => "french",
            Self::OldHinduSolar => "oldHinduSolar",
            Self::OldHinduLunar => "oldHinduLunar",
        }
    }

    /// Returns false for the cyclic calendars, whose dates recur and so do
    /// not name a single day.
    pub const fn is_invertible(self) -> bool {
        !matches!(self, Self::MayanHaab | Self::MayanTzolkin)
    }

    /// Renders `day` as a date string in this calendar.
    pub fn format(self, day: CanonicalDay) -> String {
        tracing::trace!(calendar = self.id(), %day, "formatting canonical day");
        match self {
            Self::Gregorian => GregorianDate::from_canonical(day).to_string(),
            Self::Iso => IsoDate::from_canonical(day).to_string(),
            Self::Julian => JulianDate::from_canonical(day).to_string(),
            Self::Islamic => IslamicDate::from_canonical(day).to_string(),
            Self::Hebrew => HebrewDate::from_canonical(day).to_string(),
            Self::MayanLongCount => MayanLongCount::from_canonical(day).to_string(),
            Self::MayanHaab => MayanHaab::from_canonical(day).to_string(),
            Self::MayanTzolkin => MayanTzolkin::from_canonical(day).to_string(),
            Self::French => FrenchDate::from_canonical(day).to_string(),
            Self::OldHinduSolar => OldHinduSolarDate::from_canonical(day).to_string(),
            Self::OldHinduLunar => OldHinduLunarDate::from_canonical(day).to_string(),
        }
    }

    /// Converts `day` into a [`Conversion`] record.
    pub fn convert(self, day: CanonicalDay) -> Conversion {
        Conversion {
            calendar: self,
            day,
            date: self.format(day),
        }
    }
}

impl FromStr for Calendar {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Self::ALL
            .into_iter()
            .find(|calendar| calendar.id() == id)
            .ok_or_else(|| {
                tracing::debug!(input = s, "unknown calendar identifier");
                CalendarError::UnknownCalendar(s.to_owned())
            })
    }
}

/// One canonical day rendered in one calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{calendar}: {date}")]
pub struct Conversion {
    /// Calendar the date is written in
    pub calendar: Calendar,
    /// The day that was converted
    pub day: CanonicalDay,
    /// The date as [`Calendar::format`] renders it
    pub date: String,
}

/// Renders `day` in every calendar, in [`Calendar::ALL`] order.
pub fn convert_all(day: CanonicalDay) -> Vec<Conversion> {
    Calendar::ALL
        .into_iter()
        .map(|calendar| calendar.convert(day))
        .collect()
}
