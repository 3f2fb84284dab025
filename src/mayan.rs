//! Maya Long Count, Haab and Tzolkin calendars.
//!
//! All three count from the same creation date, 13.0.0.0.0 4 Ahau 8 Cumku,
//! placed by the Goodman-Martinez-Thompson correlation. The Long Count is a
//! mixed-radix day count and converts both ways. The Haab (365 days) and
//! Tzolkin (260 days) are cycles: a position recurs every cycle, so neither
//! implements [`ToCanonical`]. Use `on_or_before` to find the latest
//! occurrence of a position instead.

use crate::consts::{
    CALENDAR_ROUND_CYCLE, DAYS_IN_BAKTUN, DAYS_IN_KATUN, DAYS_IN_TUN, DAYS_IN_UINAL, HAAB_AT_EPOCH,
    HAAB_CYCLE, MAYAN_EPOCH, TZOLKIN_AT_EPOCH, TZOLKIN_CYCLE,
};
use crate::prelude::*;
use crate::{Calendar, CanonicalDay, DateError, FromCanonical, ToCanonical};

const KATUNS_PER_BAKTUN: u8 = 20;
const TUNS_PER_KATUN: u8 = 20;
const UINALS_PER_TUN: u8 = 18;
const KINS_PER_UINAL: u8 = 20;
const TZOLKIN_NUMBERS: i64 = 13;
const TZOLKIN_NAMES: i64 = 20;
const UAYEB_DAYS: u8 = 5;

/// A Long Count date, `baktun.katun.tun.uinal.kin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}.{}.{}.{}.{}", "baktun", "katun", "tun", "uinal", "kin")]
pub struct MayanLongCount {
    baktun: i64,
    katun: u8,
    tun: u8,
    uinal: u8,
    kin: u8,
}

impl MayanLongCount {
    /// Creates a Long Count date from its five places.
    ///
    /// # Errors
    /// Returns `DateError::InvalidField` if a place exceeds its radix
    /// (katun, tun and kin below 20, uinal below 18).
    pub fn new(baktun: i64, katun: u8, tun: u8, uinal: u8, kin: u8) -> Result<Self, DateError> {
        for (field, value, radix) in [
            ("katun", katun, KATUNS_PER_BAKTUN),
            ("tun", tun, TUNS_PER_KATUN),
            ("uinal", uinal, UINALS_PER_TUN),
            ("kin", kin, KINS_PER_UINAL),
        ] {
            if value >= radix {
                return Err(DateError::InvalidField {
                    calendar: Calendar::MayanLongCount,
                    field,
                    value: i64::from(value),
                });
            }
        }
        Ok(Self {
            baktun,
            katun,
            tun,
            uinal,
            kin,
        })
    }

    /// Returns the baktun (144000 days), negative before the creation date
    #[inline]
    pub const fn baktun(&self) -> i64 {
        self.baktun
    }

    /// Returns the katun (7200 days)
    #[inline]
    pub const fn katun(&self) -> u8 {
        self.katun
    }

    /// Returns the tun (360 days)
    #[inline]
    pub const fn tun(&self) -> u8 {
        self.tun
    }

    /// Returns the uinal (20 days)
    #[inline]
    pub const fn uinal(&self) -> u8 {
        self.uinal
    }

    /// Returns the kin (days)
    #[inline]
    pub const fn kin(&self) -> u8 {
        self.kin
    }
}

impl ToCanonical for MayanLongCount {
    fn to_canonical(&self) -> CanonicalDay {
        CanonicalDay::new(
            MAYAN_EPOCH
                + self.baktun * DAYS_IN_BAKTUN
                + i64::from(self.katun) * DAYS_IN_KATUN
                + i64::from(self.tun) * DAYS_IN_TUN
                + i64::from(self.uinal) * DAYS_IN_UINAL
                + i64::from(self.kin),
        )
    }
}

impl FromCanonical for MayanLongCount {
    fn from_canonical(day: CanonicalDay) -> Self {
        let days = day.get() - MAYAN_EPOCH;
        let baktun = days.div_euclid(DAYS_IN_BAKTUN);
        let day_of_baktun = days.rem_euclid(DAYS_IN_BAKTUN);
        let katun = day_of_baktun / DAYS_IN_KATUN;
        let day_of_katun = day_of_baktun % DAYS_IN_KATUN;
        let tun = day_of_katun / DAYS_IN_TUN;
        let day_of_tun = day_of_katun % DAYS_IN_TUN;
        Self {
            baktun,
            katun: katun as u8,
            tun: tun as u8,
            uinal: (day_of_tun / DAYS_IN_UINAL) as u8,
            kin: (day_of_tun % DAYS_IN_UINAL) as u8,
        }
    }
}

/// The nineteen Haab months; Uayeb has only five days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum HaabMonth {
    Pop,
    Uo,
    Zip,
    Zotz,
    Tzec,
    Xul,
    Yaxkin,
    Mol,
    Chen,
    Yax,
    Zac,
    Ceh,
    Mac,
    Kankin,
    Muan,
    Pax,
    Kayab,
    Cumku,
    Uayeb,
}

impl HaabMonth {
    /// All months in cycle order
    pub const ALL: [Self; 19] = [
        Self::Pop,
        Self::Uo,
        Self::Zip,
        Self::Zotz,
        Self::Tzec,
        Self::Xul,
        Self::Yaxkin,
        Self::Mol,
        Self::Chen,
        Self::Yax,
        Self::Zac,
        Self::Ceh,
        Self::Mac,
        Self::Kankin,
        Self::Muan,
        Self::Pax,
        Self::Kayab,
        Self::Cumku,
        Self::Uayeb,
    ];

    /// Position in the cycle, 1 for Pop through 19 for Uayeb
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Days in the month
    pub const fn days(self) -> u8 {
        match self {
            Self::Uayeb => UAYEB_DAYS,
            _ => 20,
        }
    }
}

/// A position in the 365-day Haab cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{} {}", "day", "month")]
pub struct MayanHaab {
    day: u8,
    month: HaabMonth,
}

impl MayanHaab {
    /// Creates a Haab position. Days count from 0.
    ///
    /// # Errors
    /// Returns `DateError::InvalidField` if `day` is not below the month's
    /// length (20, or 5 for Uayeb).
    pub fn new(day: u8, month: HaabMonth) -> Result<Self, DateError> {
        if day >= month.days() {
            return Err(DateError::InvalidField {
                calendar: Calendar::MayanHaab,
                field: "day",
                value: i64::from(day),
            });
        }
        Ok(Self { day, month })
    }

    /// Returns the day of the month, `0..=19`
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the month
    #[inline]
    pub const fn month(&self) -> HaabMonth {
        self.month
    }

    /// Days into the Haab cycle, `0..365`.
    fn ordinal(self) -> i64 {
        i64::from(self.month.number() - 1) * 20 + i64::from(self.day)
    }

    /// Latest canonical day on or before `day` at this Haab position.
    pub fn on_or_before(self, day: CanonicalDay) -> CanonicalDay {
        day - (haab_count(day) - self.ordinal()).rem_euclid(HAAB_CYCLE)
    }
}

impl FromCanonical for MayanHaab {
    fn from_canonical(day: CanonicalDay) -> Self {
        let count = haab_count(day);
        Self {
            day: (count % 20) as u8,
            month: HaabMonth::ALL[(count / 20) as usize],
        }
    }
}

/// The twenty Tzolkin day names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum TzolkinName {
    Imix,
    Ik,
    Akbal,
    Kan,
    Chicchan,
    Cimi,
    Manik,
    Lamat,
    Muluc,
    Oc,
    Chuen,
    Eb,
    Ben,
    Ix,
    Men,
    Cib,
    Caban,
    Etznab,
    Cauac,
    Ahau,
}

impl TzolkinName {
    /// All names in cycle order
    pub const ALL: [Self; 20] = [
        Self::Imix,
        Self::Ik,
        Self::Akbal,
        Self::Kan,
        Self::Chicchan,
        Self::Cimi,
        Self::Manik,
        Self::Lamat,
        Self::Muluc,
        Self::Oc,
        Self::Chuen,
        Self::Eb,
        Self::Ben,
        Self::Ix,
        Self::Men,
        Self::Cib,
        Self::Caban,
        Self::Etznab,
        Self::Cauac,
        Self::Ahau,
    ];

    /// Position in the cycle, 1 for Imix through 20 for Ahau
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

/// A position in the 260-day Tzolkin cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{} {}", "number", "name")]
pub struct MayanTzolkin {
    number: u8,
    name: TzolkinName,
}

impl MayanTzolkin {
    /// Creates a Tzolkin position.
    ///
    /// # Errors
    /// Returns `DateError::InvalidField` if `number` is outside `1..=13`.
    pub fn new(number: u8, name: TzolkinName) -> Result<Self, DateError> {
        if number == 0 || i64::from(number) > TZOLKIN_NUMBERS {
            return Err(DateError::InvalidField {
                calendar: Calendar::MayanTzolkin,
                field: "number",
                value: i64::from(number),
            });
        }
        Ok(Self { number, name })
    }

    /// Returns the day number, `1..=13`
    #[inline]
    pub const fn number(&self) -> u8 {
        self.number
    }

    /// Returns the day name
    #[inline]
    pub const fn name(&self) -> TzolkinName {
        self.name
    }

    /// Days into the Tzolkin cycle, `0..260`.
    fn ordinal(self) -> i64 {
        let number = i64::from(self.number);
        (number - 1 + 39 * (number - i64::from(self.name.number()))).rem_euclid(TZOLKIN_CYCLE)
    }

    /// Latest canonical day on or before `day` at this Tzolkin position.
    pub fn on_or_before(self, day: CanonicalDay) -> CanonicalDay {
        day - (tzolkin_count(day) - self.ordinal()).rem_euclid(TZOLKIN_CYCLE)
    }
}

impl FromCanonical for MayanTzolkin {
    fn from_canonical(day: CanonicalDay) -> Self {
        let count = tzolkin_count(day);
        Self {
            number: (count % TZOLKIN_NUMBERS + 1) as u8,
            name: TzolkinName::ALL[(count % TZOLKIN_NAMES) as usize],
        }
    }
}

/// A Tzolkin and Haab pair, repeating every 18980 days (52 Haab years).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{} {}", "tzolkin", "haab")]
pub struct MayanCalendarRound {
    tzolkin: MayanTzolkin,
    haab: MayanHaab,
}

impl MayanCalendarRound {
    /// Pairs a Tzolkin and a Haab position.
    ///
    /// Only a quarter of all pairs ever occur together.
    ///
    /// # Errors
    /// Returns `DateError::IncompatibleRound` for a pair that never coincides.
    pub fn new(tzolkin: MayanTzolkin, haab: MayanHaab) -> Result<Self, DateError> {
        let round = Self { tzolkin, haab };
        if round.ordinal().is_none() {
            return Err(DateError::IncompatibleRound { tzolkin, haab });
        }
        Ok(round)
    }

    /// Returns the Tzolkin position
    #[inline]
    pub const fn tzolkin(&self) -> MayanTzolkin {
        self.tzolkin
    }

    /// Returns the Haab position
    #[inline]
    pub const fn haab(&self) -> MayanHaab {
        self.haab
    }

    /// Days after the creation date, modulo the Calendar Round, at which
    /// this pair occurs.
    fn ordinal(self) -> Option<i64> {
        let haab_offset = (self.haab.ordinal() - HAAB_AT_EPOCH).rem_euclid(HAAB_CYCLE);
        let tzolkin_offset = (self.tzolkin.ordinal() - TZOLKIN_AT_EPOCH).rem_euclid(TZOLKIN_CYCLE);
        (0..CALENDAR_ROUND_CYCLE / HAAB_CYCLE)
            .map(|k| haab_offset + k * HAAB_CYCLE)
            .find(|offset| offset % TZOLKIN_CYCLE == tzolkin_offset)
    }

    /// Latest canonical day on or before `day` at this Calendar Round position.
    pub fn on_or_before(self, day: CanonicalDay) -> CanonicalDay {
        // Construction guarantees the pair occurs.
        let ordinal = self.ordinal().unwrap_or_default();
        day - (day.get() - MAYAN_EPOCH - ordinal).rem_euclid(CALENDAR_ROUND_CYCLE)
    }
}

impl FromCanonical for MayanCalendarRound {
    fn from_canonical(day: CanonicalDay) -> Self {
        Self {
            tzolkin: MayanTzolkin::from_canonical(day),
            haab: MayanHaab::from_canonical(day),
        }
    }
}

/// Days into the Haab cycle on `day`.
fn haab_count(day: CanonicalDay) -> i64 {
    (day.get() - MAYAN_EPOCH + HAAB_AT_EPOCH).rem_euclid(HAAB_CYCLE)
}

/// Days into the Tzolkin cycle on `day`.
fn tzolkin_count(day: CanonicalDay) -> i64 {
    (day.get() - MAYAN_EPOCH + TZOLKIN_AT_EPOCH).rem_euclid(TZOLKIN_CYCLE)
}
