/// Maximum valid month in the Gregorian, Julian and Islamic calendars
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in a common year of the solar calendars
pub(crate) const DAYS_IN_COMMON_YEAR: i64 = 365;
/// Days in a four-year Julian cycle
pub(crate) const DAYS_IN_4_YEARS: i64 = 1461;
/// Days in a Gregorian century without a 400-year leap day
pub(crate) const DAYS_IN_100_YEARS: i64 = 36524;
/// Days in a full 400-year Gregorian cycle
pub(crate) const DAYS_IN_400_YEARS: i64 = 146_097;

/// Days in a week
pub const DAYS_IN_WEEK: i64 = 7;

/// Canonical day of 1 January 1 in the proleptic Julian calendar
/// (30 December 1 BCE, Gregorian)
pub(crate) const JULIAN_EPOCH: i64 = -1;

/// Canonical day of 1 Muharram 1 AH (16 July 622, Julian)
pub(crate) const ISLAMIC_EPOCH: i64 = 227_015;
/// Length of the Islamic intercalation cycle, in years
pub(crate) const ISLAMIC_CYCLE_YEARS: i64 = 30;
/// Days in a common Islamic year
pub(crate) const ISLAMIC_COMMON_YEAR: i64 = 354;
/// Positions within the 30-year cycle that are leap years
pub(crate) const ISLAMIC_LEAP_YEARS: [i64; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

/// Offset between the Hebrew elapsed-day count and canonical days
pub(crate) const HEBREW_ELAPSED_OFFSET: i64 = -1_373_429;
/// Length of the Metonic cycle, in years
pub(crate) const METONIC_CYCLE_YEARS: i64 = 19;
/// Parts (halakim) in an hour
pub(crate) const PARTS_PER_HOUR: i64 = 1080;
/// Parts in a day
pub(crate) const PARTS_PER_DAY: i64 = 24 * PARTS_PER_HOUR;
/// Mean synodic month beyond 29 whole days: 12 hours 793 parts
pub(crate) const MONTH_EXCESS_PARTS: i64 = 12 * PARTS_PER_HOUR + 793;
/// Molad of Tishri AM 1 (BaHaRaD): 5 hours 204 parts into its day
pub(crate) const MOLAD_BAHARAD_PARTS: i64 = 5 * PARTS_PER_HOUR + 204;
/// Molad zaken: a molad at or after noon postpones the new year
pub(crate) const MOLAD_ZAKEN_PARTS: i64 = 18 * PARTS_PER_HOUR;
/// GaTaRaD: Tuesday molad at or after 9 hours 204 parts in a common year
pub(crate) const GATARAD_PARTS: i64 = 9 * PARTS_PER_HOUR + 204;
/// BeTUTaKPaT: Monday molad at or after 15 hours 589 parts after a leap year
pub(crate) const BETUTAKPAT_PARTS: i64 = 15 * PARTS_PER_HOUR + 589;
/// Mean Hebrew year as a fraction of days (numerator)
pub(crate) const HEBREW_MEAN_YEAR_NUM: i64 = 35_975_351;
/// Mean Hebrew year as a fraction of days (denominator)
pub(crate) const HEBREW_MEAN_YEAR_DEN: i64 = 98_496;

/// Canonical day of the Maya creation date 13.0.0.0.0 4 Ahau 8 Cumku
/// (Goodman-Martinez-Thompson correlation, JDN 584283)
pub(crate) const MAYAN_EPOCH: i64 = -1_137_142;
/// Days in a baktun
pub(crate) const DAYS_IN_BAKTUN: i64 = 144_000;
/// Days in a katun
pub(crate) const DAYS_IN_KATUN: i64 = 7200;
/// Days in a tun
pub(crate) const DAYS_IN_TUN: i64 = 360;
/// Days in a uinal
pub(crate) const DAYS_IN_UINAL: i64 = 20;
/// Length of the Haab cycle
pub const HAAB_CYCLE: i64 = 365;
/// Length of the Tzolkin cycle
pub const TZOLKIN_CYCLE: i64 = 260;
/// Length of the Calendar Round, lcm(260, 365)
pub const CALENDAR_ROUND_CYCLE: i64 = 18_980;
/// Haab position of the Maya epoch (8 Cumku)
pub(crate) const HAAB_AT_EPOCH: i64 = 17 * 20 + 8;
/// Tzolkin position of the Maya epoch (4 Ahau)
pub(crate) const TZOLKIN_AT_EPOCH: i64 = 159;

/// Canonical day of 1 Vendemiaire I (22 September 1792, Gregorian)
pub(crate) const FRENCH_EPOCH: i64 = 654_415;
/// Days in each of the twelve regular French months
pub(crate) const FRENCH_MONTH_DAYS: i64 = 30;
/// Month number of the complementary days
pub(crate) const FRENCH_COMPLEMENTARY_MONTH: u8 = 13;
/// Upper bound on the day-by-day equinox search
pub(crate) const EQUINOX_SEARCH_DAYS: usize = 8;

/// Mean tropical year in days
pub(crate) const MEAN_TROPICAL_YEAR: f64 = 365.242_189;
/// Julian day number of canonical day 0 at midnight
pub(crate) const JD_OF_CANONICAL_ZERO: f64 = 1_721_424.5;
/// Julian day of the J2000.0 epoch
pub(crate) const J2000: f64 = 2_451_545.0;
/// Days in a Julian century
pub(crate) const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
/// Solar longitude of the autumnal equinox, in degrees
pub(crate) const AUTUMN: f64 = 180.0;
/// Longitude of the Paris Observatory, degrees east
pub(crate) const PARIS_LONGITUDE: f64 = 2.337_229;

/// Canonical day of the Kali Yuga epoch (18 February 3102 BCE, Julian)
pub(crate) const HINDU_EPOCH: i64 = -1_132_959;
/// Common denominator for Old Hindu day fractions
pub(crate) const HINDU_UNITS_PER_DAY: i128 = 15_388_800_768;
/// Sunrise, a quarter day after midnight
pub(crate) const HINDU_SUNRISE: i128 = HINDU_UNITS_PER_DAY / 4;
/// Aryabhata solar year, 1577917500/4320000 days
pub(crate) const ARYA_SOLAR_YEAR: i128 = 5_620_893_063_852;
/// Aryabhata solar month, one twelfth of the solar year
pub(crate) const ARYA_SOLAR_MONTH: i128 = 468_407_755_321;
/// Aryabhata lunar month, 1577917500/53433336 days
pub(crate) const ARYA_LUNAR_MONTH: i128 = 454_440_240_000;
/// Aryabhata lunar day, one thirtieth of the lunar month
pub(crate) const ARYA_LUNAR_DAY: i128 = 15_148_008_000;
/// Year-end drift beyond which an Old Hindu lunar year holds a leap month
pub(crate) const ARYA_LEAP_THRESHOLD: i128 = 286_830_056_148;

/// Date component separator (ISO 8601 format); a leading one marks a year
/// before the common era
pub const DATE_SEPARATOR: char = '-';
