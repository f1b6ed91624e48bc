/// First supported Jalali year (inclusive)
pub const MIN_JALALI_YEAR: u16 = 1;

/// Last supported Jalali year (inclusive)
pub const MAX_JALALI_YEAR: u16 = 3000;

/// Earliest supported Gregorian date, the equivalent of Jalali 1/01/01
pub const MIN_GREGORIAN_DATE: (u16, u8, u8) = (622, 3, 21);

/// Latest supported Gregorian date, the equivalent of Jalali 3000/12/30
pub const MAX_GREGORIAN_DATE: (u16, u8, u8) = (3622, 3, 20);

/// Maximum valid month (December / Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January / Farvardin
pub const FIRST_MONTH: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for Esfand, the only Jalali month whose length varies
pub const ESFAND: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days in each Jalali month (index 0 is unused, months are 1-indexed)
/// Esfand shows 29 days (non-leap year default)
pub const JALALI_DAYS_IN_MONTH: [u8; 13] = [0, 31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Jalali leap years repeat on a 33-year cycle
pub(crate) const JALALI_CYCLE_YEARS: u16 = 33;
/// Residues of `year % 33` that mark a Jalali leap year
pub(crate) const JALALI_LEAP_RESIDUES: [u16; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

/// Day numbers count days since Gregorian 1600-01-01 (day 0)
pub(crate) const GREGORIAN_EPOCH_YEAR: i32 = 1600;
/// Jalali year whose 33-year cycle is anchored at the day-number origin
pub(crate) const JALALI_EPOCH_YEAR: i32 = 979;
/// Days between the day-number origin and the Jalali cycle origin
pub(crate) const EPOCH_OFFSET_DAYS: i32 = 79;

pub(crate) const COMMON_YEAR_DAYS: i32 = 365;
pub(crate) const LEAP_YEAR_DAYS: i32 = 366;
/// Four years with one leap day
pub(crate) const FOUR_YEAR_DAYS: i32 = 1461;
/// A Gregorian century that does not end on a 400-year boundary
pub(crate) const CENTURY_DAYS: i32 = 36524;
/// 400 Gregorian years
pub(crate) const GREGORIAN_CYCLE_DAYS: i32 = 146_097;
/// 33 Jalali years with 8 leap days
pub(crate) const JALALI_CYCLE_DAYS: i32 = 12053;
pub(crate) const JALALI_LEAPS_PER_CYCLE: i32 = 8;

/// 1600-01-01 fell on a Saturday (Sunday = 0)
pub(crate) const EPOCH_WEEKDAY: i32 = 6;
/// Day number of the Unix epoch, 1970-01-01
pub(crate) const UNIX_EPOCH_DAY_NUMBER: i32 = 135_140;

pub(crate) const SECONDS_PER_DAY: u64 = 86_400;

/// Separator used by the ISO-style Gregorian `Display` form
pub const GREGORIAN_SEPARATOR: char = '-';
/// Separator used by the Jalali `Display` form
pub const JALALI_SEPARATOR: char = '/';

/// Default pattern of the Persian datepicker
pub const DEFAULT_DATE_FORMAT: &str = "yy/mm/dd";

/// Default two-digit year cutoff: ten years past the reference year
pub const DEFAULT_SHORT_YEAR_CUTOFF: u8 = 10;
