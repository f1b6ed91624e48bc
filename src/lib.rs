//! Jalali (Solar Hijri) and Gregorian calendar conversion, with a
//! datepicker-style pattern language for formatting and parsing dates.
//!
//! All operations are pure functions over `Copy` values; the only ambient
//! input is the system clock, read by the `today()` constructors and by
//! [`parse_date`] when the input leaves the year implicit.

mod consts;
mod convert;
mod date;
mod locale;
mod parse;
mod pattern;
mod prelude;
mod provider;
mod types;

pub use consts::*;
pub use date::{GregorianDate, JalaliDate};
pub use locale::{Locale, ShortYearCutoff};
pub use parse::{ParseError, parse_date, parse_date_at};
pub use pattern::{DateFormatPattern, FormatToken};
pub use provider::{CalendarConfig, CalendarProvider, DateField, JalaliCalendar};
pub use types::{
    CalendarSystem, Month, Weekday, gregorian_days_in_month, is_gregorian_leap_year,
    is_jalali_leap_year, jalali_days_in_month,
};

use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A single civil day expressed in one of the two supported calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarDate {
    #[display(fmt = "{}", _0)]
    Gregorian(GregorianDate),
    #[display(fmt = "{}", _0)]
    Jalali(JalaliDate),
}

/// Errors raised while constructing or reading a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {_0} (outside the supported range)")]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Date outside the supported range: {_0}")]
    OutOfRange(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CalendarDate {
    pub const fn system(&self) -> CalendarSystem {
        match self {
            Self::Gregorian(_) => CalendarSystem::Gregorian,
            Self::Jalali(_) => CalendarSystem::Jalali,
        }
    }

    pub fn to_gregorian(&self) -> GregorianDate {
        match *self {
            Self::Gregorian(date) => date,
            Self::Jalali(date) => date.to_gregorian(),
        }
    }

    pub fn to_jalali(&self) -> JalaliDate {
        match *self {
            Self::Gregorian(date) => date.to_jalali(),
            Self::Jalali(date) => date,
        }
    }

    /// Re-expresses the same day in `system`.
    pub fn in_system(&self, system: CalendarSystem) -> Self {
        match system {
            CalendarSystem::Gregorian => Self::Gregorian(self.to_gregorian()),
            CalendarSystem::Jalali => Self::Jalali(self.to_jalali()),
        }
    }

    /// Whether both values denote the same civil day, whatever their systems.
    pub fn same_day(&self, other: &Self) -> bool {
        self.to_gregorian() == other.to_gregorian()
    }

    pub const fn year(&self) -> u16 {
        match self {
            Self::Gregorian(date) => date.year(),
            Self::Jalali(date) => date.year(),
        }
    }

    pub const fn month(&self) -> u8 {
        match self {
            Self::Gregorian(date) => date.month(),
            Self::Jalali(date) => date.month(),
        }
    }

    pub const fn day(&self) -> u8 {
        match self {
            Self::Gregorian(date) => date.day(),
            Self::Jalali(date) => date.day(),
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.to_gregorian().weekday()
    }
}

/// Converts a Gregorian date to the Jalali calendar.
pub fn gregorian_to_jalali(date: GregorianDate) -> JalaliDate {
    date.to_jalali()
}

/// Converts a Jalali date to the Gregorian calendar.
pub fn jalali_to_gregorian(date: JalaliDate) -> GregorianDate {
    date.to_gregorian()
}

/// Renders `date` (in either calendar) as a Jalali date using `pattern`.
pub fn format_date(pattern: &DateFormatPattern, date: CalendarDate, locale: &Locale) -> String {
    pattern.format(date.to_jalali(), locale)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{gregorian, jalali};

    #[test]
    fn test_free_function_conversions() {
        assert_eq!(gregorian_to_jalali(gregorian(2013, 3, 21)), jalali(1392, 1, 1));
        assert_eq!(jalali_to_gregorian(jalali(1392, 1, 1)), gregorian(2013, 3, 21));
    }

    #[test]
    fn test_calendar_date_system() {
        let g = CalendarDate::from(gregorian(2013, 3, 21));
        let j = CalendarDate::from(jalali(1392, 1, 1));
        assert_eq!(g.system(), CalendarSystem::Gregorian);
        assert_eq!(j.system(), CalendarSystem::Jalali);
        assert_ne!(g, j);
        assert!(g.same_day(&j));
        assert_eq!(g.in_system(CalendarSystem::Jalali), j);
        assert_eq!(j.in_system(CalendarSystem::Gregorian), g);
    }

    #[test]
    fn test_calendar_date_accessors() {
        let j = CalendarDate::from(jalali(1392, 1, 1));
        assert_eq!((j.year(), j.month(), j.day()), (1392, 1, 1));
        assert_eq!(j.weekday(), Weekday::Thursday);
        assert_eq!(j.to_gregorian(), gregorian(2013, 3, 21));
    }

    #[test]
    fn test_calendar_date_display() {
        assert_eq!(CalendarDate::from(gregorian(2013, 3, 21)).to_string(), "2013-03-21");
        assert_eq!(CalendarDate::from(jalali(1392, 1, 1)).to_string(), "1392/01/01");
    }

    #[test]
    fn test_calendar_date_serde() {
        let date = CalendarDate::from(jalali(1392, 1, 1));
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"jalali":"1392/01/01"}"#);
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_format_date_accepts_either_system() {
        let pattern: DateFormatPattern = "yy/mm/dd".parse().unwrap();
        let locale = Locale::persian();
        let from_gregorian = format_date(&pattern, gregorian(2013, 3, 21).into(), &locale);
        let from_jalali = format_date(&pattern, jalali(1392, 1, 1).into(), &locale);
        assert_eq!(from_gregorian, "1392/01/01");
        assert_eq!(from_gregorian, from_jalali);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(DateError::InvalidMonth(13).to_string(), "Invalid month: 13 (must be 1-12)");
        assert_eq!(
            DateError::InvalidDay { year: 1376, month: 12, day: 30 }.to_string(),
            "Invalid day 30 for month 1376-12"
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_MONTH, 12);
        assert_eq!(MIN_JALALI_YEAR, 1);
        assert_eq!(MAX_JALALI_YEAR, 3000);
        assert_eq!(DEFAULT_DATE_FORMAT, "yy/mm/dd");
    }
}
