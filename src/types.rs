use crate::consts::{
    CENTURY_CYCLE, ESFAND, ESFAND_DAYS_LEAP, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    GREGORIAN_DAYS_IN_MONTH, JALALI_CYCLE_YEARS, JALALI_DAYS_IN_MONTH, JALALI_LEAP_RESIDUES,
    LEAP_YEAR_CYCLE, MAX_MONTH,
};
use crate::{DateError, prelude::*};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// The two calendar systems a [`crate::CalendarDate`] can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSystem {
    Gregorian,
    Jalali,
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based index into a 12-element name table
    #[inline]
    pub const fn index(self) -> usize {
        self.0.get() as usize - 1
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week, numbered from Sunday like the locale weekday tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Weekday for an index counted from Sunday; wraps modulo 7
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 7]
    }

    /// Index counted from Sunday (Sunday = 0, Saturday = 6)
    pub const fn index(self) -> usize {
        self as usize
    }
}

// Helper functions

pub const fn is_gregorian_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn is_jalali_leap_year(year: u16) -> bool {
    let residue = year % JALALI_CYCLE_YEARS;
    let mut i = 0;
    while i < JALALI_LEAP_RESIDUES.len() {
        if JALALI_LEAP_RESIDUES[i] == residue {
            return true;
        }
        i += 1;
    }
    false
}

pub const fn gregorian_days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

pub const fn jalali_days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == ESFAND && is_jalali_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        JALALI_DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(DateError::InvalidMonth(13))));
        assert!(matches!(Month::new(255), Err(DateError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_index() {
        assert_eq!(Month::new(1).unwrap().index(), 0);
        assert_eq!(Month::new(12).unwrap().index(), 11);
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        assert!(serde_json::from_str::<Month>("13").is_err());
    }

    #[test]
    fn test_weekday_index_round_trip() {
        for i in 0..7 {
            assert_eq!(Weekday::from_index(i).index(), i);
        }
        assert_eq!(Weekday::from_index(7), Weekday::Sunday);
        assert_eq!(Weekday::Saturday.to_string(), "Saturday");
    }

    #[test]
    fn test_calendar_system_serde() {
        let json = serde_json::to_string(&CalendarSystem::Jalali).unwrap();
        assert_eq!(json, r#""jalali""#);
    }

    #[test]
    fn test_is_gregorian_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase { year: 2024, is_leap: true, description: "divisible by 4" },
            TestCase { year: 2023, is_leap: false, description: "not divisible by 4" },
            TestCase { year: 1900, is_leap: false, description: "century not divisible by 400" },
            TestCase { year: 2100, is_leap: false, description: "century not divisible by 400" },
            TestCase { year: 2000, is_leap: true, description: "divisible by 400" },
            TestCase { year: 1600, is_leap: true, description: "divisible by 400" },
        ];

        for case in &cases {
            assert_eq!(
                is_gregorian_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_is_jalali_leap_year_cases() {
        struct TestCase {
            year:    u16,
            is_leap: bool,
        }

        let cases = [
            TestCase { year: 1375, is_leap: true },
            TestCase { year: 1376, is_leap: false },
            TestCase { year: 1399, is_leap: true },
            TestCase { year: 1400, is_leap: false },
            TestCase { year: 1403, is_leap: true },
            TestCase { year: 1404, is_leap: false },
            TestCase { year: 1408, is_leap: true },
        ];

        for case in &cases {
            assert_eq!(
                is_jalali_leap_year(case.year),
                case.is_leap,
                "Jalali year {} (residue {})",
                case.year,
                case.year % 33
            );
        }
    }

    #[test]
    fn test_jalali_leap_years_per_cycle() {
        let leaps = (1..=33).filter(|y| is_jalali_leap_year(*y)).count();
        assert_eq!(leaps, 8);
    }

    #[test]
    fn test_gregorian_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(gregorian_days_in_month(2023, month), expected[month as usize]);
        }
        assert_eq!(gregorian_days_in_month(2024, 2), 29);
        assert_eq!(gregorian_days_in_month(1900, 2), 28);
    }

    #[test]
    fn test_jalali_days_in_month() {
        for month in 1..=6 {
            assert_eq!(jalali_days_in_month(1402, month), 31, "Month {month} should have 31 days");
        }
        for month in 7..=11 {
            assert_eq!(jalali_days_in_month(1402, month), 30, "Month {month} should have 30 days");
        }
        assert_eq!(jalali_days_in_month(1375, 12), 30);
        assert_eq!(jalali_days_in_month(1376, 12), 29);
    }
}
