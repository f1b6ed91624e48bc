use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::consts::{
    ESFAND, FIRST_MONTH, GREGORIAN_SEPARATOR, JALALI_SEPARATOR, MAX_GREGORIAN_DATE,
    MAX_JALALI_YEAR, MAX_MONTH, MIN_DAY, MIN_GREGORIAN_DATE, MIN_JALALI_YEAR, SECONDS_PER_DAY,
    UNIX_EPOCH_DAY_NUMBER,
};
use crate::convert::{
    day_number_to_gregorian, day_number_to_jalali, day_number_to_weekday, gregorian_to_day_number,
    jalali_to_day_number,
};
use crate::types::{Month, Weekday, gregorian_days_in_month, is_jalali_leap_year, jalali_days_in_month};
use crate::{DateError, prelude::*};

/// A day in the proleptic Gregorian calendar, within the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, "month.get()", day)]
pub struct GregorianDate {
    year:  u16,
    month: Month,
    day:   u8,
}

/// A day in the Jalali (Solar Hijri) calendar, within the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}/{:02}/{:02}", year, "month.get()", day)]
pub struct JalaliDate {
    year:  u16,
    month: Month,
    day:   u8,
}

/// Reads today's day number from the system clock (UTC).
fn today_day_number() -> Result<i32, DateError> {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs());
    let days = i32::try_from(secs / SECONDS_PER_DAY).map_err(|_| DateError::OutOfRange(format!("{secs}s")))?;
    Ok(UNIX_EPOCH_DAY_NUMBER + days)
}

impl GregorianDate {
    /// Creates a Gregorian date, validating month, day-of-month and range.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` / `DateError::InvalidDay` for an
    /// impossible date, `DateError::InvalidYear` / `DateError::OutOfRange`
    /// for a date outside `MIN_GREGORIAN_DATE..=MAX_GREGORIAN_DATE`.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        if year < MIN_GREGORIAN_DATE.0 || year > MAX_GREGORIAN_DATE.0 {
            return Err(DateError::InvalidYear(year));
        }
        let month_nz = Month::new(month)?;
        if day < MIN_DAY || day > gregorian_days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        let ymd = (year, month, day);
        if ymd < MIN_GREGORIAN_DATE || ymd > MAX_GREGORIAN_DATE {
            return Err(DateError::OutOfRange(format!("{year:04}-{month:02}-{day:02}")));
        }
        Ok(Self { year, month: month_nz, day })
    }

    /// Today's date according to the system clock (UTC).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the clock is past the supported range.
    pub fn today() -> Result<Self, DateError> {
        let day_number = today_day_number()?;
        Self::from_day_number(day_number).ok_or_else(|| DateError::OutOfRange(format!("day {day_number}")))
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub fn weekday(&self) -> Weekday {
        day_number_to_weekday(self.day_number())
    }

    /// Converts to the equivalent Jalali date.
    pub fn to_jalali(&self) -> JalaliDate {
        let (year, month, day) = day_number_to_jalali(self.day_number());
        // Both calendars cover exactly the same days, so the fields are valid.
        JalaliDate {
            year: year as u16,
            month: Month::new(month).unwrap_or(self.month),
            day,
        }
    }

    /// The following day, or `None` at the end of the supported range.
    pub fn succ(&self) -> Option<Self> {
        Self::from_day_number(self.day_number() + 1)
    }

    /// The preceding day, or `None` at the start of the supported range.
    pub fn pred(&self) -> Option<Self> {
        Self::from_day_number(self.day_number() - 1)
    }

    pub(crate) fn day_number(&self) -> i32 {
        gregorian_to_day_number(i32::from(self.year), self.month.get(), i32::from(self.day))
    }

    pub(crate) fn from_day_number(day_number: i32) -> Option<Self> {
        let (year, month, day) = day_number_to_gregorian(day_number);
        let year = u16::try_from(year).ok()?;
        Self::new(year, month, day).ok()
    }
}

impl JalaliDate {
    /// Creates a Jalali date, validating month and day-of-month.
    /// Esfand 30 is only accepted in leap years.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` outside `MIN_JALALI_YEAR..=MAX_JALALI_YEAR`,
    /// `DateError::InvalidMonth` or `DateError::InvalidDay` for an impossible date.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        if !(MIN_JALALI_YEAR..=MAX_JALALI_YEAR).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        let month_nz = Month::new(month)?;
        if day < MIN_DAY || day > jalali_days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month: month_nz, day })
    }

    /// Creates the date that is the `day_of_year`-th day (1-based) of `year`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the year has fewer days.
    pub fn from_day_of_year(year: u16, day_of_year: u16) -> Result<Self, DateError> {
        let first = Self::new(year, FIRST_MONTH, MIN_DAY)?;
        let length = if first.is_leap_year() { 366 } else { 365 };
        if day_of_year == 0 || day_of_year > length {
            return Err(DateError::InvalidDay {
                year,
                month: 0,
                day: u8::try_from(day_of_year).unwrap_or(u8::MAX),
            });
        }
        let day_number = first.day_number() + i32::from(day_of_year) - 1;
        Self::from_day_number(day_number).ok_or_else(|| DateError::OutOfRange(format!("{year}/+{day_of_year}")))
    }

    /// Today's Jalali date according to the system clock (UTC).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the clock is past the supported range.
    pub fn today() -> Result<Self, DateError> {
        GregorianDate::today().map(|today| today.to_jalali())
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub fn weekday(&self) -> Weekday {
        day_number_to_weekday(self.day_number())
    }

    pub const fn is_leap_year(&self) -> bool {
        is_jalali_leap_year(self.year)
    }

    /// Length of this date's month
    pub const fn days_in_month(&self) -> u8 {
        jalali_days_in_month(self.year, self.month.get())
    }

    /// 1-based position of this day within its year
    pub fn day_of_year(&self) -> u16 {
        let start = jalali_to_day_number(i32::from(self.year), FIRST_MONTH, i32::from(MIN_DAY));
        (self.day_number() - start + 1) as u16
    }

    /// The first day of this date's month.
    pub const fn first_day_of_month(&self) -> Self {
        Self {
            year:  self.year,
            month: self.month,
            day:   MIN_DAY,
        }
    }

    /// Moves by `months` calendar months, clamping the day to the length of
    /// the target month (Shahrivar 31 + 1 month is Mehr 30).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves the supported range.
    pub fn add_months(&self, months: i32) -> Result<Self, DateError> {
        let total = i32::from(self.year) * i32::from(MAX_MONTH) + i32::from(self.month.get()) - 1 + months;
        let year = total.div_euclid(i32::from(MAX_MONTH));
        let month = (total.rem_euclid(i32::from(MAX_MONTH)) + 1) as u8;
        let year = u16::try_from(year)
            .ok()
            .filter(|y| (MIN_JALALI_YEAR..=MAX_JALALI_YEAR).contains(y))
            .ok_or_else(|| DateError::OutOfRange(format!("{self} {months:+} months")))?;
        let day = self.day.min(jalali_days_in_month(year, month));
        Self::new(year, month, day)
    }

    /// Moves by `years` calendar years; Esfand 30 clamps to Esfand 29 in a common year.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves the supported range.
    pub fn add_years(&self, years: i32) -> Result<Self, DateError> {
        self.add_months(years * i32::from(MAX_MONTH))
    }

    /// The following day, or `None` at the end of the supported range.
    pub fn succ(&self) -> Option<Self> {
        Self::from_day_number(self.day_number() + 1)
    }

    /// The preceding day, or `None` at the start of the supported range.
    pub fn pred(&self) -> Option<Self> {
        Self::from_day_number(self.day_number() - 1)
    }

    /// Converts to the equivalent Gregorian date.
    pub fn to_gregorian(&self) -> GregorianDate {
        let (year, month, day) = day_number_to_gregorian(self.day_number());
        GregorianDate {
            year: year as u16,
            month: Month::new(month).unwrap_or(self.month),
            day,
        }
    }

    /// Whether this is the last day of the year (Esfand 29 or 30)
    pub const fn is_last_day_of_year(&self) -> bool {
        self.month.get() == ESFAND && self.day == self.days_in_month()
    }

    pub(crate) fn day_number(&self) -> i32 {
        jalali_to_day_number(i32::from(self.year), self.month.get(), i32::from(self.day))
    }

    pub(crate) fn from_day_number(day_number: i32) -> Option<Self> {
        let (year, month, day) = day_number_to_jalali(day_number);
        let year = u16::try_from(year).ok()?;
        Self::new(year, month, day).ok()
    }
}

impl From<JalaliDate> for GregorianDate {
    fn from(date: JalaliDate) -> Self {
        date.to_gregorian()
    }
}

impl From<GregorianDate> for JalaliDate {
    fn from(date: GregorianDate) -> Self {
        date.to_jalali()
    }
}

/// Splits `YYYY<sep>MM<sep>DD` into numeric components.
fn split_ymd(s: &str, separator: char) -> Result<(u16, u8, u8), DateError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(DateError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(separator).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(DateError::InvalidFormat(format!(
            "expected YYYY{separator}MM{separator}DD, found {} {separator} separators: {s}",
            parts.len() - 1
        )));
    };

    let year = year.parse::<u16>().map_err(|_| DateError::InvalidFormat((*year).to_owned()))?;
    let month = month.parse::<u8>().map_err(|_| DateError::InvalidFormat((*month).to_owned()))?;
    let day = day.parse::<u8>().map_err(|_| DateError::InvalidFormat((*day).to_owned()))?;
    Ok((year, month, day))
}

impl FromStr for GregorianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_ymd(s, GREGORIAN_SEPARATOR)?;
        Self::new(year, month, day)
    }
}

impl FromStr for JalaliDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_ymd(s, JALALI_SEPARATOR)?;
        Self::new(year, month, day)
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
