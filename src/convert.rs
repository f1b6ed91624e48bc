//! Day-number arithmetic shared by both calendars.
//!
//! A day number counts days since Gregorian 1600-01-01 (day 0). Gregorian
//! dates are decomposed over 400-year, century and four-year cycles, Jalali
//! dates over 33-year cycles anchored at Jalali year 979. Euclidean division
//! keeps the formulas valid on either side of the origin.

use crate::consts::{
    COMMON_YEAR_DAYS, CENTURY_DAYS, EPOCH_OFFSET_DAYS, EPOCH_WEEKDAY, FEBRUARY, FOUR_YEAR_DAYS,
    GREGORIAN_CYCLE_DAYS, GREGORIAN_DAYS_IN_MONTH, GREGORIAN_EPOCH_YEAR, JALALI_CYCLE_DAYS,
    JALALI_DAYS_IN_MONTH, JALALI_EPOCH_YEAR, JALALI_LEAPS_PER_CYCLE, LEAP_YEAR_DAYS, MAX_MONTH,
};
use crate::types::Weekday;

const JALALI_CYCLE_YEARS: i32 = 33;

/// Days before `month` in a year, not counting any leap day.
fn days_before_month(table: &[u8; 13], month: u8) -> i32 {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    table[1..month as usize].iter().map(|&d| i32::from(d)).sum()
}

fn is_leap(year: i32) -> bool {
    (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
}

/// Day number of a Gregorian `(year, month, day)`.
///
/// `day` is not checked against the month length, so an overflowing day
/// lands in the following month.
pub(crate) fn gregorian_to_day_number(year: i32, month: u8, day: i32) -> i32 {
    let q = year - GREGORIAN_EPOCH_YEAR;
    let mut days = COMMON_YEAR_DAYS * q + (q + 3).div_euclid(4) - (q + 99).div_euclid(100)
        + (q + 399).div_euclid(400);
    days += days_before_month(&GREGORIAN_DAYS_IN_MONTH, month);
    if month > FEBRUARY && is_leap(year) {
        days += 1;
    }
    days + day - 1
}

/// Gregorian `(year, month, day)` of a day number.
pub(crate) fn day_number_to_gregorian(day_number: i32) -> (i32, u8, u8) {
    let mut year = GREGORIAN_EPOCH_YEAR + 400 * day_number.div_euclid(GREGORIAN_CYCLE_DAYS);
    let mut n = day_number.rem_euclid(GREGORIAN_CYCLE_DAYS);

    // The first century of each 400-year cycle carries the extra leap day.
    let mut leap = true;
    if n > CENTURY_DAYS {
        n -= 1;
        year += 100 * (n / CENTURY_DAYS);
        n %= CENTURY_DAYS;
        if n >= COMMON_YEAR_DAYS {
            n += 1;
        } else {
            leap = false;
        }
    }

    if leap {
        year += 4 * (n / FOUR_YEAR_DAYS);
        n %= FOUR_YEAR_DAYS;
    }

    if n >= LEAP_YEAR_DAYS {
        leap = false;
        n -= 1;
        year += n / COMMON_YEAR_DAYS;
        n %= COMMON_YEAR_DAYS;
    }

    let mut month = 1;
    loop {
        let mut length = i32::from(GREGORIAN_DAYS_IN_MONTH[month as usize]);
        if month == FEBRUARY && leap {
            length += 1;
        }
        if n < length || month == MAX_MONTH {
            break;
        }
        n -= length;
        month += 1;
    }

    (year, month, (n + 1) as u8)
}

/// Day number of a Jalali `(year, month, day)`.
///
/// Like [`gregorian_to_day_number`], an overflowing day is not rejected here.
pub(crate) fn jalali_to_day_number(year: i32, month: u8, day: i32) -> i32 {
    let q = year - JALALI_EPOCH_YEAR;
    let mut days = COMMON_YEAR_DAYS * q
        + q.div_euclid(JALALI_CYCLE_YEARS) * JALALI_LEAPS_PER_CYCLE
        + (q.rem_euclid(JALALI_CYCLE_YEARS) + 3) / 4;
    days += days_before_month(&JALALI_DAYS_IN_MONTH, month);
    days + day - 1 + EPOCH_OFFSET_DAYS
}

/// Jalali `(year, month, day)` of a day number.
pub(crate) fn day_number_to_jalali(day_number: i32) -> (i32, u8, u8) {
    let n = day_number - EPOCH_OFFSET_DAYS;
    let cycles = n.div_euclid(JALALI_CYCLE_DAYS);
    let mut n = n.rem_euclid(JALALI_CYCLE_DAYS);

    // Each four-year group opens with its leap year.
    let mut year = JALALI_EPOCH_YEAR + JALALI_CYCLE_YEARS * cycles + 4 * (n / FOUR_YEAR_DAYS);
    n %= FOUR_YEAR_DAYS;
    if n >= LEAP_YEAR_DAYS {
        year += (n - 1) / COMMON_YEAR_DAYS;
        n = (n - 1) % COMMON_YEAR_DAYS;
    }

    let mut month = 1;
    while month < MAX_MONTH && n >= i32::from(JALALI_DAYS_IN_MONTH[month as usize]) {
        n -= i32::from(JALALI_DAYS_IN_MONTH[month as usize]);
        month += 1;
    }

    (year, month, (n + 1) as u8)
}

pub(crate) fn day_number_to_weekday(day_number: i32) -> Weekday {
    Weekday::from_index((day_number + EPOCH_WEEKDAY).rem_euclid(7) as usize)
}
