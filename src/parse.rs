use std::cmp::Reverse;

use crate::consts::{MAX_JALALI_YEAR, MAX_MONTH, MIN_JALALI_YEAR};
use crate::convert::{day_number_to_jalali, jalali_to_day_number};
use crate::date::{GregorianDate, JalaliDate};
use crate::locale::Locale;
use crate::pattern::{DateFormatPattern, FormatToken};
use crate::DateError;

/// Error type for pattern-driven date parsing.
/// Positions are character offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The pattern is empty.
    #[error("Invalid arguments: empty date format pattern")]
    InvalidArguments,

    /// A numeric field has no digits at the cursor.
    #[error("Missing number at position {position}")]
    MissingNumber { position: usize },

    /// No configured month or weekday name matches at the cursor.
    #[error("Unknown name at position {position}")]
    UnknownName { position: usize },

    /// The input does not match a literal of the pattern.
    #[error("Unexpected literal at position {position}")]
    UnexpectedLiteral { position: usize },

    /// Input remains after the whole pattern was matched.
    #[error("Extra characters found in date at position {position}")]
    ExtraCharacters { position: usize },

    /// The fields parse but do not name a real Jalali day.
    #[error("Invalid date")]
    InvalidDate,

    /// The reference date could not be read from the clock.
    #[error(transparent)]
    Date(#[from] DateError),
}

/// Walks the input in lockstep with the pattern.
struct Cursor<'a> {
    rest:     &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    const fn new(input: &'a str) -> Self {
        Self {
            rest:     input,
            position: 0,
        }
    }

    /// Consumes 1 to `max_digits` ASCII digits; returns the value and digit count.
    fn number(&mut self, max_digits: usize) -> Result<(u32, usize), ParseError> {
        let len = self
            .rest
            .bytes()
            .take(max_digits)
            .take_while(u8::is_ascii_digit)
            .count();
        if len == 0 {
            return Err(ParseError::MissingNumber {
                position: self.position,
            });
        }
        let (digits, rest) = self.rest.split_at(len);
        let value = digits
            .bytes()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'));
        self.rest = rest;
        self.position += len;
        Ok((value, len))
    }

    /// Matches the longest name in either table, ignoring case; returns its index.
    fn name(&mut self, long: &[String], short: &[String]) -> Result<usize, ParseError> {
        let mut candidates: Vec<(usize, &str)> = long
            .iter()
            .enumerate()
            .chain(short.iter().enumerate())
            .filter(|(_, name)| !name.is_empty())
            .map(|(index, name)| (index, name.as_str()))
            .collect();
        candidates.sort_by_key(|(_, name)| Reverse(name.chars().count()));

        for (index, name) in candidates {
            if let Some(rest) = strip_prefix_ignore_case(self.rest, name) {
                self.rest = rest;
                self.position += name.chars().count();
                return Ok(index);
            }
        }
        Err(ParseError::UnknownName {
            position: self.position,
        })
    }

    fn literal(&mut self, text: &str) -> Result<(), ParseError> {
        for expected in text.chars() {
            let mut chars = self.rest.chars();
            if chars.next() != Some(expected) {
                return Err(ParseError::UnexpectedLiteral {
                    position: self.position,
                });
            }
            self.rest = chars.as_str();
            self.position += 1;
        }
        Ok(())
    }
}

fn strip_prefix_ignore_case<'a>(haystack: &'a str, prefix: &str) -> Option<&'a str> {
    let mut hay = haystack.char_indices();
    for p in prefix.chars() {
        let (_, h) = hay.next()?;
        if !h.to_lowercase().eq(p.to_lowercase()) {
            return None;
        }
    }
    let offset = hay.next().map_or(haystack.len(), |(i, _)| i);
    Some(&haystack[offset..])
}

/// Fields collected from the input before validation.
#[derive(Debug, Default)]
struct Fields {
    year:        Option<(u32, usize)>,
    month:       Option<u32>,
    day:         Option<u32>,
    day_of_year: Option<u32>,
}

/// Parses `input` as a Jalali date written in `pattern`, using the system
/// clock to resolve two-digit and missing years.
///
/// Returns `Ok(None)` for empty input.
///
/// # Errors
/// See [`ParseError`]; a field-by-field match that does not name a real day
/// (month 13, Esfand 30 of a common year) is `ParseError::InvalidDate`.
pub fn parse_date(
    pattern: &DateFormatPattern,
    input: &str,
    locale: &Locale,
) -> Result<Option<GregorianDate>, ParseError> {
    if input.is_empty() {
        return Ok(None);
    }
    let reference = JalaliDate::today()?;
    parse_date_at(pattern, input, locale, reference)
}

/// Like [`parse_date`], with an explicit reference date standing in for today.
///
/// # Errors
/// See [`parse_date`].
pub fn parse_date_at(
    pattern: &DateFormatPattern,
    input: &str,
    locale: &Locale,
    reference: JalaliDate,
) -> Result<Option<GregorianDate>, ParseError> {
    if input.is_empty() {
        return Ok(None);
    }
    read_fields(pattern, input, locale)
        .and_then(|fields| resolve(&fields, locale, reference))
        .map(Some)
        .inspect_err(|err| tracing::debug!(%err, %pattern, input, "failed to parse date"))
}

fn read_fields(pattern: &DateFormatPattern, input: &str, locale: &Locale) -> Result<Fields, ParseError> {
    let mut cursor = Cursor::new(input);
    let mut fields = Fields::default();

    for token in pattern.tokens() {
        match token {
            FormatToken::Day => fields.day = Some(cursor.number(2)?.0),
            FormatToken::DayOfYear { .. } => fields.day_of_year = Some(cursor.number(3)?.0),
            FormatToken::WeekdayName { .. } => {
                cursor.name(&locale.day_names, &locale.day_names_short)?;
            },
            FormatToken::Month => fields.month = Some(cursor.number(2)?.0),
            FormatToken::MonthName { .. } => {
                let index = cursor.name(&locale.month_names, &locale.month_names_short)?;
                fields.month = Some(index as u32 + 1);
            },
            FormatToken::Year { full } => fields.year = Some(cursor.number(if *full { 4 } else { 2 })?),
            FormatToken::Literal(text) => cursor.literal(text)?,
        }
    }

    if !cursor.rest.is_empty() {
        return Err(ParseError::ExtraCharacters {
            position: cursor.position,
        });
    }
    Ok(fields)
}

/// Expands a year written with at most two digits around the reference century.
fn expand_short_year(year: u32, locale: &Locale, reference: JalaliDate) -> i64 {
    let reference_year = reference.year();
    let century = i64::from(reference_year - reference_year % 100);
    let cutoff = u32::from(locale.short_year_cutoff.resolve(reference_year));
    let expanded = i64::from(year) + century - if year <= cutoff { 0 } else { 100 };
    tracing::debug!(year, expanded, cutoff, "expanded two-digit year");
    expanded
}

fn resolve(fields: &Fields, locale: &Locale, reference: JalaliDate) -> Result<GregorianDate, ParseError> {
    let year = match fields.year {
        None => i64::from(reference.year()),
        Some((year, digits)) if digits <= 2 => expand_short_year(year, locale, reference),
        Some((year, _)) => i64::from(year),
    };
    let year = u16::try_from(year)
        .ok()
        .filter(|y| (MIN_JALALI_YEAR..=MAX_JALALI_YEAR).contains(y))
        .ok_or(ParseError::InvalidDate)?;

    if let Some(day_of_year) = fields.day_of_year {
        let day_of_year = u16::try_from(day_of_year).map_err(|_| ParseError::InvalidDate)?;
        return JalaliDate::from_day_of_year(year, day_of_year)
            .map(|date| date.to_gregorian())
            .map_err(|_| ParseError::InvalidDate);
    }

    let (Some(month), Some(day)) = (fields.month, fields.day) else {
        return Err(ParseError::InvalidDate);
    };
    let month = u8::try_from(month)
        .ok()
        .filter(|m| (1..=MAX_MONTH).contains(m))
        .ok_or(ParseError::InvalidDate)?;
    let day = i32::try_from(day).map_err(|_| ParseError::InvalidDate)?;

    // Resolve through the day number and require the same fields back, so an
    // overflowing day (Esfand 30 of a common year, Mehr 31) is rejected.
    let day_number = jalali_to_day_number(i32::from(year), month, day);
    let (round_year, round_month, round_day) = day_number_to_jalali(day_number);
    if (round_year, round_month, i32::from(round_day)) != (i32::from(year), month, day) {
        return Err(ParseError::InvalidDate);
    }
    GregorianDate::from_day_number(day_number).ok_or(ParseError::InvalidDate)
}
