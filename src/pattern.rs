use std::fmt::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_DATE_FORMAT;
use crate::date::JalaliDate;
use crate::locale::Locale;
use crate::parse::ParseError;

const QUOTE: char = '\'';

/// One element of a compiled [`DateFormatPattern`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatToken {
    /// `d` / `dd`: day of month, written with two digits
    Day,
    /// `o` / `oo`: day of year, `oo` written with three digits
    DayOfYear { padded: bool },
    /// `D` short / `DD` long weekday name
    WeekdayName { long: bool },
    /// `m` / `mm`: month number, written with two digits
    Month,
    /// `M` short / `MM` long month name
    MonthName { long: bool },
    /// `y` unpadded year / `yy` four-digit year
    Year { full: bool },
    /// Text copied verbatim, from bare characters or a quoted run
    Literal(String),
}

/// A compiled date pattern, used symmetrically by formatting and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateFormatPattern {
    source: String,
    tokens: Vec<FormatToken>,
}

impl DateFormatPattern {
    /// Compiles a pattern string.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidArguments` for an empty pattern.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        if source.is_empty() {
            return Err(ParseError::InvalidArguments);
        }
        let tokens = tokenize(source);
        tracing::trace!(pattern = source, tokens = tokens.len(), "compiled date pattern");
        Ok(Self {
            source: source.to_owned(),
            tokens,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[FormatToken] {
        &self.tokens
    }

    /// Renders a Jalali date. Weekday names come from the equivalent
    /// Gregorian day; formatting never fails.
    pub fn format(&self, date: JalaliDate, locale: &Locale) -> String {
        let mut out = String::with_capacity(self.source.len() * 2);
        for token in &self.tokens {
            // Writing into a String cannot fail.
            let _ = match token {
                FormatToken::Day => write!(out, "{:02}", date.day()),
                FormatToken::DayOfYear { padded: true } => write!(out, "{:03}", date.day_of_year()),
                FormatToken::DayOfYear { padded: false } => write!(out, "{}", date.day_of_year()),
                FormatToken::WeekdayName { long: true } => out.write_str(locale.day_name(date.weekday())),
                FormatToken::WeekdayName { long: false } => out.write_str(locale.day_name_short(date.weekday())),
                FormatToken::Month => write!(out, "{:02}", date.month()),
                FormatToken::MonthName { long: true } => out.write_str(locale.month_name(date.month_typed())),
                FormatToken::MonthName { long: false } => {
                    out.write_str(locale.month_name_short(date.month_typed()))
                },
                FormatToken::Year { full: true } => write!(out, "{:04}", date.year()),
                FormatToken::Year { full: false } => write!(out, "{}", date.year()),
                FormatToken::Literal(text) => out.write_str(text),
            };
        }
        out
    }
}

/// Splits a pattern into tokens. Letters may be doubled (`dd`, `MM`, `yy`);
/// `'...'` quotes a literal run and `''` is a literal quote, inside or
/// outside a run. An unterminated run extends to the end of the pattern.
fn tokenize(source: &str) -> Vec<FormatToken> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut quoted = false;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        if quoted {
            if c != QUOTE {
                literal.push(c);
            } else if chars.next_if_eq(&QUOTE).is_some() {
                literal.push(QUOTE);
            } else {
                quoted = false;
            }
            continue;
        }

        let doubled = |chars: &mut std::iter::Peekable<std::str::Chars<'_>>| chars.next_if_eq(&c).is_some();
        let token = match c {
            'd' => {
                doubled(&mut chars);
                FormatToken::Day
            },
            'o' => FormatToken::DayOfYear {
                padded: doubled(&mut chars),
            },
            'D' => FormatToken::WeekdayName {
                long: doubled(&mut chars),
            },
            'm' => {
                doubled(&mut chars);
                FormatToken::Month
            },
            'M' => FormatToken::MonthName {
                long: doubled(&mut chars),
            },
            'y' => FormatToken::Year {
                full: doubled(&mut chars),
            },
            QUOTE => {
                if chars.next_if_eq(&QUOTE).is_some() {
                    literal.push(QUOTE);
                } else {
                    quoted = true;
                }
                continue;
            },
            other => {
                literal.push(other);
                continue;
            },
        };

        if !literal.is_empty() {
            tokens.push(FormatToken::Literal(std::mem::take(&mut literal)));
        }
        tokens.push(token);
    }

    if !literal.is_empty() {
        tokens.push(FormatToken::Literal(literal));
    }
    tokens
}

impl Default for DateFormatPattern {
    fn default() -> Self {
        Self {
            source: DEFAULT_DATE_FORMAT.to_owned(),
            tokens: tokenize(DEFAULT_DATE_FORMAT),
        }
    }
}

impl fmt::Display for DateFormatPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for DateFormatPattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DateFormatPattern {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<DateFormatPattern> for String {
    fn from(pattern: DateFormatPattern) -> Self {
        pattern.source
    }
}
