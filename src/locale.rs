use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SHORT_YEAR_CUTOFF;
use crate::types::{Month, Weekday};

/// Threshold that decides which century a two-digit year belongs to.
///
/// Two-digit years up to the threshold land in the reference year's century,
/// later ones in the previous century.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CutoffValue", into = "CutoffValue")]
pub enum ShortYearCutoff {
    /// Fixed threshold, e.g. `29`
    Absolute(u8),
    /// Threshold relative to the reference year, written `"+10"`
    Relative(u8),
}

impl ShortYearCutoff {
    /// The threshold in effect for a given reference year.
    pub const fn resolve(self, reference_year: u16) -> u16 {
        match self {
            Self::Absolute(cutoff) => cutoff as u16,
            Self::Relative(offset) => reference_year % 100 + offset as u16,
        }
    }
}

impl Default for ShortYearCutoff {
    fn default() -> Self {
        Self::Relative(DEFAULT_SHORT_YEAR_CUTOFF)
    }
}

impl fmt::Display for ShortYearCutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(cutoff) => write!(f, "{cutoff}"),
            Self::Relative(offset) => write!(f, "+{offset}"),
        }
    }
}

impl FromStr for ShortYearCutoff {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || format!("Invalid short year cutoff: {s}");
        match trimmed.strip_prefix('+') {
            Some(offset) => offset.parse().map(Self::Relative).map_err(|_| invalid()),
            None => trimmed.parse().map(Self::Absolute).map_err(|_| invalid()),
        }
    }
}

/// Wire form of [`ShortYearCutoff`]: a bare number or a `"+n"` string.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum CutoffValue {
    Number(u8),
    Text(String),
}

impl TryFrom<CutoffValue> for ShortYearCutoff {
    type Error = String;

    fn try_from(value: CutoffValue) -> Result<Self, Self::Error> {
        match value {
            CutoffValue::Number(cutoff) => Ok(Self::Absolute(cutoff)),
            CutoffValue::Text(text) => text.parse(),
        }
    }
}

impl From<ShortYearCutoff> for CutoffValue {
    fn from(cutoff: ShortYearCutoff) -> Self {
        match cutoff {
            ShortYearCutoff::Absolute(cutoff) => Self::Number(cutoff),
            ShortYearCutoff::Relative(_) => Self::Text(cutoff.to_string()),
        }
    }
}

/// Month and weekday names plus the two-digit year rule used by the
/// formatter and parser. Weekday tables start on Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    pub month_names:       [String; 12],
    pub month_names_short: [String; 12],
    pub day_names:         [String; 7],
    pub day_names_short:   [String; 7],
    #[serde(default)]
    pub short_year_cutoff: ShortYearCutoff,
}

fn owned<const N: usize>(names: [&str; N]) -> [String; N] {
    names.map(str::to_owned)
}

impl Locale {
    /// Persian names, numeric short month names, cutoff `+10`.
    pub fn persian() -> Self {
        Self {
            month_names:       owned([
                "فروردین",
                "اردیبهشت",
                "خرداد",
                "تیر",
                "مرداد",
                "شهریور",
                "مهر",
                "آبان",
                "آذر",
                "دی",
                "بهمن",
                "اسفند",
            ]),
            month_names_short: owned(["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"]),
            day_names:         owned([
                "یکشنبه",
                "دوشنبه",
                "سه\u{200c}شنبه",
                "چهارشنبه",
                "پنجشنبه",
                "جمعه",
                "شنبه",
            ]),
            day_names_short:   owned(["ی", "د", "س", "چ", "پ", "ج", "ش"]),
            short_year_cutoff: ShortYearCutoff::default(),
        }
    }

    /// Transliterated Persian names in Latin script.
    pub fn persian_latin() -> Self {
        Self {
            month_names:       owned([
                "Farvardin",
                "Ordibehesht",
                "Khordad",
                "Tir",
                "Mordad",
                "Shahrivar",
                "Mehr",
                "Aban",
                "Azar",
                "Dey",
                "Bahman",
                "Esfand",
            ]),
            month_names_short: owned([
                "Far", "Ord", "Kho", "Tir", "Mor", "Sha", "Meh", "Aba", "Aza", "Dey", "Bah", "Esf",
            ]),
            day_names:         owned([
                "Yekshanbeh",
                "Doshanbeh",
                "Seshanbeh",
                "Chaharshanbeh",
                "Panjshanbeh",
                "Jomeh",
                "Shanbeh",
            ]),
            day_names_short:   owned(["Yek", "Dos", "Ses", "Cha", "Pan", "Jom", "Sha"]),
            short_year_cutoff: ShortYearCutoff::default(),
        }
    }

    /// Same names with a different two-digit year rule.
    #[must_use]
    pub fn with_short_year_cutoff(mut self, cutoff: ShortYearCutoff) -> Self {
        self.short_year_cutoff = cutoff;
        self
    }

    pub fn month_name(&self, month: Month) -> &str {
        &self.month_names[month.index()]
    }

    pub fn month_name_short(&self, month: Month) -> &str {
        &self.month_names_short[month.index()]
    }

    pub fn day_name(&self, weekday: Weekday) -> &str {
        &self.day_names[weekday.index()]
    }

    pub fn day_name_short(&self, weekday: Weekday) -> &str {
        &self.day_names_short[weekday.index()]
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::persian()
    }
}
