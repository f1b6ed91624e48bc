//! Host-facing calendar surface.
//!
//! A date input is built from a [`CalendarProvider`] and a typed
//! [`CalendarConfig`]. Nothing is registered globally; swapping calendars
//! means constructing the field with another provider.

use serde::{Deserialize, Serialize};

use crate::date::{GregorianDate, JalaliDate};
use crate::locale::Locale;
use crate::parse::{ParseError, parse_date};
use crate::pattern::DateFormatPattern;
use crate::CalendarDate;

/// The four calendar operations a date input needs from its host.
pub trait CalendarProvider {
    fn gregorian_to_jalali(&self, date: GregorianDate) -> JalaliDate;

    fn jalali_to_gregorian(&self, date: JalaliDate) -> GregorianDate;

    fn format_date(&self, pattern: &DateFormatPattern, date: CalendarDate, locale: &Locale) -> String;

    /// # Errors
    /// Returns `ParseError` when `input` does not match `pattern`.
    fn parse_date(
        &self,
        pattern: &DateFormatPattern,
        input: &str,
        locale: &Locale,
    ) -> Result<Option<GregorianDate>, ParseError>;
}

/// The arithmetic Jalali calendar of this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JalaliCalendar;

impl CalendarProvider for JalaliCalendar {
    fn gregorian_to_jalali(&self, date: GregorianDate) -> JalaliDate {
        crate::gregorian_to_jalali(date)
    }

    fn jalali_to_gregorian(&self, date: JalaliDate) -> GregorianDate {
        crate::jalali_to_gregorian(date)
    }

    fn format_date(&self, pattern: &DateFormatPattern, date: CalendarDate, locale: &Locale) -> String {
        crate::format_date(pattern, date, locale)
    }

    fn parse_date(
        &self,
        pattern: &DateFormatPattern,
        input: &str,
        locale: &Locale,
    ) -> Result<Option<GregorianDate>, ParseError> {
        parse_date(pattern, input, locale)
    }
}

/// Options recognized by a date field. Missing keys take the Persian
/// defaults (`yy/mm/dd`, Persian names, cutoff `+10`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Pattern shown in and read from the input
    pub date_format: DateFormatPattern,
    /// Secondary pattern mirrored into an alternate field on selection
    pub alt_format:  Option<DateFormatPattern>,
    pub locale:      Locale,
}

/// A date input bound to a calendar provider at construction.
#[derive(Debug, Clone)]
pub struct DateField<P = JalaliCalendar> {
    provider: P,
    config:   CalendarConfig,
}

impl<P: CalendarProvider> DateField<P> {
    pub const fn new(provider: P, config: CalendarConfig) -> Self {
        Self { provider, config }
    }

    pub const fn provider(&self) -> &P {
        &self.provider
    }

    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Text shown in the input for `date`.
    pub fn display(&self, date: impl Into<CalendarDate>) -> String {
        self.provider
            .format_date(&self.config.date_format, date.into(), &self.config.locale)
    }

    /// Text for the alternate field, if an alternate format is configured.
    pub fn alt_display(&self, date: impl Into<CalendarDate>) -> Option<String> {
        let alt_format = self.config.alt_format.as_ref()?;
        Some(
            self.provider
                .format_date(alt_format, date.into(), &self.config.locale),
        )
    }

    /// Reads the input's text; empty text is no date.
    ///
    /// # Errors
    /// Returns `ParseError` when the text does not match the date format.
    pub fn read(&self, input: &str) -> Result<Option<GregorianDate>, ParseError> {
        self.provider
            .parse_date(&self.config.date_format, input, &self.config.locale)
    }

    /// Reads the input and re-renders it in the configured format, as the
    /// field does before showing the calendar.
    ///
    /// # Errors
    /// Returns `ParseError` when the text does not match the date format.
    pub fn normalize(&self, input: &str) -> Result<Option<String>, ParseError> {
        Ok(self.read(input)?.map(|date| self.display(date)))
    }
}

impl Default for DateField<JalaliCalendar> {
    fn default() -> Self {
        Self::new(JalaliCalendar, CalendarConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_date_at;
    use crate::test_utils::{gregorian, jalali};
    use crate::ShortYearCutoff;
    use std::cell::Cell;

    /// Pins "today" so short years resolve the same way on every run, and
    /// counts parse calls to show the field goes through its provider.
    struct PinnedCalendar {
        today:  JalaliDate,
        parses: Cell<usize>,
    }

    impl PinnedCalendar {
        fn new() -> Self {
            Self {
                today:  jalali(1405, 7, 26),
                parses: Cell::new(0),
            }
        }
    }

    impl CalendarProvider for PinnedCalendar {
        fn gregorian_to_jalali(&self, date: GregorianDate) -> JalaliDate {
            JalaliCalendar.gregorian_to_jalali(date)
        }

        fn jalali_to_gregorian(&self, date: JalaliDate) -> GregorianDate {
            JalaliCalendar.jalali_to_gregorian(date)
        }

        fn format_date(&self, pattern: &DateFormatPattern, date: CalendarDate, locale: &Locale) -> String {
            JalaliCalendar.format_date(pattern, date, locale)
        }

        fn parse_date(
            &self,
            pattern: &DateFormatPattern,
            input: &str,
            locale: &Locale,
        ) -> Result<Option<GregorianDate>, ParseError> {
            self.parses.set(self.parses.get() + 1);
            parse_date_at(pattern, input, locale, self.today)
        }
    }

    fn config(date_format: &str) -> CalendarConfig {
        CalendarConfig {
            date_format: date_format.parse().unwrap(),
            ..CalendarConfig::default()
        }
    }

    #[test]
    fn test_jalali_calendar_provider() {
        let provider = JalaliCalendar;
        let date = gregorian(2013, 3, 21);
        assert_eq!(provider.gregorian_to_jalali(date), jalali(1392, 1, 1));
        assert_eq!(provider.jalali_to_gregorian(jalali(1392, 1, 1)), date);
        assert_eq!(
            provider.format_date(&DateFormatPattern::default(), date.into(), &Locale::persian()),
            "1392/01/01"
        );
        assert_eq!(
            provider.parse_date(&DateFormatPattern::default(), "1392/01/01", &Locale::persian()),
            Ok(Some(date))
        );
    }

    #[test]
    fn test_default_field() {
        let field: DateField = DateField::default();
        assert_eq!(field.config().date_format.as_str(), "yy/mm/dd");
        assert_eq!(field.display(gregorian(2013, 3, 21)), "1392/01/01");
        assert_eq!(field.read("1392/01/01"), Ok(Some(gregorian(2013, 3, 21))));
        assert_eq!(field.read(""), Ok(None));
        assert_eq!(field.alt_display(gregorian(2013, 3, 21)), None);
    }

    #[test]
    fn test_field_uses_injected_provider() {
        let field = DateField::new(PinnedCalendar::new(), config("y/mm/dd"));
        assert_eq!(field.read("05/02/03"), Ok(Some(jalali(1405, 2, 3).to_gregorian())));
        assert_eq!(field.read("92/02/03"), Ok(Some(jalali(1392, 2, 3).to_gregorian())));
        assert_eq!(field.provider().parses.get(), 2);
    }

    #[test]
    fn test_normalize() {
        let field = DateField::new(PinnedCalendar::new(), config("yy/mm/dd"));
        assert_eq!(field.normalize("1392/1/5"), Ok(Some("1392/01/05".to_owned())));
        assert_eq!(field.normalize(""), Ok(None));
        assert_eq!(field.normalize("1392/13/05"), Err(ParseError::InvalidDate));
    }

    #[test]
    fn test_alt_display() {
        let config = CalendarConfig {
            alt_format: Some("DD d MM yy".parse().unwrap()),
            locale: Locale::persian_latin(),
            ..CalendarConfig::default()
        };
        let field = DateField::new(JalaliCalendar, config);
        assert_eq!(
            field.alt_display(jalali(1392, 1, 1)),
            Some("Panjshanbeh 01 Farvardin 1392".to_owned())
        );
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "date_format": "d/m/y",
            "locale": {
                "month_names": ["Farvardin", "Ordibehesht", "Khordad", "Tir", "Mordad", "Shahrivar",
                                "Mehr", "Aban", "Azar", "Dey", "Bahman", "Esfand"],
                "month_names_short": ["Far", "Ord", "Kho", "Tir", "Mor", "Sha",
                                      "Meh", "Aba", "Aza", "Dey", "Bah", "Esf"],
                "day_names": ["Yekshanbeh", "Doshanbeh", "Seshanbeh", "Chaharshanbeh",
                              "Panjshanbeh", "Jomeh", "Shanbeh"],
                "day_names_short": ["Yek", "Dos", "Ses", "Cha", "Pan", "Jom", "Sha"],
                "short_year_cutoff": 29
            }
        }"#;
        let config: CalendarConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.date_format.as_str(), "d/m/y");
        assert_eq!(config.alt_format, None);
        assert_eq!(
            config.locale,
            Locale::persian_latin().with_short_year_cutoff(ShortYearCutoff::Absolute(29))
        );
    }

    #[test]
    fn test_config_defaults_from_empty_json() {
        let config: CalendarConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CalendarConfig::default());
        assert_eq!(config.locale, Locale::persian());
    }

    #[test]
    fn test_config_rejects_empty_pattern() {
        assert!(serde_json::from_str::<CalendarConfig>(r#"{"date_format": ""}"#).is_err());
    }
}
