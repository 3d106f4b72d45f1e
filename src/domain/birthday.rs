//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text format accepted for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Four-digit year, two-digit month and day. chrono alone accepts
/// unpadded fields and longer years, so the shape is checked first.
static BIRTHDAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to compile birthday regex"));

/// A calendar date on which a contact was born.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("2000-03-15").unwrap();
/// assert_eq!(birthday.to_string(), "2000-03-15");
/// assert!(!Birthday::validate("2023-02-30"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(Field<NaiveDate>);

impl Birthday {
    /// Create a new Birthday from `YYYY-MM-DD` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text is not a real
    /// calendar date in that format.
    pub fn new(date: impl AsRef<str>) -> Result<Self, ValidationError> {
        Self::parse(date.as_ref()).map(Self::from_date)
    }

    /// Wrap an already-parsed date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(Field::new(date))
    }

    /// Check whether `candidate` is a real `YYYY-MM-DD` date. Never fails.
    pub fn validate(candidate: &str) -> bool {
        Self::parse(candidate).is_ok()
    }

    /// Replace the stored date after validating `new_value`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` and keeps the current date
    /// when `new_value` does not validate.
    pub fn set_value(&mut self, new_value: impl AsRef<str>) -> Result<(), ValidationError> {
        let date = Self::parse(new_value.as_ref())?;
        self.0.replace(date);
        Ok(())
    }

    /// The stored date.
    pub fn date(&self) -> NaiveDate {
        *self.0.value()
    }

    /// The first anniversary on or after `today`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    /// Returns `None` only at the edges of the representable calendar.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.occurrence_in(today.year())?;
        if this_year < today {
            self.occurrence_in(today.year() + 1)
        } else {
            Some(this_year)
        }
    }

    fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        let date = self.date();
        NaiveDate::from_ymd_opt(year, date.month(), date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }

    fn parse(text: &str) -> Result<NaiveDate, ValidationError> {
        let invalid = || ValidationError::InvalidBirthday(text.to_string());
        if !BIRTHDAY_PATTERN.is_match(text) {
            return Err(invalid());
        }
        let date = NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT).map_err(|_| invalid())?;
        // The calendar starts at year 1; chrono would also accept year 0.
        if date.year() < 1 {
            return Err(invalid());
        }
        Ok(date)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date().format(BIRTHDAY_FORMAT))
    }
}
