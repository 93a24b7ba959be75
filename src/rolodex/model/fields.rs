use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of digits a phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// Format birthdays are written and parsed in.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid phone number format. Phone number must contain 10 digits.")]
    InvalidPhone(String),

    #[error("Invalid birthday format. Use YYYY-MM-DD.")]
    InvalidBirthday(String),
}

/// A contact's name. Any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number of exactly ten decimal digits.
///
/// ```
/// use rolodex::model::Phone;
///
/// let phone = Phone::new("1234567890").unwrap();
/// assert_eq!(phone.to_string(), "1234567890");
/// assert!(Phone::new("123-456-78").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless `value` is exactly ten
    /// ASCII digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidPhone(value));
        }
        Ok(Self(value))
    }

    pub fn is_valid(value: &str) -> bool {
        value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Replace the value in place. The old value is kept if `value` is invalid.
    pub fn set(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::new(value)?;
        Ok(())
    }

    pub fn contains(&self, fragment: &str) -> bool {
        self.0.contains(fragment)
    }
}

impl FromStr for Phone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

/// A birthday, kept both as the string it was written with and as a date.
///
/// Display gives back the original string unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` unless `value` is a real
    /// calendar date of the exact shape `YYYY-MM-DD`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        match Self::parse(&raw) {
            Some(date) => Ok(Self { raw, date }),
            None => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    // chrono alone accepts "1990-5-15", signed or wider years and year 0,
    // so the shape is pinned down before parsing and the year checked after.
    fn parse(value: &str) -> Option<NaiveDate> {
        let bytes = value.as_bytes();
        if bytes.len() != 10 {
            return None;
        }
        let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
        if !shape_ok {
            return None;
        }
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .ok()
            .filter(|date| date.year() >= 1)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
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

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn name_keeps_value() {
        assert_eq!(Name::new("John").to_string(), "John");
        assert_eq!(Name::new("").as_str(), "");
    }

    #[test]
    fn phone_accepts_ten_digits() {
        let phone = Phone::new("0123456789").unwrap();
        assert_eq!(phone.as_str(), "0123456789");
    }

    #[test]
    fn phone_rejects_bad_shapes() {
        for bad in [
            "",
            "123456789",
            "12345678901",
            "12345abcde",
            "123 456 789",
            "+123456789",
            "١٢٣٤٥٦٧٨٩٠",
        ] {
            assert_eq!(
                Phone::new(bad),
                Err(ValidationError::InvalidPhone(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn phone_error_message() {
        let err = Phone::new("12").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid phone number format. Phone number must contain 10 digits."
        );
    }

    #[test]
    fn phone_set_keeps_old_value_on_failure() {
        let mut phone = Phone::new("1234567890").unwrap();
        assert!(phone.set("oops").is_err());
        assert_eq!(phone.as_str(), "1234567890");
        phone.set("9999999999").unwrap();
        assert_eq!(phone.as_str(), "9999999999");
    }

    #[test]
    fn phone_deserialization_validates() {
        let phone: Phone = serde_json::from_str("\"5555555555\"").unwrap();
        assert_eq!(phone.as_str(), "5555555555");
        let result: Result<Phone, _> = serde_json::from_str("\"555\"");
        assert!(result.is_err());
    }

    #[test]
    fn birthday_accepts_real_dates() {
        let birthday = Birthday::new("1990-05-15").unwrap();
        assert_eq!(birthday.to_string(), "1990-05-15");
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
        assert!(Birthday::new("2000-02-29").is_ok());
    }

    #[test]
    fn birthday_rejects_bad_input() {
        for bad in [
            "",
            "1990-5-15",
            "1990/05/15",
            "15-05-1990",
            "1990-13-01",
            "1990-00-10",
            "1990-04-31",
            "1900-02-29",
            "+990-05-15",
            "1990-05-15 ",
            "abcd-ef-gh",
            "0000-01-01",
        ] {
            assert!(Birthday::new(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn birthday_year_range_starts_at_one() {
        assert!(Birthday::new("0000-12-31").is_err());
        assert!(Birthday::new("0001-01-01").is_ok());
        assert!(Birthday::new("9999-12-31").is_ok());
    }

    #[test]
    fn birthday_error_message() {
        let err = Birthday::new("yesterday").unwrap_err();
        assert_eq!(err.to_string(), "Invalid birthday format. Use YYYY-MM-DD.");
    }

    #[test]
    fn from_str_goes_through_validation() {
        assert!("1234567890".parse::<Phone>().is_ok());
        assert!("nope".parse::<Phone>().is_err());
        assert!("2024-02-29".parse::<Birthday>().is_ok());
        assert!("2023-02-29".parse::<Birthday>().is_err());
    }

    proptest! {
        #[test]
        fn any_ten_digit_string_is_a_phone(s in "[0-9]{10}") {
            let phone = Phone::new(s.clone()).unwrap();
            prop_assert_eq!(phone.to_string(), s);
        }

        #[test]
        fn wrong_length_digit_strings_are_rejected(s in "[0-9]{0,9}|[0-9]{11,20}") {
            prop_assert!(Phone::new(s).is_err());
        }

        #[test]
        fn strings_with_a_non_digit_are_rejected(
            prefix in "[0-9]{0,9}",
            c in "[^0-9]",
            suffix in "[0-9]{0,9}",
        ) {
            let s = format!("{prefix}{c}{suffix}");
            prop_assert!(Phone::new(s).is_err());
        }

        #[test]
        fn every_calendar_date_is_a_birthday(days in 0i64..(366 * 200)) {
            let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
                + chrono::Duration::days(days);
            let text = date.format(BIRTHDAY_FORMAT).to_string();
            let birthday = Birthday::new(text.clone()).unwrap();
            prop_assert_eq!(birthday.date(), date);
            prop_assert_eq!(birthday.to_string(), text);
        }
    }
}
