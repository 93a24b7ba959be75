use super::fields::{Birthday, Name, Phone, ValidationError};
use crate::error::{RolodexError, Result};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name, phones in insertion order, and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn with_birthday(
        name: impl Into<String>,
        birthday: impl Into<String>,
    ) -> std::result::Result<Self, ValidationError> {
        let mut record = Self::new(name);
        record.set_birthday(birthday)?;
        Ok(record)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn first_phone(&self) -> Option<&Phone> {
        self.phones.first()
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn set_birthday(
        &mut self,
        birthday: impl Into<String>,
    ) -> std::result::Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Validate and append a phone. The record is untouched on failure.
    pub fn add_phone(&mut self, value: impl Into<String>) -> std::result::Result<(), ValidationError> {
        self.phones.push(Phone::new(value)?);
        Ok(())
    }

    /// Remove the first phone equal to `value`, if any.
    pub fn remove_phone(&mut self, value: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p.as_str() == value) {
            self.phones.remove(pos);
        }
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// # Errors
    ///
    /// `PhoneNotFound` if no phone equals `old`, `Validation` if `new` is not
    /// a valid phone. Either way the record is left as it was.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let phone = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| RolodexError::PhoneNotFound(old.to_string()))?;
        phone.set(new)?;
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// True if any phone contains `fragment`.
    pub fn has_phone_containing(&self, fragment: &str) -> bool {
        self.phones.iter().any(|p| p.contains(fragment))
    }

    /// Days until the next birthday, counted from the local date.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of the birthday.
    ///
    /// A birthday falling on `today` is 0 days away. A Feb 29 birthday is
    /// observed on Feb 28 in non-leap years.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let born = self.birthday.as_ref()?.date();
        let mut next = occurrence_in(today.year(), born)?;
        if next < today {
            next = occurrence_in(today.year() + 1, born)?;
        }
        Some((next - today).num_days())
    }
}

fn occurrence_in(year: i32, born: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, born.month(), born.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
