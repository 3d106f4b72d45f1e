//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{AddressBookError, AddressBookResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact entry: a name, any number of phones and an optional birthday.
///
/// The name is fixed at construction and is the key the record is stored
/// under in an [`AddressBook`](super::AddressBook). Phones keep insertion
/// order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Identity key of the record
    name: Name,

    /// Phone numbers in the order they were added
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    /// Optional date of birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// An empty `birthday` string is treated the same as `None`.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for a blank name or a malformed birthday.
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> Result<Self, ValidationError> {
        let name = Name::new(name)?;
        let birthday = match birthday {
            Some(text) if !text.is_empty() => Some(Birthday::new(text)?),
            _ => None,
        };

        Ok(Self {
            name,
            phones: Vec::new(),
            birthday,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` is not ten digits.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        tracing::debug!(record = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every entry equal to `phone`.
    ///
    /// Returns whether anything was removed. Removing an absent number is a
    /// no-op.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        let removed = before - self.phones.len();

        if removed > 0 {
            tracing::debug!(record = %self.name, phone = %phone, removed, "Phone removed");
        }
        removed > 0
    }

    /// Replace every entry equal to `old_phone` with `new_phone`.
    ///
    /// `new_phone` is validated before anything is touched, so a failed edit
    /// leaves the record unchanged.
    ///
    /// # Errors
    ///
    /// - `AddressBookError::Validation` if `new_phone` is not a valid number
    /// - `AddressBookError::NotFound` if no entry equals `old_phone`
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> AddressBookResult<()> {
        if !Phone::is_valid(new_phone) {
            return Err(ValidationError::InvalidPhone(new_phone.to_string()).into());
        }

        let mut edited = 0usize;
        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old_phone) {
            phone.set_value(new_phone)?;
            edited += 1;
        }

        if edited == 0 {
            return Err(AddressBookError::NotFound(format!(
                "phone number '{}' in record '{}'",
                old_phone, self.name
            )));
        }

        tracing::debug!(
            record = %self.name,
            old = %old_phone,
            new = %new_phone,
            edited,
            "Phone edited"
        );
        Ok(())
    }

    /// First entry equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Set or clear the birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` for malformed text; the
    /// previous birthday is kept in that case.
    pub fn set_birthday(&mut self, birthday: Option<&str>) -> Result<(), ValidationError> {
        match birthday {
            None => {
                self.birthday = None;
                tracing::debug!(record = %self.name, "Birthday cleared");
            }
            Some(text) => {
                let birthday = Birthday::new(text)?;
                tracing::debug!(record = %self.name, birthday = %birthday, "Birthday set");
                self.birthday = Some(birthday);
            }
        }
        Ok(())
    }

    /// Days until the next birthday, counted from the local clock date.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::Precondition` if no birthday is set.
    pub fn days_to_birthday(&self) -> AddressBookResult<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday; 0 on the birthday itself.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::Precondition` if no birthday is set.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> AddressBookResult<i64> {
        let birthday = self.birthday.as_ref().ok_or_else(|| {
            AddressBookError::Precondition(format!(
                "birthday is not set for record '{}'",
                self.name
            ))
        })?;

        let next = birthday.next_occurrence(today).ok_or_else(|| {
            AddressBookError::Precondition(format!("no birthday representable after {}", today))
        })?;

        Ok((next - today).num_days())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}", self.name)?;
        if !self.phones.is_empty() {
            let phones = self
                .phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join("; ");
            write!(f, ", phones: {}", phones)?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
