//! AddressBook: the keyed collection of records.

use super::record::Record;
use crate::error::{AddressBookError, AddressBookResult};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::iter::FusedIterator;

/// Records keyed by name, enumerated in insertion order.
///
/// Adding a record whose name is already present replaces the stored record
/// in place; it keeps the original position in the enumeration.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    /// Records in enumeration order
    records: Vec<Record>,

    /// Position of each record in `records`, by name
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, returning any record it replaced.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();

        match self.index.get(&key) {
            Some(&position) => {
                tracing::debug!(name = %key, "Record replaced");
                Some(std::mem::replace(&mut self.records[position], record))
            }
            None => {
                tracing::debug!(name = %key, "Record added");
                self.index.insert(key, self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    /// Look up a record by name for in-place phone or birthday edits.
    ///
    /// The name itself cannot be changed through this reference.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let position = *self.index.get(name)?;
        self.records.get_mut(position)
    }

    /// Remove the record stored under `name`. No-op if absent.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let position = self.index.remove(name)?;
        let removed = self.records.remove(position);

        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }

        tracing::debug!(name = %name, "Record deleted");
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// All names in enumeration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.name().as_str())
    }

    /// Page through the records, `page_size` at a time.
    ///
    /// Every record appears in exactly one page; only the last page may be
    /// shorter than `page_size`. An empty book yields no pages.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::Precondition` if `page_size` is zero.
    pub fn iterate(&self, page_size: usize) -> AddressBookResult<Pages<'_>> {
        if page_size == 0 {
            return Err(AddressBookError::Precondition(
                "page size must be greater than zero".to_string(),
            ));
        }

        Ok(Pages {
            chunks: self.records.chunks(page_size),
        })
    }

    /// Records whose next birthday falls within `within_days` of `today`,
    /// soonest first, ties broken by name.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: i64) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<(&Record, i64)> = self
            .records
            .iter()
            .filter_map(|record| {
                record
                    .days_to_birthday_from(today)
                    .ok()
                    .filter(|&days| days <= within_days)
                    .map(|days| (record, days))
            })
            .collect();

        upcoming.sort_by(|(a, a_days), (b, b_days)| {
            a_days
                .cmp(b_days)
                .then_with(|| a.name().as_str().cmp(b.name().as_str()))
        });
        upcoming
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        book.extend(iter);
        book
    }
}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy page iterator returned by [`AddressBook::iterate`].
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    chunks: std::slice::Chunks<'a, Record>,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(|page| page.iter().collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}
