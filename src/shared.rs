//! Thread-safe handle to an address book.
//!
//! The core [`AddressBook`] is single-threaded. `SharedAddressBook` wraps one
//! book in a single `RwLock` so it can be handed to several threads; cloning
//! the handle is cheap (uses Arc internally) and every clone sees the same
//! book.

use crate::error::{AddressBookError, AddressBookResult};
use crate::models::{AddressBook, Record};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A cloneable, lock-protected address book.
#[derive(Clone, Default)]
pub struct SharedAddressBook {
    book: Arc<RwLock<AddressBook>>,
}

impl SharedAddressBook {
    /// Create a handle around an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle around an existing book.
    pub fn from_book(book: AddressBook) -> Self {
        Self {
            book: Arc::new(RwLock::new(book)),
        }
    }

    /// Insert or overwrite a record; see [`AddressBook::add_record`].
    pub fn add_record(&self, record: Record) -> Option<Record> {
        self.write().add_record(record)
    }

    /// A snapshot of the record stored under `name`.
    pub fn find(&self, name: &str) -> Option<Record> {
        self.read().find(name).cloned()
    }

    /// Remove a record; no-op if absent.
    pub fn delete(&self, name: &str) -> Option<Record> {
        self.write().delete(name)
    }

    /// Apply `f` to the named record while holding the write lock.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::NotFound` if there is no such record, or
    /// whatever error `f` returns.
    pub fn update<T, F>(&self, name: &str, f: F) -> AddressBookResult<T>
    where
        F: FnOnce(&mut Record) -> AddressBookResult<T>,
    {
        let mut book = self.write();
        let record = book
            .find_mut(name)
            .ok_or_else(|| AddressBookError::NotFound(format!("record '{}'", name)))?;
        f(record)
    }

    /// Owned pages of the current contents.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::Precondition` if `page_size` is zero.
    pub fn pages(&self, page_size: usize) -> AddressBookResult<Vec<Vec<Record>>> {
        let book = self.read();
        let pages = book
            .iterate(page_size)?
            .map(|page| page.into_iter().cloned().collect())
            .collect();
        Ok(pages)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, AddressBook> {
        self.book.read().unwrap_or_else(|poisoned| {
            tracing::warn!("Address book lock poisoned; recovering");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, AddressBook> {
        self.book.write().unwrap_or_else(|poisoned| {
            tracing::warn!("Address book lock poisoned; recovering");
            poisoned.into_inner()
        })
    }
}

impl std::fmt::Debug for SharedAddressBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedAddressBook")
            .field("len", &self.len())
            .finish()
    }
}
