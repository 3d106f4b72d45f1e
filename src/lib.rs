//! Address Book - an in-memory contact store with validated fields.
//!
//! Records hold a name, any number of ten-digit phone numbers and an optional
//! birthday. An [`AddressBook`] keys records by name and pages through them in
//! insertion order.
//!
//! # Architecture
//!
//! - **domain**: Field wrapper and the validated name, phone and birthday types
//! - **models**: `Record` and `AddressBook`
//! - **shared**: Lock-protected handle for use across threads
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//!
//! let mut alice = Record::new("Alice", Some("2000-03-15")).unwrap();
//! alice.add_phone("1234567890").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(alice);
//!
//! let found = book.find("Alice").unwrap();
//! assert!(found.find_phone("1234567890").is_some());
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod shared;

pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError, ConfigResult};
pub use models::{AddressBook, Pages, Record};
pub use shared::SharedAddressBook;
