//! Domain value objects and types.
//!
//! This module contains the field types a record is built from. The
//! validated ones (name, phone, birthday) check their format at
//! construction time so an invalid value can never be stored.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
