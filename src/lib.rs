//! Contact Book - an in-memory address book with validated phone numbers.
//!
//! # Architecture
//!
//! - **domain**: Value objects (`Name`, `Phone`) and the `Field` rendering contract
//! - **models**: The `Record` type holding a name and its phone numbers
//! - **book**: `AddressBook`, the insertion-ordered collection of records
//! - **error**: Error types for record operations and configuration
//! - **config**: Configuration for the binary, loaded from the environment
//! - **demo**: The reference walkthrough run by the binary
//!
//! # Example
//!
//! ```
//! use contact_book::{AddressBook, Record};
//!
//! let mut record = Record::new("John");
//! record.add_phone("1234567890").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(record);
//!
//! let john = book.find("John").unwrap();
//! assert_eq!(john.to_string(), "Contact name: John, phones: 1234567890");
//! ```

pub mod book;
pub mod config;
pub mod demo;
pub mod domain;
pub mod error;
pub mod models;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{Field, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::Record;
