//! Domain value objects and types.
//!
//! Names and phone numbers are modelled as small value objects sharing the
//! [`Field`] rendering contract. `Phone` validates at construction time so an
//! invalid number can never be stored in a record.

pub mod errors;
pub mod field;
pub mod phone;

pub use errors::ValidationError;
pub use field::{Field, Name};
pub use phone::{Phone, PHONE_PATTERN};
