//! # Data Model
//!
//! Contacts are built from three field value types and one aggregate:
//!
//! - [`Name`]: the directory key, stored as given
//! - [`Phone`]: exactly ten ASCII digits
//! - [`Birthday`]: a real calendar date written as `YYYY-MM-DD`
//! - [`Record`]: a name, an ordered list of phones and an optional birthday
//!
//! Validation happens once, at construction. A `Phone` or `Birthday` that
//! exists is valid, so nothing downstream re-checks them. Each validated
//! type also implements [`std::str::FromStr`], and serde deserialization goes
//! through the same constructors so a snapshot can never smuggle in a bad
//! value.

mod fields;
mod record;

pub use fields::{Birthday, Name, Phone, ValidationError, BIRTHDAY_FORMAT, PHONE_DIGITS};
pub use record::Record;
