//! Fixed failure messages
//!
//! Each failure site uses exactly one of these constants, and the message is
//! surfaced to the caller verbatim. Tests assert against the same constants.

pub const PERSON_NOT_FOUND: &str = "Person not found";
pub const ADDRESS_NOT_FOUND: &str = "Address not found";
pub const PERSON_ALREADY_REGISTERED: &str = "Person already registered";
pub const ADDRESS_OWNER_REQUIRED: &str = "Address owner is required";
