//! Validation check functions.
//!
//! Each module implements one rule category as a small pure function that
//! returns `None` when the value passes and a descriptive message when it
//! does not. Checks never perform I/O and never panic on malformed input.

pub mod address;
pub mod charset;
pub mod crossfield;
pub mod document;
pub mod email;
pub mod length;
pub mod numeric;
pub mod password;
pub mod phone;
pub mod presence;
pub mod sanitize;
