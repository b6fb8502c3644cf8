//! CLI library components for the vetform validator.

pub mod logging;
