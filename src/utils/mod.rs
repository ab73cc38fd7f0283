//! Shared limits and small validation helpers.

pub mod validation;
