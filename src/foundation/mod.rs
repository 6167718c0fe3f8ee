//! Shared geometry and error types.

pub(crate) mod core;
pub(crate) mod error;
