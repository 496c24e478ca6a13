//! CLI command implementations.

pub mod check;
