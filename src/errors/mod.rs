//! Error types for the front end.
//!
//! This module defines the diagnostics the parser accumulates. It includes:
//!
//! - Error structures with source span information
//! - Specific error variants for each recoverable parse failure
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
