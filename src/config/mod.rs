//! # flexrow Configuration Module
//!
//! This module centralizes the constants that shape the encoded layout.
//! Values that depend on each other live next to each other and their
//! relationships are enforced through compile-time assertions.
//!
//! ## Module Organization
//!
//! - [`constants`]: Numeric and textual configuration values

pub mod constants;
pub use constants::*;
