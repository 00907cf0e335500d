//! # Frequency Grammar Feature
//!
//! Parses each user's free-text reminder cadence into an hour interval.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod parser;

pub use parser::parse_frequency;
