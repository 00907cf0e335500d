//! # Scheduling Feature
//!
//! Decides whether a profile is due for its next reminder.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod due;

pub use due::is_due;
