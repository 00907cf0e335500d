//! # Core Module
//!
//! Core domain types and configuration for the hydration dispatcher.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod config;
pub mod profile;

// Re-export commonly used items
pub use config::Config;
pub use profile::Profile;
