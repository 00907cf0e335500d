//! # Tone System Feature
//!
//! Tone-styled reminder prompts with 5 distinct tones (kind, funny,
//! sarcastic, rude, crude). Unknown tones fall back to a friendly default.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod prompt_builder;

pub use prompt_builder::ReminderPrompt;
