//! # Features
//!
//! Feature modules for the dispatcher: the frequency grammar, due-time
//! computation, tone-aware prompt construction, and the batch dispatch
//! machinery itself.

pub mod dispatch;
pub mod frequency;
pub mod scheduling;
pub mod tones;

pub use dispatch::{BatchRunner, DeliveryPipeline, DispatchOutcome, PipelineError};
pub use frequency::parse_frequency;
pub use scheduling::is_due;
pub use tones::ReminderPrompt;
