//! # Dispatch Feature
//!
//! The scheduled reminder dispatcher: per-profile delivery pipeline and the
//! batch runner that drives it across the candidate set.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod pipeline;
pub mod runner;

pub use pipeline::{DeliveryPipeline, PipelineError, Sent};
pub use runner::{BatchRunner, DispatchOutcome};
