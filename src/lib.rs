// Core layer - shared types and configuration
pub mod core;

// Features layer - all feature modules
pub mod features;

// Services layer - external collaborators (profile store, LLM, SMS)
pub mod services;

// HTTP layer - the trigger endpoint wrapping the dispatcher
pub mod server;

// Re-export core config
pub use crate::core::{Config, Profile};

// Re-export feature items
pub use features::{
    // Dispatch
    BatchRunner, DeliveryPipeline, DispatchOutcome, PipelineError,
    // Frequency grammar
    parse_frequency,
    // Due-time computation
    is_due,
    // Tone-aware prompt construction
    ReminderPrompt,
};

// Re-export collaborator seams
pub use services::{
    GeminiGenerator, MessageGenerator, ProfileStore, SmsSender, SupabaseProfileStore,
    TwilioSender,
};
