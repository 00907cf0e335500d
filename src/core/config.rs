//! Environment-backed configuration
//!
//! All required credentials are validated up front so a misconfigured
//! deployment fails at startup, before any profile is fetched.

use anyhow::{Context, Result};
use std::env;

/// Runtime configuration for the dispatcher.
///
/// Built once at startup via [`Config::from_env`] and passed explicitly to
/// the components that need it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Supabase project (profile store)
    pub supabase_url: String,
    /// Service role key for the profile store (server-side only)
    pub supabase_service_role_key: String,
    /// Gemini API key for reminder message generation
    pub gemini_api_key: String,
    /// Gemini model id, e.g. "gemini-1.5-flash-latest"
    pub gemini_model: String,
    /// Twilio account SID
    pub twilio_account_sid: String,
    /// Twilio auth token
    pub twilio_auth_token: String,
    /// E.164 number reminders are sent from
    pub twilio_from_number: String,
    /// Address the trigger endpoint binds to
    pub bind_addr: String,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
    /// Upper bound on concurrently processed profiles per run
    pub dispatch_concurrency: usize,
    /// Timeout applied to each outbound HTTP call, in seconds
    pub request_timeout_secs: u64,
}

fn required(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("required environment variable {name} is not set"))
}

impl Config {
    /// Load configuration from the environment, failing fast on anything
    /// missing or malformed.
    pub fn from_env() -> Result<Self> {
        let dispatch_concurrency = match env::var("DISPATCH_CONCURRENCY") {
            Ok(v) => v
                .parse::<usize>()
                .with_context(|| format!("DISPATCH_CONCURRENCY is not a valid count: {v:?}"))?,
            Err(_) => 4,
        };
        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(v) => v
                .parse::<u64>()
                .with_context(|| format!("REQUEST_TIMEOUT_SECS is not a valid duration: {v:?}"))?,
            Err(_) => 15,
        };

        Ok(Config {
            supabase_url: required("SUPABASE_URL")?,
            supabase_service_role_key: required("SUPABASE_SERVICE_ROLE_KEY")?,
            gemini_api_key: required("GEMINI_API_KEY")?,
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash-latest".to_string()),
            twilio_account_sid: required("TWILIO_ACCOUNT_SID")?,
            twilio_auth_token: required("TWILIO_AUTH_TOKEN")?,
            twilio_from_number: required("TWILIO_PHONE_NUMBER")?,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8787".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            dispatch_concurrency: dispatch_concurrency.max(1),
            request_timeout_secs,
        })
    }
}
