use anyhow::{Context, Result};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;
use std::time::Duration;

use hydromate::core::Config;
use hydromate::features::dispatch::{BatchRunner, DeliveryPipeline};
use hydromate::server::{build_router, AppState};
use hydromate::services::{GeminiGenerator, SupabaseProfileStore, TwilioSender};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Fail fast on missing credentials, before anything is fetched
    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting hydration reminder dispatcher...");

    // One client for all outbound calls; the per-call timeout also bounds
    // each pipeline stage.
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .context("failed to build HTTP client")?;

    let store = Arc::new(SupabaseProfileStore::new(
        client.clone(),
        &config.supabase_url,
        &config.supabase_service_role_key,
    ));
    let generator = Arc::new(GeminiGenerator::new(
        client.clone(),
        &config.gemini_api_key,
        &config.gemini_model,
    ));
    let sender = Arc::new(TwilioSender::new(
        client,
        &config.twilio_account_sid,
        &config.twilio_auth_token,
        &config.twilio_from_number,
    ));

    let pipeline = DeliveryPipeline::new(generator, sender, store.clone());
    let runner = BatchRunner::new(store, pipeline, config.dispatch_concurrency);

    let app = build_router(Arc::new(AppState { runner }));
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("trigger endpoint listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .await
        .context("trigger endpoint exited")?;
    Ok(())
}
