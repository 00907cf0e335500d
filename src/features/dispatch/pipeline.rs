//! Per-profile delivery pipeline
//!
//! Three strictly ordered stages for one due profile: generate the message,
//! send it, record the send. Each stage runs only after the previous one
//! succeeded; a failure stops the pipeline for that profile and is reported
//! to the batch runner as a non-fatal error.
//!
//! The one asymmetric case is a record failure after a confirmed send: the
//! SMS is already out, so it gets its own error variant instead of being
//! lumped in with "not sent". The next run may duplicate that one reminder
//! until the bookkeeping catches up.

use crate::core::Profile;
use crate::services::{MessageGenerator, ProfileStore, SmsSender};
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Where and how delivery failed for one profile.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("message generation failed: {0}")]
    Generate(anyhow::Error),
    #[error("generator returned an empty message")]
    EmptyMessage,
    #[error("sms send failed: {0}")]
    Send(anyhow::Error),
    #[error("sms was sent but the send was not recorded: {0}")]
    SentButNotRecorded(anyhow::Error),
}

/// Confirmation of a fully delivered and recorded reminder.
#[derive(Debug)]
pub struct Sent {
    pub user_id: Uuid,
    pub message: String,
}

/// Runs the generate → send → record sequence for one due profile.
#[derive(Clone)]
pub struct DeliveryPipeline {
    generator: Arc<dyn MessageGenerator>,
    sender: Arc<dyn SmsSender>,
    store: Arc<dyn ProfileStore>,
}

impl DeliveryPipeline {
    pub fn new(
        generator: Arc<dyn MessageGenerator>,
        sender: Arc<dyn SmsSender>,
        store: Arc<dyn ProfileStore>,
    ) -> Self {
        Self {
            generator,
            sender,
            store,
        }
    }

    /// Deliver one reminder. `now` is the run timestamp recorded on
    /// success.
    pub async fn deliver(
        &self,
        profile: &Profile,
        now: DateTime<Utc>,
    ) -> Result<Sent, PipelineError> {
        let user_id = profile.user_id;

        let message = self
            .generator
            .generate(user_id, &profile.reminder_tone, profile.display_name())
            .await
            .map_err(PipelineError::Generate)?;
        if message.trim().is_empty() {
            return Err(PipelineError::EmptyMessage);
        }
        debug!("generated reminder for {user_id}: {message:?}");

        self.sender
            .send(user_id, &profile.phone_number, &message)
            .await
            .map_err(PipelineError::Send)?;
        info!("reminder sent to {user_id} at {}", profile.phone_number);

        // The send is confirmed past this point; a record failure must not
        // masquerade as "not sent".
        self.store
            .record_sent(user_id, now)
            .await
            .map_err(PipelineError::SentButNotRecorded)?;

        Ok(Sent { user_id, message })
    }
}
