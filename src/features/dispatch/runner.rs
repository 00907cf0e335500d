//! Batch runner
//!
//! One run: fetch the candidate set, fan the profiles out over a bounded
//! worker pool, contain every per-profile failure, and fold the results
//! into a single outcome. Only the candidate fetch itself can fail the run.

use crate::core::Profile;
use crate::features::dispatch::pipeline::{DeliveryPipeline, PipelineError};
use crate::features::frequency::parse_frequency;
use crate::features::scheduling::is_due;
use crate::services::ProfileStore;
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, error, info};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Aggregate counters for one dispatch run. Ephemeral; nothing outlives the
/// run except the per-profile timestamps written by the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Candidates fetched and evaluated
    pub profiles_checked: usize,
    /// Profiles for which the full pipeline succeeded, record included
    pub reminders_sent: usize,
}

/// Terminal state of one profile within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileOutcome {
    /// Frequency did not match the grammar; excluded from due-evaluation
    Skipped,
    /// Not yet due at the run timestamp
    NotDue,
    /// Full pipeline success
    Recorded,
    /// Generation failed or produced nothing usable
    FailedAtGenerate,
    /// The SMS gateway rejected the message
    FailedAtSend,
    /// The SMS went out but the bookkeeping update failed
    SentButNotRecorded,
}

/// Drives one dispatch run across all candidate profiles.
#[derive(Clone)]
pub struct BatchRunner {
    store: Arc<dyn ProfileStore>,
    pipeline: DeliveryPipeline,
    concurrency: usize,
}

impl BatchRunner {
    pub fn new(store: Arc<dyn ProfileStore>, pipeline: DeliveryPipeline, concurrency: usize) -> Self {
        Self {
            store,
            pipeline,
            concurrency: concurrency.max(1),
        }
    }

    /// Run one dispatch pass at the given timestamp.
    ///
    /// Fails only if the candidate fetch fails; every per-profile error is
    /// logged and absorbed into the counters.
    ///
    /// The pass runs on its own task. A caller that stops waiting (dropped
    /// connection, expired deadline) only drops the join handle; pipelines
    /// that are between a confirmed send and its record-sent commit still
    /// run to completion.
    pub async fn run(&self, now: DateTime<Utc>) -> Result<DispatchOutcome> {
        let runner = self.clone();
        match tokio::spawn(async move { runner.run_inner(now).await }).await {
            Ok(result) => result,
            Err(e) => Err(anyhow!("dispatch run aborted unexpectedly: {e}")),
        }
    }

    async fn run_inner(&self, now: DateTime<Utc>) -> Result<DispatchOutcome> {
        let profiles = self
            .store
            .fetch_candidates()
            .await
            .context("failed to fetch candidate profiles")?;
        let profiles_checked = profiles.len();

        if profiles.is_empty() {
            info!("no profiles with active reminder settings");
            return Ok(DispatchOutcome::default());
        }
        info!("checking {profiles_checked} profiles for due reminders");

        // Profiles are independent units of work; the semaphore bounds how
        // many are in flight at once. Counters are folded at fan-in, so no
        // shared mutable state exists across workers.
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut workers = JoinSet::new();
        for profile in profiles {
            let pipeline = self.pipeline.clone();
            let semaphore = semaphore.clone();
            workers.spawn(async move {
                // never closed, so acquisition cannot fail
                let _permit = semaphore.acquire_owned().await.ok();
                process_profile(&pipeline, &profile, now).await
            });
        }

        let mut reminders_sent = 0;
        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok(ProfileOutcome::Recorded) => reminders_sent += 1,
                Ok(_) => {}
                Err(e) => error!("profile worker aborted unexpectedly: {e}"),
            }
        }

        info!("dispatch run complete: {profiles_checked} checked, {reminders_sent} sent 💧");
        Ok(DispatchOutcome {
            profiles_checked,
            reminders_sent,
        })
    }
}

/// Evaluate and, if due, deliver for a single profile. Every failure is
/// contained here; the caller only sees a terminal state.
async fn process_profile(
    pipeline: &DeliveryPipeline,
    profile: &Profile,
    now: DateTime<Utc>,
) -> ProfileOutcome {
    let user_id = profile.user_id;

    let Some(interval_hours) = parse_frequency(&profile.reminder_frequency) else {
        debug!(
            "skipping {user_id}: unparseable frequency {:?}",
            profile.reminder_frequency
        );
        return ProfileOutcome::Skipped;
    };

    if !is_due(profile.last_reminder_sent_at, interval_hours, now) {
        debug!("reminder not yet due for {user_id}");
        return ProfileOutcome::NotDue;
    }

    match pipeline.deliver(profile, now).await {
        Ok(_) => ProfileOutcome::Recorded,
        Err(PipelineError::SentButNotRecorded(e)) => {
            // The reminder went out; the next run may duplicate it until the
            // bookkeeping catches up. Loud on purpose.
            error!("reminder for {user_id} was sent but not recorded: {e}");
            ProfileOutcome::SentButNotRecorded
        }
        Err(err @ (PipelineError::Generate(_) | PipelineError::EmptyMessage)) => {
            error!("delivery failed for {user_id}: {err}");
            ProfileOutcome::FailedAtGenerate
        }
        Err(err @ PipelineError::Send(_)) => {
            error!("delivery failed for {user_id}: {err}");
            ProfileOutcome::FailedAtSend
        }
    }
}
