//! Profile store access
//!
//! The dispatcher reads candidate rows from the Supabase `profiles` table
//! through PostgREST and writes back a single column after a confirmed send.
//! The candidate filter lives in the query itself: phone, frequency, and
//! tone must all be non-null for a row to come back at all.

use crate::core::Profile;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use uuid::Uuid;

const CANDIDATE_COLUMNS: &str =
    "user_id,display_name,phone_number,reminder_frequency,reminder_tone,last_reminder_sent_at";

/// Seam to the external profile store.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch every profile eligible for reminder dispatch, in one query.
    async fn fetch_candidates(&self) -> Result<Vec<Profile>>;

    /// Record a confirmed send by updating the profile's
    /// `last_reminder_sent_at` to the run timestamp.
    async fn record_sent(&self, user_id: Uuid, sent_at: DateTime<Utc>) -> Result<()>;
}

/// PostgREST-backed profile store.
pub struct SupabaseProfileStore {
    client: reqwest::Client,
    base_url: String,
    service_role_key: String,
}

impl SupabaseProfileStore {
    pub fn new(client: reqwest::Client, base_url: &str, service_role_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_role_key: service_role_key.to_string(),
        }
    }

    fn profiles_url(&self) -> String {
        format!("{}/rest/v1/profiles", self.base_url)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
    }
}

#[async_trait]
impl ProfileStore for SupabaseProfileStore {
    async fn fetch_candidates(&self) -> Result<Vec<Profile>> {
        let response = self
            .authed(self.client.get(self.profiles_url()))
            .query(&[
                ("select", CANDIDATE_COLUMNS),
                ("phone_number", "not.is.null"),
                ("reminder_frequency", "not.is.null"),
                ("reminder_tone", "not.is.null"),
            ])
            .send()
            .await
            .context("candidate query failed to reach the profile store")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("candidate query returned HTTP {status}: {body}"));
        }

        let profiles: Vec<Profile> = response
            .json()
            .await
            .context("candidate query returned malformed rows")?;
        debug!("fetched {} candidate profiles", profiles.len());
        Ok(profiles)
    }

    async fn record_sent(&self, user_id: Uuid, sent_at: DateTime<Utc>) -> Result<()> {
        let response = self
            .authed(self.client.patch(self.profiles_url()))
            .query(&[("user_id", format!("eq.{user_id}"))])
            .header("Prefer", "return=minimal")
            .json(&serde_json::json!({
                "last_reminder_sent_at": sent_at.to_rfc3339(),
            }))
            .send()
            .await
            .with_context(|| format!("profile update failed to reach the store for {user_id}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "profile update for {user_id} returned HTTP {status}: {body}"
            ));
        }
        Ok(())
    }
}
