//! SMS delivery
//!
//! Twilio Messages API client. Fire-and-confirm: a 2xx from Twilio is a
//! confirmed send, anything else is a failure. No queued/partial states are
//! modeled.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::info;
use uuid::Uuid;

/// Seam to the external SMS gateway.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Send one message to the given destination number.
    async fn send(&self, user_id: Uuid, phone: &str, message: &str) -> Result<()>;
}

/// Twilio Messages API implementation.
pub struct TwilioSender {
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

impl TwilioSender {
    pub fn new(
        client: reqwest::Client,
        account_sid: &str,
        auth_token: &str,
        from_number: &str,
    ) -> Self {
        Self {
            client,
            account_sid: account_sid.to_string(),
            auth_token: auth_token.to_string(),
            from_number: from_number.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.account_sid
        )
    }
}

#[async_trait]
impl SmsSender for TwilioSender {
    async fn send(&self, user_id: Uuid, phone: &str, message: &str) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[
                ("From", self.from_number.as_str()),
                ("To", phone),
                ("Body", message),
            ])
            .send()
            .await
            .with_context(|| format!("sms request failed to reach Twilio for {user_id}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "Twilio returned HTTP {status} for {user_id}: {body}"
            ));
        }

        // Surface the provider-side message id for traceability
        let json: serde_json::Value = response.json().await.unwrap_or_default();
        if let Some(sid) = json.get("sid").and_then(|s| s.as_str()) {
            info!("sms accepted by Twilio for {user_id} (sid {sid})");
        } else {
            info!("sms accepted by Twilio for {user_id}");
        }
        Ok(())
    }
}
