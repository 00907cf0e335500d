//! # Services
//!
//! External collaborators behind trait seams: the profile store, the
//! message-generation service, and the SMS gateway. Each has exactly one
//! production implementation; tests substitute the mocks in
//! [`testing`](self::testing).

pub mod generator;
pub mod profiles;
pub mod sms;

pub use generator::{GeminiGenerator, MessageGenerator};
pub use profiles::{ProfileStore, SupabaseProfileStore};
pub use sms::{SmsSender, TwilioSender};

#[cfg(test)]
pub(crate) mod testing {
    //! Mock collaborators with call recording and per-user failure
    //! injection, shared by the pipeline, runner, and server tests.

    use super::{MessageGenerator, ProfileStore, SmsSender};
    use crate::core::Profile;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use std::collections::HashSet;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    pub struct MockStore {
        pub profiles: Vec<Profile>,
        pub fail_fetch: bool,
        pub fail_record_for: HashSet<Uuid>,
        pub recorded: Mutex<Vec<(Uuid, DateTime<Utc>)>>,
    }

    #[async_trait]
    impl ProfileStore for MockStore {
        async fn fetch_candidates(&self) -> Result<Vec<Profile>> {
            if self.fail_fetch {
                return Err(anyhow!("profile query failed"));
            }
            Ok(self.profiles.clone())
        }

        async fn record_sent(&self, user_id: Uuid, sent_at: DateTime<Utc>) -> Result<()> {
            if self.fail_record_for.contains(&user_id) {
                return Err(anyhow!("profile update failed"));
            }
            self.recorded.lock().unwrap().push((user_id, sent_at));
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct MockGenerator {
        pub fail_for: HashSet<Uuid>,
        pub empty_for: HashSet<Uuid>,
        pub calls: Mutex<Vec<Uuid>>,
    }

    #[async_trait]
    impl MessageGenerator for MockGenerator {
        async fn generate(
            &self,
            user_id: Uuid,
            tone: &str,
            _display_name: Option<&str>,
        ) -> Result<String> {
            self.calls.lock().unwrap().push(user_id);
            if self.fail_for.contains(&user_id) {
                return Err(anyhow!("generation service unavailable"));
            }
            if self.empty_for.contains(&user_id) {
                return Ok("   ".to_string());
            }
            Ok(format!("Time to hydrate! ({tone})"))
        }
    }

    #[derive(Default)]
    pub struct MockSender {
        pub fail_for: HashSet<Uuid>,
        pub sent: Mutex<Vec<(Uuid, String)>>,
    }

    #[async_trait]
    impl SmsSender for MockSender {
        async fn send(&self, user_id: Uuid, _phone: &str, message: &str) -> Result<()> {
            if self.fail_for.contains(&user_id) {
                return Err(anyhow!("sms gateway rejected the message"));
            }
            self.sent.lock().unwrap().push((user_id, message.to_string()));
            Ok(())
        }
    }

    /// A candidate profile with the given id suffix, due for its first
    /// reminder unless a send is recorded afterwards.
    pub fn profile(n: u128) -> Profile {
        Profile {
            user_id: Uuid::from_u128(n),
            display_name: Some(format!("user-{n}")),
            phone_number: format!("+1555000{n:04}"),
            reminder_frequency: "every 6 hours".to_string(),
            reminder_tone: "kind".to_string(),
            last_reminder_sent_at: None,
        }
    }
}
