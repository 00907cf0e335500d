//! Profile snapshot rows
//!
//! The dispatcher never owns profiles; it reads a per-run snapshot from the
//! profile store and writes back exactly one field (`last_reminder_sent_at`)
//! after a confirmed send.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// One candidate row from the profile store.
///
/// The candidate query guarantees `phone_number`, `reminder_frequency`, and
/// `reminder_tone` are all present; the remaining fields may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub user_id: Uuid,
    pub display_name: Option<String>,
    pub phone_number: String,
    pub reminder_frequency: String,
    pub reminder_tone: String,
    pub last_reminder_sent_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Display name to address the user by, degrading to None when the
    /// account never set one.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref().filter(|n| !n.trim().is_empty())
    }
}
