//! Due-time computation
//!
//! A profile with no recorded send is always due. Otherwise the next due
//! time is `last_sent + interval`, boundary inclusive. There is no catch-up
//! multiplication: however long the dispatcher was down, an overdue profile
//! fires exactly once on the next run.

use chrono::{DateTime, Duration, Utc};

/// Whether a reminder is due at `now` for the given send history and
/// interval.
pub fn is_due(last_sent_at: Option<DateTime<Utc>>, interval_hours: u32, now: DateTime<Utc>) -> bool {
    match last_sent_at {
        None => true,
        Some(last_sent) => {
            match last_sent.checked_add_signed(Duration::hours(i64::from(interval_hours))) {
                Some(next_due) => now >= next_due,
                // interval so large the next due time is unrepresentable
                None => false,
            }
        }
    }
}
