//! Send Progress Store Gateway

use crate::domain::models::send_progress::SendProgress;

/// Keyed store of bulk-send progress, one entry per user
pub trait ProgressStore: Send + Sync {
    /// Start tracking a job. Returns false if the user already has a running job.
    fn try_start(&self, user_id: &str, total: u32) -> bool;

    fn record(&self, user_id: &str, delivered: bool);

    fn finish(&self, user_id: &str);

    fn get(&self, user_id: &str) -> Option<SendProgress>;
}
