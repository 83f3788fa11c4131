//! Get Send Progress Use Case

use std::sync::Arc;

use crate::domain::gateways::ProgressStore;
use crate::domain::models::SendProgress;

pub struct GetSendProgressUseCase {
    progress: Arc<dyn ProgressStore>,
}

impl GetSendProgressUseCase {
    #[must_use]
    pub fn new(progress: Arc<dyn ProgressStore>) -> Self {
        Self { progress }
    }

    /// The caller's running or most recent job, idle if none.
    #[must_use]
    pub fn execute(&self, user_id: &str) -> SendProgress {
        self.progress.get(user_id).unwrap_or_else(SendProgress::idle)
    }
}
