//! In-process bulk send progress

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::gateways::ProgressStore;
use crate::domain::models::{SendProgress, SendStatus};

/// Progress per user, lost on restart
#[derive(Default)]
pub struct DashMapProgressStore {
    jobs: DashMap<String, SendProgress>,
}

impl DashMapProgressStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for DashMapProgressStore {
    fn try_start(&self, user_id: &str, total: u32) -> bool {
        match self.jobs.entry(user_id.to_string()) {
            Entry::Occupied(entry) if entry.get().status == SendStatus::Running => false,
            Entry::Occupied(mut entry) => {
                entry.insert(SendProgress::started(total));
                true
            }
            Entry::Vacant(entry) => {
                entry.insert(SendProgress::started(total));
                true
            }
        }
    }

    fn record(&self, user_id: &str, delivered: bool) {
        if let Some(mut progress) = self.jobs.get_mut(user_id) {
            progress.record(delivered);
        }
    }

    fn finish(&self, user_id: &str) {
        if let Some(mut progress) = self.jobs.get_mut(user_id) {
            progress.finish();
        }
    }

    fn get(&self, user_id: &str) -> Option<SendProgress> {
        self.jobs.get(user_id).map(|p| p.clone())
    }
}
