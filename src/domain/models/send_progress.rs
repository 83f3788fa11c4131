//! Send Progress Domain Model
//!
//! Tracks how far a user's bulk email job has progressed.

use chrono::{DateTime, Utc};

/// Lifecycle of a bulk send job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendStatus {
    Idle,
    Running,
    Completed,
}

impl SendStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Completed => "completed",
        }
    }
}

/// Snapshot of a user's send job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendProgress {
    pub total: u32,
    pub sent: u32,
    pub failed: u32,
    pub status: SendStatus,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl SendProgress {
    /// Progress reported for users who never sent anything
    #[must_use]
    pub fn idle() -> Self {
        Self {
            total: 0,
            sent: 0,
            failed: 0,
            status: SendStatus::Idle,
            started_at: None,
            finished_at: None,
        }
    }

    #[must_use]
    pub fn started(total: u32) -> Self {
        Self {
            total,
            sent: 0,
            failed: 0,
            status: SendStatus::Running,
            started_at: Some(Utc::now()),
            finished_at: None,
        }
    }

    #[must_use]
    pub fn processed(&self) -> u32 {
        self.sent + self.failed
    }

    pub fn record(&mut self, delivered: bool) {
        if delivered {
            self.sent += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn finish(&mut self) {
        self.status = SendStatus::Completed;
        self.finished_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_outcomes_and_finishes() {
        let mut progress = SendProgress::started(3);
        progress.record(true);
        progress.record(false);
        progress.record(true);
        assert_eq!(progress.processed(), 3);
        assert_eq!((progress.sent, progress.failed), (2, 1));
        assert_eq!(progress.status, SendStatus::Running);

        progress.finish();
        assert_eq!(progress.status, SendStatus::Completed);
        assert!(progress.finished_at.is_some());
    }
}
