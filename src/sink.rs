use crate::models::AchievementNote;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

pub trait PresentationSink {
    fn on_tick(&mut self, _display: &str, _progress_percent: u8) {}

    fn on_achievement_unlocked(&mut self, _title: &str, _message: &str) {}

    fn on_stats_changed(&mut self, _today_display: &str, _total_display: &str, _sessions_count: u64) {
    }
}

pub struct NullSink;

impl PresentationSink for NullSink {}

/// Pending achievement popups, shared between the engine's sink side and the
/// status endpoint that hands them to the page. Drained on read so each popup
/// is shown once.
#[derive(Clone, Default)]
pub struct NoticeBoard {
    pending: Arc<Mutex<VecDeque<AchievementNote>>>,
}

impl NoticeBoard {
    fn pending(&self) -> MutexGuard<'_, VecDeque<AchievementNote>> {
        match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn drain(&self) -> Vec<AchievementNote> {
        self.pending().drain(..).collect()
    }
}

impl PresentationSink for NoticeBoard {
    fn on_achievement_unlocked(&mut self, title: &str, message: &str) {
        self.pending().push_back(AchievementNote {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
