use crate::achievements;
use crate::catalog::{CHECKPOINT_EVERY_TICKS, DAILY_GOAL_SECS, MILESTONES};
use crate::clock::Clock;
use crate::models::{StatsRecord, StatsResponse, StatusResponse};
use crate::sink::PresentationSink;
use crate::stats;
use crate::storage::{self, Store};
use std::collections::BTreeSet;
use tracing::{info, warn};

pub struct TimerEngine {
    record: StatsRecord,
    unlocked: BTreeSet<u64>,
    running: bool,
    store: Box<dyn Store + Send>,
    sink: Box<dyn PresentationSink + Send>,
}

impl TimerEngine {
    pub fn new(
        store: Box<dyn Store + Send>,
        sink: Box<dyn PresentationSink + Send>,
        clock: &dyn Clock,
    ) -> Self {
        let mut record = storage::load_record(store.as_ref());
        let today = clock.today().to_string();

        let rolled = record.last_date != today;
        if rolled {
            record.today_seconds = 0;
            record.today_achievements.clear();
            record.current_session_seconds = 0;
            record.last_date = today;
        }
        if record.total_seconds < record.today_seconds {
            record.total_seconds = record.today_seconds;
        }

        let unlocked = record.today_achievements.iter().copied().collect();
        let mut engine = Self {
            record,
            unlocked,
            running: false,
            store,
            sink,
        };

        if rolled {
            info!("new day, daily counters reset");
            engine.persist();
        }
        engine.notify_tick();
        engine.notify_stats();
        engine
    }

    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }

        self.running = true;
        if self.record.current_session_seconds == 0 {
            self.record.sessions_count += 1;
            self.persist();
            self.notify_stats();
        }
        true
    }

    pub fn tick(&mut self) {
        // A tick already queued when Pause ran must not count.
        if !self.running {
            return;
        }

        self.record.current_session_seconds += 1;
        self.record.today_seconds += 1;
        self.record.total_seconds += 1;
        self.notify_tick();

        let fresh =
            achievements::newly_unlocked(MILESTONES, self.record.today_seconds, &mut self.unlocked);
        if !fresh.is_empty() {
            for milestone in &fresh {
                info!("achievement unlocked: {}", milestone.title);
                self.sink
                    .on_achievement_unlocked(milestone.title, milestone.message);
            }
            self.record.today_achievements = self.unlocked.iter().copied().collect();
            self.persist();
        }

        if self.record.current_session_seconds % CHECKPOINT_EVERY_TICKS == 0 {
            self.persist();
            self.notify_stats();
        }
    }

    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }

        self.running = false;
        self.persist();
        self.notify_stats();
        true
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.record.current_session_seconds = 0;
        self.persist();
        self.notify_tick();
        self.notify_stats();
    }

    pub fn shutdown(&mut self) {
        self.persist();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn record(&self) -> &StatsRecord {
        &self.record
    }

    pub fn snapshot(&self) -> StatusResponse {
        StatusResponse {
            running: self.running,
            session_display: stats::format_clock(self.record.current_session_seconds),
            session_seconds: self.record.current_session_seconds,
            today_seconds: self.record.today_seconds,
            today_display: stats::format_short(self.record.today_seconds),
            total_display: stats::format_short(self.record.total_seconds),
            sessions_count: self.record.sessions_count,
            progress_percent: stats::progress_percent(self.record.today_seconds),
            goal_display: stats::format_short(DAILY_GOAL_SECS),
            unlocked: Vec::new(),
        }
    }

    pub fn stats(&self) -> StatsResponse {
        stats::build_stats(&self.record, &self.unlocked)
    }

    fn persist(&mut self) {
        if let Err(err) = storage::save_record(self.store.as_ref(), &self.record) {
            warn!("failed to persist stats record: {err}");
        }
    }

    fn notify_tick(&mut self) {
        let display = stats::format_clock(self.record.current_session_seconds);
        let progress = stats::progress_percent(self.record.today_seconds);
        self.sink.on_tick(&display, progress);
    }

    fn notify_stats(&mut self) {
        let today = stats::format_short(self.record.today_seconds);
        let total = stats::format_short(self.record.total_seconds);
        self.sink
            .on_stats_changed(&today, &total, self.record.sessions_count);
    }
}
