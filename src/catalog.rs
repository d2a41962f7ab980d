use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
pub struct Milestone {
    pub time: u64,
    pub title: &'static str,
    pub message: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        time: 60,
        title: "First Minute",
        message: "Thanks for your first minute of support!",
    },
    Milestone {
        time: 300,
        title: "5 Minute Hero",
        message: "You've reached the daily goal! Amazing!",
    },
    Milestone {
        time: 600,
        title: "10 Minute Legend",
        message: "You're a true server supporter!",
    },
    Milestone {
        time: 900,
        title: "15 Minute Champion",
        message: "Incredible dedication to the community!",
    },
    Milestone {
        time: 1800,
        title: "30 Minute Elite",
        message: "You're keeping the server alive!",
    },
];

pub const DAILY_GOAL_SECS: u64 = 300;

pub const CHECKPOINT_EVERY_TICKS: u64 = 10;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);
