use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StatsRecord {
    pub today_seconds: u64,
    pub total_seconds: u64,
    pub sessions_count: u64,
    pub today_achievements: Vec<u64>,
    pub current_session_seconds: u64,
    pub last_date: String,
}

#[derive(Debug, Deserialize)]
pub struct TimerRequest {
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementNote {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub running: bool,
    pub session_display: String,
    pub session_seconds: u64,
    pub today_seconds: u64,
    pub today_display: String,
    pub total_display: String,
    pub sessions_count: u64,
    pub progress_percent: u8,
    pub goal_display: String,
    pub unlocked: Vec<AchievementNote>,
}

#[derive(Debug, Serialize)]
pub struct MilestoneStatus {
    pub time: u64,
    pub title: &'static str,
    pub message: &'static str,
    pub unlocked: bool,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub today_display: String,
    pub total_display: String,
    pub sessions_count: u64,
    pub goal_display: String,
    pub progress_percent: u8,
    pub milestones: Vec<MilestoneStatus>,
}
