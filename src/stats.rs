use crate::catalog::{DAILY_GOAL_SECS, MILESTONES};
use crate::models::{MilestoneStatus, StatsRecord, StatsResponse};
use std::collections::BTreeSet;

pub fn format_short(seconds: u64) -> String {
    let minutes = seconds / 60;
    if minutes == 0 {
        format!("{seconds}s")
    } else if minutes < 60 {
        format!("{minutes}m")
    } else {
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}

pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

pub fn progress_percent(today_seconds: u64) -> u8 {
    let percent = today_seconds.saturating_mul(100) / DAILY_GOAL_SECS;
    percent.min(100) as u8
}

pub fn build_stats(record: &StatsRecord, unlocked: &BTreeSet<u64>) -> StatsResponse {
    let milestones = MILESTONES
        .iter()
        .map(|milestone| MilestoneStatus {
            time: milestone.time,
            title: milestone.title,
            message: milestone.message,
            unlocked: unlocked.contains(&milestone.time),
        })
        .collect();

    StatsResponse {
        today_display: format_short(record.today_seconds),
        total_display: format_short(record.total_seconds),
        sessions_count: record.sessions_count,
        goal_display: format_short(DAILY_GOAL_SECS),
        progress_percent: progress_percent(record.today_seconds),
        milestones,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_short_picks_coarsest_unit() {
        assert_eq!(format_short(45), "45s");
        assert_eq!(format_short(65), "1m");
        assert_eq!(format_short(3725), "1h 2m");
        assert_eq!(format_short(0), "0s");
        assert_eq!(format_short(3600), "1h 0m");
    }

    #[test]
    fn format_clock_zero_pads() {
        assert_eq!(format_clock(125), "02:05");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(599), "09:59");
    }

    #[test]
    fn progress_caps_at_one_hundred() {
        assert_eq!(progress_percent(0), 0);
        assert_eq!(progress_percent(150), 50);
        assert_eq!(progress_percent(300), 100);
        assert_eq!(progress_percent(9000), 100);
    }

    #[test]
    fn stats_flags_unlocked_milestones() {
        let record = StatsRecord {
            today_seconds: 310,
            total_seconds: 5000,
            sessions_count: 2,
            today_achievements: vec![60, 300],
            current_session_seconds: 10,
            last_date: "2026-08-06".to_string(),
        };
        let unlocked = BTreeSet::from([60, 300]);

        let stats = build_stats(&record, &unlocked);
        assert_eq!(stats.milestones.len(), 5);
        assert!(stats.milestones[0].unlocked);
        assert!(stats.milestones[1].unlocked);
        assert!(!stats.milestones[2].unlocked);
        assert_eq!(stats.today_display, "5m");
        assert_eq!(stats.goal_display, "5m");
        assert_eq!(stats.progress_percent, 100);
    }
}
