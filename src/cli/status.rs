//! Status command implementation

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use qotd::milestones::Milestone;
use qotd::store::SqliteStore;
use qotd::tracker::{self, DailyChallengeState};

#[derive(Serialize)]
struct StatusView {
    date: String,
    #[serde(flatten)]
    state: DailyChallengeState,
    next_milestone: Option<&'static Milestone>,
    milestone_progress: u32,
}

/// Show streak counters and milestone progress
pub fn status_command(store: &SqliteStore, today: NaiveDate, json: bool) -> Result<()> {
    let state = tracker::initialize(today, store);
    let streak = state.record.current_streak;

    if json {
        let view = StatusView {
            date: tracker::format_date(today),
            state,
            next_milestone: Milestone::next(streak),
            milestone_progress: Milestone::progress_toward_next(streak),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("Daily challenge — {}", tracker::format_date(today));
    println!();
    println!("  Current streak: {} days", streak);
    println!("  Longest streak: {} days", state.record.longest_streak);
    println!(
        "  Today: {}",
        if state.completed_today {
            "completed ✅"
        } else {
            "not completed yet"
        }
    );

    for m in Milestone::unlocked(streak) {
        println!("  {} {} ({} days)", m.icon, m.name, m.days);
    }

    if let Some(next) = Milestone::next(streak) {
        println!(
            "  Next: {} {} in {} more days ({}%)",
            next.icon,
            next.name,
            next.days - streak,
            Milestone::progress_toward_next(streak)
        );
    }

    Ok(())
}
