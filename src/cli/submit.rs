//! Submit command implementation

use anyhow::Result;
use chrono::NaiveDate;

use qotd::milestones::Milestone;
use qotd::store::SqliteStore;
use qotd::tracker;

/// Submit an answer for today's challenge
pub fn submit_command(store: &SqliteStore, today: NaiveDate, answer: &str) -> Result<()> {
    let state = tracker::initialize(today, store);

    if answer.trim().is_empty() {
        println!("Answer is empty, nothing submitted.");
        return Ok(());
    }
    if state.completed_today {
        println!(
            "Already completed today's challenge ({}-day streak). Come back tomorrow!",
            state.record.current_streak
        );
        return Ok(());
    }

    let after = tracker::submit_answer(&state, today, answer, store);
    let streak = after.record.current_streak;

    println!("✅ Challenge completed! Current streak: {} days", streak);
    if after.record.longest_streak == streak && streak > state.record.longest_streak {
        println!("🏆 New longest streak!");
    }

    // Milestone reached exactly today
    if let Some(m) = Milestone::unlocked(streak).find(|m| m.days == streak) {
        println!("{} Milestone unlocked: {}", m.icon, m.name);
    } else if let Some(next) = Milestone::next(streak) {
        println!(
            "{} more days until {} {}",
            next.days - streak,
            next.icon,
            next.name
        );
    }

    Ok(())
}
