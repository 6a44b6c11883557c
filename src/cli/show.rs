//! Show command implementation

use anyhow::Result;
use chrono::NaiveDate;

use qotd::catalog::{CATALOG, LearningStyle, OsRandom, select_challenge};
use qotd::store::SqliteStore;
use qotd::tracker;

/// Print today's challenge, selected for the given learning-style profile
pub fn show_command(
    store: &SqliteStore,
    today: NaiveDate,
    style: Option<&str>,
    reveal_hint: bool,
) -> Result<()> {
    let preference = style.map(LearningStyle::from_label).unwrap_or(LearningStyle::General);

    let mut rng = OsRandom;
    let Some(challenge) = select_challenge(preference, CATALOG, &mut rng) else {
        println!("No challenges available.");
        return Ok(());
    };

    let state = tracker::initialize(today, store);

    println!("Question of the Day — {}", tracker::format_date(today));
    println!();
    println!(
        "  {} {} [{} / {}]",
        preference.emoji(),
        challenge.topic,
        challenge.difficulty.as_str(),
        challenge.cognitive_level.as_str()
    );
    println!();
    println!("  {}", challenge.prompt);

    if reveal_hint {
        if let Some(hint) = challenge.hint {
            println!();
            println!("  Hint: {}", hint);
        }
    }

    if !challenge.related_topics.is_empty() {
        println!();
        println!("  Related: {}", challenge.related_topics.join(", "));
    }

    println!();
    if state.completed_today {
        println!("✅ Already completed today. Come back tomorrow!");
    } else {
        println!("Answer with: qotd submit \"<your answer>\"");
    }

    Ok(())
}
