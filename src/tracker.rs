//! Daily-challenge streak tracking
//!
//! Decides, for a given logical date, whether today's challenge is already
//! completed, and credits the streak at most once per day on submission.
//!
//! Both operations are pure with respect to the host: the logical date is a
//! parameter (never a wall-clock read), state goes in and comes out as a
//! value, and the store is an explicit handle. Store reads degrade to
//! defaults on malformed values; store writes are best-effort, with the
//! in-memory state authoritative for the rest of the session.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::store::StreakStore;

/// Store key for the current streak counter (integer as string)
pub const CURRENT_STREAK_KEY: &str = "qotd-current-streak";
/// Store key for the longest streak counter (integer as string)
pub const LONGEST_STREAK_KEY: &str = "qotd-longest-streak";
/// Store key for the last completed date (`YYYY-MM-DD`)
pub const LAST_COMPLETED_KEY: &str = "qotd-last-completed";

/// Date serialization for the store and host interfaces
const DATE_FMT: &str = "%Y-%m-%d";

/// Persisted streak counters.
///
/// `longest_streak` is a running maximum and is never below
/// `current_streak` after a load or an update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreakRecord {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_completed: Option<NaiveDate>,
}

/// Tracker state for one session, derived from the store plus a logical date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyChallengeState {
    pub record: StreakRecord,
    pub completed_today: bool,
}

/// Load persisted streak state and resolve completion for `now`.
///
/// Each key is independently optional; absent or malformed values fall back
/// to defaults so a corrupted store degrades to a streak reset rather than
/// an error. Idempotent: repeated calls with the same store and date yield
/// the same state.
pub fn initialize(now: NaiveDate, store: &dyn StreakStore) -> DailyChallengeState {
    let current_streak = read_counter(store, CURRENT_STREAK_KEY);
    let longest_streak = read_counter(store, LONGEST_STREAK_KEY);
    let last_completed = read_date(store, LAST_COMPLETED_KEY);

    let record = StreakRecord {
        current_streak,
        // Running maximum, restored even if the store is inconsistent
        longest_streak: longest_streak.max(current_streak),
        last_completed,
    };

    DailyChallengeState {
        record,
        completed_today: last_completed == Some(now),
    }
}

/// Credit a challenge submission for `now`.
///
/// No-op when the trimmed answer is empty or when today is already
/// completed, so the streak is incremented at most once per logical day no
/// matter how often the submit event fires. On success the three keys are
/// written independently (no transaction) and the returned state carries
/// the incremented counters.
pub fn submit_answer(
    state: &DailyChallengeState,
    now: NaiveDate,
    answer: &str,
    store: &dyn StreakStore,
) -> DailyChallengeState {
    if answer.trim().is_empty() {
        debug!("ignoring submission with empty answer");
        return *state;
    }
    if state.completed_today {
        debug!("ignoring submission, already completed today");
        return *state;
    }

    let new_streak = state.record.current_streak + 1;
    let record = StreakRecord {
        current_streak: new_streak,
        longest_streak: state.record.longest_streak.max(new_streak),
        last_completed: Some(now),
    };

    write_best_effort(store, CURRENT_STREAK_KEY, &record.current_streak.to_string());
    write_best_effort(store, LONGEST_STREAK_KEY, &record.longest_streak.to_string());
    write_best_effort(store, LAST_COMPLETED_KEY, &format_date(now));

    debug!(streak = new_streak, "challenge completed for {}", format_date(now));

    DailyChallengeState {
        record,
        completed_today: true,
    }
}

/// Format a logical date the way the store expects it
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

/// Parse a logical date from its store/host serialization
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok()
}

fn read_counter(store: &dyn StreakStore, key: &str) -> u32 {
    match store.get(key) {
        Ok(Some(value)) => value.trim().parse().unwrap_or_else(|_| {
            warn!("malformed counter in store for '{}': {:?}", key, value);
            0
        }),
        Ok(None) => 0,
        Err(e) => {
            warn!("store read failed for '{}': {}", key, e);
            0
        }
    }
}

fn read_date(store: &dyn StreakStore, key: &str) -> Option<NaiveDate> {
    match store.get(key) {
        Ok(Some(value)) => {
            let parsed = parse_date(&value);
            if parsed.is_none() {
                warn!("malformed date in store for '{}': {:?}", key, value);
            }
            parsed
        }
        Ok(None) => None,
        Err(e) => {
            warn!("store read failed for '{}': {}", key, e);
            None
        }
    }
}

fn write_best_effort(store: &dyn StreakStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        warn!("store write failed for '{}': {}", key, e);
    }
}
