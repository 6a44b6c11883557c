//! QOTD - Question of the Day
//!
//! The daily-challenge core of the student learning dashboard. Tracks
//! date-based completion and streak counters, persists them through a small
//! key-value store, and selects today's challenge from a fixed catalog
//! filtered by the learner's style profile.
//!
//! The dashboard (or the bundled CLI) owns the clock and the store; the
//! tracker logic itself is a pair of pure functions over an explicit state
//! value, so a host can simulate any date and every behaviour is testable
//! without a wall clock.
//!
//! ```ignore
//! let store = SqliteStore::open_default()?;
//! let today = chrono::Local::now().date_naive();
//!
//! let state = tracker::initialize(today, &store);
//! let state = tracker::submit_answer(&state, today, "my answer", &store);
//! assert!(state.completed_today);
//! ```

pub mod catalog;
pub mod milestones;
pub mod store;
pub mod tracker;

pub use catalog::{
    CATALOG, CognitiveLevel, DailyChallenge, Difficulty, LearningStyle, OsRandom, RandomSource,
    select_challenge,
};
pub use milestones::{MILESTONES, Milestone};
pub use store::{MemoryStore, SqliteStore, StoreError, StreakStore};
pub use tracker::{DailyChallengeState, StreakRecord, initialize, submit_answer};
