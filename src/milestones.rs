//! Streak milestone ladder
//!
//! Fixed reward milestones the dashboard shows next to the streak counter.
//! Milestones are display-only: they are derived from the current streak on
//! every read and nothing about them is persisted.

use serde::Serialize;

/// A streak milestone with its display reward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    /// Streak length that unlocks the milestone
    pub days: u32,
    pub name: &'static str,
    pub icon: &'static str,
}

/// The milestone ladder, in ascending order
pub static MILESTONES: &[Milestone] = &[
    Milestone {
        days: 3,
        name: "Focus Badge",
        icon: "🎯",
    },
    Milestone {
        days: 7,
        name: "Week Warrior",
        icon: "🔥",
    },
    Milestone {
        days: 14,
        name: "Learning Lightning",
        icon: "⚡",
    },
    Milestone {
        days: 30,
        name: "Month Master",
        icon: "🏆",
    },
];

impl Milestone {
    /// Milestones already reached by a streak
    pub fn unlocked(streak: u32) -> impl Iterator<Item = &'static Milestone> {
        MILESTONES.iter().filter(move |m| streak >= m.days)
    }

    /// The next milestone to reach, if any remain
    pub fn next(streak: u32) -> Option<&'static Milestone> {
        MILESTONES.iter().find(|m| streak < m.days)
    }

    /// Percentage progress towards the next milestone, clamped to 100
    pub fn progress_toward_next(streak: u32) -> u32 {
        match Self::next(streak) {
            Some(m) => (streak * 100 / m.days).min(100),
            None => 100,
        }
    }
}
