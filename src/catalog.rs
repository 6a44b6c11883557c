//! Challenge catalog and selection
//!
//! The catalog is a fixed set of daily challenges tagged by topic,
//! difficulty, cognitive level (Bloom's taxonomy) and learner style.
//! Selection filters by the learner's style preference and picks uniformly
//! at random from the matches, so two learners with different profiles see
//! different kinds of prompts.

use serde::Serialize;

/// Challenge difficulty rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Easy" => Some(Self::Easy),
            "Medium" => Some(Self::Medium),
            "Hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Bloom's taxonomy level the challenge targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CognitiveLevel {
    Remember,
    Understand,
    Apply,
    Analyze,
    Evaluate,
    Create,
}

impl CognitiveLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remember => "Remember",
            Self::Understand => "Understand",
            Self::Apply => "Apply",
            Self::Analyze => "Analyze",
            Self::Evaluate => "Evaluate",
            Self::Create => "Create",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Remember" => Some(Self::Remember),
            "Understand" => Some(Self::Understand),
            "Apply" => Some(Self::Apply),
            "Analyze" => Some(Self::Analyze),
            "Evaluate" => Some(Self::Evaluate),
            "Create" => Some(Self::Create),
            _ => None,
        }
    }
}

/// Learner style profile used to filter the catalog.
///
/// `General` is the fallback tag: challenges tagged `General` match every
/// profile, and a learner with no profile sees only those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LearningStyle {
    Interactor,
    Architect,
    ProblemSolver,
    Adventurer,
    General,
}

impl LearningStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interactor => "interactor",
            Self::Architect => "architect",
            Self::ProblemSolver => "problemSolver",
            Self::Adventurer => "adventurer",
            Self::General => "general",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "interactor" => Some(Self::Interactor),
            "architect" => Some(Self::Architect),
            "problemSolver" => Some(Self::ProblemSolver),
            "adventurer" => Some(Self::Adventurer),
            "general" => Some(Self::General),
            _ => None,
        }
    }

    /// Map a free-form profile label (e.g. "The Problem Solver") to a style.
    ///
    /// The dashboard stores learner profiles as display labels, so matching
    /// is by substring, case-insensitive. Unrecognized labels fall back to
    /// `General`.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("interactor") {
            Self::Interactor
        } else if label.contains("architect") {
            Self::Architect
        } else if label.contains("problem solver") {
            Self::ProblemSolver
        } else if label.contains("adventurer") {
            Self::Adventurer
        } else {
            Self::General
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Interactor => "Interactor",
            Self::Architect => "Architect",
            Self::ProblemSolver => "Problem Solver",
            Self::Adventurer => "Adventurer",
            Self::General => "General",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Interactor => "💬",
            Self::Architect => "🏗️",
            Self::ProblemSolver => "💡",
            Self::Adventurer => "🌟",
            Self::General => "🎯",
        }
    }
}

/// A single daily challenge. Immutable; the tracker only reads these.
#[derive(Debug, Clone, Serialize)]
pub struct DailyChallenge {
    pub id: &'static str,
    pub prompt: &'static str,
    pub topic: &'static str,
    pub difficulty: Difficulty,
    pub cognitive_level: CognitiveLevel,
    pub audience: LearningStyle,
    pub hint: Option<&'static str>,
    pub related_topics: &'static [&'static str],
}

/// The built-in challenge catalog
pub static CATALOG: &[DailyChallenge] = &[
    DailyChallenge {
        id: "1",
        prompt: "Imagine you're explaining the chain rule to a study group. How would you describe when and why we use it for composite functions, and what common mistakes should your classmates avoid?",
        topic: "Derivatives - Chain Rule",
        difficulty: Difficulty::Medium,
        cognitive_level: CognitiveLevel::Understand,
        audience: LearningStyle::Interactor,
        hint: Some("Think about the common misconceptions students have about identifying composite functions"),
        related_topics: &["Calculus", "Composite Functions", "Differentiation Rules"],
    },
    DailyChallenge {
        id: "2",
        prompt: "Design a comprehensive study plan for mastering integration techniques. Create a structured outline with learning objectives, practice problems, and self-assessment checkpoints. Include time estimates for each method.",
        topic: "Integration Methods",
        difficulty: Difficulty::Medium,
        cognitive_level: CognitiveLevel::Create,
        audience: LearningStyle::Architect,
        hint: Some("Consider different techniques: substitution, parts, partial fractions, trigonometric substitution"),
        related_topics: &["Study Planning", "Integration Techniques", "Calculus Mastery"],
    },
    DailyChallenge {
        id: "3",
        prompt: "You're solving an optimization problem where you need to minimize the cost of materials for a cylindrical container. Walk through your process: Set up the constraint, find the objective function, and solve step-by-step.",
        topic: "Optimization Problems",
        difficulty: Difficulty::Hard,
        cognitive_level: CognitiveLevel::Apply,
        audience: LearningStyle::ProblemSolver,
        hint: Some("Focus on translating real-world constraints into mathematical expressions"),
        related_topics: &["Applications of Derivatives", "Optimization", "Problem Solving"],
    },
    DailyChallenge {
        id: "4",
        prompt: "Design a hands-on group activity to teach complex number operations. Create a collaborative exercise that involves visual or interactive elements where team members can learn polar and rectangular forms together. What materials would you need?",
        topic: "Complex Numbers",
        difficulty: Difficulty::Medium,
        cognitive_level: CognitiveLevel::Create,
        audience: LearningStyle::Adventurer,
        hint: Some("Think about visual representations and group participation elements"),
        related_topics: &["Interactive Learning", "Complex Plane", "Team Activities"],
    },
    DailyChallenge {
        id: "5",
        prompt: "Compare and contrast different integration methods (substitution, integration by parts, partial fractions). Create a comprehensive analysis including when to use each method and their relative difficulty levels.",
        topic: "Integration Analysis",
        difficulty: Difficulty::Hard,
        cognitive_level: CognitiveLevel::Analyze,
        audience: LearningStyle::Architect,
        hint: Some("Structure your analysis in a clear, systematic format with examples"),
        related_topics: &["Integration Techniques", "Method Selection", "Calculus Strategy"],
    },
    DailyChallenge {
        id: "6",
        prompt: "You're working on a team project to model real-world phenomena using calculus. Describe how you would organize the team, delegate mathematical tasks, and ensure everyone contributes to the modeling process.",
        topic: "Applied Mathematics",
        difficulty: Difficulty::Medium,
        cognitive_level: CognitiveLevel::Apply,
        audience: LearningStyle::Adventurer,
        hint: Some("Consider different mathematical modeling approaches and collaborative problem-solving"),
        related_topics: &["Mathematical Modeling", "Team Collaboration", "Applied Calculus"],
    },
];

/// Source of random indices for challenge selection.
///
/// Selection takes the source as a parameter so hosts (and tests) can inject
/// a deterministic one; the default is OS randomness.
pub trait RandomSource {
    /// Pick an index in `0..len`. `len` is always >= 1.
    fn pick(&mut self, len: usize) -> usize;
}

/// OS-backed random source
#[derive(Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn pick(&mut self, len: usize) -> usize {
        let mut bytes = [0u8; 8];
        if getrandom::getrandom(&mut bytes).is_ok() {
            return (u64::from_le_bytes(bytes) % len as u64) as usize;
        }

        // Fallback: best-effort index if OS RNG is unavailable.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        (nanos % len as u128) as usize
    }
}

/// Select today's challenge for a learner profile.
///
/// Filters the catalog to challenges tagged with the preference or with the
/// `General` fallback tag, then picks one uniformly at random. If nothing
/// matches, the first catalog entry is returned deterministically. Returns
/// `None` only for an empty catalog.
pub fn select_challenge<'a>(
    preference: LearningStyle,
    catalog: &'a [DailyChallenge],
    rng: &mut dyn RandomSource,
) -> Option<&'a DailyChallenge> {
    let matching: Vec<&DailyChallenge> = catalog
        .iter()
        .filter(|c| c.audience == preference || c.audience == LearningStyle::General)
        .collect();

    if matching.is_empty() {
        return catalog.first();
    }

    Some(matching[rng.pick(matching.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns a fixed sequence of indices, cycling when exhausted
    struct Scripted {
        indices: Vec<usize>,
        next: usize,
    }

    impl Scripted {
        fn new(indices: Vec<usize>) -> Self {
            Self { indices, next: 0 }
        }
    }

    impl RandomSource for Scripted {
        fn pick(&mut self, len: usize) -> usize {
            let i = self.indices[self.next % self.indices.len()];
            self.next += 1;
            i % len
        }
    }

    #[test]
    fn test_selection_returns_catalog_member() {
        let mut rng = OsRandom;
        for style in [
            LearningStyle::Interactor,
            LearningStyle::Architect,
            LearningStyle::ProblemSolver,
            LearningStyle::Adventurer,
            LearningStyle::General,
        ] {
            let picked = select_challenge(style, CATALOG, &mut rng).unwrap();
            assert!(CATALOG.iter().any(|c| c.id == picked.id));
        }
    }

    #[test]
    fn test_selection_respects_preference() {
        let mut rng = Scripted::new(vec![0, 1, 2, 3]);
        for _ in 0..8 {
            let picked =
                select_challenge(LearningStyle::Architect, CATALOG, &mut rng).unwrap();
            assert!(
                picked.audience == LearningStyle::Architect
                    || picked.audience == LearningStyle::General
            );
        }
    }

    #[test]
    fn test_selection_falls_back_to_first_entry() {
        // No General entries in the built-in catalog, so a profile with no
        // tagged challenges gets the deterministic fallback.
        let mut rng = Scripted::new(vec![5]);
        let picked = select_challenge(LearningStyle::General, CATALOG, &mut rng).unwrap();
        assert_eq!(picked.id, CATALOG[0].id);
    }

    #[test]
    fn test_selection_empty_catalog() {
        let mut rng = OsRandom;
        assert!(select_challenge(LearningStyle::General, &[], &mut rng).is_none());
    }

    #[test]
    fn test_style_from_label() {
        assert_eq!(
            LearningStyle::from_label("The Problem Solver"),
            LearningStyle::ProblemSolver
        );
        assert_eq!(
            LearningStyle::from_label("ARCHITECT"),
            LearningStyle::Architect
        );
        assert_eq!(LearningStyle::from_label("interactor style"), LearningStyle::Interactor);
        assert_eq!(LearningStyle::from_label("unknown"), LearningStyle::General);
        assert_eq!(LearningStyle::from_label(""), LearningStyle::General);
    }

    #[test]
    fn test_style_roundtrip() {
        for style in [
            LearningStyle::Interactor,
            LearningStyle::Architect,
            LearningStyle::ProblemSolver,
            LearningStyle::Adventurer,
            LearningStyle::General,
        ] {
            assert_eq!(LearningStyle::from_str(style.as_str()), Some(style));
        }
        assert_eq!(LearningStyle::from_str("bogus"), None);
    }

    #[test]
    fn test_difficulty_and_level_roundtrip() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
        for l in [
            CognitiveLevel::Remember,
            CognitiveLevel::Understand,
            CognitiveLevel::Apply,
            CognitiveLevel::Analyze,
            CognitiveLevel::Evaluate,
            CognitiveLevel::Create,
        ] {
            assert_eq!(CognitiveLevel::from_str(l.as_str()), Some(l));
        }
    }
}
