use serde::{Deserialize, Serialize};

use crate::{CandidateFilter, Intimidation, ModeLabel};

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize, strum::EnumIter,
)]
pub enum Goal {
    Strength,
    Bulking,
    Dieting,
    #[default]
    GeneralFitness,
}

const GOAL_KEYWORDS: [(Goal, &[&str]); 3] = [
    (Goal::Strength, &["strength", "strong", "power"]),
    (
        Goal::Bulking,
        &["bulk", "muscle", "mass", "hypertrophy", "size"],
    ),
    (
        Goal::Dieting,
        &["diet", "fat", "cut", "lose", "loss", "lean", "tone"],
    ),
];

impl Goal {
    /// Map a goal identifier or free-text goal onto a known goal.
    #[must_use]
    pub fn infer(text: &str) -> Goal {
        let text = text.trim().to_lowercase();
        GOAL_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
            .map_or(Goal::GeneralFitness, |(goal, _)| *goal)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Goal::Strength => "Strength",
            Goal::Bulking => "Bulking",
            Goal::Dieting => "Dieting",
            Goal::GeneralFitness => "General Fitness",
        }
    }

    #[must_use]
    pub fn mode(self) -> ModeLabel {
        match self {
            Goal::Strength => ModeLabel::Strength,
            Goal::Bulking => ModeLabel::Bulking,
            Goal::Dieting => ModeLabel::Dieting,
            Goal::GeneralFitness => ModeLabel::GeneralFitness,
        }
    }

    #[must_use]
    pub fn percent_of_max(self) -> u32 {
        match self {
            Goal::Strength => 80,
            Goal::Bulking => 70,
            Goal::Dieting => 60,
            Goal::GeneralFitness => 65,
        }
    }

    #[must_use]
    pub fn reps(self) -> &'static str {
        match self {
            Goal::Strength => "4-6 reps",
            Goal::Bulking => "8-12 reps",
            Goal::Dieting => "12-20 reps (controlled tempo)",
            Goal::GeneralFitness => "10-15 reps",
        }
    }

    #[must_use]
    pub fn sets(self) -> &'static str {
        match self {
            Goal::Strength | Goal::Bulking => "4",
            Goal::Dieting | Goal::GeneralFitness => "3",
        }
    }

    #[must_use]
    pub fn rest(self) -> &'static str {
        match self {
            Goal::Strength => "2-3 min",
            Goal::Bulking => "90 sec",
            Goal::Dieting => "45-60 sec",
            Goal::GeneralFitness => "60-90 sec",
        }
    }

    /// Muscle groups used when none of the requested ones yield an exercise.
    #[must_use]
    pub fn fallback_muscles(self) -> [&'static str; 3] {
        match self {
            Goal::Strength => ["Back", "Legs", "Chest"],
            Goal::Bulking => ["Chest", "Back", "Arms"],
            Goal::Dieting => ["Legs", "Core", "Cardio"],
            Goal::GeneralFitness => ["Legs", "Chest", "Core"],
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Experience {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Experience {
    #[must_use]
    pub fn filter(self) -> CandidateFilter {
        match self {
            Experience::Beginner => CandidateFilter {
                prefer_confidence_safe: true,
                max_intimidation: Some(Intimidation::Low),
            },
            Experience::Intermediate => CandidateFilter {
                prefer_confidence_safe: false,
                max_intimidation: Some(Intimidation::Moderate),
            },
            Experience::Advanced => CandidateFilter::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[rstest]
    #[case("Strength", Goal::Strength)]
    #[case("get stronger", Goal::Strength)]
    #[case("Bulking", Goal::Bulking)]
    #[case("build muscle", Goal::Bulking)]
    #[case("Dieting", Goal::Dieting)]
    #[case("Lose weight", Goal::Dieting)]
    #[case("General Fitness", Goal::GeneralFitness)]
    #[case("", Goal::GeneralFitness)]
    fn test_goal_infer(#[case] text: &str, #[case] expected: Goal) {
        assert_eq!(Goal::infer(text), expected);
    }

    #[test]
    fn test_goal_infer_label() {
        for goal in Goal::iter() {
            assert_eq!(Goal::infer(goal.label()), goal);
        }
    }

    #[test]
    fn test_goal_fallback_muscles() {
        for goal in Goal::iter() {
            let muscles = goal.fallback_muscles();
            for muscle in muscles {
                assert!(
                    crate::Catalog::builtin().muscles().contains(&muscle),
                    "{muscle}"
                );
            }
        }
        assert_eq!(Goal::Strength.fallback_muscles(), ["Back", "Legs", "Chest"]);
    }

    #[test]
    fn test_goal_reps_contain_range() {
        for goal in Goal::iter() {
            assert!(goal.reps().contains('-'));
            assert!(goal.sets().parse::<u32>().is_ok());
        }
    }

    #[rstest]
    #[case(Experience::Beginner, true, Some(Intimidation::Low))]
    #[case(Experience::Intermediate, false, Some(Intimidation::Moderate))]
    #[case(Experience::Advanced, false, None)]
    fn test_experience_filter(
        #[case] experience: Experience,
        #[case] prefer_confidence_safe: bool,
        #[case] max_intimidation: Option<Intimidation>,
    ) {
        assert_eq!(
            experience.filter(),
            CandidateFilter {
                prefer_confidence_safe,
                max_intimidation,
            }
        );
    }

    #[rstest]
    #[case("beginner", Experience::Beginner)]
    #[case("Intermediate", Experience::Intermediate)]
    #[case("ADVANCED", Experience::Advanced)]
    fn test_experience_from_str(#[case] value: &str, #[case] expected: Experience) {
        assert_eq!(Experience::from_str(value).unwrap(), expected);
        assert_eq!(expected.to_string(), value.to_lowercase());
    }
}
