use std::collections::HashMap;

use chrono::{DateTime, Utc};
use derive_more::{Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    AlternativeSuggestion, ExerciseRecord, Intimidation, ReadError, RowSelector, WriteError,
    alternative,
};

pub trait PlanRepository {
    fn read_plan(&self) -> Result<Option<PlanPayload>, ReadError>;
    fn write_plan(&self, plan: &PlanPayload) -> Result<(), WriteError>;
}

#[derive(
    Deref,
    Debug,
    Default,
    Display,
    Clone,
    Copy,
    From,
    Into,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct RowID(u32);

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ConfidenceTag {
    Easy,
    #[default]
    Moderate,
}

impl ConfidenceTag {
    #[must_use]
    pub fn of(exercise: &ExerciseRecord) -> ConfidenceTag {
        if exercise.confidence_safe || exercise.intimidation == Intimidation::Low {
            ConfidenceTag::Easy
        } else {
            ConfidenceTag::Moderate
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanRow {
    pub id: RowID,
    pub exercise: String,
    pub display_name: String,
    pub equipment: String,
    pub muscle: String,
    pub reps: String,
    pub sets: String,
    pub rest: String,
    pub recommended_load: String,
    pub instructions: String,
    pub supportive_cues: Vec<String>,
    pub video: Option<String>,
    pub uses_weight: bool,
    pub time_based: bool,
    pub confidence: ConfidenceTag,
    pub confidence_alternative: Option<AlternativeSuggestion>,
    pub confidence_applied: bool,
}

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize, strum::Display,
)]
pub enum ModeLabel {
    #[default]
    Gymxiety,
    Strength,
    Bulking,
    Dieting,
    #[serde(rename = "General Fitness")]
    #[strum(to_string = "General Fitness")]
    GeneralFitness,
    #[serde(rename = "Goal Fallback")]
    #[strum(to_string = "Goal Fallback")]
    GoalFallback,
    #[serde(rename = "Beginner Reset")]
    #[strum(to_string = "Beginner Reset")]
    BeginnerReset,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackTier {
    #[default]
    Native,
    RelaxedFilters,
    GoalFallback,
    DefaultPlan,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorReason {
    MissingMuscles,
    NoMatches,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub movement_count: usize,
    pub focus: Vec<String>,
    pub scheme: String,
    pub mode: ModeLabel,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanMetadata {
    pub requested_muscles: Vec<String>,
    pub missing_muscles: Vec<String>,
    pub used_fallback: bool,
    pub relaxed_filters: bool,
    pub fallback_tier: FallbackTier,
    pub error_reason: Option<ErrorReason>,
}

impl PlanMetadata {
    #[must_use]
    pub fn new(
        requested_muscles: Vec<String>,
        missing_muscles: Vec<String>,
        fallback_tier: FallbackTier,
    ) -> Self {
        let used_fallback = fallback_tier != FallbackTier::Native;
        let error_reason = if used_fallback {
            Some(ErrorReason::NoMatches)
        } else if missing_muscles.is_empty() {
            None
        } else {
            Some(ErrorReason::MissingMuscles)
        };

        Self {
            requested_muscles,
            missing_muscles,
            used_fallback,
            relaxed_filters: fallback_tier == FallbackTier::RelaxedFilters,
            fallback_tier,
            error_reason,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanPayload {
    pub id: Uuid,
    pub rows: Vec<PlanRow>,
    pub summary: PlanSummary,
    pub goal: String,
    pub calm_mode: bool,
    pub generated_at: DateTime<Utc>,
    pub metadata: PlanMetadata,
}

impl PlanPayload {
    #[must_use]
    pub fn row(&self, id: RowID) -> Option<&PlanRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Swap the selected row for its confidence alternative.
    pub fn apply_alternative(&mut self, selector: RowSelector) -> bool {
        alternative::apply_alternative(&mut self.rows, selector)
    }
}

/// Summarize rows, naming the (at most two) most frequent muscle groups as focus.
#[must_use]
pub fn summarize(rows: &[PlanRow], sets: &str, reps: &str, mode: ModeLabel) -> PlanSummary {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, row) in rows.iter().enumerate() {
        counts.entry(row.muscle.as_str()).or_insert((0, position)).0 += 1;
    }

    let mut muscles = counts.into_iter().collect::<Vec<_>>();
    muscles.sort_by(|(_, (a_count, a_first)), (_, (b_count, b_first))| {
        b_count.cmp(a_count).then(a_first.cmp(b_first))
    });

    PlanSummary {
        movement_count: rows.len(),
        focus: muscles
            .into_iter()
            .take(2)
            .map(|(muscle, _)| muscle.to_string())
            .collect(),
        scheme: format!("{sets} sets x {reps}"),
        mode,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::Catalog;

    fn row(id: u32, muscle: &str) -> PlanRow {
        PlanRow {
            id: RowID::from(id),
            exercise: format!("Exercise {id}"),
            display_name: format!("Exercise {id}"),
            equipment: "Bodyweight".to_string(),
            muscle: muscle.to_string(),
            reps: "10-15 reps".to_string(),
            sets: "3".to_string(),
            rest: "60-90 sec".to_string(),
            recommended_load: "Bodyweight or moderate load".to_string(),
            instructions: String::new(),
            supportive_cues: vec![],
            video: None,
            uses_weight: false,
            time_based: false,
            confidence: ConfidenceTag::Easy,
            confidence_alternative: None,
            confidence_applied: false,
        }
    }

    #[rstest]
    #[case("Plank", ConfidenceTag::Easy)]
    #[case("Goblet Squat", ConfidenceTag::Easy)]
    #[case("Dumbbell Bench Press", ConfidenceTag::Easy)]
    #[case("Push-Up", ConfidenceTag::Moderate)]
    #[case("Barbell Back Squat", ConfidenceTag::Moderate)]
    fn test_confidence_tag_of(#[case] name: &str, #[case] expected: ConfidenceTag) {
        assert_eq!(
            ConfidenceTag::of(Catalog::builtin().get(name).unwrap()),
            expected
        );
    }

    #[rstest]
    #[case(ModeLabel::Gymxiety, "Gymxiety")]
    #[case(ModeLabel::GeneralFitness, "General Fitness")]
    #[case(ModeLabel::GoalFallback, "Goal Fallback")]
    #[case(ModeLabel::BeginnerReset, "Beginner Reset")]
    fn test_mode_label(#[case] mode: ModeLabel, #[case] expected: &str) {
        assert_eq!(mode.to_string(), expected);
        assert_eq!(
            serde_json::to_string(&mode).unwrap(),
            format!("\"{expected}\"")
        );
    }

    #[rstest]
    #[case(FallbackTier::Native, &[], None)]
    #[case(FallbackTier::Native, &["Glutes"], Some(ErrorReason::MissingMuscles))]
    #[case(FallbackTier::RelaxedFilters, &["Glutes"], Some(ErrorReason::NoMatches))]
    #[case(FallbackTier::GoalFallback, &[], Some(ErrorReason::NoMatches))]
    #[case(FallbackTier::DefaultPlan, &[], Some(ErrorReason::NoMatches))]
    fn test_plan_metadata_new(
        #[case] tier: FallbackTier,
        #[case] missing: &[&str],
        #[case] expected: Option<ErrorReason>,
    ) {
        let metadata = PlanMetadata::new(
            vec!["Glutes".to_string()],
            missing.iter().map(ToString::to_string).collect(),
            tier,
        );

        assert_eq!(metadata.error_reason, expected);
        assert_eq!(metadata.used_fallback, tier != FallbackTier::Native);
        assert_eq!(metadata.relaxed_filters, tier == FallbackTier::RelaxedFilters);
    }

    #[test]
    fn test_error_reason_serialize() {
        assert_eq!(
            serde_json::to_string(&ErrorReason::MissingMuscles).unwrap(),
            "\"missing-muscles\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorReason::NoMatches).unwrap(),
            "\"no-matches\""
        );
    }

    #[test]
    fn test_summarize() {
        let rows = [
            row(1, "Legs"),
            row(2, "Chest"),
            row(3, "Back"),
            row(4, "Chest"),
            row(5, "Back"),
        ];

        assert_eq!(
            summarize(&rows, "4", "4-6 reps", ModeLabel::Strength),
            PlanSummary {
                movement_count: 5,
                focus: vec!["Chest".to_string(), "Back".to_string()],
                scheme: "4 sets x 4-6 reps".to_string(),
                mode: ModeLabel::Strength,
            }
        );
    }

    #[test]
    fn test_summarize_single_muscle() {
        assert_eq!(
            summarize(&[row(1, "Core")], "2", "10-12 reps", ModeLabel::Gymxiety).focus,
            vec!["Core".to_string()]
        );
        assert_eq!(
            summarize(&[], "2", "10-12 reps", ModeLabel::Gymxiety),
            PlanSummary {
                movement_count: 0,
                focus: vec![],
                scheme: "2 sets x 10-12 reps".to_string(),
                mode: ModeLabel::Gymxiety,
            }
        );
    }

    #[test]
    fn test_plan_payload_row() {
        let plan = PlanPayload {
            id: Uuid::nil(),
            rows: vec![row(1, "Legs"), row(2, "Chest")],
            summary: PlanSummary::default(),
            goal: "General Fitness".to_string(),
            calm_mode: false,
            generated_at: DateTime::from_timestamp(0, 0).unwrap(),
            metadata: PlanMetadata::default(),
        };

        assert_eq!(plan.row(RowID::from(2)).map(|r| r.muscle.as_str()), Some("Chest"));
        assert_eq!(plan.row(RowID::from(3)), None);
    }

    #[test]
    fn test_row_id_serialize() {
        assert_eq!(serde_json::to_string(&RowID::from(7)).unwrap(), "7");
        assert_eq!(serde_json::from_str::<RowID>("7").unwrap(), RowID::from(7));
    }
}
