use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{PlanRow, ReadError, RowID, WriteError};

pub const PERCENT_STEP: i32 = 5;
pub const PERCENT_LIMIT: i32 = 25;
pub const REP_STEP: i32 = 2;
pub const REP_LIMIT: i32 = 6;

pub trait AdjustmentRepository {
    fn read_adjustments(&self) -> Result<AdjustmentState, ReadError>;
    fn write_adjustments(&self, adjustments: &AdjustmentState) -> Result<(), WriteError>;
}

pub trait FeedbackRepository {
    fn read_feedback(&self) -> Result<FeedbackSession, ReadError>;
    fn write_feedback(&self, session: &FeedbackSession) -> Result<(), WriteError>;
}

/// Persisted per-exercise corrections, keyed by exercise name.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentState {
    pub percent_offsets: BTreeMap<String, i32>,
    pub rep_deltas: BTreeMap<String, i32>,
}

impl AdjustmentState {
    #[must_use]
    pub fn percent_offset(&self, exercise: &str) -> i32 {
        self.percent_offsets.get(exercise).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn rep_delta(&self, exercise: &str) -> i32 {
        self.rep_deltas.get(exercise).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.percent_offsets.is_empty() && self.rep_deltas.is_empty()
    }

    /// Apply feedback for one exercise and return the change that actually took effect.
    pub fn apply(&mut self, exercise: &str, uses_weight: bool, feedback: Feedback) -> Adjustment {
        let direction = feedback.direction();

        if uses_weight {
            Adjustment::Percent(shift(
                &mut self.percent_offsets,
                exercise,
                direction * PERCENT_STEP,
                PERCENT_LIMIT,
            ))
        } else {
            Adjustment::Reps(shift(
                &mut self.rep_deltas,
                exercise,
                direction * REP_STEP,
                REP_LIMIT,
            ))
        }
    }

    pub fn revert(&mut self, exercise: &str, adjustment: Adjustment) {
        match adjustment {
            Adjustment::Percent(delta) => {
                shift(&mut self.percent_offsets, exercise, -delta, PERCENT_LIMIT);
            }
            Adjustment::Reps(delta) => {
                shift(&mut self.rep_deltas, exercise, -delta, REP_LIMIT);
            }
        }
    }
}

fn shift(values: &mut BTreeMap<String, i32>, key: &str, delta: i32, limit: i32) -> i32 {
    let current = values.get(key).copied().unwrap_or(0);
    let updated = (current + delta).clamp(-limit, limit);

    if updated == 0 {
        values.remove(key);
    } else {
        values.insert(key.to_string(), updated);
    }

    updated - current
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Adjustment {
    Percent(i32),
    Reps(i32),
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "kebab-case")]
pub enum Feedback {
    TooEasy,
    Perfect,
    TooHard,
}

impl Feedback {
    fn direction(self) -> i32 {
        match self {
            Feedback::TooEasy => 1,
            Feedback::Perfect => 0,
            Feedback::TooHard => -1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub feedback: Feedback,
    pub exercise: String,
    pub applied: Adjustment,
}

/// Feedback given on the rows of one plan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackSession {
    pub plan_id: Option<Uuid>,
    pub selections: BTreeMap<RowID, Selection>,
}

impl FeedbackSession {
    #[must_use]
    pub fn new(plan_id: Uuid) -> Self {
        Self {
            plan_id: Some(plan_id),
            selections: BTreeMap::new(),
        }
    }

    pub fn record(
        &mut self,
        adjustments: &mut AdjustmentState,
        rows: &[PlanRow],
        selections: impl IntoIterator<Item = (RowID, Feedback)>,
    ) {
        for (id, feedback) in selections {
            self.select(adjustments, rows, id, feedback);
        }
    }

    /// Record the feedback for a single row.
    ///
    /// A previous choice for the same row or for another row showing the same exercise is
    /// reverted before the new one is applied. Returns `false` if the row is unknown or the
    /// choice is unchanged.
    pub fn select(
        &mut self,
        adjustments: &mut AdjustmentState,
        rows: &[PlanRow],
        id: RowID,
        feedback: Feedback,
    ) -> bool {
        let Some(row) = rows.iter().find(|r| r.id == id) else {
            debug!("ignoring feedback for unknown row {id}");
            return false;
        };

        if let Some(previous) = self.selections.get(&id) {
            if previous.feedback == feedback && previous.exercise == row.display_name {
                return false;
            }
        }

        // Rows repeating an exercise share a single choice, the latest one wins.
        let replaced = self
            .selections
            .iter()
            .filter(|(other, selection)| **other == id || selection.exercise == row.display_name)
            .map(|(other, _)| *other)
            .collect::<Vec<_>>();
        for other in replaced {
            if let Some(previous) = self.selections.remove(&other) {
                adjustments.revert(&previous.exercise, previous.applied);
            }
        }

        let applied = adjustments.apply(&row.display_name, row.uses_weight, feedback);
        self.selections.insert(
            id,
            Selection {
                feedback,
                exercise: row.display_name.clone(),
                applied,
            },
        );

        true
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::ConfidenceTag;

    fn row(id: u32, name: &str, uses_weight: bool) -> PlanRow {
        PlanRow {
            id: RowID::from(id),
            exercise: name.to_string(),
            display_name: name.to_string(),
            equipment: String::new(),
            muscle: "Legs".to_string(),
            reps: "4-6 reps".to_string(),
            sets: "4".to_string(),
            rest: "2-3 min".to_string(),
            recommended_load: String::new(),
            instructions: String::new(),
            supportive_cues: vec![],
            video: None,
            uses_weight,
            time_based: false,
            confidence: ConfidenceTag::Moderate,
            confidence_alternative: None,
            confidence_applied: false,
        }
    }

    fn rows() -> Vec<PlanRow> {
        vec![row(1, "Barbell Back Squat", true), row(2, "Goblet Squat", false)]
    }

    #[rstest]
    #[case(Feedback::TooEasy, 5, 0)]
    #[case(Feedback::TooHard, -5, 0)]
    #[case(Feedback::Perfect, 0, 0)]
    fn test_select_weighted(
        #[case] feedback: Feedback,
        #[case] percent: i32,
        #[case] reps: i32,
    ) {
        let mut adjustments = AdjustmentState::default();
        let mut session = FeedbackSession::default();

        assert!(session.select(&mut adjustments, &rows(), RowID::from(1), feedback));
        assert_eq!(adjustments.percent_offset("Barbell Back Squat"), percent);
        assert_eq!(adjustments.rep_delta("Barbell Back Squat"), reps);
    }

    #[rstest]
    #[case(Feedback::TooEasy, 2)]
    #[case(Feedback::TooHard, -2)]
    #[case(Feedback::Perfect, 0)]
    fn test_select_unweighted(#[case] feedback: Feedback, #[case] reps: i32) {
        let mut adjustments = AdjustmentState::default();
        let mut session = FeedbackSession::default();

        session.select(&mut adjustments, &rows(), RowID::from(2), feedback);

        assert_eq!(adjustments.rep_delta("Goblet Squat"), reps);
        assert_eq!(adjustments.percent_offset("Goblet Squat"), 0);
    }

    #[test]
    fn test_select_changed_choice() {
        let mut adjustments = AdjustmentState::default();
        let mut session = FeedbackSession::default();

        session.select(&mut adjustments, &rows(), RowID::from(1), Feedback::TooHard);
        session.select(&mut adjustments, &rows(), RowID::from(1), Feedback::TooEasy);

        let mut expected = AdjustmentState::default();
        FeedbackSession::default().select(&mut expected, &rows(), RowID::from(1), Feedback::TooEasy);
        assert_eq!(adjustments, expected);
        assert_eq!(adjustments.percent_offset("Barbell Back Squat"), 5);

        session.select(&mut adjustments, &rows(), RowID::from(1), Feedback::Perfect);
        assert!(adjustments.is_empty());
    }

    #[test]
    fn test_select_same_choice() {
        let mut adjustments = AdjustmentState::default();
        let mut session = FeedbackSession::default();

        assert!(session.select(&mut adjustments, &rows(), RowID::from(2), Feedback::TooEasy));
        assert!(!session.select(&mut adjustments, &rows(), RowID::from(2), Feedback::TooEasy));
        assert_eq!(adjustments.rep_delta("Goblet Squat"), 2);
    }

    #[test]
    fn test_select_unknown_row() {
        let mut adjustments = AdjustmentState::default();
        let mut session = FeedbackSession::default();

        assert!(!session.select(&mut adjustments, &rows(), RowID::from(3), Feedback::TooHard));
        assert!(adjustments.is_empty());
        assert!(session.selections.is_empty());
    }

    #[test]
    fn test_select_reverts_clamped_change() {
        let mut adjustments = AdjustmentState::default();
        adjustments
            .percent_offsets
            .insert("Barbell Back Squat".to_string(), PERCENT_LIMIT);
        let mut session = FeedbackSession::default();

        session.select(&mut adjustments, &rows(), RowID::from(1), Feedback::TooEasy);
        assert_eq!(adjustments.percent_offset("Barbell Back Squat"), 25);

        session.select(&mut adjustments, &rows(), RowID::from(1), Feedback::TooHard);
        assert_eq!(adjustments.percent_offset("Barbell Back Squat"), 20);
    }

    #[test]
    fn test_record_cumulative_limits() {
        let mut adjustments = AdjustmentState::default();

        for _ in 0..10 {
            let mut session = FeedbackSession::default();
            session.record(
                &mut adjustments,
                &rows(),
                [
                    (RowID::from(1), Feedback::TooHard),
                    (RowID::from(2), Feedback::TooEasy),
                    (RowID::from(7), Feedback::TooEasy),
                ],
            );
        }

        assert_eq!(adjustments.percent_offset("Barbell Back Squat"), -PERCENT_LIMIT);
        assert_eq!(adjustments.rep_delta("Goblet Squat"), REP_LIMIT);
    }

    #[test]
    fn test_select_swapped_row() {
        let mut rows = rows();
        let mut adjustments = AdjustmentState::default();
        let mut session = FeedbackSession::default();

        session.select(&mut adjustments, &rows, RowID::from(1), Feedback::TooEasy);
        rows[0].display_name = "Goblet Squat".to_string();
        rows[0].uses_weight = false;
        session.select(&mut adjustments, &rows, RowID::from(1), Feedback::TooEasy);

        assert_eq!(adjustments.percent_offset("Barbell Back Squat"), 0);
        assert_eq!(adjustments.rep_delta("Goblet Squat"), 2);
    }

    #[test]
    fn test_select_repeated_exercise() {
        let rows = vec![
            row(1, "Push-Up", false),
            row(2, "Push-Up", false),
            row(3, "Goblet Squat", false),
        ];
        let mut adjustments = AdjustmentState::default();
        let mut session = FeedbackSession::default();

        session.select(&mut adjustments, &rows, RowID::from(1), Feedback::TooEasy);
        session.select(&mut adjustments, &rows, RowID::from(2), Feedback::TooEasy);
        assert_eq!(adjustments.rep_delta("Push-Up"), REP_STEP);
        assert_eq!(
            session.selections.keys().copied().collect::<Vec<_>>(),
            vec![RowID::from(2)]
        );

        session.select(&mut adjustments, &rows, RowID::from(1), Feedback::TooHard);
        session.select(&mut adjustments, &rows, RowID::from(3), Feedback::TooHard);
        assert_eq!(adjustments.rep_delta("Push-Up"), -REP_STEP);
        assert_eq!(adjustments.rep_delta("Goblet Squat"), -REP_STEP);
        assert_eq!(session.selections.len(), 2);
    }

    #[rstest]
    #[case("too-easy", Feedback::TooEasy)]
    #[case("perfect", Feedback::Perfect)]
    #[case("too-hard", Feedback::TooHard)]
    fn test_feedback_from_str(#[case] value: &str, #[case] expected: Feedback) {
        assert_eq!(Feedback::from_str(value).unwrap(), expected);
        assert_eq!(expected.to_string(), value);
    }

    #[test]
    fn test_feedback_session_serialize() {
        let mut session = FeedbackSession::new(Uuid::nil());
        session.select(
            &mut AdjustmentState::default(),
            &rows(),
            RowID::from(1),
            Feedback::TooHard,
        );

        let json = serde_json::to_string(&session).unwrap();

        assert_eq!(
            serde_json::from_str::<FeedbackSession>(&json).unwrap(),
            session
        );
    }
}
