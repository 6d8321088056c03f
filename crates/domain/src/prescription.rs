use std::sync::LazyLock;

use derive_more::{Display, Into};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    AdjustmentState, AlternativeContext, ConfidenceTag, ExerciseRecord, Goal, MovementPattern,
    PlanRow, RowID, resolve_alternative,
};

pub const STEADY_LOAD: &str = "Bodyweight / steady tempo";
pub const GENERIC_LOAD: &str = "Bodyweight or moderate load";

pub(crate) const CALM_REPS: &str = "10-12 reps";
pub(crate) const CALM_SETS: &str = "2";
const CALM_REST: &str = "Rest as long as you need (about 60-90 sec)";
const CALM_PERCENT_OF_MAX: u32 = 55;

const TIME_KEYWORDS: [&str; 10] = [
    "plank", "carry", "hold", "march", "walk", "bike", "ride", "row", "glide", "crawl",
];

/// Name keywords, standard range and calm range of time-based prescriptions.
const DURATIONS: [(&[&str], &str, &str); 2] = [
    (&["plank", "hold"], "20-40 sec hold", "15-25 sec hold"),
    (&["carry"], "30-45 sec walk", "20-30 sec walk"),
];
const STEADY_KEYWORDS: [&str; 6] = ["walk", "bike", "ride", "row", "march", "glide"];
const STEADY_DURATION: (&str, &str) = ("3-5 min steady pace", "2-3 min easy pace");
const DEFAULT_DURATION: (&str, &str) = ("30-45 sec controlled", "20-30 sec controlled");

static REP_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*-\s*(\d+)").expect("valid rep range pattern"));

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WeightUnit {
    #[default]
    Lb,
    Kg,
}

impl WeightUnit {
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            WeightUnit::Lb => "lb",
            WeightUnit::Kg => "kg",
        }
    }
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct OneRepMax(f32);

impl OneRepMax {
    pub fn new(value: f32) -> Result<Self, OneRepMaxError> {
        if !(value > 0.0 && value < 2000.0) {
            return Err(OneRepMaxError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<f32> for OneRepMax {
    type Error = OneRepMaxError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        OneRepMax::new(value)
    }
}

impl TryFrom<&str> for OneRepMax {
    type Error = OneRepMaxError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => OneRepMax::new(parsed_value),
            Err(_) => Err(OneRepMaxError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum OneRepMaxError {
    #[error("One-rep max must be greater than 0 and less than 2000")]
    OutOfRange,
    #[error("One-rep max must be a decimal number")]
    ParseError,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OneRepMaxes {
    pub bench: Option<OneRepMax>,
    pub squat: Option<OneRepMax>,
    pub deadlift: Option<OneRepMax>,
}

impl OneRepMaxes {
    #[must_use]
    pub fn get(&self, family: LiftFamily) -> Option<OneRepMax> {
        match family {
            LiftFamily::Bench => self.bench,
            LiftFamily::Squat => self.squat,
            LiftFamily::Deadlift => self.deadlift,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LiftFamily {
    Bench,
    Squat,
    Deadlift,
}

impl LiftFamily {
    /// The barbell lift an exercise is loaded from, if any.
    #[must_use]
    pub fn of(exercise: &ExerciseRecord) -> Option<LiftFamily> {
        let keys = exercise.access_keys();
        if !keys.contains("barbell") && !keys.contains("smith machine") {
            return None;
        }

        let name = exercise.name.to_lowercase();
        [
            ("bench", LiftFamily::Bench),
            ("squat", LiftFamily::Squat),
            ("deadlift", LiftFamily::Deadlift),
        ]
        .into_iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|(_, family)| family)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrescriptionContext {
    pub percent_of_max: u32,
    pub maxes: OneRepMaxes,
    pub no_max: bool,
    pub reps: String,
    pub sets: String,
    pub rest: String,
    pub unit: WeightUnit,
    pub calm: bool,
}

impl PrescriptionContext {
    #[must_use]
    pub fn standard(goal: Goal, maxes: OneRepMaxes, no_max: bool, unit: WeightUnit) -> Self {
        Self {
            percent_of_max: goal.percent_of_max(),
            maxes,
            no_max,
            reps: goal.reps().to_string(),
            sets: goal.sets().to_string(),
            rest: goal.rest().to_string(),
            unit,
            calm: false,
        }
    }

    #[must_use]
    pub fn calm(maxes: OneRepMaxes, no_max: bool, unit: WeightUnit) -> Self {
        Self {
            percent_of_max: CALM_PERCENT_OF_MAX,
            maxes,
            no_max,
            reps: CALM_REPS.to_string(),
            sets: CALM_SETS.to_string(),
            rest: CALM_REST.to_string(),
            unit,
            calm: true,
        }
    }

    /// Percent of max for an exercise after applying its persisted offset.
    #[must_use]
    pub fn effective_percent(&self, name: &str, adjustments: &AdjustmentState) -> u32 {
        let percent = i64::from(self.percent_of_max) + i64::from(adjustments.percent_offset(name));
        u32::try_from(percent.clamp(30, 100)).unwrap_or(self.percent_of_max)
    }
}

#[must_use]
pub fn build_row(
    exercise: &ExerciseRecord,
    index: usize,
    context: &PrescriptionContext,
    adjustments: &AdjustmentState,
) -> PlanRow {
    let time_based = is_time_based(exercise);

    let (reps, recommended_load, uses_weight) = if time_based {
        (
            duration(exercise, context.calm).to_string(),
            STEADY_LOAD.to_string(),
            false,
        )
    } else if let Some(load) = barbell_load(exercise, context, adjustments) {
        (context.reps.clone(), load, true)
    } else {
        (
            shift_rep_range(&context.reps, adjustments.rep_delta(&exercise.name)),
            GENERIC_LOAD.to_string(),
            false,
        )
    };

    let equipment = exercise.equipment_label();
    let confidence_alternative = resolve_alternative(
        &exercise.name,
        &AlternativeContext {
            equipment: Some(equipment.clone()),
            muscle: Some(exercise.muscle.clone()),
            description: None,
            supportive_cues: vec![],
        },
    );

    PlanRow {
        id: RowID::from(u32::try_from(index + 1).unwrap_or(u32::MAX)),
        exercise: exercise.name.clone(),
        display_name: exercise.name.clone(),
        equipment,
        muscle: exercise.muscle.clone(),
        reps,
        sets: context.sets.clone(),
        rest: context.rest.clone(),
        recommended_load,
        instructions: exercise.description.clone(),
        supportive_cues: vec![],
        video: exercise.video.clone(),
        uses_weight,
        time_based,
        confidence: ConfidenceTag::of(exercise),
        confidence_alternative,
        confidence_applied: false,
    }
}

#[must_use]
pub fn is_time_based(exercise: &ExerciseRecord) -> bool {
    if exercise.pattern == MovementPattern::Conditioning {
        return true;
    }

    if !exercise.uses_bodyweight() {
        return false;
    }

    let muscle = exercise.muscle.to_lowercase();
    let name = exercise.name.to_lowercase();
    muscle == "core" || muscle == "abs" || TIME_KEYWORDS.iter().any(|k| name.contains(k))
}

#[must_use]
pub fn duration(exercise: &ExerciseRecord, calm: bool) -> &'static str {
    let pick = |(standard, shortened): (&'static str, &'static str)| {
        if calm { shortened } else { standard }
    };
    let name = exercise.name.to_lowercase();

    if let Some((_, standard, shortened)) = DURATIONS
        .iter()
        .find(|(keywords, _, _)| keywords.iter().any(|k| name.contains(k)))
    {
        return pick((*standard, *shortened));
    }

    if exercise.pattern == MovementPattern::Conditioning
        || STEADY_KEYWORDS.iter().any(|k| name.contains(k))
    {
        return pick(STEADY_DURATION);
    }

    pick(DEFAULT_DURATION)
}

/// Shift the first `low-high` pair in `range` by `delta`.
///
/// The new low bound is at least 1 and the new high bound is above the new low bound. Strings
/// without a numeric range are returned unchanged.
#[must_use]
pub fn shift_rep_range(range: &str, delta: i32) -> String {
    if delta == 0 {
        return range.to_string();
    }

    let Some(captures) = REP_RANGE.captures(range) else {
        return range.to_string();
    };
    let (Ok(low), Ok(high)) = (captures[1].parse::<i64>(), captures[2].parse::<i64>()) else {
        return range.to_string();
    };
    let Some(matched) = captures.get(0) else {
        return range.to_string();
    };

    let low = (low + i64::from(delta)).max(1);
    let high = (high + i64::from(delta)).max(low + 1);

    format!(
        "{}{low}-{high}{}",
        &range[..matched.start()],
        &range[matched.end()..]
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn barbell_load(
    exercise: &ExerciseRecord,
    context: &PrescriptionContext,
    adjustments: &AdjustmentState,
) -> Option<String> {
    if context.no_max {
        return None;
    }

    let max = context.maxes.get(LiftFamily::of(exercise)?)?;
    let percent = context.effective_percent(&exercise.name, adjustments);
    let load = (f64::from(f32::from(max)) * f64::from(percent) / 100.0).round() as u32;

    Some(format!("{load} {}", context.unit.suffix()))
}
