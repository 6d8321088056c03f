use serde::{Deserialize, Serialize};

use crate::{
    Catalog, ConfidenceTag, GENERIC_LOAD, PlanRow, RowID, duration, is_time_based,
    prescription::{CALM_REPS, CALM_SETS},
};

const DEFAULT_CUES: [&str; 2] = [
    "Move slowly and stop if anything feels sharp.",
    "Breathe out on the hardest part of each rep.",
];

/// Intimidating exercises and the friendlier exercise suggested in their place.
const SUBSTITUTIONS: [(&str, ConfidenceAlternative); 32] = [
    ("Assisted Pull-Up", ConfidenceAlternative::LatPulldown),
    ("Barbell Back Squat", ConfidenceAlternative::GobletSquat),
    ("Barbell Bench Press", ConfidenceAlternative::MachineChestPress),
    ("Barbell Bent-Over Row", ConfidenceAlternative::SeatedCableRow),
    ("Barbell Curl", ConfidenceAlternative::DumbbellCurl),
    ("Barbell Hip Thrust", ConfidenceAlternative::GluteBridge),
    ("Barbell Overhead Press", ConfidenceAlternative::MachineShoulderPress),
    ("Bear Crawl", ConfidenceAlternative::BirdDog),
    ("Bench Dip", ConfidenceAlternative::CableTricepsPushdown),
    ("Burpee", ConfidenceAlternative::MarchingInPlace),
    ("Cable Chest Fly", ConfidenceAlternative::PecDeck),
    ("Cable Crunch", ConfidenceAlternative::DeadBug),
    ("Conventional Deadlift", ConfidenceAlternative::DumbbellRomanianDeadlift),
    ("Dips", ConfidenceAlternative::CableTricepsPushdown),
    ("Dumbbell Chest Fly", ConfidenceAlternative::PecDeck),
    ("Front Squat", ConfidenceAlternative::GobletSquat),
    ("Hanging Leg Raise", ConfidenceAlternative::DeadBug),
    ("Inverted Row", ConfidenceAlternative::SeatedCableRow),
    ("Kettlebell Swing", ConfidenceAlternative::GluteBridge),
    ("Mountain Climber", ConfidenceAlternative::MarchingInPlace),
    (
        "Overhead Dumbbell Triceps Extension",
        ConfidenceAlternative::CableTricepsPushdown,
    ),
    ("Pike Push-Up", ConfidenceAlternative::SeatedDumbbellShoulderPress),
    ("Pull-Up", ConfidenceAlternative::LatPulldown),
    ("Push-Up", ConfidenceAlternative::InclinePushUp),
    ("Reverse Lunge", ConfidenceAlternative::SupportedSplitSquat),
    ("Rowing Machine Intervals", ConfidenceAlternative::StationaryBikeRide),
    ("Side Plank", ConfidenceAlternative::Plank),
    ("Smith Machine Bench Press", ConfidenceAlternative::DumbbellBenchPress),
    ("Smith Machine Hip Thrust", ConfidenceAlternative::GluteBridge),
    ("Smith Machine Squat", ConfidenceAlternative::LegPress),
    ("Suspension Trainer Row", ConfidenceAlternative::SeatedCableRow),
    ("Walking Lunge", ConfidenceAlternative::SupportedSplitSquat),
];

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ConfidenceAlternative {
    BirdDog,
    CableTricepsPushdown,
    DeadBug,
    DumbbellBenchPress,
    DumbbellCurl,
    DumbbellRomanianDeadlift,
    GluteBridge,
    GobletSquat,
    InclinePushUp,
    LatPulldown,
    LegPress,
    MachineChestPress,
    MachineShoulderPress,
    MarchingInPlace,
    PecDeck,
    Plank,
    SeatedCableRow,
    SeatedDumbbellShoulderPress,
    StationaryBikeRide,
    SupportedSplitSquat,
}

#[derive(Debug, Default, PartialEq)]
pub struct AlternativeDetails {
    pub description: Option<&'static str>,
    pub supportive_cues: &'static [&'static str],
    pub equipment: Option<&'static str>,
    pub muscle: Option<&'static str>,
    pub confidence: Option<ConfidenceTag>,
    pub reps: Option<&'static str>,
    pub sets: Option<&'static str>,
}

impl ConfidenceAlternative {
    #[must_use]
    pub fn of(exercise: &str) -> Option<ConfidenceAlternative> {
        let exercise = exercise.trim();
        SUBSTITUTIONS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(exercise))
            .map(|(_, alternative)| *alternative)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ConfidenceAlternative::BirdDog => "Bird Dog",
            ConfidenceAlternative::CableTricepsPushdown => "Cable Triceps Pushdown",
            ConfidenceAlternative::DeadBug => "Dead Bug",
            ConfidenceAlternative::DumbbellBenchPress => "Dumbbell Bench Press",
            ConfidenceAlternative::DumbbellCurl => "Dumbbell Curl",
            ConfidenceAlternative::DumbbellRomanianDeadlift => "Dumbbell Romanian Deadlift",
            ConfidenceAlternative::GluteBridge => "Glute Bridge",
            ConfidenceAlternative::GobletSquat => "Goblet Squat",
            ConfidenceAlternative::InclinePushUp => "Incline Push-Up",
            ConfidenceAlternative::LatPulldown => "Lat Pulldown",
            ConfidenceAlternative::LegPress => "Leg Press",
            ConfidenceAlternative::MachineChestPress => "Machine Chest Press",
            ConfidenceAlternative::MachineShoulderPress => "Machine Shoulder Press",
            ConfidenceAlternative::MarchingInPlace => "Marching in Place",
            ConfidenceAlternative::PecDeck => "Pec Deck",
            ConfidenceAlternative::Plank => "Plank",
            ConfidenceAlternative::SeatedCableRow => "Seated Cable Row",
            ConfidenceAlternative::SeatedDumbbellShoulderPress => "Seated Dumbbell Shoulder Press",
            ConfidenceAlternative::StationaryBikeRide => "Stationary Bike Ride",
            ConfidenceAlternative::SupportedSplitSquat => "Supported Split Squat",
        }
    }

    #[must_use]
    pub fn details(self) -> AlternativeDetails {
        match self {
            ConfidenceAlternative::BirdDog => AlternativeDetails {
                description: Some("Reach one arm and the opposite leg long from all fours."),
                supportive_cues: &["Keep your hips level.", "Pause for a breath at full reach."],
                equipment: Some("Bodyweight"),
                muscle: Some("Core"),
                confidence: Some(ConfidenceTag::Easy),
                ..AlternativeDetails::default()
            },
            ConfidenceAlternative::CableTricepsPushdown => AlternativeDetails {
                description: Some("Push the rope down with your elbows pinned to your sides."),
                supportive_cues: &["Start with a light pin setting."],
                equipment: Some("Cables"),
                muscle: Some("Arms"),
                confidence: Some(ConfidenceTag::Easy),
                reps: Some("10-12 reps"),
                ..AlternativeDetails::default()
            },
            ConfidenceAlternative::DeadBug => AlternativeDetails {
                description: Some("Lie on your back and lower opposite arm and leg slowly."),
                supportive_cues: &["Press your low back into the floor."],
                equipment: Some("Bodyweight"),
                muscle: Some("Core"),
                confidence: Some(ConfidenceTag::Easy),
                ..AlternativeDetails::default()
            },
            ConfidenceAlternative::DumbbellBenchPress => AlternativeDetails {
                description: Some("Press two dumbbells from your chest while lying on a bench."),
                supportive_cues: &["Pick dumbbells you could lift a few more times."],
                equipment: Some("Dumbbells, Bench"),
                muscle: Some("Chest"),
                confidence: Some(ConfidenceTag::Moderate),
                ..AlternativeDetails::default()
            },
            ConfidenceAlternative::DumbbellRomanianDeadlift => AlternativeDetails {
                description: Some("Push your hips back and slide the dumbbells down your legs."),
                supportive_cues: &["Soft knees, long spine.", "Stop when you feel a stretch."],
                equipment: Some("Dumbbells"),
                muscle: Some("Legs"),
                confidence: Some(ConfidenceTag::Moderate),
                reps: Some("8-10 reps"),
                sets: Some("3"),
            },
            ConfidenceAlternative::GluteBridge => AlternativeDetails {
                description: Some("Lift your hips from the floor with your knees bent."),
                supportive_cues: &["Squeeze at the top for one second."],
                equipment: Some("Bodyweight"),
                muscle: Some("Glutes"),
                confidence: Some(ConfidenceTag::Easy),
                reps: Some("12-15 reps"),
                ..AlternativeDetails::default()
            },
            ConfidenceAlternative::GobletSquat => AlternativeDetails {
                description: Some("Hold one dumbbell at your chest and sit down between your knees."),
                supportive_cues: &[
                    "Keep the weight close to your chest.",
                    "Use a bench behind you as a depth target.",
                ],
                equipment: Some("Dumbbells"),
                muscle: Some("Legs"),
                confidence: Some(ConfidenceTag::Easy),
                reps: Some("8-12 reps"),
                sets: Some("3"),
            },
            ConfidenceAlternative::InclinePushUp => AlternativeDetails {
                description: Some("Do push-ups with your hands on a bench or wall."),
                supportive_cues: &["Higher hands make it easier."],
                equipment: Some("Bodyweight, Bench"),
                muscle: Some("Chest"),
                confidence: Some(ConfidenceTag::Easy),
                ..AlternativeDetails::default()
            },
            ConfidenceAlternative::LatPulldown => AlternativeDetails {
                description: Some("Pull the bar down to your upper chest while sitting tall."),
                supportive_cues: &["Lead with your elbows.", "Control the bar on the way up."],
                equipment: Some("Cables, Machine"),
                muscle: Some("Back"),
                confidence: Some(ConfidenceTag::Easy),
                reps: Some("10-12 reps"),
                ..AlternativeDetails::default()
            },
            ConfidenceAlternative::LegPress => AlternativeDetails {
                description: Some("Press the platform away while your back stays on the pad."),
                supportive_cues: &["Keep your knees in line with your toes."],
                equipment: Some("Machine"),
                muscle: Some("Legs"),
                confidence: Some(ConfidenceTag::Easy),
                reps: Some("10-12 reps"),
                ..AlternativeDetails::default()
            },
            ConfidenceAlternative::MachineChestPress => AlternativeDetails {
                description: Some("Press the handles forward with your back on the pad."),
                supportive_cues: &["Adjust the seat so the handles are at chest height."],
                equipment: Some("Machine"),
                muscle: Some("Chest"),
                confidence: Some(ConfidenceTag::Easy),
                reps: Some("10-12 reps"),
                sets: Some("3"),
            },
            ConfidenceAlternative::MachineShoulderPress => AlternativeDetails {
                description: Some("Press the handles overhead from a supported seat."),
                supportive_cues: &["Stop just short of locking your elbows."],
                equipment: Some("Machine"),
                muscle: Some("Shoulders"),
                confidence: Some(ConfidenceTag::Easy),
                reps: Some("10-12 reps"),
                ..AlternativeDetails::default()
            },
            ConfidenceAlternative::MarchingInPlace => AlternativeDetails {
                description: Some("March on the spot at a pace that lets you talk."),
                supportive_cues: &["Swing your arms to raise your heart rate."],
                equipment: Some("Bodyweight"),
                muscle: Some("Cardio"),
                confidence: Some(ConfidenceTag::Easy),
                reps: Some("2-3 min easy pace"),
                ..AlternativeDetails::default()
            },
            ConfidenceAlternative::SeatedCableRow => AlternativeDetails {
                description: Some("Sit tall and pull the handle to your stomach."),
                supportive_cues: &["Squeeze your shoulder blades together."],
                equipment: Some("Cables"),
                muscle: Some("Back"),
                confidence: Some(ConfidenceTag::Easy),
                reps: Some("10-12 reps"),
                ..AlternativeDetails::default()
            },
            ConfidenceAlternative::SeatedDumbbellShoulderPress => AlternativeDetails {
                description: Some("Press the dumbbells overhead while seated upright."),
                supportive_cues: &["Keep your back against the bench."],
                equipment: Some("Dumbbells, Bench"),
                muscle: Some("Shoulders"),
                confidence: Some(ConfidenceTag::Moderate),
                ..AlternativeDetails::default()
            },
            ConfidenceAlternative::SupportedSplitSquat => AlternativeDetails {
                description: Some("Hold onto a wall and lower straight down in a split stance."),
                supportive_cues: &["Use as much support as you need."],
                equipment: Some("Bodyweight"),
                muscle: Some("Legs"),
                confidence: Some(ConfidenceTag::Easy),
                reps: Some("8-10 reps per side"),
                ..AlternativeDetails::default()
            },
            ConfidenceAlternative::DumbbellCurl
            | ConfidenceAlternative::PecDeck
            | ConfidenceAlternative::Plank
            | ConfidenceAlternative::StationaryBikeRide => AlternativeDetails::default(),
        }
    }
}

/// Values used for fields the alternative itself does not define.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AlternativeContext {
    pub equipment: Option<String>,
    pub muscle: Option<String>,
    pub description: Option<String>,
    pub supportive_cues: Vec<String>,
}

impl From<&PlanRow> for AlternativeContext {
    fn from(row: &PlanRow) -> Self {
        AlternativeContext {
            equipment: Some(row.equipment.clone()),
            muscle: Some(row.muscle.clone()),
            description: None,
            supportive_cues: row.supportive_cues.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeSuggestion {
    pub name: String,
    pub equipment: Option<String>,
    pub muscle: Option<String>,
    pub description: String,
    pub supportive_cues: Vec<String>,
    pub confidence: ConfidenceTag,
    pub reps: Option<String>,
    pub sets: Option<String>,
}

#[must_use]
pub fn resolve_alternative(
    exercise: &str,
    context: &AlternativeContext,
) -> Option<AlternativeSuggestion> {
    let alternative = ConfidenceAlternative::of(exercise)?;
    let details = alternative.details();
    let name = alternative.name();

    let supportive_cues = if !details.supportive_cues.is_empty() {
        details
            .supportive_cues
            .iter()
            .map(ToString::to_string)
            .collect()
    } else if !context.supportive_cues.is_empty() {
        context.supportive_cues.clone()
    } else {
        DEFAULT_CUES.iter().map(ToString::to_string).collect()
    };

    Some(AlternativeSuggestion {
        name: name.to_string(),
        equipment: details
            .equipment
            .map(ToString::to_string)
            .or_else(|| context.equipment.clone()),
        muscle: details
            .muscle
            .map(ToString::to_string)
            .or_else(|| context.muscle.clone()),
        description: details
            .description
            .map(ToString::to_string)
            .or_else(|| context.description.clone())
            .unwrap_or_else(|| format!("Switch to {name} for more stability and confidence.")),
        supportive_cues,
        confidence: details.confidence.unwrap_or(ConfidenceTag::Easy),
        reps: details.reps.map(ToString::to_string),
        sets: details.sets.map(ToString::to_string),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowSelector {
    Index(usize),
    Id(RowID),
}

/// Replace the selected row by its confidence alternative.
///
/// Returns `false` without touching any row if the row does not exist, was already swapped or
/// has no alternative.
pub fn apply_alternative(rows: &mut [PlanRow], selector: RowSelector) -> bool {
    let row = match selector {
        RowSelector::Index(index) => rows.get_mut(index),
        RowSelector::Id(id) => rows.iter_mut().find(|r| r.id == id),
    };
    let Some(row) = row else {
        return false;
    };

    if row.confidence_applied {
        return false;
    }

    let Some(suggestion) = row
        .confidence_alternative
        .take()
        .or_else(|| resolve_alternative(&row.exercise, &AlternativeContext::from(&*row)))
    else {
        return false;
    };

    let calm = row.sets == CALM_SETS;
    let explicit_reps = suggestion.reps.is_some();

    row.display_name = suggestion.name;
    if let Some(equipment) = suggestion.equipment {
        row.equipment = equipment;
    }
    if let Some(muscle) = suggestion.muscle {
        row.muscle = muscle;
    }
    if let Some(reps) = suggestion.reps {
        row.reps = reps;
    }
    if let Some(sets) = suggestion.sets {
        row.sets = sets;
    }
    if row.uses_weight {
        row.recommended_load = GENERIC_LOAD.to_string();
        row.uses_weight = false;
    }
    if let Some(target) = Catalog::builtin().get(&row.display_name) {
        let time_based = is_time_based(target);
        if !explicit_reps {
            if time_based {
                row.reps = duration(target, calm).to_string();
            } else if row.time_based {
                row.reps = CALM_REPS.to_string();
            }
        }
        row.time_based = time_based;
    }
    row.instructions = suggestion.description;
    row.supportive_cues = suggestion.supportive_cues;
    row.confidence = suggestion.confidence;
    row.confidence_applied = true;

    true
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        AdjustmentState, Catalog, Goal, OneRepMax, OneRepMaxes, PrescriptionContext, WeightUnit,
        build_row,
    };

    fn rows(names: &[&str]) -> Vec<PlanRow> {
        let context = PrescriptionContext::standard(
            Goal::Strength,
            OneRepMaxes {
                squat: OneRepMax::new(200.0).ok(),
                ..OneRepMaxes::default()
            },
            false,
            WeightUnit::Kg,
        );
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                build_row(
                    Catalog::builtin().get(name).unwrap(),
                    i,
                    &context,
                    &AdjustmentState::default(),
                )
            })
            .collect()
    }

    #[test]
    fn test_substitutions() {
        let catalog = Catalog::builtin();
        let mut sources = HashSet::new();

        for (source, alternative) in SUBSTITUTIONS {
            assert!(sources.insert(source), "duplicate source {source}");
            assert!(catalog.get(source).is_some(), "unknown source {source}");
            assert!(
                catalog.get(alternative.name()).is_some(),
                "unknown alternative {}",
                alternative.name()
            );
            assert_eq!(ConfidenceAlternative::of(alternative.name()), None);
        }

        let mut names = SUBSTITUTIONS.iter().map(|(n, _)| *n).collect::<Vec<_>>();
        names.sort_unstable();
        assert_eq!(names, SUBSTITUTIONS.iter().map(|(n, _)| *n).collect::<Vec<_>>());
    }

    #[rstest]
    #[case("Barbell Back Squat", Some(ConfidenceAlternative::GobletSquat))]
    #[case("barbell back squat ", Some(ConfidenceAlternative::GobletSquat))]
    #[case("Pull-Up", Some(ConfidenceAlternative::LatPulldown))]
    #[case("Goblet Squat", None)]
    #[case("", None)]
    fn test_confidence_alternative_of(
        #[case] name: &str,
        #[case] expected: Option<ConfidenceAlternative>,
    ) {
        assert_eq!(ConfidenceAlternative::of(name), expected);
    }

    #[test]
    fn test_resolve_alternative_with_details() {
        assert_eq!(
            resolve_alternative("Barbell Back Squat", &AlternativeContext::default()),
            Some(AlternativeSuggestion {
                name: "Goblet Squat".to_string(),
                equipment: Some("Dumbbells".to_string()),
                muscle: Some("Legs".to_string()),
                description: "Hold one dumbbell at your chest and sit down between your knees."
                    .to_string(),
                supportive_cues: vec![
                    "Keep the weight close to your chest.".to_string(),
                    "Use a bench behind you as a depth target.".to_string(),
                ],
                confidence: ConfidenceTag::Easy,
                reps: Some("8-12 reps".to_string()),
                sets: Some("3".to_string()),
            })
        );
    }

    #[test]
    fn test_resolve_alternative_context_fallback() {
        let context = AlternativeContext {
            equipment: Some("Dumbbells".to_string()),
            muscle: Some("Arms".to_string()),
            description: Some("Curl it.".to_string()),
            supportive_cues: vec!["Elbows still.".to_string()],
        };

        assert_eq!(
            resolve_alternative("Barbell Curl", &context),
            Some(AlternativeSuggestion {
                name: "Dumbbell Curl".to_string(),
                equipment: Some("Dumbbells".to_string()),
                muscle: Some("Arms".to_string()),
                description: "Curl it.".to_string(),
                supportive_cues: vec!["Elbows still.".to_string()],
                confidence: ConfidenceTag::Easy,
                reps: None,
                sets: None,
            })
        );
    }

    #[test]
    fn test_resolve_alternative_template() {
        let suggestion =
            resolve_alternative("Cable Chest Fly", &AlternativeContext::default()).unwrap();

        assert_eq!(suggestion.name, "Pec Deck");
        assert_eq!(
            suggestion.description,
            "Switch to Pec Deck for more stability and confidence."
        );
        assert_eq!(suggestion.equipment, None);
        assert_eq!(suggestion.supportive_cues.len(), DEFAULT_CUES.len());
    }

    #[test]
    fn test_resolve_alternative_unknown() {
        assert_eq!(
            resolve_alternative("Plank", &AlternativeContext::default()),
            None
        );
    }

    #[test]
    fn test_apply_alternative() {
        let mut rows = rows(&["Barbell Back Squat", "Plank"]);
        assert!(rows[0].uses_weight);

        assert!(apply_alternative(&mut rows, RowSelector::Index(0)));

        let row = &rows[0];
        assert_eq!(row.exercise, "Barbell Back Squat");
        assert_eq!(row.display_name, "Goblet Squat");
        assert_eq!(row.equipment, "Dumbbells");
        assert_eq!(row.reps, "8-12 reps");
        assert_eq!(row.sets, "3");
        assert_eq!(row.recommended_load, GENERIC_LOAD);
        assert!(!row.uses_weight);
        assert_eq!(row.confidence, ConfidenceTag::Easy);
        assert_eq!(row.confidence_alternative, None);
        assert!(row.confidence_applied);

        assert!(!apply_alternative(&mut rows, RowSelector::Index(0)));
        assert_eq!(rows[0].display_name, "Goblet Squat");
    }

    #[test]
    fn test_apply_alternative_by_id() {
        let mut rows = rows(&["Plank", "Push-Up"]);

        assert!(apply_alternative(&mut rows, RowSelector::Id(RowID::from(2))));
        assert_eq!(rows[1].display_name, "Incline Push-Up");
        assert!(!apply_alternative(&mut rows, RowSelector::Id(RowID::from(2))));
    }

    #[test]
    fn test_apply_alternative_resolves_missing_suggestion() {
        let mut rows = rows(&["Burpee"]);
        rows[0].confidence_alternative = None;

        assert!(apply_alternative(&mut rows, RowSelector::Index(0)));
        assert_eq!(rows[0].display_name, "Marching in Place");
        assert_eq!(rows[0].reps, "2-3 min easy pace");
    }

    #[test]
    fn test_apply_alternative_time_based_target() {
        let mut rows = rows(&["Cable Crunch"]);
        assert!(!rows[0].time_based);

        assert!(apply_alternative(&mut rows, RowSelector::Index(0)));

        assert_eq!(rows[0].display_name, "Dead Bug");
        assert!(rows[0].time_based);
        assert_eq!(rows[0].reps, "30-45 sec controlled");
    }

    #[test]
    fn test_apply_alternative_time_based_target_calm() {
        let context = PrescriptionContext::calm(OneRepMaxes::default(), true, WeightUnit::Lb);
        let mut rows = vec![build_row(
            Catalog::builtin().get("Cable Crunch").unwrap(),
            0,
            &context,
            &AdjustmentState::default(),
        )];

        assert!(apply_alternative(&mut rows, RowSelector::Index(0)));

        assert!(rows[0].time_based);
        assert_eq!(rows[0].reps, "20-30 sec controlled");
        assert_eq!(rows[0].sets, "2");
    }

    #[rstest]
    #[case(RowSelector::Index(0))]
    #[case(RowSelector::Index(5))]
    #[case(RowSelector::Id(RowID::from(0)))]
    #[case(RowSelector::Id(RowID::from(9)))]
    fn test_apply_alternative_no_change(#[case] selector: RowSelector) {
        let mut rows = rows(&["Plank", "Push-Up"]);
        let expected = rows.clone();

        assert!(!apply_alternative(&mut rows, selector));
        assert_eq!(rows, expected);
    }
}
