use std::sync::LazyLock;

use chrono::Utc;
use log::{debug, info, warn};
use rand::{
    Rng,
    seq::{IndexedRandom, SliceRandom, index},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    AdjustmentState, BODYWEIGHT, CandidateFilter, Catalog, EquipmentAccess, ExerciseRecord,
    Experience, FallbackTier, Goal, Intimidation, ModeLabel, MovementPattern, NormalizedSelection,
    OneRepMaxes, PlanMetadata, PlanPayload, PrescriptionContext, RequestError, WeightUnit,
    build_row, calm_exercises, calm_row_count, equipment, find_candidates, summarize,
};

const MIN_ROWS: usize = 3;
const MAX_ROWS: usize = 5;
const PER_MUSCLE_CAP: usize = 3;
const SHORT_PER_MUSCLE_CAP: usize = 2;
const SHORT_SESSION_MINUTES: u32 = 30;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanRequest {
    pub equipment: Vec<String>,
    pub muscles: Vec<String>,
    pub goal: String,
    pub experience: Experience,
    pub calm: bool,
    pub maxes: OneRepMaxes,
    pub no_max: bool,
    pub minutes: Option<u32>,
    pub unit: WeightUnit,
}

impl PlanRequest {
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn per_muscle_cap(&self) -> usize {
        match self.minutes {
            Some(minutes) if minutes <= SHORT_SESSION_MINUTES => SHORT_PER_MUSCLE_CAP,
            _ => PER_MUSCLE_CAP,
        }
    }
}

pub struct PlanEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> PlanEngine<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn generate(&self, request: &PlanRequest, adjustments: &AdjustmentState) -> PlanPayload {
        self.generate_with(request, adjustments, &mut rand::rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        request: &PlanRequest,
        adjustments: &AdjustmentState,
        rng: &mut R,
    ) -> PlanPayload {
        let selection = equipment::normalize(&request.equipment, &request.muscles);
        let goal = Goal::infer(&request.goal);

        debug!(
            "generating {} plan for {:?} with {:?}",
            goal.label(),
            selection.muscles,
            selection.equipment
        );

        if request.calm {
            return self.generate_calm(request, &selection, goal, adjustments, rng);
        }

        let (exercises, tier, missing_muscles) = self.select(request, &selection, goal, rng);
        let context =
            PrescriptionContext::standard(goal, request.maxes, request.no_max, request.unit);
        let mode = match tier {
            FallbackTier::Native | FallbackTier::RelaxedFilters => goal.mode(),
            FallbackTier::GoalFallback => ModeLabel::GoalFallback,
            FallbackTier::DefaultPlan => ModeLabel::BeginnerReset,
        };

        build_payload(
            &exercises,
            &context,
            adjustments,
            goal,
            mode,
            PlanMetadata::new(selection.muscles, missing_muscles, tier),
        )
    }

    fn generate_calm<R: Rng + ?Sized>(
        &self,
        request: &PlanRequest,
        selection: &NormalizedSelection,
        goal: Goal,
        adjustments: &AdjustmentState,
        rng: &mut R,
    ) -> PlanPayload {
        let count = calm_row_count(request.minutes);
        let mut exercises = calm_exercises(
            self.catalog,
            goal,
            EquipmentAccess::from(&selection.equipment),
            count,
            rng,
        );
        let mut tier = FallbackTier::Native;
        let mut mode = ModeLabel::Gymxiety;

        if exercises.is_empty() {
            warn!("no calm exercise found in catalog, using beginner reset plan");
            exercises = BEGINNER_RESET.iter().collect();
            tier = FallbackTier::DefaultPlan;
            mode = ModeLabel::BeginnerReset;
        } else if exercises.len() < count {
            info!(
                "only {} calm exercises found in catalog, adding beginner reset exercises",
                exercises.len()
            );
            for exercise in BEGINNER_RESET.iter() {
                if exercises.len() >= count {
                    break;
                }
                if !exercises
                    .iter()
                    .any(|e| e.name.eq_ignore_ascii_case(&exercise.name))
                {
                    exercises.push(exercise);
                }
            }
        }

        build_payload(
            &exercises,
            &PrescriptionContext::calm(request.maxes, request.no_max, request.unit),
            adjustments,
            goal,
            mode,
            PlanMetadata::new(selection.muscles.clone(), vec![], tier),
        )
    }

    fn select<R: Rng + ?Sized>(
        &self,
        request: &PlanRequest,
        selection: &NormalizedSelection,
        goal: Goal,
        rng: &mut R,
    ) -> (Vec<&'a ExerciseRecord>, FallbackTier, Vec<String>) {
        let (native, missing_muscles) = self.match_per_muscle(
            selection,
            request.experience.filter(),
            request.per_muscle_cap(),
            rng,
        );
        if !native.is_empty() {
            return (trim(native, rng), FallbackTier::Native, missing_muscles);
        }

        let relaxed = self.relax_filters(&selection.muscles);
        if !relaxed.is_empty() {
            info!("no exercise matches the available equipment, ignoring equipment");
            return (trim(relaxed, rng), FallbackTier::RelaxedFilters, missing_muscles);
        }

        let fallback = self.goal_fallback(goal, rng);
        if !fallback.is_empty() {
            info!("no exercise matches the selected muscles, using {} focus", goal.label());
            return (trim(fallback, rng), FallbackTier::GoalFallback, missing_muscles);
        }

        warn!("catalog has no usable exercises, using beginner reset plan");
        (
            BEGINNER_RESET.iter().collect(),
            FallbackTier::DefaultPlan,
            missing_muscles,
        )
    }

    fn match_per_muscle<R: Rng + ?Sized>(
        &self,
        selection: &NormalizedSelection,
        filter: CandidateFilter,
        cap: usize,
        rng: &mut R,
    ) -> (Vec<&'a ExerciseRecord>, Vec<String>) {
        let mut chosen: Vec<&ExerciseRecord> = vec![];
        let mut overflow = vec![];
        let mut missing_muscles = vec![];

        for muscle in &selection.muscles {
            let mut candidates =
                find_candidates(self.catalog, muscle, Some(&selection.equipment), filter);

            if candidates.is_empty() {
                debug!("no exercise for {muscle} with the available equipment");
                missing_muscles.push(muscle.clone());
                continue;
            }

            candidates.shuffle(rng);
            let mut taken = 0;
            for candidate in candidates {
                if taken < cap && !contains(&chosen, candidate) {
                    chosen.push(candidate);
                    taken += 1;
                } else {
                    overflow.push(candidate);
                }
            }
        }

        if !chosen.is_empty() && chosen.len() < MIN_ROWS {
            for candidate in overflow {
                if chosen.len() >= MIN_ROWS {
                    break;
                }
                if !contains(&chosen, candidate) {
                    chosen.push(candidate);
                }
            }

            let distinct = chosen.len();
            let mut index = 0;
            while chosen.len() < MIN_ROWS {
                chosen.push(chosen[index % distinct]);
                index += 1;
            }
        }

        (chosen, missing_muscles)
    }

    fn relax_filters(&self, muscles: &[String]) -> Vec<&'a ExerciseRecord> {
        let mut chosen = vec![];

        for muscle in muscles {
            if let Some(candidate) =
                find_candidates(self.catalog, muscle, None, CandidateFilter::default()).first()
            {
                if !contains(&chosen, candidate) {
                    chosen.push(*candidate);
                }
            }
        }

        chosen
    }

    fn goal_fallback<R: Rng + ?Sized>(&self, goal: Goal, rng: &mut R) -> Vec<&'a ExerciseRecord> {
        let mut chosen = vec![];

        for muscle in goal.fallback_muscles() {
            let candidates = find_candidates(self.catalog, muscle, None, CandidateFilter::default());
            if let Some(candidate) = candidates.choose(rng) {
                if !contains(&chosen, candidate) {
                    chosen.push(*candidate);
                }
            }
        }

        chosen
    }
}

fn contains(exercises: &[&ExerciseRecord], exercise: &ExerciseRecord) -> bool {
    exercises.iter().any(|e| e.name == exercise.name)
}

/// Randomly reduce to the maximum plan size while keeping the relative order.
fn trim<T: Copy, R: Rng + ?Sized>(items: Vec<T>, rng: &mut R) -> Vec<T> {
    if items.len() <= MAX_ROWS {
        return items;
    }

    let mut indices = index::sample(rng, items.len(), MAX_ROWS).into_vec();
    indices.sort_unstable();
    indices.into_iter().map(|i| items[i]).collect()
}

fn build_payload(
    exercises: &[&ExerciseRecord],
    context: &PrescriptionContext,
    adjustments: &AdjustmentState,
    goal: Goal,
    mode: ModeLabel,
    metadata: PlanMetadata,
) -> PlanPayload {
    let rows = exercises
        .iter()
        .enumerate()
        .map(|(index, exercise)| build_row(exercise, index, context, adjustments))
        .collect::<Vec<_>>();
    let summary = summarize(&rows, &context.sets, &context.reps, mode);

    PlanPayload {
        id: Uuid::new_v4(),
        rows,
        summary,
        goal: goal.label().to_string(),
        calm_mode: context.calm,
        generated_at: Utc::now(),
        metadata,
    }
}

/// Full-body plan used when the catalog yields nothing at all.
static BEGINNER_RESET: LazyLock<Vec<ExerciseRecord>> = LazyLock::new(|| {
    [
        (
            "Bodyweight Squat",
            "Legs",
            MovementPattern::Squat,
            "Sit back as if onto a chair and stand up tall again.",
        ),
        (
            "Incline Push-Up",
            "Chest",
            MovementPattern::Push,
            "Push away from a wall or sturdy table with your body in a straight line.",
        ),
        (
            "Glute Bridge",
            "Glutes",
            MovementPattern::Hinge,
            "Lie on your back with bent knees and lift your hips off the floor.",
        ),
        (
            "Superman Hold",
            "Back",
            MovementPattern::Core,
            "Lie face down and lift your arms and legs a few inches off the floor.",
        ),
        (
            "Dead Bug",
            "Core",
            MovementPattern::Core,
            "Lie on your back and slowly extend opposite arm and leg.",
        ),
        (
            "Bird Dog",
            "Core",
            MovementPattern::Core,
            "From all fours, reach one arm and the opposite leg long.",
        ),
        (
            "Marching in Place",
            "Cardio",
            MovementPattern::Conditioning,
            "March on the spot at an easy, steady rhythm.",
        ),
    ]
    .into_iter()
    .map(|(name, muscle, pattern, description)| ExerciseRecord {
        name: name.to_string(),
        muscle: muscle.to_string(),
        equipment: vec![BODYWEIGHT.to_string()],
        pattern,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: description.to_string(),
        video: None,
    })
    .collect()
});
