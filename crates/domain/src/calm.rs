use std::collections::BTreeSet;

use log::debug;
use rand::{Rng, seq::IndexedRandom};

use crate::{Catalog, ExerciseRecord, Goal};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::EnumIter)]
pub enum MovementCategory {
    Squat,
    Hinge,
    Push,
    Pull,
    Core,
    Arms,
}

impl MovementCategory {
    #[must_use]
    pub fn order(goal: Goal) -> [MovementCategory; 6] {
        use MovementCategory::{Arms, Core, Hinge, Pull, Push, Squat};

        match goal {
            Goal::Strength => [Squat, Hinge, Push, Pull, Core, Arms],
            Goal::Bulking => [Push, Pull, Squat, Hinge, Arms, Core],
            Goal::Dieting => [Squat, Push, Core, Pull, Hinge, Arms],
            Goal::GeneralFitness => [Squat, Push, Pull, Core, Hinge, Arms],
        }
    }

    /// Candidate exercises of the category together with the equipment they need.
    #[must_use]
    pub fn pool(self) -> &'static [(&'static str, Requirement)] {
        match self {
            MovementCategory::Squat => &[
                ("Leg Press", Requirement::Machine),
                ("Goblet Squat", Requirement::Dumbbell),
                ("Smith Machine Squat", Requirement::Smith),
                ("Bodyweight Squat", Requirement::None),
                ("Supported Split Squat", Requirement::None),
            ],
            MovementCategory::Hinge => &[
                ("Dumbbell Romanian Deadlift", Requirement::Dumbbell),
                ("Cable Kickback", Requirement::Cable),
                ("Smith Machine Hip Thrust", Requirement::Smith),
                ("Glute Bridge", Requirement::None),
            ],
            MovementCategory::Push => &[
                ("Machine Chest Press", Requirement::Machine),
                ("Dumbbell Bench Press", Requirement::Dumbbell),
                ("Cable Chest Press", Requirement::Cable),
                ("Incline Push-Up", Requirement::None),
            ],
            MovementCategory::Pull => &[
                ("Chest-Supported Machine Row", Requirement::Machine),
                ("One-Arm Dumbbell Row", Requirement::Dumbbell),
                ("Seated Cable Row", Requirement::Cable),
                ("Superman Hold", Requirement::None),
            ],
            MovementCategory::Core => &[
                ("Pallof Press", Requirement::Cable),
                ("Dead Bug", Requirement::None),
                ("Bird Dog", Requirement::None),
                ("Plank", Requirement::None),
            ],
            MovementCategory::Arms => &[
                ("Cable Triceps Pushdown", Requirement::Cable),
                ("Dumbbell Curl", Requirement::Dumbbell),
                ("Hammer Curl", Requirement::Dumbbell),
                ("Towel Curl", Requirement::None),
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Requirement {
    None,
    Machine,
    Dumbbell,
    Cable,
    Smith,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EquipmentAccess {
    pub machine: bool,
    pub dumbbell: bool,
    pub cable: bool,
    pub smith: bool,
}

impl EquipmentAccess {
    #[must_use]
    pub fn satisfies(self, requirement: Requirement) -> bool {
        match requirement {
            Requirement::None => true,
            Requirement::Machine => self.machine,
            Requirement::Dumbbell => self.dumbbell,
            Requirement::Cable => self.cable,
            Requirement::Smith => self.smith,
        }
    }
}

impl From<&BTreeSet<String>> for EquipmentAccess {
    fn from(keys: &BTreeSet<String>) -> Self {
        EquipmentAccess {
            machine: keys.contains("machine"),
            dumbbell: keys.contains("dumbbells"),
            cable: keys.contains("cables"),
            smith: keys.contains("smith machine"),
        }
    }
}

#[must_use]
pub fn calm_row_count(minutes: Option<u32>) -> usize {
    match minutes {
        Some(minutes) if minutes <= 20 => 4,
        Some(minutes) if minutes <= 40 => 5,
        _ => 6,
    }
}

/// One exercise per movement category, in the order preferred for `goal`.
pub fn calm_exercises<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    goal: Goal,
    access: EquipmentAccess,
    count: usize,
    rng: &mut R,
) -> Vec<&'a ExerciseRecord> {
    MovementCategory::order(goal)
        .into_iter()
        .take(count)
        .filter_map(|category| {
            let options = category
                .pool()
                .iter()
                .filter(|(_, requirement)| access.satisfies(*requirement))
                .filter_map(|(name, _)| catalog.get(name))
                .collect::<Vec<_>>();
            let exercise = options.choose(rng).copied();
            if exercise.is_none() {
                debug!("no calm exercise available for {category:?}");
            }
            exercise
        })
        .collect()
}
