use std::{
    collections::{BTreeSet, HashSet},
    sync::LazyLock,
};

use serde::{Deserialize, Serialize};

use crate::{CatalogError, equipment};

pub const BODYWEIGHT: &str = "Bodyweight";

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Intimidation {
    Low,
    #[default]
    Moderate,
    High,
}

impl Intimidation {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Intimidation::Low => "low",
            Intimidation::Moderate => "moderate",
            Intimidation::High => "high",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum MovementPattern {
    Squat,
    Hinge,
    Push,
    Pull,
    Core,
    Carry,
    Conditioning,
    Isolation,
    #[default]
    General,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub name: String,
    pub muscle: String,
    pub equipment: Vec<String>,
    pub pattern: MovementPattern,
    pub intimidation: Intimidation,
    pub confidence_safe: bool,
    pub description: String,
    pub video: Option<String>,
}

impl ExerciseRecord {
    /// Canonical keys of all equipment this exercise can be performed with.
    #[must_use]
    pub fn access_keys(&self) -> BTreeSet<String> {
        equipment::access_keys_for(&self.equipment)
    }

    #[must_use]
    pub fn uses_bodyweight(&self) -> bool {
        self.access_keys().contains(equipment::BODYWEIGHT_KEY)
    }

    #[must_use]
    pub fn equipment_label(&self) -> String {
        self.equipment.join(", ")
    }
}

/// An exercise as found in external catalog data.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub muscle: String,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub pattern: Option<MovementPattern>,
    #[serde(default)]
    pub intimidation: Option<Intimidation>,
    #[serde(default)]
    pub confidence_safe: Option<bool>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub video: Option<String>,
}

impl From<CatalogEntry> for ExerciseRecord {
    fn from(value: CatalogEntry) -> Self {
        let equipment = value
            .equipment
            .into_iter()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect::<Vec<_>>();
        ExerciseRecord {
            name: value.name.trim().to_string(),
            muscle: value.muscle.trim().to_string(),
            equipment: if equipment.is_empty() {
                vec![BODYWEIGHT.to_string()]
            } else {
                equipment
            },
            pattern: value.pattern.unwrap_or_default(),
            intimidation: value.intimidation.unwrap_or_default(),
            confidence_safe: value.confidence_safe.unwrap_or(false),
            description: value.description,
            video: value.video,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    exercises: Vec<ExerciseRecord>,
}

impl Catalog {
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();
        let mut exercises = vec![];

        for entry in entries {
            let record = ExerciseRecord::from(entry);

            if record.name.is_empty() {
                return Err(CatalogError::EmptyName);
            }

            if record.muscle.is_empty() {
                return Err(CatalogError::MissingMuscle(record.name));
            }

            if !names.insert(record.name.to_lowercase()) {
                return Err(CatalogError::DuplicateName(record.name));
            }

            exercises.push(record);
        }

        Ok(Self { exercises })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    #[must_use]
    pub fn exercises(&self) -> &[ExerciseRecord] {
        &self.exercises
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ExerciseRecord> {
        let name = name.trim();
        self.exercises
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Muscle groups in order of their first appearance.
    #[must_use]
    pub fn muscles(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.exercises
            .iter()
            .map(|e| e.muscle.as_str())
            .filter(|m| seen.insert(*m))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let mut entries = EXERCISE_VARIANTS
        .iter()
        .flat_map(|e| {
            std::iter::once(e.entry()).chain(e.variants.iter().map(move |v| CatalogEntry {
                name: v.name.to_string(),
                muscle: v.muscle.unwrap_or(e.muscle).to_string(),
                equipment: strings(v.equipment.unwrap_or(e.equipment)),
                pattern: Some(v.pattern.unwrap_or(e.pattern)),
                intimidation: Some(v.intimidation.unwrap_or(e.intimidation)),
                confidence_safe: Some(v.confidence_safe.unwrap_or(e.confidence_safe)),
                description: v.description.unwrap_or(e.description).to_string(),
                video: None,
            }))
        })
        .collect::<Vec<_>>();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Catalog::new(entries).unwrap_or_default()
});

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

struct BaseExercise {
    name: &'static str,
    muscle: &'static str,
    equipment: &'static [&'static str],
    pattern: MovementPattern,
    intimidation: Intimidation,
    confidence_safe: bool,
    description: &'static str,
    variants: &'static [ExerciseVariant],
}

impl BaseExercise {
    fn entry(&self) -> CatalogEntry {
        CatalogEntry {
            name: self.name.to_string(),
            muscle: self.muscle.to_string(),
            equipment: strings(self.equipment),
            pattern: Some(self.pattern),
            intimidation: Some(self.intimidation),
            confidence_safe: Some(self.confidence_safe),
            description: self.description.to_string(),
            video: None,
        }
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct ExerciseVariant {
    name: &'static str,
    muscle: Option<&'static str>,
    equipment: Option<&'static [&'static str]>,
    pattern: Option<MovementPattern>,
    intimidation: Option<Intimidation>,
    confidence_safe: Option<bool>,
    description: Option<&'static str>,
}

impl ExerciseVariant {
    const fn default() -> Self {
        Self {
            name: "",
            muscle: None,
            equipment: None,
            pattern: None,
            intimidation: None,
            confidence_safe: None,
            description: None,
        }
    }
}

const EXERCISE_VARIANTS: [BaseExercise; 43] = [
    BaseExercise {
        name: "Band Chest Press",
        muscle: "Chest",
        equipment: &["Resistance Bands"],
        pattern: MovementPattern::Push,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: "Anchor the band behind you and press forward until your arms are straight.",
        variants: &[],
    },
    BaseExercise {
        name: "Band Pull-Apart",
        muscle: "Back",
        equipment: &["Resistance Bands"],
        pattern: MovementPattern::Pull,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: "Hold the band at shoulder height and pull it apart by squeezing your shoulder blades.",
        variants: &[],
    },
    BaseExercise {
        name: "Barbell Back Squat",
        muscle: "Legs",
        equipment: &["Barbell"],
        pattern: MovementPattern::Squat,
        intimidation: Intimidation::High,
        confidence_safe: false,
        description: "Rest the bar on your upper back, sit down between your hips and stand back up.",
        variants: &[
            ExerciseVariant {
                name: "Bodyweight Squat",
                equipment: Some(&["Bodyweight"]),
                intimidation: Some(Intimidation::Low),
                confidence_safe: Some(true),
                description: Some("Stand with feet shoulder-width apart and sit back as if onto a chair."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Front Squat",
                description: Some("Hold the bar on the front of your shoulders and squat with an upright chest."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Goblet Squat",
                equipment: Some(&["Dumbbells"]),
                intimidation: Some(Intimidation::Low),
                confidence_safe: Some(true),
                description: Some("Hold one dumbbell against your chest and squat between your knees."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Smith Machine Squat",
                equipment: Some(&["Smith Machine"]),
                intimidation: Some(Intimidation::Moderate),
                description: Some("Squat with the bar guided by the Smith machine rails."),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Bench Press",
        muscle: "Chest",
        equipment: &["Barbell", "Bench"],
        pattern: MovementPattern::Push,
        intimidation: Intimidation::High,
        confidence_safe: false,
        description: "Lower the bar to your mid chest and press it back up over your shoulders.",
        variants: &[
            ExerciseVariant {
                name: "Cable Chest Press",
                equipment: Some(&["Cables"]),
                intimidation: Some(Intimidation::Moderate),
                confidence_safe: Some(true),
                description: Some("Stand between the cable stacks and press both handles forward."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Bench Press",
                equipment: Some(&["Dumbbells", "Bench"]),
                intimidation: Some(Intimidation::Moderate),
                confidence_safe: Some(true),
                description: Some("Lie on the bench and press both dumbbells up until your arms are straight."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Chest Press",
                equipment: Some(&["Machine"]),
                intimidation: Some(Intimidation::Low),
                confidence_safe: Some(true),
                description: Some("Sit tall with your back on the pad and press the handles away from you."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Smith Machine Bench Press",
                equipment: Some(&["Smith Machine", "Bench"]),
                intimidation: Some(Intimidation::Moderate),
                description: Some("Press the guided bar from your chest with the bench under the rails."),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Bent-Over Row",
        muscle: "Back",
        equipment: &["Barbell"],
        pattern: MovementPattern::Pull,
        intimidation: Intimidation::High,
        confidence_safe: false,
        description: "Hinge forward with a flat back and row the bar to your lower ribs.",
        variants: &[
            ExerciseVariant {
                name: "Chest-Supported Machine Row",
                equipment: Some(&["Machine"]),
                intimidation: Some(Intimidation::Low),
                confidence_safe: Some(true),
                description: Some("Rest your chest on the pad and pull the handles towards you."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "One-Arm Dumbbell Row",
                equipment: Some(&["Dumbbells", "Bench"]),
                intimidation: Some(Intimidation::Moderate),
                confidence_safe: Some(true),
                description: Some("Support yourself on the bench and row the dumbbell to your hip."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Seated Cable Row",
                equipment: Some(&["Cables"]),
                intimidation: Some(Intimidation::Low),
                confidence_safe: Some(true),
                description: Some("Sit tall and pull the handle to your stomach, then let it return slowly."),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Curl",
        muscle: "Arms",
        equipment: &["Barbell"],
        pattern: MovementPattern::Isolation,
        intimidation: Intimidation::Moderate,
        confidence_safe: false,
        description: "Curl the bar up while keeping your elbows close to your sides.",
        variants: &[
            ExerciseVariant {
                name: "Band Curl",
                equipment: Some(&["Resistance Bands"]),
                intimidation: Some(Intimidation::Low),
                confidence_safe: Some(true),
                description: Some("Stand on the band and curl the handles towards your shoulders."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Cable Curl",
                equipment: Some(&["Cables"]),
                intimidation: Some(Intimidation::Low),
                confidence_safe: Some(true),
                description: Some("Curl the cable bar up from the low pulley without swinging."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Curl",
                equipment: Some(&["Dumbbells"]),
                intimidation: Some(Intimidation::Low),
                confidence_safe: Some(true),
                description: Some("Curl both dumbbells up with your palms facing forward."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Hammer Curl",
                equipment: Some(&["Dumbbells"]),
                intimidation: Some(Intimidation::Low),
                confidence_safe: Some(true),
                description: Some("Curl the dumbbells with your palms facing each other."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Towel Curl",
                equipment: Some(&["Bodyweight"]),
                intimidation: Some(Intimidation::Low),
                confidence_safe: Some(true),
                description: Some("Loop a towel under one foot and curl it up while the leg resists."),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Hip Thrust",
        muscle: "Glutes",
        equipment: &["Barbell", "Bench"],
        pattern: MovementPattern::Hinge,
        intimidation: Intimidation::High,
        confidence_safe: false,
        description: "Rest your upper back on the bench and drive the bar up with your hips.",
        variants: &[
            ExerciseVariant {
                name: "Glute Bridge",
                equipment: Some(&["Bodyweight"]),
                intimidation: Some(Intimidation::Low),
                confidence_safe: Some(true),
                description: Some("Lie on your back with bent knees and lift your hips off the floor."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Smith Machine Hip Thrust",
                equipment: Some(&["Smith Machine", "Bench"]),
                intimidation: Some(Intimidation::Moderate),
                description: Some("Thrust the guided bar up with your back supported on the bench."),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Overhead Press",
        muscle: "Shoulders",
        equipment: &["Barbell"],
        pattern: MovementPattern::Push,
        intimidation: Intimidation::High,
        confidence_safe: false,
        description: "Press the bar from your shoulders to overhead while bracing your core.",
        variants: &[
            ExerciseVariant {
                name: "Band Overhead Press",
                equipment: Some(&["Resistance Bands"]),
                intimidation: Some(Intimidation::Low),
                confidence_safe: Some(true),
                description: Some("Stand on the band and press the handles overhead."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Shoulder Press",
                equipment: Some(&["Machine"]),
                intimidation: Some(Intimidation::Low),
                confidence_safe: Some(true),
                description: Some("Sit with your back on the pad and press the handles overhead."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Seated Dumbbell Shoulder Press",
                equipment: Some(&["Dumbbells", "Bench"]),
                intimidation: Some(Intimidation::Moderate),
                confidence_safe: Some(true),
                description: Some("Sit upright on the bench and press the dumbbells overhead."),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Bear Crawl",
        muscle: "Core",
        equipment: &["Bodyweight"],
        pattern: MovementPattern::Core,
        intimidation: Intimidation::Moderate,
        confidence_safe: false,
        description: "Crawl forward on hands and feet with your knees hovering above the floor.",
        variants: &[],
    },
    BaseExercise {
        name: "Bird Dog",
        muscle: "Core",
        equipment: &["Bodyweight"],
        pattern: MovementPattern::Core,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: "From all fours, reach one arm and the opposite leg long, then switch sides.",
        variants: &[],
    },
    BaseExercise {
        name: "Burpee",
        muscle: "Cardio",
        equipment: &["Bodyweight"],
        pattern: MovementPattern::Conditioning,
        intimidation: Intimidation::High,
        confidence_safe: false,
        description: "Drop into a push-up position, jump your feet back in and stand up tall.",
        variants: &[],
    },
    BaseExercise {
        name: "Cable Crunch",
        muscle: "Core",
        equipment: &["Cables"],
        pattern: MovementPattern::Core,
        intimidation: Intimidation::Moderate,
        confidence_safe: false,
        description: "Kneel below the high pulley and crunch your ribs towards your hips.",
        variants: &[],
    },
    BaseExercise {
        name: "Cable Kickback",
        muscle: "Glutes",
        equipment: &["Cables"],
        pattern: MovementPattern::Isolation,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: "Attach the ankle strap and kick your leg straight back.",
        variants: &[],
    },
    BaseExercise {
        name: "Cable Lateral Raise",
        muscle: "Shoulders",
        equipment: &["Cables"],
        pattern: MovementPattern::Isolation,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: "Raise the handle out to the side until your arm is level with your shoulder.",
        variants: &[ExerciseVariant {
            name: "Dumbbell Lateral Raise",
            equipment: Some(&["Dumbbells"]),
            description: Some("Raise both dumbbells out to the sides up to shoulder height."),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Cable Triceps Pushdown",
        muscle: "Arms",
        equipment: &["Cables"],
        pattern: MovementPattern::Isolation,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: "Keep your elbows pinned and push the rope down until your arms are straight.",
        variants: &[ExerciseVariant {
            name: "Overhead Dumbbell Triceps Extension",
            equipment: Some(&["Dumbbells"]),
            intimidation: Some(Intimidation::Moderate),
            confidence_safe: Some(false),
            description: Some("Hold one dumbbell overhead and lower it behind your head."),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Conventional Deadlift",
        muscle: "Back",
        equipment: &["Barbell"],
        pattern: MovementPattern::Hinge,
        intimidation: Intimidation::High,
        confidence_safe: false,
        description: "Brace, push the floor away and stand up with the bar close to your legs.",
        variants: &[ExerciseVariant {
            name: "Dumbbell Romanian Deadlift",
            muscle: Some("Legs"),
            equipment: Some(&["Dumbbells"]),
            intimidation: Some(Intimidation::Moderate),
            confidence_safe: Some(true),
            description: Some("Push your hips back and lower the dumbbells along your legs."),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Dead Bug",
        muscle: "Core",
        equipment: &["Bodyweight"],
        pattern: MovementPattern::Core,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: "Lie on your back and slowly extend opposite arm and leg while your low back stays down.",
        variants: &[],
    },
    BaseExercise {
        name: "Dips",
        muscle: "Arms",
        equipment: &["Bodyweight"],
        pattern: MovementPattern::Push,
        intimidation: Intimidation::High,
        confidence_safe: false,
        description: "Lower yourself between the bars until your elbows are bent, then press up.",
        variants: &[ExerciseVariant {
            name: "Bench Dip",
            equipment: Some(&["Bench", "Bodyweight"]),
            intimidation: Some(Intimidation::Moderate),
            description: Some("Place your hands on the bench behind you and bend your elbows."),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Dumbbell Chest Fly",
        muscle: "Chest",
        equipment: &["Dumbbells", "Bench"],
        pattern: MovementPattern::Isolation,
        intimidation: Intimidation::Moderate,
        confidence_safe: false,
        description: "Open your arms wide with soft elbows and bring the dumbbells together over your chest.",
        variants: &[
            ExerciseVariant {
                name: "Cable Chest Fly",
                equipment: Some(&["Cables"]),
                description: Some("Bring the handles together in front of your chest in a wide arc."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Pec Deck",
                equipment: Some(&["Machine"]),
                intimidation: Some(Intimidation::Low),
                confidence_safe: Some(true),
                description: Some("Sit tall and bring the pads together in front of you."),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Elliptical Glide",
        muscle: "Cardio",
        equipment: &["Elliptical"],
        pattern: MovementPattern::Conditioning,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: "Glide at a pace where you can still hold a conversation.",
        variants: &[],
    },
    BaseExercise {
        name: "Face Pull",
        muscle: "Shoulders",
        equipment: &["Cables"],
        pattern: MovementPattern::Pull,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: "Pull the rope towards your face and spread the ends apart.",
        variants: &[ExerciseVariant {
            name: "Band Face Pull",
            equipment: Some(&["Resistance Bands"]),
            description: Some("Anchor the band at face height and pull the ends towards your ears."),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Hanging Leg Raise",
        muscle: "Core",
        equipment: &["Pull-Up Bar"],
        pattern: MovementPattern::Core,
        intimidation: Intimidation::High,
        confidence_safe: false,
        description: "Hang from the bar and raise your legs without swinging.",
        variants: &[],
    },
    BaseExercise {
        name: "Inverted Row",
        muscle: "Back",
        equipment: &["Smith Machine"],
        pattern: MovementPattern::Pull,
        intimidation: Intimidation::Moderate,
        confidence_safe: false,
        description: "Hang below a fixed bar and pull your chest up to it.",
        variants: &[],
    },
    BaseExercise {
        name: "Kettlebell Swing",
        muscle: "Glutes",
        equipment: &["Kettlebell"],
        pattern: MovementPattern::Hinge,
        intimidation: Intimidation::High,
        confidence_safe: false,
        description: "Hinge and snap your hips forward to float the kettlebell to chest height.",
        variants: &[],
    },
    BaseExercise {
        name: "Lat Pulldown",
        muscle: "Back",
        equipment: &["Cables", "Machine"],
        pattern: MovementPattern::Pull,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: "Pull the bar down to your upper chest while sitting tall.",
        variants: &[],
    },
    BaseExercise {
        name: "Leg Extension",
        muscle: "Legs",
        equipment: &["Machine"],
        pattern: MovementPattern::Isolation,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: "Straighten your knees against the pad, then lower slowly.",
        variants: &[ExerciseVariant {
            name: "Lying Leg Curl",
            description: Some("Lie face down and curl the pad towards your glutes."),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Leg Press",
        muscle: "Legs",
        equipment: &["Machine"],
        pattern: MovementPattern::Squat,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: "Press the platform away with your whole foot and stop before your knees lock.",
        variants: &[],
    },
    BaseExercise {
        name: "Marching in Place",
        muscle: "Cardio",
        equipment: &["Bodyweight"],
        pattern: MovementPattern::Conditioning,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: "March on the spot and swing your arms at an easy, steady rhythm.",
        variants: &[],
    },
    BaseExercise {
        name: "Mountain Climber",
        muscle: "Cardio",
        equipment: &["Bodyweight"],
        pattern: MovementPattern::Conditioning,
        intimidation: Intimidation::Moderate,
        confidence_safe: false,
        description: "From a high plank, drive your knees towards your chest one at a time.",
        variants: &[],
    },
    BaseExercise {
        name: "Pallof Press",
        muscle: "Core",
        equipment: &["Cables"],
        pattern: MovementPattern::Core,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: "Stand side-on to the cable and press the handle straight out without rotating.",
        variants: &[ExerciseVariant {
            name: "Band Pallof Press",
            equipment: Some(&["Resistance Bands"]),
            description: Some("Anchor the band at chest height and press it straight out."),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Pike Push-Up",
        muscle: "Shoulders",
        equipment: &["Bodyweight"],
        pattern: MovementPattern::Push,
        intimidation: Intimidation::High,
        confidence_safe: false,
        description: "With your hips high, lower your head towards the floor and press back up.",
        variants: &[],
    },
    BaseExercise {
        name: "Plank",
        muscle: "Core",
        equipment: &["Bodyweight"],
        pattern: MovementPattern::Core,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: "Hold a straight line from head to heels on your forearms.",
        variants: &[ExerciseVariant {
            name: "Side Plank",
            intimidation: Some(Intimidation::Moderate),
            confidence_safe: Some(false),
            description: Some("Balance on one forearm with your hips lifted in a straight line."),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Pull-Up",
        muscle: "Back",
        equipment: &["Pull-Up Bar"],
        pattern: MovementPattern::Pull,
        intimidation: Intimidation::High,
        confidence_safe: false,
        description: "Hang from the bar and pull your chin over it.",
        variants: &[ExerciseVariant {
            name: "Assisted Pull-Up",
            equipment: Some(&["Machine"]),
            intimidation: Some(Intimidation::Moderate),
            description: Some("Kneel on the assist pad and pull yourself up to the handles."),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Push-Up",
        muscle: "Chest",
        equipment: &["Bodyweight"],
        pattern: MovementPattern::Push,
        intimidation: Intimidation::Moderate,
        confidence_safe: false,
        description: "Lower your chest to the floor in a straight line and push back up.",
        variants: &[ExerciseVariant {
            name: "Incline Push-Up",
            equipment: Some(&["Bodyweight", "Bench"]),
            intimidation: Some(Intimidation::Low),
            confidence_safe: Some(true),
            description: Some("Place your hands on a bench or wall and do push-ups at an angle."),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        name: "Rowing Machine Intervals",
        muscle: "Cardio",
        equipment: &["Rowing Machine"],
        pattern: MovementPattern::Conditioning,
        intimidation: Intimidation::Moderate,
        confidence_safe: false,
        description: "Drive with your legs first, then lean back and pull the handle to your ribs.",
        variants: &[],
    },
    BaseExercise {
        name: "Stability Ball Crunch",
        muscle: "Core",
        equipment: &["Stability Ball"],
        pattern: MovementPattern::Core,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: "Rest your lower back on the ball and curl your ribs up.",
        variants: &[],
    },
    BaseExercise {
        name: "Standing Calf Raise",
        muscle: "Legs",
        equipment: &["Bodyweight"],
        pattern: MovementPattern::Isolation,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: "Rise onto the balls of your feet and lower your heels slowly.",
        variants: &[],
    },
    BaseExercise {
        name: "Stationary Bike Ride",
        muscle: "Cardio",
        equipment: &["Stationary Bike"],
        pattern: MovementPattern::Conditioning,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: "Ride at a steady pace with light resistance.",
        variants: &[],
    },
    BaseExercise {
        name: "Step-Up",
        muscle: "Legs",
        equipment: &["Bench", "Bodyweight"],
        pattern: MovementPattern::Squat,
        intimidation: Intimidation::Moderate,
        confidence_safe: true,
        description: "Step onto the bench with one foot and drive up until you stand tall.",
        variants: &[],
    },
    BaseExercise {
        name: "Superman Hold",
        muscle: "Back",
        equipment: &["Bodyweight"],
        pattern: MovementPattern::Core,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: "Lie face down and lift your arms and legs a few inches off the floor.",
        variants: &[],
    },
    BaseExercise {
        name: "Suspension Trainer Row",
        muscle: "Back",
        equipment: &["Suspension Trainer"],
        pattern: MovementPattern::Pull,
        intimidation: Intimidation::Moderate,
        confidence_safe: false,
        description: "Lean back holding the straps and row your chest up to your hands.",
        variants: &[],
    },
    BaseExercise {
        name: "Treadmill Incline Walk",
        muscle: "Cardio",
        equipment: &["Treadmill"],
        pattern: MovementPattern::Conditioning,
        intimidation: Intimidation::Low,
        confidence_safe: true,
        description: "Walk on a gentle incline without holding the handrails.",
        variants: &[],
    },
    BaseExercise {
        name: "Walking Lunge",
        muscle: "Legs",
        equipment: &["Dumbbells"],
        pattern: MovementPattern::Squat,
        intimidation: Intimidation::Moderate,
        confidence_safe: false,
        description: "Step forward into a lunge and bring the back foot through into the next step.",
        variants: &[
            ExerciseVariant {
                name: "Reverse Lunge",
                equipment: Some(&["Bodyweight"]),
                description: Some("Step backwards and lower your back knee towards the floor."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Supported Split Squat",
                equipment: Some(&["Bodyweight"]),
                intimidation: Some(Intimidation::Low),
                confidence_safe: Some(true),
                description: Some("Hold onto a wall or rack and lower straight down in a split stance."),
                ..ExerciseVariant::default()
            },
        ],
    },
];
