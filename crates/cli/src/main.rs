//! gymxiety - beginner friendly workout plans from the command line

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gymxiety_app::{Settings, SettingsService, log as app_log, log::Service as _};
use gymxiety_domain::{
    Catalog, Experience, Feedback, Goal, OneRepMax, OneRepMaxError, OneRepMaxes, PlanRequest,
    RowID, Service, WeightUnit,
};
use gymxiety_storage::FileStorage;
use log::{LevelFilter, info};

#[derive(Parser)]
#[command(name = "gymxiety")]
#[command(author, version, about = "Confidence-first workout plans for gym beginners")]
struct Cli {
    /// Directory holding settings, plans and adjustments
    #[arg(long, env = "GYMXIETY_DATA_DIR", default_value = ".gymxiety", global = true)]
    data_dir: PathBuf,

    /// Exercise catalog in JSON format (default: built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new plan and store it
    Generate(GenerateArgs),

    /// Rate a row of the current plan
    Feedback {
        /// Row number as shown in the plan
        row: u32,

        /// One of too-easy, perfect, too-hard
        feedback: Feedback,
    },

    /// Swap a row of the current plan for its confidence alternative
    Swap {
        /// Row number as shown in the plan
        row: u32,
    },

    /// Show the accumulated adjustments
    Adjustments {
        /// Forget all adjustments
        #[arg(long)]
        reset: bool,
    },

    /// List the exercises of the catalog
    Catalog {
        /// Only show exercises for this muscle group
        #[arg(short, long)]
        muscle: Option<String>,
    },

    /// Show or change the settings
    Settings {
        /// Weight unit (lb or kg)
        #[arg(long)]
        unit: Option<WeightUnit>,

        /// Default goal
        #[arg(long)]
        goal: Option<String>,

        /// Default experience level
        #[arg(long)]
        experience: Option<Experience>,

        /// Use calm mode by default
        #[arg(long)]
        calm: Option<bool>,

        /// Log level (off, error, warn, info, debug, trace)
        #[arg(long)]
        log_level: Option<LevelFilter>,
    },

    /// Show recent log messages
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// Read the whole request from a JSON file, other options are ignored
    #[arg(long)]
    request: Option<PathBuf>,

    /// Available equipment (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    equipment: Vec<String>,

    /// Target muscle groups (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    muscles: Vec<String>,

    /// Training goal, e.g. "strength" or "lose fat"
    #[arg(short, long)]
    goal: Option<String>,

    /// Experience level (beginner, intermediate, advanced)
    #[arg(long)]
    experience: Option<Experience>,

    /// Generate a calm mode plan
    #[arg(long)]
    calm: bool,

    /// Bench press one-rep max
    #[arg(long, value_parser = parse_max)]
    bench: Option<OneRepMax>,

    /// Squat one-rep max
    #[arg(long, value_parser = parse_max)]
    squat: Option<OneRepMax>,

    /// Deadlift one-rep max
    #[arg(long, value_parser = parse_max)]
    deadlift: Option<OneRepMax>,

    /// Prescribe without one-rep maxes
    #[arg(long)]
    no_max: bool,

    /// Available session time in minutes
    #[arg(long)]
    minutes: Option<u32>,

    /// Weight unit (lb or kg)
    #[arg(long)]
    unit: Option<WeightUnit>,
}

impl GenerateArgs {
    fn request(self, settings: &Settings) -> Result<PlanRequest> {
        if let Some(path) = self.request {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            return Ok(PlanRequest::from_json(&json)?);
        }

        Ok(PlanRequest {
            equipment: self.equipment,
            muscles: self.muscles,
            goal: self
                .goal
                .unwrap_or_else(|| settings.goal.label().to_string()),
            experience: self.experience.unwrap_or(settings.experience),
            calm: self.calm || settings.calm_mode,
            maxes: OneRepMaxes {
                bench: self.bench,
                squat: self.squat,
                deadlift: self.deadlift,
            },
            no_max: self.no_max,
            minutes: self.minutes,
            unit: self.unit.unwrap_or(settings.unit),
        })
    }
}

fn parse_max(value: &str) -> Result<OneRepMax, OneRepMaxError> {
    OneRepMax::try_from(value)
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let catalog = Catalog::from_json(&json)
                .with_context(|| format!("invalid catalog {}", path.display()))?;
            info!("loaded {} exercises from {}", catalog.len(), path.display());
            Ok(catalog)
        }
        None => Ok(Catalog::builtin().clone()),
    }
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let storage = FileStorage::new(&cli.data_dir);
    let app = gymxiety_app::Service::new(storage.clone());
    let settings = app.get_settings()?;

    if app_log::init(Arc::new(Mutex::new(storage.clone())), settings.log_level).is_err() {
        eprintln!("failed to initialize logger");
    }

    let catalog = load_catalog(cli.catalog.as_deref())?;
    let service = Service::new(storage, &catalog);

    match cli.command {
        Commands::Generate(args) => {
            let request = args.request(&settings)?;
            let plan = service.generate_plan(&request)?;
            print_json(&plan)?;
        }

        Commands::Feedback { row, feedback } => {
            let adjustments = service.record_feedback(RowID::from(row), feedback)?;
            print_json(&adjustments)?;
        }

        Commands::Swap { row } => match service.apply_alternative(RowID::from(row))? {
            Some(row) => print_json(&row)?,
            None => println!("Row {row} has no confidence alternative"),
        },

        Commands::Adjustments { reset } => {
            if reset {
                service.reset_adjustments()?;
            }
            print_json(&service.get_adjustments()?)?;
        }

        Commands::Catalog { muscle } => {
            for exercise in catalog.exercises().iter().filter(|e| {
                muscle
                    .as_ref()
                    .is_none_or(|m| e.muscle.eq_ignore_ascii_case(m))
            }) {
                println!(
                    "{:32} | {:10} | {:8} | {}",
                    exercise.name,
                    exercise.muscle,
                    exercise.intimidation.name(),
                    exercise.equipment_label()
                );
            }
        }

        Commands::Settings {
            unit,
            goal,
            experience,
            calm,
            log_level,
        } => {
            let updated = Settings {
                unit: unit.unwrap_or(settings.unit),
                goal: goal.as_deref().map_or(settings.goal, Goal::infer),
                experience: experience.unwrap_or(settings.experience),
                calm_mode: calm.unwrap_or(settings.calm_mode),
                log_level: log_level.unwrap_or(settings.log_level),
            };
            if updated != settings {
                app.set_settings(&updated)?;
            }
            print_json(&updated)?;
        }

        Commands::Log { limit } => {
            for entry in app.get_log_entries()?.iter().take(limit) {
                println!("{} {:<5} {}", entry.time, entry.level, entry.message);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn generate_args(args: &[&str]) -> GenerateArgs {
        let cli = Cli::try_parse_from([&["gymxiety", "generate"][..], args].concat()).unwrap();
        match cli.command {
            Commands::Generate(args) => args,
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn test_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_request() {
        let request = generate_args(&[
            "--equipment",
            "Dumbbells,Cables",
            "-m",
            "Chest",
            "-m",
            "Back",
            "--goal",
            "build muscle",
            "--experience",
            "intermediate",
            "--bench",
            "80",
            "--minutes",
            "25",
            "--unit",
            "kg",
        ])
        .request(&Settings::default())
        .unwrap();

        assert_eq!(
            request,
            PlanRequest {
                equipment: vec!["Dumbbells".to_string(), "Cables".to_string()],
                muscles: vec!["Chest".to_string(), "Back".to_string()],
                goal: "build muscle".to_string(),
                experience: Experience::Intermediate,
                calm: false,
                maxes: OneRepMaxes {
                    bench: OneRepMax::new(80.0).ok(),
                    ..OneRepMaxes::default()
                },
                no_max: false,
                minutes: Some(25),
                unit: WeightUnit::Kg,
            }
        );
    }

    #[test]
    fn test_generate_request_settings_defaults() {
        let settings = Settings {
            unit: WeightUnit::Kg,
            goal: Goal::Dieting,
            experience: Experience::Advanced,
            calm_mode: true,
            ..Settings::default()
        };

        let request = generate_args(&[]).request(&settings).unwrap();

        assert_eq!(request.goal, "Dieting");
        assert_eq!(request.experience, Experience::Advanced);
        assert!(request.calm);
        assert_eq!(request.unit, WeightUnit::Kg);
    }

    #[rstest]
    #[case(&["--bench", "0"])]
    #[case(&["--squat", "heavy"])]
    #[case(&["--experience", "expert"])]
    #[case(&["--unit", "stone"])]
    fn test_generate_invalid_arguments(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from([&["gymxiety", "generate"][..], args].concat()).is_err());
    }

    #[rstest]
    #[case("too-easy", Feedback::TooEasy)]
    #[case("perfect", Feedback::Perfect)]
    #[case("too-hard", Feedback::TooHard)]
    fn test_feedback_arguments(#[case] value: &str, #[case] expected: Feedback) {
        let cli = Cli::try_parse_from(["gymxiety", "feedback", "2", value]).unwrap();

        assert!(matches!(
            cli.command,
            Commands::Feedback { row: 2, feedback } if feedback == expected
        ));
    }

    #[test]
    fn test_load_builtin_catalog() {
        assert_eq!(load_catalog(None).unwrap().len(), Catalog::builtin().len());
    }
}
