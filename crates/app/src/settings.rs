use gymxiety_domain::{Experience, Goal, ReadError, WeightUnit, WriteError};
use log::LevelFilter;

use crate::log::LevelFilterDef;

pub trait SettingsService {
    fn get_settings(&self) -> Result<Settings, ReadError>;
    fn set_settings(&self, settings: &Settings) -> Result<(), WriteError>;
}

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, ReadError>;
    fn write_settings(&self, settings: &Settings) -> Result<(), WriteError>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub unit: WeightUnit,
    pub goal: Goal,
    pub experience: Experience,
    pub calm_mode: bool,
    #[serde(with = "LevelFilterDef")]
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            unit: WeightUnit::Lb,
            goal: Goal::GeneralFitness,
            experience: Experience::Beginner,
            calm_mode: false,
            log_level: LevelFilter::Warn,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_settings_partial() {
        assert_eq!(
            serde_json::from_str::<Settings>(r#"{"unit": "kg", "calm_mode": true}"#).unwrap(),
            Settings {
                unit: WeightUnit::Kg,
                calm_mode: true,
                ..Settings::default()
            }
        );
    }

    #[test]
    fn test_settings_serialize() {
        let settings = Settings {
            goal: Goal::Strength,
            experience: Experience::Intermediate,
            log_level: LevelFilter::Debug,
            ..Settings::default()
        };

        let json = serde_json::to_string(&settings).unwrap();

        assert!(json.contains(r#""log_level":"Debug""#), "{json}");
        assert_eq!(serde_json::from_str::<Settings>(&json).unwrap(), settings);
    }
}
