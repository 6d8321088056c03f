use std::{
    collections::VecDeque,
    fs, io,
    path::{Path, PathBuf},
};

use gymxiety_app::{Settings, SettingsRepository, log};
use gymxiety_domain::{
    AdjustmentRepository, AdjustmentState, FeedbackRepository, FeedbackSession, PlanPayload,
    PlanRepository, ReadError, StorageError, WriteError,
};
use serde::{Serialize, de::DeserializeOwned};

const KEY_SETTINGS: &str = "settings";
const KEY_LOG: &str = "log";
const KEY_ADJUSTMENTS: &str = "adjustments";
const KEY_PLAN: &str = "plan";
const KEY_FEEDBACK: &str = "feedback";

/// Stores every value as a JSON document in a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match fs::read_to_string(self.path(key)) {
            Ok(content) => serde_json::from_str(&content).map(Some).map_err(|err| {
                ::log::debug!("failed to parse {key}: {err}");
                StorageError::Corrupt(key.to_string())
            }),
            Err(err) => match err.kind() {
                io::ErrorKind::NotFound => Ok(None),
                _ => Err(StorageError::Io(err)),
            },
        }
    }

    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let content =
            serde_json::to_string_pretty(value).map_err(|err| StorageError::Other(err.into()))?;
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), content)?;
        Ok(())
    }
}

impl SettingsRepository for FileStorage {
    fn read_settings(&self) -> Result<Settings, ReadError> {
        Ok(self.get(KEY_SETTINGS)?.unwrap_or_default())
    }

    fn write_settings(&self, settings: &Settings) -> Result<(), WriteError> {
        Ok(self.set(KEY_SETTINGS, settings)?)
    }
}

impl AdjustmentRepository for FileStorage {
    fn read_adjustments(&self) -> Result<AdjustmentState, ReadError> {
        Ok(self.get(KEY_ADJUSTMENTS)?.unwrap_or_default())
    }

    fn write_adjustments(&self, adjustments: &AdjustmentState) -> Result<(), WriteError> {
        Ok(self.set(KEY_ADJUSTMENTS, adjustments)?)
    }
}

impl PlanRepository for FileStorage {
    fn read_plan(&self) -> Result<Option<PlanPayload>, ReadError> {
        Ok(self.get(KEY_PLAN)?)
    }

    fn write_plan(&self, plan: &PlanPayload) -> Result<(), WriteError> {
        Ok(self.set(KEY_PLAN, plan)?)
    }
}

impl FeedbackRepository for FileStorage {
    fn read_feedback(&self) -> Result<FeedbackSession, ReadError> {
        Ok(self.get(KEY_FEEDBACK)?.unwrap_or_default())
    }

    fn write_feedback(&self, session: &FeedbackSession) -> Result<(), WriteError> {
        Ok(self.set(KEY_FEEDBACK, session)?)
    }
}

impl log::Repository for FileStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.get(KEY_LOG)
            .map(Option::unwrap_or_default)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries: VecDeque<log::Entry> = match self.get(KEY_LOG) {
            Ok(entries) => entries.unwrap_or_default(),
            Err(StorageError::Corrupt(_)) => VecDeque::new(),
            Err(err) => return Err(log::Error::Unknown(err.to_string())),
        };
        entries.push_front(entry);
        entries.truncate(log::MAX_ENTRIES);
        self.set(KEY_LOG, &entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
