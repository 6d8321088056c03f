use std::collections::VecDeque;

use gymxiety_domain::{ReadError, WriteError};
use log::error;

use crate::{Settings, SettingsRepository, SettingsService, log as app_log};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: app_log::Repository> app_log::Service for Service<R> {
    fn get_log_entries(&self) -> Result<VecDeque<app_log::Entry>, app_log::Error> {
        self.repository.read_entries()
    }

    fn add_log_entry(&self, entry: app_log::Entry) -> Result<(), app_log::Error> {
        self.repository.write_entry(entry)
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    fn get_settings(&self) -> Result<Settings, ReadError> {
        self.repository
            .read_settings()
            .inspect_err(|err| error!("failed to get settings: {err}"))
    }

    fn set_settings(&self, settings: &Settings) -> Result<(), WriteError> {
        self.repository
            .write_settings(settings)
            .inspect_err(|err| error!("failed to store settings: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use gymxiety_domain::{Goal, StorageError};
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct Repository {
        settings: RefCell<Option<Settings>>,
    }

    impl SettingsRepository for Repository {
        fn read_settings(&self) -> Result<Settings, ReadError> {
            Ok(self.settings.borrow().unwrap_or_default())
        }

        fn write_settings(&self, settings: &Settings) -> Result<(), WriteError> {
            *self.settings.borrow_mut() = Some(*settings);
            Ok(())
        }
    }

    struct FailingRepository;

    impl SettingsRepository for FailingRepository {
        fn read_settings(&self) -> Result<Settings, ReadError> {
            Err(ReadError::Storage(StorageError::Corrupt("settings".to_string())))
        }

        fn write_settings(&self, _: &Settings) -> Result<(), WriteError> {
            Err(WriteError::Other("broken".into()))
        }
    }

    #[test]
    fn test_settings() {
        let service = Service::new(Repository::default());
        assert_eq!(service.get_settings().unwrap(), Settings::default());

        let settings = Settings {
            goal: Goal::Dieting,
            calm_mode: true,
            ..Settings::default()
        };
        service.set_settings(&settings).unwrap();

        assert_eq!(service.get_settings().unwrap(), settings);
    }

    #[test]
    fn test_settings_failing_repository() {
        let service = Service::new(FailingRepository);

        assert!(service.get_settings().is_err());
        assert!(service.set_settings(&Settings::default()).is_err());
    }
}
