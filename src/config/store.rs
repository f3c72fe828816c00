//! The settings store every edit is persisted through

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Result;

use super::Config;
use super::key::{SettingError, SettingKey, SettingValue};

/// Owner of the in-memory settings and their persistence
pub trait SettingsStore {
    fn config(&self) -> &Config;

    fn config_mut(&mut self) -> &mut Config;

    /// Persist all current in-memory values
    fn save(&mut self) -> Result<()>;

    /// Current value of a single setting
    fn value(&self, key: SettingKey) -> SettingValue {
        key.read(self.config())
    }

    /// Write a single setting without saving.
    ///
    /// Fails without writing if `value` is not of the setting's kind.
    fn assign(&mut self, key: SettingKey, value: SettingValue) -> Result<(), SettingError> {
        key.slot(self.config_mut())
            .assign(value)
            .map_err(|rejected| SettingError::KindMismatch {
                key,
                expected: key.storage(),
                found: rejected.kind(),
            })
    }
}

/// Store handle shared by every cell of a settings list (UI thread only)
pub type SharedStore<S> = Rc<RefCell<S>>;

pub fn shared<S: SettingsStore>(store: S) -> SharedStore<S> {
    Rc::new(RefCell::new(store))
}

/// Settings store backed by a TOML file
#[derive(Debug)]
pub struct FileSettingsStore {
    config: Config,
    path: PathBuf,
}

impl FileSettingsStore {
    /// Open the store at `path`, starting from defaults if the file is missing
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let config = Config::load_or_default(&path)?;
        Ok(Self { config, path })
    }

    /// Open the store at the global settings path
    pub fn open_global() -> Result<Self> {
        Self::open(Config::global_config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn config(&self) -> &Config {
        &self.config
    }

    fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    fn save(&mut self) -> Result<()> {
        self.config.save_to_file(&self.path)?;
        tracing::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store that counts saves instead of writing anywhere
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    pub config: Config,
    pub saves: usize,
}

impl MemorySettingsStore {
    pub fn new(config: Config) -> Self {
        Self { config, saves: 0 }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn config(&self) -> &Config {
        &self.config
    }

    fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    fn save(&mut self) -> Result<()> {
        self.saves += 1;
        Ok(())
    }
}
