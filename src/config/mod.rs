//! Client settings: the persisted configuration, typed access to single
//! settings, and the store that saves them.

mod descriptor;
mod io;
mod key;
mod settings;
mod store;

pub use descriptor::{SettingDescriptor, descriptor_for, descriptors};
pub use key::{SettingError, SettingKey, SettingSlot, SettingType, SettingValue, StorageKind};
pub use settings::{
    CommunicationSettings, GlobedSettings, OverlaySettings, PlayerSettings, ServerSettings,
};
pub use store::{FileSettingsStore, MemorySettingsStore, SettingsStore, SharedStore, shared};

use serde::{Deserialize, Serialize};

/// Main configuration structure, stored as `settings.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub globed: GlobedSettings,

    #[serde(default)]
    pub overlay: OverlaySettings,

    #[serde(default)]
    pub communication: CommunicationSettings,

    #[serde(default)]
    pub players: PlayerSettings,

    /// Server switcher state (not editable from the settings list)
    #[serde(default)]
    pub servers: ServerSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: Config = toml::from_str("[overlay]\nopacity = 0.5\n").unwrap();
        assert_eq!(config.overlay.opacity, 0.5);
        assert!(config.overlay.enabled);
        assert_eq!(config.communication, CommunicationSettings::default());
        assert_eq!(config.servers.standalone_address, None);
    }

    #[test]
    fn test_round_trips_through_toml() {
        let mut config = Config::default();
        config.communication.audio_device = "USB Microphone".to_string();
        config.servers.standalone_address = Some("127.0.0.1:41001".to_string());

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
