//! Typed access to individual settings.
//!
//! A [`SettingKey`] names one field of [`Config`]. Resolving it yields a
//! [`SettingSlot`], a mutable reference tagged with the field's primitive
//! kind, so a value can only ever be written into a field of the same kind.

use std::fmt;
use std::str::FromStr;

use super::Config;

/// Editing affordance selected for a setting row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingType {
    Bool,
    Float,
    Int,
    String,
    /// A string picked from the list of capture devices
    AudioDevice,
}

impl SettingType {
    /// Primitive kind of the value behind this type tag
    pub fn storage(self) -> StorageKind {
        match self {
            SettingType::Bool => StorageKind::Bool,
            SettingType::Float => StorageKind::Float,
            SettingType::Int => StorageKind::Int,
            SettingType::String | SettingType::AudioDevice => StorageKind::Text,
        }
    }
}

impl fmt::Display for SettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingType::Bool => write!(f, "bool"),
            SettingType::Float => write!(f, "float"),
            SettingType::Int => write!(f, "int"),
            SettingType::String => write!(f, "string"),
            SettingType::AudioDevice => write!(f, "audio device"),
        }
    }
}

/// Primitive kind of a stored setting value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    Bool,
    Float,
    Int,
    Text,
}

/// A type-erased setting value
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Float(f32),
    Int(i32),
    Text(String),
}

impl SettingValue {
    pub fn kind(&self) -> StorageKind {
        match self {
            SettingValue::Bool(_) => StorageKind::Bool,
            SettingValue::Float(_) => StorageKind::Float,
            SettingValue::Int(_) => StorageKind::Int,
            SettingValue::Text(_) => StorageKind::Text,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(v) => write!(f, "{}", v),
            SettingValue::Float(v) => write!(f, "{}", v),
            SettingValue::Int(v) => write!(f, "{}", v),
            SettingValue::Text(v) => write!(f, "{:?}", v),
        }
    }
}

/// Mutable reference to one setting field, tagged with its kind
#[derive(Debug)]
pub enum SettingSlot<'a> {
    Bool(&'a mut bool),
    Float(&'a mut f32),
    Int(&'a mut i32),
    Text(&'a mut String),
}

impl SettingSlot<'_> {
    pub fn kind(&self) -> StorageKind {
        match self {
            SettingSlot::Bool(_) => StorageKind::Bool,
            SettingSlot::Float(_) => StorageKind::Float,
            SettingSlot::Int(_) => StorageKind::Int,
            SettingSlot::Text(_) => StorageKind::Text,
        }
    }

    /// Write `value` into the slot.
    ///
    /// Nothing is written when the kinds differ; the value is handed back.
    pub fn assign(self, value: SettingValue) -> Result<(), SettingValue> {
        match (self, value) {
            (SettingSlot::Bool(slot), SettingValue::Bool(v)) => *slot = v,
            (SettingSlot::Float(slot), SettingValue::Float(v)) => *slot = v,
            (SettingSlot::Int(slot), SettingValue::Int(v)) => *slot = v,
            (SettingSlot::Text(slot), SettingValue::Text(v)) => *slot = v,
            (_, value) => return Err(value),
        }
        Ok(())
    }
}

/// Errors from addressing or assigning settings by name
#[derive(Debug, thiserror::Error)]
pub enum SettingError {
    #[error("Unknown setting: {0}")]
    UnknownKey(String),

    #[error("Setting {key} stores {expected:?} values, got {found:?}")]
    KindMismatch {
        key: SettingKey,
        expected: StorageKind,
        found: StorageKind,
    },

    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: SettingKey,
        value: String,
        reason: String,
    },
}

macro_rules! setting_keys {
    ($($variant:ident => $section:ident . $field:ident : $kind:ident),* $(,)?) => {
        /// Names a single setting field in [`Config`]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum SettingKey {
            $($variant),*
        }

        impl SettingKey {
            pub const ALL: &'static [SettingKey] = &[$(SettingKey::$variant),*];

            /// Dotted path of the field in `settings.toml`
            pub fn path(self) -> &'static str {
                match self {
                    $(SettingKey::$variant => concat!(stringify!($section), ".", stringify!($field))),*
                }
            }

            pub fn storage(self) -> StorageKind {
                match self {
                    $(SettingKey::$variant => StorageKind::$kind),*
                }
            }

            /// Resolve the key to a typed reference into `config`
            pub fn slot(self, config: &mut Config) -> SettingSlot<'_> {
                match self {
                    $(SettingKey::$variant => SettingSlot::$kind(&mut config.$section.$field)),*
                }
            }

            pub fn read(self, config: &Config) -> SettingValue {
                match self {
                    $(SettingKey::$variant => SettingValue::$kind(config.$section.$field.clone())),*
                }
            }
        }
    };
}

setting_keys! {
    TpsCap => globed.tps_cap: Int,
    Autoconnect => globed.autoconnect: Bool,
    PreloadAssets => globed.preload_assets: Bool,
    FragmentationLimit => globed.fragmentation_limit: Int,
    CentralServerUrl => globed.central_server_url: Text,
    OverlayEnabled => overlay.enabled: Bool,
    OverlayOpacity => overlay.opacity: Float,
    OverlayHideConditionally => overlay.hide_conditionally: Bool,
    VoiceEnabled => communication.voice_enabled: Bool,
    VoiceProximity => communication.voice_proximity: Bool,
    ClassicProximity => communication.classic_proximity: Bool,
    VoiceVolume => communication.voice_volume: Float,
    OnlyFriends => communication.only_friends: Bool,
    LowerAudioLatency => communication.lower_audio_latency: Bool,
    DeafenNotification => communication.deafen_notification: Bool,
    AudioDevice => communication.audio_device: Text,
    PlayerOpacity => players.player_opacity: Float,
    ShowNames => players.show_names: Bool,
    NameOpacity => players.name_opacity: Float,
    StatusIcons => players.status_icons: Bool,
}

impl SettingKey {
    /// Section name (the part of the path before the dot)
    pub fn section(self) -> &'static str {
        let path = self.path();
        path.split_once('.').map(|(section, _)| section).unwrap_or(path)
    }

    /// Parse user-supplied text into a value of this setting's kind
    pub fn parse_value(self, text: &str) -> Result<SettingValue, SettingError> {
        let invalid = |reason: &str| SettingError::InvalidValue {
            key: self,
            value: text.to_string(),
            reason: reason.to_string(),
        };

        match self.storage() {
            StorageKind::Bool => match text.trim() {
                "true" | "on" | "1" => Ok(SettingValue::Bool(true)),
                "false" | "off" | "0" => Ok(SettingValue::Bool(false)),
                _ => Err(invalid("expected true or false")),
            },
            StorageKind::Float => text
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .map(SettingValue::Float)
                .ok_or_else(|| invalid("expected a number")),
            StorageKind::Int => text
                .trim()
                .parse::<i32>()
                .map(SettingValue::Int)
                .map_err(|_| invalid("expected an integer")),
            StorageKind::Text => Ok(SettingValue::Text(text.to_string())),
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for SettingKey {
    type Err = SettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .iter()
            .copied()
            .find(|key| key.path() == s)
            .ok_or_else(|| SettingError::UnknownKey(s.to_string()))
    }
}
