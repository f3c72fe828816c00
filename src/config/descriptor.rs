//! Static table describing every row of the settings list

use crate::cell::Limits;

use super::key::{SettingKey, SettingType};

/// Everything needed to build one setting row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingDescriptor {
    pub key: SettingKey,
    pub setting_type: SettingType,
    pub name: &'static str,
    pub description: &'static str,
    pub limits: Limits,
}

const UNIT: Limits = Limits {
    float_min: 0.0,
    float_max: 1.0,
};

const fn row(
    key: SettingKey,
    setting_type: SettingType,
    name: &'static str,
    description: &'static str,
) -> SettingDescriptor {
    SettingDescriptor {
        key,
        setting_type,
        name,
        description,
        limits: UNIT,
    }
}

static DESCRIPTORS: &[SettingDescriptor] = &[
    row(
        SettingKey::TpsCap,
        SettingType::Int,
        "TPS cap",
        "Maximum amount of packets per second sent to the server. 0 means the server decides.",
    ),
    row(
        SettingKey::Autoconnect,
        SettingType::Bool,
        "Autoconnect",
        "Connect to the last used server when the game starts.",
    ),
    row(
        SettingKey::PreloadAssets,
        SettingType::Bool,
        "Preload assets",
        "Load all player icons on startup. Uses more memory but avoids stutters in levels.",
    ),
    row(
        SettingKey::FragmentationLimit,
        SettingType::Int,
        "Packet limit",
        "Maximum size of a single packet fragment in bytes. Lower it if you get disconnected in big levels. 0 uses the default.",
    ),
    row(
        SettingKey::CentralServerUrl,
        SettingType::String,
        "Central server",
        "URL of the central server used to fetch the server list.",
    ),
    row(SettingKey::OverlayEnabled, SettingType::Bool, "Ping overlay", ""),
    row(
        SettingKey::OverlayOpacity,
        SettingType::Float,
        "Overlay opacity",
        "",
    ),
    row(
        SettingKey::OverlayHideConditionally,
        SettingType::Bool,
        "Hide when offline",
        "Hide the ping overlay while not connected to a server.",
    ),
    row(SettingKey::VoiceEnabled, SettingType::Bool, "Voice chat", ""),
    row(
        SettingKey::VoiceProximity,
        SettingType::Bool,
        "Voice proximity",
        "Only hear players that are near you in the level.",
    ),
    row(
        SettingKey::ClassicProximity,
        SettingType::Bool,
        "Classic proximity",
        "Use the old proximity falloff that only considers horizontal distance.",
    ),
    SettingDescriptor {
        limits: Limits {
            float_min: 0.0,
            float_max: 2.0,
        },
        ..row(SettingKey::VoiceVolume, SettingType::Float, "Voice volume", "")
    },
    row(
        SettingKey::OnlyFriends,
        SettingType::Bool,
        "Only friends",
        "Only play voice chat from players on your friend list.",
    ),
    row(
        SettingKey::LowerAudioLatency,
        SettingType::Bool,
        "Lower audio latency",
        "Use smaller audio buffers. Reduces delay at the cost of CPU usage and possible crackling.",
    ),
    row(
        SettingKey::DeafenNotification,
        SettingType::Bool,
        "Deafen notification",
        "Show a notification when you deafen or undeafen.",
    ),
    row(
        SettingKey::AudioDevice,
        SettingType::AudioDevice,
        "Audio device",
        "Microphone used for voice chat. Requires microphone permission.",
    ),
    row(
        SettingKey::PlayerOpacity,
        SettingType::Float,
        "Player opacity",
        "",
    ),
    row(SettingKey::ShowNames, SettingType::Bool, "Player names", ""),
    row(SettingKey::NameOpacity, SettingType::Float, "Name opacity", ""),
    row(
        SettingKey::StatusIcons,
        SettingType::Bool,
        "Status icons",
        "Show icons above players that are paused, practicing or speaking.",
    ),
];

/// All setting rows, in display order
pub fn descriptors() -> &'static [SettingDescriptor] {
    DESCRIPTORS
}

pub fn descriptor_for(key: SettingKey) -> Option<&'static SettingDescriptor> {
    DESCRIPTORS.iter().find(|d| d.key == key)
}
