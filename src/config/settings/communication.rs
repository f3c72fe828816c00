//! Voice chat settings

use serde::{Deserialize, Serialize};

/// Voice chat settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunicationSettings {
    /// Enable voice chat
    #[serde(default = "default_true")]
    pub voice_enabled: bool,

    /// Only hear players that are close to you in the level
    #[serde(default = "default_true")]
    pub voice_proximity: bool,

    /// Use the pre-platformer proximity falloff
    #[serde(default)]
    pub classic_proximity: bool,

    /// Playback volume multiplier (0.0-2.0)
    #[serde(default = "default_voice_volume")]
    pub voice_volume: f32,

    /// Only play voice from friends
    #[serde(default)]
    pub only_friends: bool,

    /// Smaller audio buffers, at the cost of more CPU usage
    #[serde(default)]
    pub lower_audio_latency: bool,

    /// Show a notification when deafening or undeafening
    #[serde(default)]
    pub deafen_notification: bool,

    /// Name of the microphone used for voice chat
    #[serde(default = "default_audio_device")]
    pub audio_device: String,
}

fn default_true() -> bool {
    true
}

fn default_voice_volume() -> f32 {
    1.0
}

fn default_audio_device() -> String {
    "default".to_string()
}

impl Default for CommunicationSettings {
    fn default() -> Self {
        Self {
            voice_enabled: true,
            voice_proximity: true,
            classic_proximity: false,
            voice_volume: default_voice_volume(),
            only_friends: false,
            lower_audio_latency: false,
            deafen_notification: false,
            audio_device: default_audio_device(),
        }
    }
}
