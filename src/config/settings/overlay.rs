//! Ping overlay settings

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Overlay opacity (0.0-1.0)
    #[serde(default = "default_opacity")]
    pub opacity: f32,

    /// Hide the overlay while not connected to a server
    #[serde(default)]
    pub hide_conditionally: bool,
}

fn default_enabled() -> bool {
    true
}

fn default_opacity() -> f32 {
    0.3
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            opacity: default_opacity(),
            hide_conditionally: false,
        }
    }
}
