//! Settings for how other players are drawn

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    /// Opacity of other players (0.0-1.0)
    #[serde(default = "default_opacity")]
    pub player_opacity: f32,

    #[serde(default = "default_true")]
    pub show_names: bool,

    /// Opacity of name labels (0.0-1.0)
    #[serde(default = "default_opacity")]
    pub name_opacity: f32,

    /// Show icons for players that are paused, practicing or speaking
    #[serde(default = "default_true")]
    pub status_icons: bool,
}

fn default_opacity() -> f32 {
    1.0
}

fn default_true() -> bool {
    true
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            player_opacity: default_opacity(),
            show_names: true,
            name_opacity: default_opacity(),
            status_icons: true,
        }
    }
}
