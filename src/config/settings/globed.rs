//! General client settings

use serde::{Deserialize, Serialize};

/// General client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobedSettings {
    /// Packets per second sent to the game server (0 = server decides)
    #[serde(default)]
    pub tps_cap: i32,

    /// Connect to the last used server when the game starts
    #[serde(default)]
    pub autoconnect: bool,

    /// Load player icons on startup instead of on first use
    #[serde(default = "default_preload_assets")]
    pub preload_assets: bool,

    /// Maximum size of a single outgoing packet fragment (0 = default)
    #[serde(default)]
    pub fragmentation_limit: i32,

    /// Base URL of the central server
    #[serde(default = "default_central_server_url")]
    pub central_server_url: String,
}

fn default_preload_assets() -> bool {
    true
}

fn default_central_server_url() -> String {
    "https://api.globed.dev".to_string()
}

impl Default for GlobedSettings {
    fn default() -> Self {
        Self {
            tps_cap: 0,
            autoconnect: false,
            preload_assets: default_preload_assets(),
            fragmentation_limit: 0,
            central_server_url: default_central_server_url(),
        }
    }
}
