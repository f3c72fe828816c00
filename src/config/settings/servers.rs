//! Persisted server switcher state

use serde::{Deserialize, Serialize};

/// Persisted server switcher state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Address of the last direct-connect server, if one was used
    #[serde(default)]
    pub standalone_address: Option<String>,
}
