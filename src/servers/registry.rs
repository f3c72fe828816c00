//! Game server list and central server state

use anyhow::Result;

use crate::config::{Config, SettingsStore};

/// Registry ID of the direct-connect server
pub const STANDALONE_ID: &str = "standalone";

/// A game server players can connect to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameServer {
    pub id: String,
    pub name: String,
    pub address: String,
    pub region: String,
}

/// Known game servers
#[derive(Debug, Clone, Default)]
pub struct GameServerRegistry {
    servers: Vec<GameServer>,
    /// Set when the list changed and the server switcher should reload
    pub pending_changes: bool,
}

impl GameServerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the saved direct-connect server, if any
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::new();
        if let Some(address) = &config.servers.standalone_address {
            registry.add_server(STANDALONE_ID, "Server", address, "unknown");
        }
        registry
    }

    pub fn clear(&mut self) {
        self.servers.clear();
    }

    /// Add a server, replacing any existing server with the same ID
    pub fn add_server(&mut self, id: &str, name: &str, address: &str, region: &str) {
        let server = GameServer {
            id: id.to_string(),
            name: name.to_string(),
            address: address.to_string(),
            region: region.to_string(),
        };

        match self.servers.iter_mut().find(|s| s.id == id) {
            Some(existing) => *existing = server,
            None => self.servers.push(server),
        }
    }

    pub fn get(&self, id: &str) -> Option<&GameServer> {
        self.servers.iter().find(|s| s.id == id)
    }

    pub fn servers(&self) -> &[GameServer] {
        &self.servers
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// Persist the direct-connect address so it survives restarts
    pub fn save_standalone(&mut self, address: &str, store: &mut dyn SettingsStore) -> Result<()> {
        store.config_mut().servers.standalone_address = Some(address.to_string());
        store.save()
    }
}

/// Which central server the client uses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CentralServerState {
    /// Using a direct-connect server instead of a central server list
    pub standalone: bool,
    /// The server was switched since the switcher was last opened
    pub recently_switched: bool,
}

impl CentralServerState {
    pub fn set_standalone(&mut self) {
        self.standalone = true;
    }
}
