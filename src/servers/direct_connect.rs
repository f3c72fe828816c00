//! Direct connection to a user-supplied server address

use tracing::{debug, info, warn};

use super::address::{AddressError, ServerAddress, validate_address};
use super::network::ConnectionManager;
use super::registry::{CentralServerState, GameServerRegistry, STANDALONE_ID};
use crate::config::SettingsStore;

/// Placeholder shown in the empty address field
pub const ADDRESS_PLACEHOLDER: &str = "127.0.0.1:41001";

/// Server registry, central server state and connection manager used by the
/// server switcher
pub struct ServerSwitcher<N: ConnectionManager> {
    pub central: CentralServerState,
    pub registry: GameServerRegistry,
    pub network: N,
}

impl<N: ConnectionManager> ServerSwitcher<N> {
    pub fn new(registry: GameServerRegistry, network: N) -> Self {
        Self {
            central: CentralServerState::default(),
            registry,
            network,
        }
    }

    /// Switch to the server at `address` and start connecting.
    ///
    /// The address is validated first; when it is rejected nothing is
    /// changed and the caller shows [`AddressError::user_message`].
    pub fn connect_direct(
        &mut self,
        address: &str,
        store: &mut dyn SettingsStore,
    ) -> Result<ServerAddress, AddressError> {
        debug!("addr: {}", address);
        let parsed = validate_address(address)?;

        self.central.set_standalone();
        self.central.recently_switched = true;

        self.registry.clear();
        self.registry
            .add_server(STANDALONE_ID, "Server", address, "unknown");
        if let Err(e) = self.registry.save_standalone(address, store) {
            warn!("Failed to save standalone address {}: {:#}", address, e);
        }
        self.registry.pending_changes = true;

        if let Some(server) = self.registry.get(STANDALONE_ID) {
            self.network.connect_standalone(server);
        }
        info!("Switched to standalone server {}", address);

        Ok(parsed)
    }
}
