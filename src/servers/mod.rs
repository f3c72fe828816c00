//! Server switching: address validation, the game server registry and the
//! connection manager

mod address;
mod direct_connect;
mod network;
mod registry;

pub use address::{
    AddressError, DEFAULT_PORT, HostKind, INVALID_ADDRESS_MESSAGE, ServerAddress,
    is_valid_address, validate_address,
};
pub use direct_connect::{ADDRESS_PLACEHOLDER, ServerSwitcher};
pub use network::{ConnectionManager, ConnectionState, NetworkEvent, NetworkManager};
pub use registry::{CentralServerState, GameServer, GameServerRegistry, STANDALONE_ID};
