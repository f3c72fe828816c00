//! Connection manager for game servers
//!
//! Connection attempts run on a background thread and report back through a
//! channel that the UI thread drains with [`NetworkManager::poll_events`].

use std::net::{TcpStream, ToSocketAddrs};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, warn};

use super::address::ServerAddress;
use super::registry::GameServer;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Starts connections to game servers
pub trait ConnectionManager {
    /// Start connecting to the direct-connect server. Returns immediately.
    fn connect_standalone(&mut self, server: &GameServer);
}

/// Connection state as seen by the UI
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting(String),
    Connected(String),
    Failed(String),
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionState::Disconnected => write!(f, "Disconnected"),
            ConnectionState::Connecting(addr) => write!(f, "Connecting to {}", addr),
            ConnectionState::Connected(addr) => write!(f, "Connected to {}", addr),
            ConnectionState::Failed(message) => write!(f, "Connection failed: {}", message),
        }
    }
}

/// Result of a background connection attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkEvent {
    Connected { attempt: u64, address: String },
    Failed { attempt: u64, address: String, message: String },
}

impl NetworkEvent {
    /// ID of the connection attempt this event finishes
    pub fn attempt(&self) -> u64 {
        match self {
            NetworkEvent::Connected { attempt, .. } | NetworkEvent::Failed { attempt, .. } => {
                *attempt
            }
        }
    }
}

/// Connection manager that probes the server over TCP
pub struct NetworkManager {
    pub state: ConnectionState,
    /// ID of the latest attempt, results of older attempts are dropped
    attempt: u64,
    event_tx: Sender<NetworkEvent>,
    event_rx: Receiver<NetworkEvent>,
}

impl Default for NetworkManager {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkManager {
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        Self {
            state: ConnectionState::Disconnected,
            attempt: 0,
            event_tx,
            event_rx,
        }
    }

    /// Drain finished connection attempts and update the state.
    ///
    /// Only results of the latest attempt are returned.
    pub fn poll_events(&mut self) -> Vec<NetworkEvent> {
        let current = self.attempt;
        let events: Vec<NetworkEvent> = self
            .event_rx
            .try_iter()
            .filter(|event| {
                let latest = event.attempt() == current;
                if !latest {
                    debug!("Dropping result of superseded attempt: {:?}", event);
                }
                latest
            })
            .collect();

        for event in &events {
            self.state = match event {
                NetworkEvent::Connected { address, .. } => {
                    info!("Connected to {}", address);
                    ConnectionState::Connected(address.clone())
                }
                NetworkEvent::Failed {
                    address, message, ..
                } => {
                    warn!("Failed to connect to {}: {}", address, message);
                    ConnectionState::Failed(message.clone())
                }
            };
        }
        events
    }
}

impl ConnectionManager for NetworkManager {
    fn connect_standalone(&mut self, server: &GameServer) {
        let address = server.address.clone();
        self.attempt += 1;
        let attempt = self.attempt;
        self.state = ConnectionState::Connecting(address.clone());
        info!("Connecting to standalone server {} (attempt {})", address, attempt);

        let tx = self.event_tx.clone();
        thread::spawn(move || {
            let event = match try_connect(&address) {
                Ok(()) => NetworkEvent::Connected { attempt, address },
                Err(e) => NetworkEvent::Failed {
                    attempt,
                    address,
                    message: format!("{:#}", e),
                },
            };
            let _ = tx.send(event);
        });
    }
}

fn try_connect(address: &str) -> Result<()> {
    let parsed = ServerAddress::parse(address)?;
    let port = parsed
        .port_number()
        .ok_or_else(|| anyhow!("Port out of range in {}", address))?;

    let targets = (parsed.host.as_str(), port)
        .to_socket_addrs()
        .with_context(|| format!("Failed to resolve {}", parsed.host))?;

    let mut last_error = anyhow!("No addresses found for {}", parsed.host);
    for target in targets {
        match TcpStream::connect_timeout(&target, CONNECT_TIMEOUT) {
            Ok(_) => return Ok(()),
            Err(e) => {
                last_error = anyhow::Error::new(e).context(format!("Failed to connect to {}", target))
            }
        }
    }
    Err(last_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::time::Instant;

    fn wait_for_event(manager: &mut NetworkManager) -> NetworkEvent {
        let start = Instant::now();
        loop {
            if let Some(event) = manager.poll_events().pop() {
                return event;
            }
            assert!(start.elapsed() < Duration::from_secs(10), "no network event");
            thread::sleep(Duration::from_millis(10));
        }
    }

    fn server(address: String) -> GameServer {
        GameServer {
            id: "standalone".to_string(),
            name: "Server".to_string(),
            address,
            region: "unknown".to_string(),
        }
    }

    #[test]
    fn test_connects_to_listening_server() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = format!("127.0.0.1:{}", listener.local_addr().unwrap().port());

        let mut manager = NetworkManager::new();
        manager.connect_standalone(&server(address.clone()));
        assert_eq!(manager.state, ConnectionState::Connecting(address.clone()));

        assert_eq!(
            wait_for_event(&mut manager),
            NetworkEvent::Connected {
                attempt: 1,
                address: address.clone()
            }
        );
        assert_eq!(manager.state, ConnectionState::Connected(address));
    }

    #[test]
    fn test_superseded_attempt_does_not_override_state() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = format!("127.0.0.1:{}", listener.local_addr().unwrap().port());

        let mut manager = NetworkManager::new();
        manager.connect_standalone(&server("127.0.0.1:70000".to_string()));
        manager.connect_standalone(&server(address.clone()));

        // A slow first attempt finishing late
        manager
            .event_tx
            .send(NetworkEvent::Connected {
                attempt: 1,
                address: "10.255.255.1:41001".to_string(),
            })
            .unwrap();

        let event = wait_for_event(&mut manager);
        assert_eq!(event.attempt(), 2);
        assert_eq!(manager.state, ConnectionState::Connected(address.clone()));

        thread::sleep(Duration::from_millis(50));
        assert!(manager.poll_events().is_empty());
        assert_eq!(manager.state, ConnectionState::Connected(address));
    }

    #[test]
    fn test_out_of_range_port_fails() {
        let mut manager = NetworkManager::new();
        manager.connect_standalone(&server("127.0.0.1:70000".to_string()));

        match wait_for_event(&mut manager) {
            NetworkEvent::Failed { message, .. } => assert!(message.contains("out of range")),
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(matches!(manager.state, ConnectionState::Failed(_)));
    }
}
