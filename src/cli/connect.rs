//! Address check and direct connect commands

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, bail};

use globed_menu::config::{FileSettingsStore, SettingsStore};
use globed_menu::servers::{
    ConnectionState, GameServerRegistry, HostKind, NetworkManager, ServerSwitcher,
    validate_address,
};

const WAIT_LIMIT: Duration = Duration::from_secs(10);

/// Validate an address and describe it
pub fn check_command(address: &str) -> Result<()> {
    match validate_address(address) {
        Ok(parsed) => {
            let kind = match parsed.kind {
                HostKind::Ipv4 => "IPv4 address",
                HostKind::Domain => "domain name",
            };
            match &parsed.port {
                Some(port) => println!("Valid: {} {} with port {}", kind, parsed.host, port),
                None => println!("Valid: {} {} (default port)", kind, parsed.host),
            }
            Ok(())
        }
        Err(e) => bail!("{} ({})", e.user_message(), e),
    }
}

/// Register `address` as the standalone server and wait for the connection attempt
pub fn connect_command(config_path: &Path, address: &str) -> Result<()> {
    let mut store = FileSettingsStore::open(config_path)?;
    let registry = GameServerRegistry::from_config(store.config());
    let mut switcher = ServerSwitcher::new(registry, NetworkManager::new());

    if let Err(e) = switcher.connect_direct(address, &mut store) {
        bail!("{} ({})", e.user_message(), e);
    }
    println!("Saved standalone server {}", address);

    let start = Instant::now();
    while matches!(switcher.network.state, ConnectionState::Connecting(_)) {
        if start.elapsed() > WAIT_LIMIT {
            bail!("Timed out connecting to {}", address);
        }
        switcher.network.poll_events();
        thread::sleep(Duration::from_millis(50));
    }

    match &switcher.network.state {
        ConnectionState::Failed(message) => bail!("Connection failed: {}", message),
        state => println!("{}", state),
    }

    Ok(())
}
