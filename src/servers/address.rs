//! Direct-connect address validation
//!
//! Accepts `host[:port]` where the host is either IPv4-shaped (four groups of
//! one to three digits) or domain-shaped (dot separated labels ending in an
//! alphabetic label of two or more characters). The check is syntactic only:
//! `999.999.999.999` passes, and the port has no upper bound.

use once_cell::sync::Lazy;
use regex::Regex;

/// Port used when an address has none
pub const DEFAULT_PORT: u16 = 41001;

/// Shown to the user when an address is rejected
pub const INVALID_ADDRESS_MESSAGE: &str = "Invalid address was passed. It must be an IPv4 address or a domain name with an optional port at the end (like 127.0.0.1:41001 or globed.example.com:41001)";

const REJECTED_SCHEMES: [&str; 3] = ["http://", "https://", "ftp://"];

static ADDRESS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?P<ipv4>(?:[0-9]{1,3}\.){3}[0-9]{1,3})|(?P<domain>(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))(?::(?P<port>[0-9]+))?$",
    )
    .unwrap()
});

/// Why an address was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("Address is empty")]
    Empty,

    #[error("Address must not start with {0}")]
    Scheme(&'static str),

    #[error("Address is not an IPv4 address or domain name: {0:?}")]
    Malformed(String),
}

impl AddressError {
    /// Message for the error alert
    pub fn user_message(&self) -> &'static str {
        INVALID_ADDRESS_MESSAGE
    }
}

/// Shape of the host part of an address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    Ipv4,
    Domain,
}

/// A validated direct-connect address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerAddress {
    pub host: String,
    pub kind: HostKind,
    /// Port digits as written, unbounded
    pub port: Option<String>,
}

impl ServerAddress {
    pub fn parse(address: &str) -> Result<Self, AddressError> {
        if address.is_empty() {
            return Err(AddressError::Empty);
        }

        if let Some(scheme) = REJECTED_SCHEMES.iter().find(|scheme| {
            address
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        }) {
            return Err(AddressError::Scheme(*scheme));
        }

        let caps = ADDRESS_PATTERN
            .captures(address)
            .ok_or_else(|| AddressError::Malformed(address.to_string()))?;

        let (host, kind) = match (caps.name("ipv4"), caps.name("domain")) {
            (Some(host), _) => (host.as_str(), HostKind::Ipv4),
            (None, Some(host)) => (host.as_str(), HostKind::Domain),
            (None, None) => return Err(AddressError::Malformed(address.to_string())),
        };

        Ok(Self {
            host: host.to_string(),
            kind,
            port: caps.name("port").map(|p| p.as_str().to_string()),
        })
    }

    /// Port number to connect to, `None` if the written port does not fit in a u16
    pub fn port_number(&self) -> Option<u16> {
        match &self.port {
            Some(port) => port.parse().ok(),
            None => Some(DEFAULT_PORT),
        }
    }
}

impl std::fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.port {
            Some(port) => write!(f, "{}:{}", self.host, port),
            None => write!(f, "{}", self.host),
        }
    }
}

/// Validate a direct-connect address
pub fn validate_address(address: &str) -> Result<ServerAddress, AddressError> {
    ServerAddress::parse(address)
}

/// Whether `address` is a syntactically valid direct-connect target
pub fn is_valid_address(address: &str) -> bool {
    validate_address(address).is_ok()
}
