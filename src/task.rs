use crate::ConfigError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddrV4, SocketAddrV6};
use std::time::Duration;

/// Pause after every echo request.
pub const DELAY: Duration = Duration::from_millis(500);

/// Where an echo request goes. Port, flow info and scope id are unused.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Destination {
    V4(SocketAddrV4),
    V6(SocketAddrV6),
}

impl Destination {
    /// Parses a numerical address, trying IPv6 before IPv4.
    pub fn parse(addr_str: &str) -> Option<Self> {
        if let Ok(ip) = addr_str.parse::<Ipv6Addr>() {
            return Some(Destination::V6(SocketAddrV6::new(ip, 0, 0, 0)));
        }
        if let Ok(ip) = addr_str.parse::<Ipv4Addr>() {
            return Some(Destination::V4(SocketAddrV4::new(ip, 0)));
        }
        None
    }
}

/// One target of the send loop.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EchoTask {
    addr_str: String,
    destination: Destination,
    delay: Duration,
}

impl EchoTask {
    pub fn parse(addr_str: &str) -> Result<Self, ConfigError> {
        let destination = Destination::parse(addr_str)
            .ok_or_else(|| ConfigError::new(format!("Cannot parse address: {addr_str}")))?;
        Ok(EchoTask { addr_str: addr_str.to_owned(), destination, delay: DELAY })
    }

    #[must_use]
    pub fn with_delay(self, delay: Duration) -> Self {
        EchoTask { delay, ..self }
    }

    /// The address as given on the command line.
    pub fn addr_str(&self) -> &str {
        &self.addr_str
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
