use std::fmt;
use std::str::FromStr;

use crate::AddressError;

/// A single cluster node address.
///
/// The host may be an IPv4 address, a hostname (e.g. a docker service
/// name) or a bracketed IPv6 literal; the port is mandatory. An address
/// without a port is rejected rather than silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAddr {
    pub host: String,
    pub port: u16,
}

impl NodeAddr {
    pub fn new(
        host: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for NodeAddr {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

impl FromStr for NodeAddr {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let addr = s.trim();
        if addr.is_empty() {
            return Err(AddressError::EmptyHost(s.to_string()));
        }

        // Bracketed IPv6 literal, e.g. [::1]:9300
        if let Some(rest) = addr.strip_prefix('[') {
            let Some((host, tail)) = rest.split_once(']') else {
                return Err(AddressError::UnclosedBracket(addr.to_string()));
            };
            if host.is_empty() {
                return Err(AddressError::EmptyHost(addr.to_string()));
            }
            let Some(port) = tail.strip_prefix(':') else {
                return Err(AddressError::MissingPort(addr.to_string()));
            };
            return parse_port(addr, port).map(|port| NodeAddr::new(host, port));
        }

        match addr.rsplit_once(':') {
            None => Err(AddressError::MissingPort(addr.to_string())),
            Some((host, port)) => {
                if host.is_empty() {
                    return Err(AddressError::EmptyHost(addr.to_string()));
                }
                parse_port(addr, port).map(|port| NodeAddr::new(host, port))
            }
        }
    }
}

fn parse_port(
    addr: &str,
    port: &str,
) -> Result<u16, AddressError> {
    if port.is_empty() {
        return Err(AddressError::MissingPort(addr.to_string()));
    }
    port.parse().map_err(|_| AddressError::InvalidPort {
        address: addr.to_string(),
        port: port.to_string(),
    })
}

/// Parses a comma-separated `host:port` list into node addresses.
///
/// Entries are trimmed; a blank entry fails the whole list. Every entry
/// must carry a port.
pub fn parse_cluster_nodes(nodes: &str) -> Result<Vec<NodeAddr>, AddressError> {
    let mut parsed = Vec::new();
    for entry in nodes.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            return Err(AddressError::EmptyEntry(nodes.to_string()));
        }
        parsed.push(entry.parse()?);
    }
    Ok(parsed)
}
