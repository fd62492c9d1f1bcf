//! # Network Ranges
//!
//! Parses CIDR strings such as `192.168.1.0/24` and enumerates the usable host
//! addresses inside them. The part after `/` may also be a netmask
//! (`192.168.1.0/255.255.255.0`) or a hostmask (`192.168.1.0/0.0.0.255`), and a
//! bare address is read as a `/32`.
//!
//! Host enumeration follows standard subnetting rules:
//! * prefix `< 31`: the network and broadcast addresses are excluded.
//! * prefix `31` and `32`: every address in the block is a host (point-to-point
//!   links and single hosts have no network/broadcast address).

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::InvalidRangeError;

/// An inclusive span of IPv4 addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    /// Addresses in ascending numeric order.
    pub fn to_iter(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + use<> {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        (start..=end).map(Ipv4Addr::from)
    }

    pub fn len(&self) -> u64 {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        if end < start {
            return 0;
        }
        u64::from(end - start) + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A validated IPv4 network given in CIDR notation.
///
/// The address part must be the network address itself: `10.0.0.0/24` is
/// accepted, `10.0.0.5/24` is rejected with [`InvalidRangeError::HostBitsSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkRange {
    network: Ipv4Network,
}

impl NetworkRange {
    pub fn network(&self) -> Ipv4Addr {
        self.network.network()
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        self.network.broadcast()
    }

    pub fn prefix(&self) -> u8 {
        self.network.prefix()
    }

    /// The span of usable host addresses.
    pub fn host_range(&self) -> Ipv4Range {
        let network: u32 = self.network().into();
        let broadcast: u32 = self.broadcast().into();

        if self.prefix() >= 31 {
            return Ipv4Range::new(network.into(), broadcast.into());
        }

        Ipv4Range::new((network + 1).into(), (broadcast - 1).into())
    }

    pub fn hosts(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + use<> {
        self.host_range().to_iter()
    }

    pub fn host_count(&self) -> u64 {
        self.host_range().len()
    }
}

impl FromStr for NetworkRange {
    type Err = InvalidRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (ip_str, prefix_str) = s.split_once('/').unwrap_or((s, "32"));

        let ip = ip_str
            .parse::<Ipv4Addr>()
            .map_err(|e| InvalidRangeError::BadAddress {
                range: s.to_string(),
                reason: e.to_string(),
            })?;

        let prefix = parse_prefix(prefix_str).map_err(|reason| InvalidRangeError::BadPrefix {
            range: s.to_string(),
            reason,
        })?;

        let network = Ipv4Network::new(ip, prefix).map_err(|e| InvalidRangeError::BadPrefix {
            range: s.to_string(),
            reason: e.to_string(),
        })?;

        if network.network() != ip {
            return Err(InvalidRangeError::HostBitsSet {
                range: s.to_string(),
                network: network.network(),
                prefix,
            });
        }

        Ok(Self { network })
    }
}

/// Accepts a decimal prefix length (`24`), a netmask (`255.255.255.0`) or a
/// hostmask (`0.0.0.255`).
fn parse_prefix(prefix_str: &str) -> Result<u8, String> {
    if !prefix_str.is_empty() && prefix_str.bytes().all(|b| b.is_ascii_digit()) {
        return prefix_str.parse::<u8>().map_err(|e| e.to_string());
    }

    let mask: u32 = prefix_str
        .parse::<Ipv4Addr>()
        .map_err(|_| format!("'{prefix_str}' is neither a prefix length nor a mask"))?
        .into();

    if mask.leading_ones() + mask.trailing_zeros() == 32 {
        return Ok(mask.leading_ones() as u8);
    }
    if mask.leading_zeros() + mask.trailing_ones() == 32 {
        return Ok(mask.leading_zeros() as u8);
    }

    Err(format!("'{prefix_str}' is not a contiguous mask"))
}

impl fmt::Display for NetworkRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.prefix())
    }
}

/// Expands a CIDR string into its usable host addresses, ascending.
pub fn expand(cidr: &str) -> Result<Vec<Ipv4Addr>, InvalidRangeError> {
    let range: NetworkRange = cidr.parse()?;
    Ok(range.hosts().collect())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
