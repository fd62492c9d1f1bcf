use thiserror::Error;

/// A network range string that cannot be turned into an IPv4 network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidRangeError {
    #[error("invalid IPv4 address in range '{range}': {reason}")]
    BadAddress { range: String, reason: String },
    #[error("invalid prefix in range '{range}': {reason}")]
    BadPrefix { range: String, reason: String },
    #[error("'{range}' has host bits set (did you mean {network}/{prefix}?)")]
    HostBitsSet {
        range: String,
        network: std::net::Ipv4Addr,
        prefix: u8,
    },
}
