use std::net::Ipv4Addr;

use tracing::info;

use crate::error::InvalidRangeError;

/// Derives the address to skip in each range by swapping the last octet of the
/// range's address part for `skip`.
///
/// This is a literal substitution: the result is not checked against the
/// range's host set, so `10.10.10.0/31` with `skip = 12` yields `10.10.10.12`
/// even though that address lies outside the /31. Order follows `ranges`.
pub fn resolve_skip<S: AsRef<str>>(
    ranges: &[S],
    skip: u8,
) -> Result<Vec<Ipv4Addr>, InvalidRangeError> {
    let skip_hosts = ranges
        .iter()
        .map(|range| skip_address(range.as_ref(), skip))
        .collect::<Result<Vec<Ipv4Addr>, _>>()?;

    info!("Skipping hosts: {skip_hosts:?}");
    Ok(skip_hosts)
}

fn skip_address(range: &str, skip: u8) -> Result<Ipv4Addr, InvalidRangeError> {
    let range = range.trim();
    let addr_str = range.split_once('/').map_or(range, |(addr, _)| addr);

    let [a, b, c, _] = addr_str
        .parse::<Ipv4Addr>()
        .map_err(|e| InvalidRangeError::BadAddress {
            range: range.to_string(),
            reason: e.to_string(),
        })?
        .octets();

    Ok(Ipv4Addr::new(a, b, c, skip))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
