use std::collections::BTreeSet;
use std::net::Ipv4Addr;

use serde::Serialize;

/// Outcome of one sweep.
///
/// Each list is sorted as strings, so `10.0.0.10` sorts before `10.0.0.2`.
/// `up` and `down` never share an address, and neither holds a skipped one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub skipped: Vec<String>,
}

impl SweepReport {
    pub fn new<U, D, S>(up: U, down: D, skipped: S) -> Self
    where
        U: IntoIterator<Item = Ipv4Addr>,
        D: IntoIterator<Item = Ipv4Addr>,
        S: IntoIterator<Item = Ipv4Addr>,
    {
        Self {
            up: sorted_strings(up),
            down: sorted_strings(down),
            skipped: sorted_strings(skipped),
        }
    }

    /// Number of hosts that were actually probed.
    pub fn probed(&self) -> usize {
        self.up.len() + self.down.len()
    }

    /// Key/value view in report order: `up`, `down`, `skipped`.
    pub fn sections(&self) -> [(&'static str, &[String]); 3] {
        [
            ("up", &self.up),
            ("down", &self.down),
            ("skipped", &self.skipped),
        ]
    }
}

fn sorted_strings<I: IntoIterator<Item = Ipv4Addr>>(addrs: I) -> Vec<String> {
    addrs
        .into_iter()
        .map(|addr| addr.to_string())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
