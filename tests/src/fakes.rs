use std::collections::{HashMap, HashSet};
use std::net::Ipv4Addr;
use std::sync::Mutex;

use pingme_core::probe::{ProbeAttemptFailure, Prober};

/// Answers only for a fixed set of hosts.
#[derive(Debug, Default)]
pub struct StaticProber {
    alive: HashSet<Ipv4Addr>,
}

impl StaticProber {
    pub fn with_alive<I: IntoIterator<Item = Ipv4Addr>>(alive: I) -> Self {
        Self {
            alive: alive.into_iter().collect(),
        }
    }
}

impl Prober for StaticProber {
    fn probe_once(&self, host: Ipv4Addr) -> Result<(), ProbeAttemptFailure> {
        if self.alive.contains(&host) {
            Ok(())
        } else {
            Err(ProbeAttemptFailure::Other(format!("{host} is silent")))
        }
    }
}

/// Fails the first `drops` attempts for every host, then answers.
///
/// Records how many attempts each host received.
#[derive(Debug, Default)]
pub struct FlakyProber {
    drops: u32,
    attempts: Mutex<HashMap<Ipv4Addr, u32>>,
}

impl FlakyProber {
    pub fn new(drops: u32) -> Self {
        Self {
            drops,
            attempts: Mutex::new(HashMap::new()),
        }
    }

    pub fn attempts(&self) -> HashMap<Ipv4Addr, u32> {
        self.attempts
            .lock()
            .map(|attempts| attempts.clone())
            .unwrap_or_default()
    }
}

impl Prober for FlakyProber {
    fn probe_once(&self, host: Ipv4Addr) -> Result<(), ProbeAttemptFailure> {
        let mut attempts = self
            .attempts
            .lock()
            .map_err(|e| ProbeAttemptFailure::Other(e.to_string()))?;
        let seen = attempts.entry(host).or_insert(0);
        *seen += 1;

        if *seen > self.drops {
            Ok(())
        } else {
            Err(ProbeAttemptFailure::Other("dropped".into()))
        }
    }
}
