//! Single-host reachability checks.
//!
//! A [`Prober`] performs exactly one attempt. [`probe_host`] wraps it in the
//! retry loop and always ends with a [`Verdict`]; attempt failures never leave
//! this module.

use std::io;
use std::net::Ipv4Addr;
use std::num::NonZeroU32;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::{debug, info};

/// Attempts per host when the caller gives none (or zero).
pub const DEFAULT_RETRIES: NonZeroU32 = NonZeroU32::new(2).unwrap();

/// Why a single reachability attempt did not succeed.
#[derive(Error, Debug)]
pub enum ProbeAttemptFailure {
    #[error("no reply ({0})")]
    Unreachable(ExitStatus),
    #[error("failed to run ping: {0}")]
    Spawn(#[from] io::Error),
    /// Failure reported by a [`Prober`] that does not run a process.
    #[error("{0}")]
    Other(String),
}

/// One reachability attempt against one host.
pub trait Prober: Send + Sync {
    fn probe_once(&self, host: Ipv4Addr) -> Result<(), ProbeAttemptFailure>;
}

impl<F> Prober for F
where
    F: Fn(Ipv4Addr) -> Result<(), ProbeAttemptFailure> + Send + Sync,
{
    fn probe_once(&self, host: Ipv4Addr) -> Result<(), ProbeAttemptFailure> {
        self(host)
    }
}

/// Shells out to the system `ping` binary: one echo request, quiet output.
///
/// The tool's own reply timeout applies (about a second on most systems).
#[derive(Debug, Clone, Default)]
pub struct SystemPing;

impl Prober for SystemPing {
    fn probe_once(&self, host: Ipv4Addr) -> Result<(), ProbeAttemptFailure> {
        let status: ExitStatus = Command::new("ping")
            .args(["-c", "1", "-q"])
            .arg(host.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(ProbeAttemptFailure::Unreachable(status))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProbeResult {
    pub host: Ipv4Addr,
    pub verdict: Verdict,
}

impl ProbeResult {
    pub fn new(host: Ipv4Addr, verdict: Verdict) -> Self {
        Self { host, verdict }
    }

    pub fn is_up(&self) -> bool {
        self.verdict == Verdict::Up
    }
}

/// `None` and `Some(0)` fall back to [`DEFAULT_RETRIES`].
pub fn resolve_retries(retries: Option<u32>) -> NonZeroU32 {
    retries.and_then(NonZeroU32::new).unwrap_or(DEFAULT_RETRIES)
}

/// Probes `host` up to `retries` times, stopping at the first success.
pub fn probe_host<P>(prober: &P, host: Ipv4Addr, retries: NonZeroU32) -> ProbeResult
where
    P: Prober + ?Sized,
{
    for attempt in 1..=retries.get() {
        info!("Ping attempt {attempt} for {host}");
        match prober.probe_once(host) {
            Ok(()) => return ProbeResult::new(host, Verdict::Up),
            Err(e) => debug!("{host}: attempt {attempt} failed: {e}"),
        }
    }

    ProbeResult::new(host, Verdict::Down)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
