//! # Sweep Orchestration
//!
//! Runs one sweep end to end:
//! 1. **Expand** every range and merge the hosts into one set.
//! 2. **Skip** the derived per-range addresses, when a skip octet is set.
//! 3. **Probe** the remaining hosts through the [`scheduler`](crate::scheduler).
//! 4. **Report** up, down and skipped hosts, each sorted as strings.
//!
//! Only steps 1 and 2 can fail, and both run before any probe is sent.

use std::collections::BTreeSet;
use std::net::Ipv4Addr;

use pingme_common::config::SweepConfig;
use pingme_common::error::InvalidRangeError;
use pingme_common::network::range::NetworkRange;
use pingme_common::network::skip;
use pingme_common::report::SweepReport;
use tracing::info;

use crate::probe::{self, Prober};
use crate::scheduler::{self, OnVerdict, ProbeOutcome};

/// Hosts selected for probing, plus the addresses removed by the skip octet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepPlan {
    pub hosts: BTreeSet<Ipv4Addr>,
    pub skipped: Vec<Ipv4Addr>,
}

/// Validates the ranges and works out which hosts a sweep will probe.
pub fn plan<S: AsRef<str>>(
    networks: &[S],
    skip_octet: Option<u8>,
) -> Result<SweepPlan, InvalidRangeError> {
    let mut hosts: BTreeSet<Ipv4Addr> = BTreeSet::new();
    for network in networks {
        let range: NetworkRange = network.as_ref().parse()?;
        info!("{range}: {} hosts", range.host_count());
        hosts.extend(range.hosts());
    }

    let skipped: Vec<Ipv4Addr> = match skip_octet {
        Some(octet) => skip::resolve_skip(networks, octet)?,
        None => Vec::new(),
    };

    for addr in &skipped {
        hosts.remove(addr);
    }

    Ok(SweepPlan { hosts, skipped })
}

/// Sweeps `networks` with `prober` and returns the categorized report.
pub fn sweep<P, S>(
    prober: &P,
    networks: &[S],
    config: &SweepConfig,
    on_verdict: Option<OnVerdict<'_>>,
) -> Result<SweepReport, InvalidRangeError>
where
    P: Prober + ?Sized,
    S: AsRef<str>,
{
    let plan = plan(networks, config.skip)?;
    Ok(execute(prober, plan, config, on_verdict))
}

/// Probes a prepared plan. Never fails: unreachable hosts are reported as down.
pub fn execute<P>(
    prober: &P,
    plan: SweepPlan,
    config: &SweepConfig,
    on_verdict: Option<OnVerdict<'_>>,
) -> SweepReport
where
    P: Prober + ?Sized,
{
    info!("Running with retries: {:?}", config.retries);
    let SweepPlan { hosts, skipped } = plan;

    let targets: Vec<Ipv4Addr> = hosts.into_iter().collect();
    let retries = probe::resolve_retries(config.retries);
    let ProbeOutcome { up, down } =
        scheduler::schedule(prober, &targets, retries, config.workers, on_verdict);

    SweepReport::new(up, down, skipped)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
