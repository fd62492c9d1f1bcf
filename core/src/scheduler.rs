//! Fans reachability probes out over a worker pool.
//!
//! Every host gets its own task. Tasks run on a rayon pool that is built for
//! the call and joined before [`schedule`] returns. Workers report verdicts
//! over a channel, so the only shared state is the sending half of that
//! channel and a progress counter.

use std::collections::BTreeSet;
use std::net::Ipv4Addr;
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Sender};

use rayon::{Scope, ThreadPool, ThreadPoolBuilder};
use tracing::{info, warn};

use crate::probe::{self, ProbeResult, Prober, Verdict};

/// Upper bound on the default pool size. An explicit worker count can go higher.
pub const DEFAULT_MAX_WORKERS: usize = 512;

/// Called with the number of hosts finished so far, once per host.
pub type OnVerdict<'a> = &'a (dyn Fn(usize) + Send + Sync);

/// Probed hosts split by verdict.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub up: BTreeSet<Ipv4Addr>,
    pub down: BTreeSet<Ipv4Addr>,
}

impl ProbeOutcome {
    fn record(&mut self, result: ProbeResult) {
        match result.verdict {
            Verdict::Up => self.up.insert(result.host),
            Verdict::Down => self.down.insert(result.host),
        };
    }

    pub fn len(&self) -> usize {
        self.up.len() + self.down.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Probes every host in `hosts` and blocks until all of them have a verdict.
///
/// There is no overall deadline: a probe that never returns stalls the call.
pub fn schedule<P>(
    prober: &P,
    hosts: &[Ipv4Addr],
    retries: NonZeroU32,
    workers: Option<usize>,
    on_verdict: Option<OnVerdict<'_>>,
) -> ProbeOutcome
where
    P: Prober + ?Sized,
{
    let mut outcome = ProbeOutcome::default();
    if hosts.is_empty() {
        return outcome;
    }

    let workers = pool_size(hosts.len(), workers);
    info!(
        "Probing {} hosts on {workers} workers, up to {retries} attempts each",
        hosts.len()
    );

    let (tx, rx) = mpsc::channel::<ProbeResult>();
    let completed = AtomicUsize::new(0);

    match build_pool(workers) {
        Ok(pool) => pool.scope(|scope| {
            spawn_probes(scope, prober, hosts, retries, &tx, &completed, on_verdict)
        }),
        Err(e) => {
            warn!("Could not start {workers} workers ({e}), using the shared pool");
            rayon::scope(|scope| {
                spawn_probes(scope, prober, hosts, retries, &tx, &completed, on_verdict)
            })
        }
    }

    drop(tx);
    for result in rx {
        outcome.record(result);
    }

    outcome
}

fn spawn_probes<'scope, P>(
    scope: &Scope<'scope>,
    prober: &'scope P,
    hosts: &[Ipv4Addr],
    retries: NonZeroU32,
    tx: &Sender<ProbeResult>,
    completed: &'scope AtomicUsize,
    on_verdict: Option<OnVerdict<'scope>>,
) where
    P: Prober + ?Sized,
{
    for &host in hosts {
        let tx = tx.clone();
        scope.spawn(move |_| {
            let result = probe::probe_host(prober, host, retries);
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(report) = on_verdict {
                report(done);
            }
            // The receiver outlives the scope, so this cannot fail.
            let _ = tx.send(result);
        });
    }
}

fn pool_size(hosts: usize, requested: Option<usize>) -> usize {
    let size = match requested {
        Some(n) if n > 0 => n,
        _ => hosts.min(DEFAULT_MAX_WORKERS),
    };
    size.clamp(1, hosts.max(1))
}

fn build_pool(workers: usize) -> Result<ThreadPool, rayon::ThreadPoolBuildError> {
    ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|idx| format!("pingme-worker-{idx}"))
        .build()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
