#![cfg(test)]
use std::collections::BTreeSet;
use std::net::Ipv4Addr;

use pingme_common::config::SweepConfig;
use pingme_common::network::range;
use pingme_common::report::SweepReport;
use pingme_core::SystemPing;
use pingme_core::sweep;

use crate::fakes::{FlakyProber, StaticProber};

fn config(retries: Option<u32>, skip: Option<u8>) -> SweepConfig {
    SweepConfig {
        retries,
        skip,
        workers: None,
    }
}

fn is_sorted(list: &[String]) -> bool {
    list.windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn unreachable_slash_31_without_skip() -> anyhow::Result<()> {
    let prober = StaticProber::default();
    let report = sweep::sweep(&prober, &["10.99.10.0/31"], &config(Some(1), None), None)?;

    assert_eq!(
        report,
        SweepReport {
            up: vec![],
            down: vec!["10.99.10.0".into(), "10.99.10.1".into()],
            skipped: vec![],
        }
    );
    Ok(())
}

#[test]
fn unreachable_slash_31_with_skip() -> anyhow::Result<()> {
    let prober = StaticProber::default();
    let report = sweep::sweep(&prober, &["10.99.10.0/31"], &config(Some(1), Some(12)), None)?;

    assert_eq!(
        report,
        SweepReport {
            up: vec![],
            down: vec!["10.99.10.0".into(), "10.99.10.1".into()],
            skipped: vec!["10.99.10.12".into()],
        }
    );
    Ok(())
}

#[test]
fn report_partitions_expanded_hosts() -> anyhow::Result<()> {
    let networks = ["192.168.7.0/26", "192.168.7.32/27", "10.20.0.0/30"];
    let alive = [
        Ipv4Addr::new(192, 168, 7, 2),
        Ipv4Addr::new(192, 168, 7, 10),
        Ipv4Addr::new(192, 168, 7, 33),
        Ipv4Addr::new(10, 20, 0, 1),
    ];
    let prober = StaticProber::with_alive(alive);
    let report = sweep::sweep(&prober, &networks, &config(Some(1), Some(10)), None)?;

    let mut expanded: BTreeSet<String> = BTreeSet::new();
    for network in networks {
        expanded.extend(range::expand(network)?.iter().map(Ipv4Addr::to_string));
    }

    let up: BTreeSet<&String> = report.up.iter().collect();
    let down: BTreeSet<&String> = report.down.iter().collect();
    assert!(up.is_disjoint(&down));

    for skipped in &report.skipped {
        assert!(!up.contains(skipped) && !down.contains(skipped), "{skipped}");
    }

    let probed: BTreeSet<String> = report.up.iter().chain(&report.down).cloned().collect();
    let expected: BTreeSet<String> = expanded
        .into_iter()
        .filter(|host| !report.skipped.contains(host))
        .collect();
    assert_eq!(probed, expected);

    assert_eq!(report.up, vec!["10.20.0.1", "192.168.7.2", "192.168.7.33"]);
    assert_eq!(report.skipped, vec!["10.20.0.10", "192.168.7.10"]);
    Ok(())
}

#[test]
fn lists_are_sorted_as_strings() -> anyhow::Result<()> {
    let alive = (1..=30u8).map(|d| Ipv4Addr::new(10, 10, 10, d));
    let prober = StaticProber::with_alive(alive);
    let report = sweep::sweep(&prober, &["10.10.10.0/26"], &config(Some(1), Some(7)), None)?;

    assert!(is_sorted(&report.up));
    assert!(is_sorted(&report.down));
    assert!(is_sorted(&report.skipped));

    let ten = report.up.iter().position(|h| h == "10.10.10.10");
    let two = report.up.iter().position(|h| h == "10.10.10.2");
    assert!(ten < two, "expected lexicographic order, got {:?}", report.up);
    Ok(())
}

#[test]
fn overlapping_ranges_probe_each_host_once() -> anyhow::Result<()> {
    let prober = FlakyProber::new(0);
    let networks = ["172.16.0.0/28", "172.16.0.0/29", "172.16.0.8/29"];
    let report = sweep::sweep(&prober, &networks, &config(Some(3), None), None)?;

    // .7 and .8 are network/broadcast of the /29s but hosts of the /28.
    assert_eq!(report.up.len(), 14);
    assert!(report.down.is_empty());
    assert!(prober.attempts().values().all(|&n| n == 1));
    Ok(())
}

#[test]
fn retries_recover_dropped_replies() -> anyhow::Result<()> {
    let prober = FlakyProber::new(1);
    let report = sweep::sweep(&prober, &["10.1.1.0/29"], &config(Some(2), None), None)?;
    assert_eq!(report.up.len(), 6);
    assert!(report.down.is_empty());
    Ok(())
}

#[test]
fn default_retries_allow_two_attempts() -> anyhow::Result<()> {
    let prober = FlakyProber::new(1);
    let report = sweep::sweep(&prober, &["10.1.1.0/30"], &config(None, None), None)?;
    assert_eq!(report.up, vec!["10.1.1.1", "10.1.1.2"]);
    assert!(prober.attempts().values().all(|&n| n == 2));

    let prober = FlakyProber::new(2);
    let report = sweep::sweep(&prober, &["10.1.1.0/30"], &config(Some(0), None), None)?;
    assert_eq!(report.down, vec!["10.1.1.1", "10.1.1.2"]);
    Ok(())
}

#[test]
fn invalid_range_aborts_without_partial_report() {
    let prober = FlakyProber::new(0);
    let result = sweep::sweep(
        &prober,
        &["10.0.0.0/24", "10.0.0.300/24"],
        &config(Some(1), None),
        None,
    );

    assert!(result.is_err());
    assert!(prober.attempts().is_empty(), "probes ran before validation");
}

#[test]
fn small_worker_pool_still_covers_every_host() -> anyhow::Result<()> {
    let prober = StaticProber::default();
    let cfg = SweepConfig {
        retries: Some(1),
        skip: None,
        workers: Some(2),
    };
    let report = sweep::sweep(&prober, &["10.5.0.0/27"], &cfg, None)?;
    assert_eq!(report.down.len(), 30);
    Ok(())
}

/// Requires a `ping` binary and no route to 10.99.10.0/31.
#[test]
#[ignore]
fn system_ping_unreachable_subnet() -> anyhow::Result<()> {
    let report = sweep::sweep(&SystemPing, &["10.99.10.0/31"], &config(Some(1), Some(12)), None)?;
    assert!(report.up.is_empty());
    assert_eq!(report.down, vec!["10.99.10.0", "10.99.10.1"]);
    assert_eq!(report.skipped, vec!["10.99.10.12"]);
    Ok(())
}

#[test]
#[ignore]
fn system_ping_loopback_is_up() -> anyhow::Result<()> {
    let report = sweep::sweep(&SystemPing, &["127.0.0.0/30"], &config(Some(1), None), None)?;
    assert_eq!(report.up, vec!["127.0.0.1", "127.0.0.2"]);
    Ok(())
}
