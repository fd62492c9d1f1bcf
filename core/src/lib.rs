//! The probing engine behind `pingme`.
//!
//! * [`probe`]: one host, one verdict, with retries.
//! * [`scheduler`]: many hosts in parallel on a per-sweep worker pool.
//! * [`sweep`]: ranges in, [`SweepReport`](pingme_common::report::SweepReport) out.
//!
//! Reachability is checked through the [`Prober`](probe::Prober) trait, so the
//! scheduler can be driven by a fake in tests instead of the system `ping`.

pub mod probe;
pub mod scheduler;
pub mod sweep;

pub use probe::{Prober, SystemPing};
