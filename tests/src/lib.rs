//! End-to-end sweeps against deterministic fake probers.

pub mod fakes;

#[cfg(test)]
mod sweep;
