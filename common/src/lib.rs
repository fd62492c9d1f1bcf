//! Shared models for `pingme`.
//!
//! Everything in here is pure: parsing CIDR ranges, deriving skip addresses,
//! the sweep configuration and the final report. No process or socket I/O.

pub mod config;
pub mod error;
pub mod network;
pub mod report;
