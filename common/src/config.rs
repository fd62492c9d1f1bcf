/// Inputs of a single sweep besides the ranges themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepConfig {
    /// Attempts per host. `None` and `Some(0)` both mean the default of 2.
    pub retries: Option<u32>,
    /// Last octet excluded from every range.
    pub skip: Option<u8>,
    /// Size of the worker pool. Defaults to one worker per host.
    pub workers: Option<usize>,
}
