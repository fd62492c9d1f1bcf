pub mod range;
pub mod skip;
