//! counter-loop: deterministic arithmetic workloads for instruction profilers
//! Four accumulators (add, sub, mul, div) stepped over a fixed loop, summarised as `dummy: <total>`

pub mod cli;
pub mod counter;
pub mod native;
pub mod types;
