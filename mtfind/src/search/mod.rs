//! The parallel search pipeline: line-aligned partitioning, per-partition
//! scanning with a pluggable matcher, and an order-preserving merge that
//! rewrites partition-local line numbers into global ones.

pub mod engine;
pub mod matcher;
pub mod partition;
pub mod scanner;

pub use engine::search;
pub use matcher::{Matcher, MatcherKind};
pub use partition::{partition, Partition};
