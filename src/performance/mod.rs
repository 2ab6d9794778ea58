//! Performance aggregation.
//!
//! Groups recorded responses by technology, converts categorical scores to
//! numeric weights and compares the sums against size-derived thresholds.

pub mod aggregator;
pub mod scoring;
pub mod thresholds;

pub use aggregator::*;
