//! Timing and memory measurement of allocation runs.
//!
//! [`measure`] runs the allocation engine once and records wall time and,
//! when a [`PeakAllocator`] is installed as the global allocator, the peak
//! heap growth during the run. [`compare_algorithms`] repeats this for every
//! [`PathAlgorithm`](crate::shortest_path::PathAlgorithm).

mod alloc;
mod harness;

pub use alloc::PeakAllocator;
pub use harness::{compare_algorithms, measure, RunMetrics, Timer};
