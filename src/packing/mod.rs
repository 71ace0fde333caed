//! Bin formation.
//!
//! Turns the collected items into bins, once per replica:
//!
//! - [`rotate_replicas`]: `R` rotation-offset copies of the item sequence
//! - [`FirstFitPacker`]: capacity-driven first-fit (target-count mode)
//! - [`EvenPartitioner`]: fixed bin count, balanced weights (even mode)
//!
//! # References
//!
//! - Coffman, Garey & Johnson (1996), "Approximation Algorithms for Bin Packing: A Survey"
//! - Korf (2009), "Multi-Way Number Partitioning"

mod first_fit;
mod partition;
mod rotation;

pub use first_fit::FirstFitPacker;
pub use partition::EvenPartitioner;
pub use rotation::rotate_replicas;
