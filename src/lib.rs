//! Redundant work assignment for the U-Engine ecosystem.
//!
//! Splits a period's weighted work items (e.g. praise collected per
//! receiver) among a pool of workers (quantifiers) so that every item is
//! reviewed `R` times, while no worker ever receives an item belonging to
//! an identity it is disqualified from.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Item`, `Worker`, `Bin`, `Period`,
//!   `TimeWindow`, `AssignmentResult`
//! - **`collect`**: Collaborator traits and input normalization
//! - **`packing`**: Replica rotation, first-fit packing, greedy partitioning
//! - **`resolver`**: Bin-to-worker matching with bounded retries
//! - **`verify`**: Coverage check over the final result
//! - **`engine`**: The end-to-end run, `compute_assignments`
//! - **`config`**, **`validation`**, **`stats`**, **`memory`**, **`error`**
//!
//! # Architecture
//!
//! The engine is stateless and side-effect free: collaborators supply
//! inputs, the caller persists the result. Randomness (worker order,
//! per-replica item order) is seeded per run.
//!
//! # References
//!
//! - Coffman, Garey & Johnson (1996), "Approximation Algorithms for Bin Packing: A Survey"
//! - Korf (2009), "Multi-Way Number Partitioning"

pub mod collect;
pub mod config;
pub mod engine;
pub mod error;
pub mod memory;
pub mod models;
pub mod packing;
pub mod resolver;
pub mod stats;
pub mod validation;
pub mod verify;

pub use engine::AssignmentEngine;
pub use error::{EngineError, EngineResult};
