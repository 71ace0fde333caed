//! Assignment domain models.
//!
//! Provides the data types flowing through one scheduling run. All of them
//! are created fresh per run and discarded (or persisted by the caller)
//! afterwards.
//!
//! # Domain Mappings
//!
//! | u-assign | Peer review | Code review | Grading |
//! |----------|-------------|-------------|---------|
//! | Item | Praise received by one member | Changes by one author | Submissions by one student |
//! | Sub-unit | One praise | One change | One submission |
//! | Worker | Quantifier | Reviewer | Grader |
//! | Bin | Quantifier's batch | Review batch | Grading batch |

mod bin;
mod item;
mod period;
mod result;
mod worker;

pub use bin::{AssignmentOption, Bin};
pub use item::Item;
pub use period::{Period, TimeWindow};
pub use result::AssignmentResult;
pub use worker::Worker;
