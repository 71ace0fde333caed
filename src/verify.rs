//! Coverage verification.
//!
//! Every sub-unit collected for a period must end up exactly
//! `redundancy_factor` times in the result, either assigned to a worker or
//! in an unassigned bin. A mismatch means packing or resolution lost or
//! duplicated work; it is never a recoverable condition.

use tracing::{error, info};

use crate::error::{EngineError, EngineResult};
use crate::models::AssignmentResult;

/// Checks that `assigned + unassigned == total_base_sub_units × redundancy`.
///
/// # Errors
/// `CoverageMismatch` with both counts when the totals differ.
pub fn verify_coverage(
    total_base_sub_units: usize,
    redundancy_factor: usize,
    result: &AssignmentResult,
) -> EngineResult<()> {
    let expected = total_base_sub_units * redundancy_factor;
    let assigned = result.assigned_sub_unit_count();
    let accounted = assigned + result.unassigned_sub_unit_count;

    if accounted == expected {
        info!(
            accounted,
            expected, "all redundant assignments accounted for"
        );
        Ok(())
    } else {
        error!(
            accounted,
            expected,
            assigned,
            unassigned = result.unassigned_sub_unit_count,
            total_base_sub_units,
            redundancy_factor,
            "not all redundant assignments accounted for"
        );
        Err(EngineError::CoverageMismatch {
            accounted,
            expected,
        })
    }
}
