//! Input validation for assignment runs.
//!
//! Checks structural integrity of collected items and workers before any
//! packing. Detects:
//! - Duplicate item IDs
//! - Duplicate worker IDs
//! - Items whose weight disagrees with their sub-units
//! - Sub-units claimed by more than one item
//!
//! Coverage verification assumes all four hold.

use crate::error::EngineError;
use crate::models::{Item, Worker};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// An item's weight differs from its sub-unit count.
    WeightMismatch,
    /// A sub-unit appears in more than one item.
    SharedSubUnit,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the inputs of an assignment run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(items: &[Item], workers: &[Worker]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut item_ids = HashSet::new();
    let mut sub_unit_ids = HashSet::new();
    for item in items {
        if !item_ids.insert(item.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate item ID: {}", item.id),
            ));
        }

        if !item.is_consistent() {
            errors.push(ValidationError::new(
                ValidationErrorKind::WeightMismatch,
                format!(
                    "Item '{}' has weight {} but {} sub-units",
                    item.id,
                    item.weight,
                    item.sub_unit_ids.len()
                ),
            ));
        }

        for sub in &item.sub_unit_ids {
            if !sub_unit_ids.insert(sub.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SharedSubUnit,
                    format!("Sub-unit '{}' appears in more than one item", sub),
                ));
            }
        }
    }

    let mut worker_ids = HashSet::new();
    for w in workers {
        if !worker_ids.insert(w.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate worker ID: {}", w.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

impl From<Vec<ValidationError>> for EngineError {
    fn from(errors: Vec<ValidationError>) -> Self {
        let joined = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        EngineError::Validation(joined)
    }
}
