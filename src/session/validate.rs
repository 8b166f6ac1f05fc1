//! Save-time validation
//!
//! Checks run before a design is persisted. Violations are collected as
//! field-level errors rather than raised, so the caller can surface all
//! of them at once and the in-memory session is never disturbed.

use crate::catalog::Side;
use crate::data::BodyProfile;

/// Accepted height range in centimeters.
pub const HEIGHT_RANGE_CM: std::ops::RangeInclusive<u32> = 100..=250;
/// Accepted weight range in kilograms.
pub const WEIGHT_RANGE_KG: std::ops::RangeInclusive<u32> = 30..=200;
/// Maximum printed text length per side, in characters.
pub const MAX_TEXT_CHARS: usize = 100;
/// Maximum printed text lines per side.
pub const MAX_TEXT_LINES: usize = 3;

/// A validation failure on a single input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Stable field identifier, e.g. `"height"` or `"front_text"`.
    pub field: &'static str,
    /// Human-readable description of the violation.
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate everything that gates a save, returning all violations.
pub fn validate(profile: &BodyProfile, front_text: &str, back_text: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !HEIGHT_RANGE_CM.contains(&profile.height_cm) {
        errors.push(FieldError {
            field: "height",
            message: format!(
                "height must be between {} and {} cm",
                HEIGHT_RANGE_CM.start(),
                HEIGHT_RANGE_CM.end()
            ),
        });
    }

    if !WEIGHT_RANGE_KG.contains(&profile.weight_kg) {
        errors.push(FieldError {
            field: "weight",
            message: format!(
                "weight must be between {} and {} kg",
                WEIGHT_RANGE_KG.start(),
                WEIGHT_RANGE_KG.end()
            ),
        });
    }

    check_text(Side::Front, front_text, &mut errors);
    check_text(Side::Back, back_text, &mut errors);

    errors
}

fn check_text(side: Side, text: &str, errors: &mut Vec<FieldError>) {
    let field = match side {
        Side::Front => "front_text",
        Side::Back => "back_text",
    };

    if text.chars().count() > MAX_TEXT_CHARS {
        errors.push(FieldError {
            field,
            message: format!("text must be at most {MAX_TEXT_CHARS} characters"),
        });
    }

    if text.split('\n').count() > MAX_TEXT_LINES {
        errors.push(FieldError {
            field,
            message: format!("maximum {MAX_TEXT_LINES} lines allowed"),
        });
    }
}
