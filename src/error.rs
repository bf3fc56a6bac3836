//! Typed errors for version parsing and constraint evaluation.

use std::fmt;

/// Errors produced by the version parser and the constraint evaluator.
///
/// Both variants are caller-input defects: the evaluation is abandoned and
/// nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    /// A version string does not match the `digits[letters]` shape.
    InvalidVersionFormat(String),
    /// A constraint expression is empty, contains a clause with no version
    /// after its operator, or uses an unrecognized operator.
    InvalidConstraintSyntax(String),
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintError::InvalidVersionFormat(version) => {
                write!(
                    f,
                    "Invalid version format '{}': expected digits followed by optional lowercase letters (e.g. 2016a)",
                    version
                )
            }
            ConstraintError::InvalidConstraintSyntax(fragment) => {
                write!(f, "Invalid constraint syntax: '{}'", fragment)
            }
        }
    }
}

impl std::error::Error for ConstraintError {}
