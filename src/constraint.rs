//! Constraint expression parsing and evaluation.
//!
//! A constraint expression is an OR of AND-groups: `|` separates
//! alternatives and `,` separates conditions that must all hold within one
//! alternative. Each condition is an optional comparison operator followed
//! by a version, so `>=2016a,<=2019b|2021a` reads "between 2016a and 2019b
//! inclusive, or exactly 2021a".

use crate::error::ConstraintError;
use crate::version::Version;

/// Comparison operator for a single clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    GreaterEq,
    LessEq,
    Greater,
    Less,
    Equal,
}

/// Candidate operator spellings in match order. Two-character spellings
/// come first so `>=` is never read as `>` followed by a version starting
/// with `=`. The spellings `==` and `=` both mean exact equality, as does
/// an absent operator.
const OPERATORS: &[(&str, Operator)] = &[
    (">=", Operator::GreaterEq),
    ("<=", Operator::LessEq),
    ("==", Operator::Equal),
    ("=", Operator::Equal),
    (">", Operator::Greater),
    ("<", Operator::Less),
];

/// A single operator+version condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub operator: Operator,
    pub version: Version,
}

impl Clause {
    /// Parse one clause token, e.g. `>=2016a` or a bare `2016a`.
    fn parse(token: &str) -> Result<Self, ConstraintError> {
        let (operator, remainder) = split_operator(token)?;
        if remainder.is_empty() {
            return Err(ConstraintError::InvalidConstraintSyntax(token.to_string()));
        }

        let version = Version::parse(remainder)?;
        Ok(Clause { operator, version })
    }

    /// Whether `installed` satisfies this clause.
    fn matches(&self, installed: &Version) -> bool {
        match self.operator {
            Operator::GreaterEq => installed >= &self.version,
            Operator::LessEq => installed <= &self.version,
            Operator::Greater => installed > &self.version,
            Operator::Less => installed < &self.version,
            Operator::Equal => installed == &self.version,
        }
    }
}

/// Split a clause token into its operator and version remainder.
///
/// A token with no operator prefix is an exact-match clause when it starts
/// like a version; anything else (`!=`, `~=`, ...) is an unknown operator.
fn split_operator(token: &str) -> Result<(Operator, &str), ConstraintError> {
    for (spelling, operator) in OPERATORS {
        if let Some(remainder) = token.strip_prefix(spelling) {
            return Ok((*operator, remainder));
        }
    }

    if token.starts_with(|c: char| c.is_ascii_digit()) {
        return Ok((Operator::Equal, token));
    }

    Err(ConstraintError::InvalidConstraintSyntax(token.to_string()))
}

/// Parse a full expression into OR-groups of AND-clauses.
///
/// The whole expression is parsed before anything is evaluated, so
/// malformed input is rejected no matter which alternative would have
/// matched.
fn parse_expression(expr: &str) -> Result<Vec<Vec<Clause>>, ConstraintError> {
    if expr.is_empty() {
        return Err(ConstraintError::InvalidConstraintSyntax(expr.to_string()));
    }

    expr.split('|')
        .map(|group| group.split(',').map(Clause::parse).collect())
        .collect()
}

/// Check whether an installed version satisfies a constraint expression.
///
/// # Errors
///
/// Returns `ConstraintError::InvalidVersionFormat` if `installed` or any
/// clause version is malformed, and `ConstraintError::InvalidConstraintSyntax`
/// if the expression is empty, a clause has no version after its operator,
/// or an operator is unrecognized.
pub fn satisfies(installed: &str, constraint_expr: &str) -> Result<bool, ConstraintError> {
    let groups = parse_expression(constraint_expr)?;
    let installed = Version::parse(installed)?;

    Ok(groups
        .iter()
        .any(|group| group.iter().all(|clause| clause.matches(&installed))))
}
