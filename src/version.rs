//! Version parsing and total ordering for build-recipe version strings.
//!
//! Versions have the shape `<digits><lowercase letters>`, e.g. `2016a`: a
//! numeric epoch followed by an optional qualifier suffix. This is the
//! release scheme used by calendar-versioned scientific software, where the
//! qualifier distinguishes releases within one epoch.

use std::fmt::{self, Display, Formatter};

use crate::error::ConstraintError;

/// A parsed version: numeric epoch plus optional lowercase qualifier.
///
/// Ordering is by epoch first, then by qualifier lexicographically. The
/// derived `Ord` on the field order gives exactly that, and an empty
/// qualifier sorts before any non-empty one, so `2016` < `2016a` < `2017`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub epoch: u64,
    pub qualifier: String,
}

impl Version {
    /// Parse a version string of the form `digits[lowercase letters]`.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintError::InvalidVersionFormat` when the input is
    /// empty, does not start with a digit, contains anything other than a
    /// digit run followed by lowercase ASCII letters, or the digit run
    /// overflows a `u64`.
    pub fn parse(input: &str) -> Result<Self, ConstraintError> {
        let digits_len = input.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits_len == 0 {
            return Err(ConstraintError::InvalidVersionFormat(input.to_string()));
        }

        let (digits, qualifier) = input.split_at(digits_len);
        if !qualifier.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(ConstraintError::InvalidVersionFormat(input.to_string()));
        }

        let epoch: u64 = digits
            .parse()
            .map_err(|_| ConstraintError::InvalidVersionFormat(input.to_string()))?;

        Ok(Version {
            epoch,
            qualifier: qualifier.to_string(),
        })
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.epoch, self.qualifier)
    }
}
