//! # Vergate - Dependency Version Gate
//!
//! Vergate validates that installed dependency versions satisfy the
//! version-range constraints declared in a build recipe. It is the check a
//! build framework runs during its configure phase, before any compilation
//! starts, so that a build never proceeds against incompatible software.
//!
//! ## Core Concepts
//!
//! - **Version**: a numeric epoch plus an optional lowercase qualifier
//!   (`2016a`), ordered by epoch first and qualifier second
//! - **Constraint expression**: an OR-of-AND compound condition over
//!   version comparisons (`>=2016a,<=2019b|2021a`)
//! - **Recipe**: a build recipe's dependency declarations
//! - **Manifest**: the installed-software inventory the gate resolves
//!   versions from
//!
//! ## Modules
//!
//! - [`version`] - version parsing and total ordering
//! - [`constraint`] - constraint expression parsing and evaluation
//! - [`check`] - the configure-phase dependency gate
//! - [`recipe`] - recipe and manifest file loading
//! - [`error`] - typed parse and evaluation errors
//!
//! ## Example
//!
//! ```
//! use vergate::constraint::satisfies;
//!
//! assert!(satisfies("2016b", ">=2016a,<=2019b").unwrap());
//! assert!(!satisfies("2020a", ">=2016a,<=2019b").unwrap());
//! ```

// Re-export all public modules
pub mod check;
pub mod cli;
pub mod constraint;
pub mod error;
pub mod recipe;
pub mod version;
