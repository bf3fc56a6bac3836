//! Configure-phase dependency gate.
//!
//! Walks a recipe's declared dependencies, resolves each installed version
//! through a [`VersionLookup`], and verifies that the installed version
//! satisfies the declared constraint. Any miss aborts the check, which is
//! how a build framework stops a configure step before wasting a build on
//! incompatible software.

use anyhow::{anyhow, Context, Result};

use crate::constraint::satisfies;
use crate::recipe::Dependency;

/// Host-framework capability: look up the installed version for a named
/// dependency.
///
/// The build framework owns the actual inventory; this trait is the only
/// thing the gate needs from it. [`crate::recipe::Manifest`] is the
/// file-backed implementation used by the CLI and tests.
pub trait VersionLookup {
    /// Returns the installed version string for `name`, if any.
    fn installed_version(&self, name: &str) -> Option<String>;
}

/// Outcome for one dependency after a successful gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedDependency {
    pub name: String,
    /// The concrete installed version that satisfied the constraint.
    pub resolved: String,
}

/// Validate every dependency against the installed versions in `lookup`.
///
/// Fails on the first dependency that has no installed version, whose
/// installed version does not satisfy its constraint, or whose version or
/// constraint is malformed. On success returns the resolved installed
/// version for each dependency, in declaration order.
pub fn check_dependencies(
    deps: &[Dependency],
    lookup: &dyn VersionLookup,
) -> Result<Vec<CheckedDependency>> {
    let mut checked = Vec::with_capacity(deps.len());

    for dep in deps {
        let installed = lookup.installed_version(&dep.name).ok_or_else(|| {
            anyhow!(
                "Failed to obtain installed version for dependency '{}'",
                dep.name
            )
        })?;

        let ok = satisfies(&installed, &dep.version).with_context(|| {
            format!(
                "Failed to check dependency '{}' against requirement '{}'",
                dep.name, dep.version
            )
        })?;

        if !ok {
            return Err(anyhow!(
                "Dependency '{}' version {} does not satisfy the requirement '{}'",
                dep.name,
                installed,
                dep.version
            ));
        }

        checked.push(CheckedDependency {
            name: dep.name.clone(),
            resolved: installed,
        });
    }

    Ok(checked)
}
