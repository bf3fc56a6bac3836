//! End-to-end tests for the recipe dependency gate: recipe and manifest
//! files on disk, loaded and checked the way the CLI does.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use vergate::check::{check_dependencies, VersionLookup};
use vergate::recipe::{Manifest, Recipe};

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_gate_passes_for_satisfied_recipe() {
    let dir = TempDir::new().unwrap();
    let recipe_path = write_fixture(
        &dir,
        "recipe.yaml",
        "name: climate-model\n\
         version: 4.2.0\n\
         dependencies:\n\
         \x20 - name: tzdata\n\
         \x20   version: \">=2016a,<=2019b\"\n\
         \x20 - name: gcc\n\
         \x20   version: \"9c\"\n\
         \x20 - name: netlib\n\
         \x20   version: \">=2020a|==2016a\"\n",
    );
    let manifest_path = write_fixture(
        &dir,
        "installed.yaml",
        "tzdata: 2016b\ngcc: 9c\nnetlib: 2016a\n",
    );

    let recipe = Recipe::load(&recipe_path).unwrap();
    let manifest = Manifest::load(&manifest_path).unwrap();

    let checked = check_dependencies(&recipe.dependencies, &manifest).unwrap();
    assert_eq!(checked.len(), 3);
    // Resolved versions come back in declaration order
    assert_eq!(checked[0].resolved, "2016b");
    assert_eq!(checked[1].resolved, "9c");
    assert_eq!(checked[2].resolved, "2016a");
}

#[test]
fn test_gate_fails_for_out_of_range_dependency() {
    let dir = TempDir::new().unwrap();
    let recipe_path = write_fixture(
        &dir,
        "recipe.yaml",
        "name: climate-model\n\
         version: 4.2.0\n\
         dependencies:\n\
         \x20 - name: tzdata\n\
         \x20   version: \">=2017a\"\n",
    );
    let manifest_path = write_fixture(&dir, "installed.yaml", "tzdata: 2016b\n");

    let recipe = Recipe::load(&recipe_path).unwrap();
    let manifest = Manifest::load(&manifest_path).unwrap();

    let err = check_dependencies(&recipe.dependencies, &manifest).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("tzdata"));
    assert!(msg.contains("2016b"));
    assert!(msg.contains(">=2017a"));
}

#[test]
fn test_gate_fails_for_software_missing_from_manifest() {
    let dir = TempDir::new().unwrap();
    let recipe_path = write_fixture(
        &dir,
        "recipe.yaml",
        "name: climate-model\n\
         version: 4.2.0\n\
         dependencies:\n\
         \x20 - name: tzdata\n\
         \x20   version: \">=2016a\"\n",
    );
    let manifest_path = write_fixture(&dir, "installed.yaml", "gcc: 9c\n");

    let recipe = Recipe::load(&recipe_path).unwrap();
    let manifest = Manifest::load(&manifest_path).unwrap();

    let err = check_dependencies(&recipe.dependencies, &manifest).unwrap_err();
    assert!(err
        .to_string()
        .contains("Failed to obtain installed version for dependency 'tzdata'"));
}

#[test]
fn test_gate_with_custom_lookup_implementation() {
    // The gate only needs the VersionLookup capability, not a manifest file
    struct FixedLookup;

    impl VersionLookup for FixedLookup {
        fn installed_version(&self, name: &str) -> Option<String> {
            match name {
                "tzdata" => Some("2018a".to_string()),
                _ => None,
            }
        }
    }

    let deps = vec![vergate::recipe::Dependency {
        name: "tzdata".to_string(),
        version: ">=2016a,<=2019b".to_string(),
    }];

    let checked = check_dependencies(&deps, &FixedLookup).unwrap();
    assert_eq!(checked[0].resolved, "2018a");
}

#[test]
fn test_gate_rejects_malformed_recipe_constraint() {
    let dir = TempDir::new().unwrap();
    let recipe_path = write_fixture(
        &dir,
        "recipe.yaml",
        "name: climate-model\n\
         version: 4.2.0\n\
         dependencies:\n\
         \x20 - name: tzdata\n\
         \x20   version: \"!=2016a\"\n",
    );
    let manifest_path = write_fixture(&dir, "installed.yaml", "tzdata: 2016b\n");

    let recipe = Recipe::load(&recipe_path).unwrap();
    let manifest = Manifest::load(&manifest_path).unwrap();

    let err = check_dependencies(&recipe.dependencies, &manifest).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid constraint syntax"));
}
