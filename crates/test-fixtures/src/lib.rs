//! Test fixture loader for classifier artifacts and trace scenarios.
//!
//! Fixtures live in this crate's `data/` directory and are addressed by a
//! path relative to it, e.g. `classifiers/forest_small.json`.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let content = load_fixture_str(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {relative_path}: {e}"))
}

/// Load a fixture file as text.
pub fn load_fixture_str(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// A contact between two handles on a `YYYY-MM-DD` day.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioContact {
    pub a: String,
    pub b: String,
    pub date: String,
}

/// What a trace of `Scenario::trace` must report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScenarioExpectation {
    /// Handles of the direct contacts, in report order.
    pub direct: Vec<String>,
    /// Handles that must be predicted.
    pub predicted: Vec<String>,
    /// Handles that must not be predicted.
    pub not_predicted: Vec<String>,
    /// Expected `days_since_last` feature per predicted handle.
    pub days_since_last: std::collections::BTreeMap<String, u32>,
}

/// A registration sequence followed by a trace.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// The trace's "today", `YYYY-MM-DD`.
    pub today: String,
    pub people: Vec<String>,
    pub contacts: Vec<ScenarioContact>,
    pub trace: String,
    pub expect: ScenarioExpectation,
}

/// Load every scenario under `scenarios/`, sorted by file name.
pub fn load_scenarios() -> Vec<Scenario> {
    let dir = fixtures_root().join("scenarios");
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    paths.sort();
    paths
        .iter()
        .map(|p| {
            let name = p.strip_prefix(&fixtures_root()).unwrap_or(p);
            load_fixture(&name.to_string_lossy())
        })
        .collect()
}
