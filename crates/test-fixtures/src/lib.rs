//! Test fixtures for the contact-tracing workspace: golden scenario files and
//! builders for the canonical populations used across crates.

use std::path::PathBuf;

use contact_core::models::{Condition, ObservationTime, PersonRecord};
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub mod scenarios;

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Build a record from `HH:MM` (or compact `HHMM`) text.
///
/// # Panics
/// Panics on an unparseable time.
pub fn ping(person: &str, latitude: f64, longitude: f64, time: &str, condition: Condition) -> PersonRecord {
    let time: ObservationTime = time
        .parse()
        .unwrap_or_else(|e| panic!("bad fixture time {time:?}: {e}"));
    PersonRecord::new(person, latitude, longitude, time, condition)
}

// --- Golden scenario files ---

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureRecord {
    pub person: String,
    pub latitude: f64,
    pub longitude: f64,
    pub time: String,
    pub condition: Condition,
}

/// `(person, sequence_index)` as written in fixture files.
pub type FixtureVisit = (String, u32);

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpectations {
    pub breach_rows: usize,
    pub breached_rows: usize,
    pub high_risk_rows: usize,
    pub high_risk_pairs: Vec<(String, u32, String, u32)>,
    pub infection_starts: Vec<FixtureVisit>,
    pub node_count: usize,
    pub edge_count: usize,
    pub top_traffic: Vec<FixtureVisit>,
    pub forward_exposure: Vec<FixtureVisit>,
    pub never_vulnerable: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub name: String,
    pub description: String,
    pub microcell_radius: f64,
    pub records: Vec<FixtureRecord>,
    pub expected: GoldenExpectations,
}

impl GoldenScenario {
    /// Records in file order.
    pub fn person_records(&self) -> Vec<PersonRecord> {
        self.records
            .iter()
            .map(|r| ping(&r.person, r.latitude, r.longitude, &r.time, r.condition))
            .collect()
    }
}

/// Load a golden scenario from `golden/<name>.json`.
pub fn load_golden(name: &str) -> GoldenScenario {
    load_fixture(&format!("golden/{name}.json"))
}
