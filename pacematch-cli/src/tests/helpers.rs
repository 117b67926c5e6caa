//! Test helpers for composing run datasets on disk.

use camino::{Utf8Path, Utf8PathBuf};
use pacematch_core::test_support::run_at;
use pacematch_core::{AvailabilityLevel, Run};
use tempfile::TempDir;

/// Seeker latitude shared by the CLI scenarios, in decimal degrees.
pub(super) const SEEKER_LATITUDE: &str = "39.14";

/// Seeker longitude shared by the CLI scenarios, in decimal degrees.
pub(super) const SEEKER_LONGITUDE: &str = "-77.15";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory holding a run dataset for one test.
#[derive(Debug)]
pub(super) struct DatasetDir {
    _dir: TempDir,
    root: Utf8PathBuf,
    runs_path: Utf8PathBuf,
}

impl DatasetDir {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let runs_path = root.join("runs.json");
        Self {
            _dir: dir,
            root,
            runs_path,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn runs_path(&self) -> &Utf8Path {
        &self.runs_path
    }

    pub(super) fn write_runs(&self, runs: &[Run]) {
        let payload = serde_json::to_string_pretty(runs).expect("serialize dataset");
        write_utf8(&self.runs_path, payload.as_bytes());
    }
}

/// Three active runs at increasing distance from the shared seeker, with
/// weakening availability so the ranking order matches the record order.
pub(super) fn sample_runs() -> Vec<Run> {
    vec![
        run_at(1, 39.14, -77.15, AvailabilityLevel::Consistently),
        run_at(2, 39.50, -77.50, AvailabilityLevel::Frequently),
        run_at(3, 40.00, -78.00, AvailabilityLevel::Rarely),
    ]
}

/// The sample dataset with the farthest run marked inactive.
pub(super) fn runs_with_inactive() -> Vec<Run> {
    let mut runs = sample_runs();
    if let Some(run) = runs.last_mut() {
        run.is_active = false;
    }
    runs
}
