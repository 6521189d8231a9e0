use crate::model::ProfileRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway site root with a `data/` directory.
pub struct TestSite {
    // Kept so the directory lives as long as the test.
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSite {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        fs::create_dir_all(root.join("data")).expect("failed to create data dir");
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        fs::write(self.root.join(relative), content).expect("failed to write file");
    }

    pub fn write_source(&self, name: &str, content: &str) {
        fs::write(self.data_dir().join(name), content).expect("failed to write source");
    }

    pub fn write_records(&self, name: &str, records: &[ProfileRecord]) {
        let body = serde_json::to_string_pretty(records).expect("failed to serialize records");
        self.write_source(name, &body);
    }

    pub fn write_manifest(&self, names: &[&str]) {
        let body = serde_json::to_string(names).expect("failed to serialize manifest");
        self.write_file("ProfilesList.json", &body);
    }
}
