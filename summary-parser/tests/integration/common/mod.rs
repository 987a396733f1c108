//! Common test utilities for summary fixture files
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Test case structure for summary text fixtures
#[derive(Debug, Clone)]
pub struct SummaryTestCase {
    pub file_path: PathBuf,
    pub name: String,
}

impl SummaryTestCase {
    pub fn new(file_path: PathBuf) -> Self {
        let name = file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();
        Self { file_path, name }
    }

    pub fn filename(&self) -> &str {
        self.file_path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown.txt")
    }

    pub fn read_content_or_panic(&self) -> String {
        fs::read_to_string(&self.file_path)
            .unwrap_or_else(|_| panic!("Failed to read fixture: {:?}", self.file_path))
    }
}

fn test_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/integration/test_data")
}

/// Get all `.txt` summary fixtures, sorted by file name
pub fn summary_test_cases() -> Vec<SummaryTestCase> {
    let mut files = Vec::new();
    if let Ok(entries) = fs::read_dir(test_data_dir()) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("txt") {
                files.push(path);
            }
        }
    }
    files.sort();
    files.into_iter().map(SummaryTestCase::new).collect()
}

/// Get a specific fixture by file name
pub fn summary_test_case(filename: &str) -> Option<SummaryTestCase> {
    let path = test_data_dir().join(filename);
    path.exists().then(|| SummaryTestCase::new(path))
}
