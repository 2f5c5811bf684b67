use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory to hold test decks
pub fn create_test_decks_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a markdown file with content, relative to the test directory
pub fn create_test_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
