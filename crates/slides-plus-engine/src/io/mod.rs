use crate::deck::{Deck, DeckConfig};
use crate::parsing::{is_slides_file, parse_deck_with_defaults};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid deck directory: {0}")]
    InvalidDeckDir(String),
}

/// Read a markdown file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Read and parse a deck with the built-in defaults
pub fn read_deck(path: &Path) -> Result<Deck, IoError> {
    read_deck_with_defaults(path, &DeckConfig::default())
}

pub fn read_deck_with_defaults(path: &Path, baseline: &DeckConfig) -> Result<Deck, IoError> {
    let text = read_file(path)?;
    let deck = parse_deck_with_defaults(&text, baseline);
    log::debug!("read {} slides from {}", deck.len(), path.display());
    Ok(deck)
}

/// Recursively find markdown files that opt in with `slides: true`
pub fn scan_slide_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_deck_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            match fs::read_to_string(&path) {
                Ok(text) if is_slides_file(&text) => files.push(path),
                Ok(_) => {}
                Err(e) => log::warn!("skipping {}: {e}", path.display()),
            }
        }
    }

    Ok(())
}

pub fn validate_deck_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidDeckDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }
    Ok(())
}
