use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::{GolfError, Result};
use crate::types::round::Round;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Round files under `root`, sorted. A file path is returned as-is.
pub fn find_round_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(GolfError::PathNotFound(root.display().to_string()));
    }
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != ".golfscore")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| is_round_file(path))
        .collect();
    files.sort();
    tracing::debug!(root = %root.display(), count = files.len(), "found round files");
    Ok(files)
}

fn is_round_file(path: &Path) -> bool {
    let settings_file = path
        .file_name()
        .is_some_and(|name| name == DEFAULT_CONFIG_FILE);
    let supported = path
        .extension()
        .is_some_and(|ext| ext == "toml" || ext == "json");
    supported && !settings_file
}

pub fn read_round(path: &Path) -> Result<Round> {
    let content = std::fs::read_to_string(path)?;
    let parsed: std::result::Result<Round, String> = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(|e| e.to_string()),
        _ => toml::from_str(&content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|e| GolfError::RoundParse(format!("{}: {}", path.display(), e)))
}
