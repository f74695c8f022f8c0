use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};

use extractor_logging::{extractor_info, extractor_warn};

/// Case-sensitive suffix of files picked up by a folder scan.
pub const JSON_SUFFIX: &str = ".json";

#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    #[error("failed to read folder {}: {source}", .path.display())]
    ReadDir { path: PathBuf, source: io::Error },
}

/// Recursively list `*.json` files under `folder`.
///
/// Files of a directory come before the contents of its subdirectories, and
/// entries are visited in name order. Unreadable subdirectories are skipped;
/// symlinks to directories are neither followed nor listed.
pub fn find_json_files(folder: &Path) -> Result<Vec<PathBuf>, DiscoverError> {
    let entries = sorted_entries(folder).map_err(|source| DiscoverError::ReadDir {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut found = Vec::new();
    visit(entries, &mut found);
    extractor_info!("Found {} JSON file(s) under {:?}", found.len(), folder);
    Ok(found)
}

pub fn has_json_suffix(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(JSON_SUFFIX))
        .unwrap_or(false)
}

fn visit(entries: Vec<DirEntry>, found: &mut Vec<PathBuf>) {
    let mut subdirs = Vec::new();
    for entry in entries {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            subdirs.push(path);
            continue;
        }
        if file_type.is_symlink() && path.is_dir() {
            continue;
        }
        if has_json_suffix(&path) {
            found.push(path);
        }
    }

    for dir in subdirs {
        match sorted_entries(&dir) {
            Ok(entries) => visit(entries, found),
            Err(err) => extractor_warn!("Skipping unreadable folder {:?}: {}", dir, err),
        }
    }
}

fn sorted_entries(dir: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}
