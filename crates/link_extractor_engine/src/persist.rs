use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use extractor_logging::{extractor_info, extractor_warn};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::types::UrlSet;

/// File name suggested when saving extracted URLs.
pub const DEFAULT_OUTPUT_FILENAME: &str = "extracted_urls.txt";
/// Extension appended to a chosen save path that has none.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "txt";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("not a file path: {}", .0.display())]
    InvalidPath(PathBuf),
    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
}

impl PersistError {
    pub fn path(&self) -> &Path {
        match self {
            PersistError::InvalidPath(path)
            | PersistError::Write { path, .. }
            | PersistError::Read { path, .. } => path,
        }
    }
}

/// Append `extension` when `path` has none, the way a save dialog does.
pub fn with_default_extension(path: &Path, extension: &str) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(extension)
    }
}

/// One URL per line, each terminated by `\n`.
pub fn format_url_list<I, S>(urls: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for url in urls {
        out.push_str(url.as_ref());
        out.push('\n');
    }
    out
}

/// Write the URL list to `path`, replacing any existing file.
///
/// The list goes to a temp file next to `path` and is renamed over it, so a
/// failed save leaves any previous file intact. Entries are written verbatim:
/// one holding a line break reads back as several entries.
pub fn write_url_list<I, S>(path: &Path, urls: I) -> Result<PathBuf, PersistError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if path.file_name().is_none() {
        return Err(PersistError::InvalidPath(path.to_path_buf()));
    }
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let urls: Vec<S> = urls.into_iter().collect();
    for url in &urls {
        let url: &str = url.as_ref();
        if url.contains(['\n', '\r']) {
            extractor_warn!("URL {:?} contains a line break and will not read back as one", url);
        }
    }
    let content = format_url_list(&urls);

    let write_err = |source| PersistError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.as_file_mut().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    extractor_info!("Wrote {} url(s) to {:?}", urls.len(), path);
    Ok(path.to_path_buf())
}

/// Read a saved URL list back into a set. Accepts `\n` and `\r\n` line endings.
pub fn read_url_list(path: &Path) -> Result<UrlSet, PersistError> {
    let content = fs::read_to_string(path).map_err(|source| PersistError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(ToOwned::to_owned).collect())
}
