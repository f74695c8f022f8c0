use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use extractor_logging::{extractor_debug, extractor_info, extractor_warn};

use crate::document::ExportDocument;
use crate::types::{ExtractionReport, FailurePolicy, UrlSet};

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {} as JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl ExtractError {
    /// The file that caused the failure.
    pub fn path(&self) -> &Path {
        match self {
            ExtractError::Read { path, .. } | ExtractError::Parse { path, .. } => path,
        }
    }
}

/// Read and decode one export file, returning its distinct link texts.
pub fn extract_file(path: &Path) -> Result<UrlSet, ExtractError> {
    let bytes = fs::read(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document = ExportDocument::parse(&bytes).map_err(|source| ExtractError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let urls: UrlSet = document.link_texts().map(ToOwned::to_owned).collect();
    extractor_debug!(
        "Extracted {} link(s) from {} message(s) in {:?}",
        urls.len(),
        document.messages.len(),
        path
    );
    Ok(urls)
}

/// Run one extraction pass over `paths`.
///
/// With [`FailurePolicy::FailFast`] the first failing file aborts the pass and
/// nothing collected so far is returned. With
/// [`FailurePolicy::SkipAndContinue`] failures are recorded in the report.
pub fn extract_urls<P: AsRef<Path>>(
    paths: &[P],
    policy: FailurePolicy,
) -> Result<ExtractionReport, ExtractError> {
    extractor_info!(
        "Extraction pass over {} file(s), policy={:?}",
        paths.len(),
        policy
    );

    let mut report = ExtractionReport::default();
    for path in paths {
        match extract_file(path.as_ref()) {
            Ok(urls) => {
                report.urls.extend(urls);
                report.files_read += 1;
            }
            Err(err) => match policy {
                FailurePolicy::FailFast => return Err(err),
                FailurePolicy::SkipAndContinue => {
                    extractor_warn!("Skipping file: {}", err);
                    report.skipped.push(err);
                }
            },
        }
    }

    extractor_info!(
        "Extraction pass done: {} url(s), {} file(s) read, {} skipped",
        report.urls.len(),
        report.files_read,
        report.skipped.len()
    );
    Ok(report)
}
