use extractor_logging::{extractor_error, extractor_info, extractor_warn};
use link_extractor_core::{Effect, FailurePolicy, FileFailure, Msg};
use link_extractor_engine::{
    extract_urls, find_json_files, write_url_list, ExtractError, PersistError,
};

/// Executes core effects against the engine, synchronously, and answers each
/// with the message to feed back into `update`.
#[derive(Debug, Default)]
pub struct EffectRunner;

impl EffectRunner {
    pub fn new() -> Self {
        Self
    }

    /// `PromptSavePath` needs the user and is answered by the UI, not here.
    pub fn run(&self, effect: Effect) -> Option<Msg> {
        match effect {
            Effect::ScanFolder { folder } => Some(match find_json_files(&folder) {
                Ok(files) => Msg::FolderScanned { folder, files },
                Err(err) => {
                    extractor_warn!("Folder scan failed: {}", err);
                    Msg::FolderScanFailed {
                        folder,
                        message: err.to_string(),
                    }
                }
            }),
            Effect::ExtractUrls { files, policy } => {
                extractor_info!("Loaded files: {:?}", files);
                Some(match extract_urls(&files, map_policy(policy)) {
                    Ok(report) => Msg::ExtractionFinished {
                        urls: report.urls.into_iter().collect(),
                        files_read: report.files_read,
                        skipped: report.skipped.iter().map(to_failure).collect(),
                    },
                    Err(err) => {
                        extractor_error!("Extraction aborted: {}", err);
                        Msg::ExtractionFailed(to_failure(&err))
                    }
                })
            }
            Effect::WriteUrls { path, urls } => Some(match write_url_list(&path, &urls) {
                Ok(written) => Msg::SaveFinished {
                    path: written,
                    url_count: urls.len(),
                },
                Err(err) => {
                    extractor_error!("Failed to save urls to {:?}: {}", path, err);
                    Msg::SaveFailed {
                        path,
                        message: save_reason(&err),
                    }
                }
            }),
            Effect::PromptSavePath => {
                extractor_warn!("PromptSavePath reached the effect runner; ignoring");
                None
            }
        }
    }
}

fn map_policy(policy: FailurePolicy) -> link_extractor_engine::FailurePolicy {
    match policy {
        FailurePolicy::FailFast => link_extractor_engine::FailurePolicy::FailFast,
        FailurePolicy::SkipAndContinue => link_extractor_engine::FailurePolicy::SkipAndContinue,
    }
}

fn to_failure(err: &ExtractError) -> FileFailure {
    let message = match err {
        ExtractError::Read { source, .. } => format!("could not read file: {source}"),
        ExtractError::Parse { source, .. } => format!("invalid JSON: {source}"),
    };
    FileFailure {
        path: err.path().to_path_buf(),
        message,
    }
}

/// The alert already names the path, so only the cause is kept.
fn save_reason(err: &PersistError) -> String {
    match err {
        PersistError::Write { source, .. } | PersistError::Read { source, .. } => {
            source.to_string()
        }
        PersistError::InvalidPath(_) => err.to_string(),
    }
}
