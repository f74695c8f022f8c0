use std::path::PathBuf;

use crate::{FailurePolicy, FileFailure};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked one or more files. Empty means the selection was cancelled.
    FilesSelected(Vec<PathBuf>),
    /// User picked a folder to scan.
    FolderSelected(PathBuf),
    /// Folder scan result.
    FolderScanned { folder: PathBuf, files: Vec<PathBuf> },
    /// Folder scan could not read the folder itself.
    FolderScanFailed { folder: PathBuf, message: String },
    /// User asked to re-run extraction over the loaded files.
    ExtractClicked,
    /// Extraction pass completed.
    ExtractionFinished {
        urls: Vec<String>,
        files_read: usize,
        skipped: Vec<FileFailure>,
    },
    /// Extraction pass aborted on a file.
    ExtractionFailed(FileFailure),
    /// User clicked Save.
    SaveClicked,
    /// Answer to the save prompt; `None` when cancelled.
    SavePathChosen(Option<PathBuf>),
    SaveFinished { path: PathBuf, url_count: usize },
    SaveFailed { path: PathBuf, message: String },
    /// User changed how unreadable files are handled.
    PolicyChanged(FailurePolicy),
    /// Fallback for placeholder wiring.
    NoOp,
}
