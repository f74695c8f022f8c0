use std::fmt;
use std::path::PathBuf;

use crate::FileFailure;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// User-visible notice raised by the last action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    NoFilesLoaded,
    NoJsonFilesFound { folder: PathBuf },
    NoUrlsExtracted,
    FolderUnreadable { folder: PathBuf, message: String },
    /// Pass finished but these files were skipped.
    FilesSkipped(Vec<FileFailure>),
    /// Pass aborted; the previous URL list is kept.
    ExtractionAborted(FileFailure),
    SaveFailed { path: PathBuf, message: String },
}

impl Alert {
    pub fn severity(&self) -> Severity {
        match self {
            Alert::NoFilesLoaded
            | Alert::NoJsonFilesFound { .. }
            | Alert::NoUrlsExtracted
            | Alert::FilesSkipped(_) => Severity::Warning,
            Alert::FolderUnreadable { .. }
            | Alert::ExtractionAborted(_)
            | Alert::SaveFailed { .. } => Severity::Error,
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::NoFilesLoaded => write!(f, "No files loaded."),
            Alert::NoJsonFilesFound { folder } => {
                write!(f, "No JSON files found in {}.", folder.display())
            }
            Alert::NoUrlsExtracted => write!(f, "No URLs extracted."),
            Alert::FolderUnreadable { folder, message } => {
                write!(f, "Could not read folder {}: {message}", folder.display())
            }
            Alert::FilesSkipped(failures) => {
                write!(f, "Skipped {} file(s):", failures.len())?;
                for failure in failures {
                    write!(f, "\n  {failure}")?;
                }
                Ok(())
            }
            Alert::ExtractionAborted(failure) => {
                write!(f, "Extraction aborted, previous results kept. {failure}")
            }
            Alert::SaveFailed { path, message } => {
                write!(f, "Could not save to {}: {message}", path.display())
            }
        }
    }
}
