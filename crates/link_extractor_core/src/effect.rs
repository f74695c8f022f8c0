use std::path::PathBuf;

use crate::FailurePolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Recursively list the `*.json` files of a folder.
    ScanFolder { folder: PathBuf },
    /// Run one extraction pass over the loaded files.
    ExtractUrls {
        files: Vec<PathBuf>,
        policy: FailurePolicy,
    },
    /// Ask the user where to save; answered with `Msg::SavePathChosen`.
    PromptSavePath,
    /// Write the URL list, one per line.
    WriteUrls { path: PathBuf, urls: Vec<String> },
}
