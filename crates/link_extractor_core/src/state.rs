use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use crate::view_model::AppViewModel;
use crate::Alert;

/// What an extraction pass does when a file cannot be read or parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    #[default]
    FailFast,
    SkipAndContinue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for FileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassStats {
    pub files_read: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedList {
    pub path: PathBuf,
    pub url_count: usize,
}

/// One extraction session: the loaded files and the URL set of the last
/// successful pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    loaded_files: Vec<PathBuf>,
    urls: BTreeSet<String>,
    policy: FailurePolicy,
    last_pass: Option<PassStats>,
    last_saved: Option<SavedList>,
    alert: Option<Alert>,
    generation: u64,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            file_count: self.loaded_files.len(),
            urls: self.urls.iter().cloned().collect(),
            policy: self.policy,
            last_pass: self.last_pass,
            last_saved: self.last_saved.clone(),
            alert: self.alert.clone(),
            generation: self.generation,
            dirty: self.dirty,
        }
    }

    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.loaded_files
    }

    pub fn urls(&self) -> &BTreeSet<String> {
        &self.urls
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_loaded_files(&mut self, files: Vec<PathBuf>) {
        self.loaded_files = files;
        self.dirty = true;
    }

    /// Replace the URL set with the result of a completed pass.
    pub(crate) fn replace_urls(&mut self, urls: Vec<String>, stats: PassStats) {
        self.urls = urls.into_iter().collect();
        self.last_pass = Some(stats);
        self.generation += 1;
        self.dirty = true;
    }

    pub(crate) fn record_saved(&mut self, saved: SavedList) {
        self.last_saved = Some(saved);
        self.dirty = true;
    }

    pub(crate) fn set_policy(&mut self, policy: FailurePolicy) {
        if self.policy != policy {
            self.policy = policy;
            self.dirty = true;
        }
    }

    pub(crate) fn raise(&mut self, alert: Alert) {
        self.alert = Some(alert);
        self.dirty = true;
    }

    /// Alerts are one-shot: each user action starts without one.
    pub(crate) fn clear_alert(&mut self) {
        self.alert = None;
    }
}
