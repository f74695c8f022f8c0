use std::collections::BTreeSet;

use crate::extract::ExtractError;

/// Deduplicated link texts. Ordered only so output is deterministic.
pub type UrlSet = BTreeSet<String>;

/// What an extraction pass does when a file cannot be read or parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort the whole pass on the first failure.
    #[default]
    FailFast,
    /// Record the failure and continue with the remaining files.
    SkipAndContinue,
}

#[derive(Debug, Default)]
pub struct ExtractionReport {
    pub urls: UrlSet,
    pub files_read: usize,
    pub skipped: Vec<ExtractError>,
}
