use crate::{Alert, FailurePolicy, PassStats, SavedList};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub file_count: usize,
    /// Contents of the display area, one URL per entry.
    pub urls: Vec<String>,
    pub policy: FailurePolicy,
    pub last_pass: Option<PassStats>,
    pub last_saved: Option<SavedList>,
    pub alert: Option<Alert>,
    /// Bumped every time the URL list is replaced by a pass.
    pub generation: u64,
    pub dirty: bool,
}
