//! Link extractor core: pure session state machine and view-model helpers.
mod alert;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use alert::{Alert, Severity};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, FailurePolicy, FileFailure, PassStats, SavedList};
pub use update::update;
pub use view_model::AppViewModel;
