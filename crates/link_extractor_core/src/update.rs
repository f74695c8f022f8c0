use crate::{Alert, AppState, Effect, Msg, PassStats, SavedList};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FilesSelected(files) => {
            // Cancelled dialog: keep whatever was loaded before.
            if files.is_empty() {
                return (state, Vec::new());
            }
            state.clear_alert();
            state.set_loaded_files(files);
            vec![extract_effect(&state)]
        }
        Msg::FolderSelected(folder) => {
            state.clear_alert();
            vec![Effect::ScanFolder { folder }]
        }
        Msg::FolderScanned { folder, files } => {
            if files.is_empty() {
                state.set_loaded_files(Vec::new());
                state.raise(Alert::NoJsonFilesFound { folder });
                Vec::new()
            } else {
                state.set_loaded_files(files);
                vec![extract_effect(&state)]
            }
        }
        Msg::FolderScanFailed { folder, message } => {
            state.raise(Alert::FolderUnreadable { folder, message });
            Vec::new()
        }
        Msg::ExtractClicked => {
            state.clear_alert();
            if state.loaded_files().is_empty() {
                state.raise(Alert::NoFilesLoaded);
                Vec::new()
            } else {
                vec![extract_effect(&state)]
            }
        }
        Msg::ExtractionFinished {
            urls,
            files_read,
            skipped,
        } => {
            let stats = PassStats {
                files_read,
                skipped: skipped.len(),
            };
            state.replace_urls(urls, stats);
            if !skipped.is_empty() {
                state.raise(Alert::FilesSkipped(skipped));
            }
            Vec::new()
        }
        Msg::ExtractionFailed(failure) => {
            state.raise(Alert::ExtractionAborted(failure));
            Vec::new()
        }
        Msg::SaveClicked => {
            state.clear_alert();
            if state.urls().is_empty() {
                state.raise(Alert::NoUrlsExtracted);
                Vec::new()
            } else {
                vec![Effect::PromptSavePath]
            }
        }
        Msg::SavePathChosen(None) => Vec::new(),
        Msg::SavePathChosen(Some(path)) => {
            if state.urls().is_empty() {
                state.raise(Alert::NoUrlsExtracted);
                Vec::new()
            } else {
                vec![Effect::WriteUrls {
                    path,
                    urls: state.urls().iter().cloned().collect(),
                }]
            }
        }
        Msg::SaveFinished { path, url_count } => {
            state.record_saved(SavedList { path, url_count });
            Vec::new()
        }
        Msg::SaveFailed { path, message } => {
            state.raise(Alert::SaveFailed { path, message });
            Vec::new()
        }
        Msg::PolicyChanged(policy) => {
            state.clear_alert();
            state.set_policy(policy);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn extract_effect(state: &AppState) -> Effect {
    Effect::ExtractUrls {
        files: state.loaded_files().to_vec(),
        policy: state.policy(),
    }
}
