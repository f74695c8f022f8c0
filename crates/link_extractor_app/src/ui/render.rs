use link_extractor_core::{AppViewModel, Severity};

use super::commands::policy_name;

/// Render the view as terminal lines. The display area is only included when
/// `show_urls` is set, i.e. after a pass replaced the URL list.
pub fn render(view: &AppViewModel, show_urls: bool) -> Vec<String> {
    let mut lines = Vec::new();

    if show_urls {
        lines.extend(display_area(view));
    }

    if let Some(alert) = &view.alert {
        let label = match alert.severity() {
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        };
        lines.push(format!("{label}: {alert}"));
    }

    lines.push(status_line(view));
    lines
}

/// The read-only URL list, one URL per line, framed by a header.
pub fn display_area(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.urls.len() + 1);
    lines.push(format!("--- {} URL(s) ---", view.urls.len()));
    lines.extend(view.urls.iter().cloned());
    lines
}

fn status_line(view: &AppViewModel) -> String {
    let mut status = format!(
        "Files: {} | URLs: {} | Policy: {}",
        view.file_count,
        view.urls.len(),
        policy_name(view.policy)
    );
    if let Some(pass) = &view.last_pass {
        status.push_str(&format!(
            " | Last pass: read {}, skipped {}",
            pass.files_read, pass.skipped
        ));
    }
    if let Some(saved) = &view.last_saved {
        status.push_str(&format!(
            " | Saved {} to {}",
            saved.url_count,
            saved.path.display()
        ));
    }
    status
}
