//! Saving the CSV export through the native save dialog.

/// Ask for a target path and write the CSV there. A cancelled dialog is not
/// an error.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_csv(contents: &str) {
    use rfd::FileDialog;

    let Some(path) = FileDialog::new()
        .set_file_name("employees.csv")
        .add_filter("CSV", &["csv"])
        .save_file()
    else {
        log::debug!("CSV export cancelled");
        return;
    };

    match std::fs::write(&path, contents) {
        Ok(()) => log::info!("exported employees to {}", path.display()),
        Err(err) => log::error!("failed to write {}: {err}", path.display()),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn save_csv(_contents: &str) {
    log::warn!("CSV export is not supported on web builds");
}
