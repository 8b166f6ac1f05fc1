//! Path utilities for the studio data directory

use std::path::PathBuf;
use std::sync::OnceLock;

/// Global storage for a custom data directory path
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the data directory with an optional custom path.
/// Must be called early, before any store is opened at the default
/// location. If `custom_path` is None, uses the default ~/.tshirt-studio.
pub fn init_data_dir(custom_path: Option<PathBuf>) {
    let path = custom_path.unwrap_or_else(default_data_dir);
    if DATA_DIR.set(path.clone()).is_err() {
        let existing = DATA_DIR
            .get()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        tracing::debug!(
            path = %path.display(),
            existing = %existing,
            "Data directory already initialized"
        );
    }
}

/// Get the default data directory path (~/.tshirt-studio)
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".tshirt-studio"))
        .unwrap_or_else(|| PathBuf::from(".tshirt-studio"))
}

/// Get the base data directory.
/// Returns the custom path if set via init_data_dir(), otherwise ~/.tshirt-studio
pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the saved-designs file path (~/.tshirt-studio/designs.json)
pub fn designs_path() -> PathBuf {
    data_dir().join("designs.json")
}
