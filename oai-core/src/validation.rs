//! Input validation guard rails for user-provided addon paths.

use oai_error::{OaiError, OaiResult};
use std::path::Path;

/// Extensions the addon step accepts, matching the picker filter.
pub const ADDON_EXTENSIONS: &[&str] = &["zip"];

/// Check that `path` names an existing addon archive.
///
/// Only the file name is checked; archive contents are left to the flashing step.
pub fn validate_addon_path(path: &Path) -> OaiResult<()> {
    if path.as_os_str().is_empty() {
        return Err(OaiError::ValidationFailed("Addon path is required.".to_string()));
    }
    if !path.exists() {
        return Err(OaiError::ValidationFailed(format!(
            "Addon file not found: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(OaiError::ValidationFailed(format!(
            "Addon path is not a file: {}",
            path.display()
        )));
    }
    let extension_ok = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ADDON_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false);
    if !extension_ok {
        return Err(OaiError::ValidationFailed(format!(
            "Addon must be a .zip archive: {}",
            path.display()
        )));
    }
    Ok(())
}
