//! Desktop HAL implementation backed by the native dialog and browser.

use super::{BrowserOps, FilePickerOps, FileRef, PickRequest, SelectionResult};
use crate::{HalError, HalResult};
use rfd::FileDialog;

/// Real HAL implementation for desktop sessions.
#[derive(Debug, Clone, Default)]
pub struct DesktopHal;

impl DesktopHal {
    pub fn new() -> Self {
        Self
    }
}

impl FilePickerOps for DesktopHal {
    fn pick_files(&self, request: &PickRequest) -> SelectionResult {
        let mut dialog = FileDialog::new().set_title(request.title.as_str());
        if !request.allowed_extensions.is_empty() {
            dialog = dialog.add_filter(request.filter_name.as_str(), &request.allowed_extensions);
        }

        log::debug!(
            "Opening file picker (multiple={}, extensions={:?})",
            request.allow_multiple,
            request.allowed_extensions
        );

        let picked = if request.allow_multiple {
            dialog.pick_files()
        } else {
            dialog.pick_file().map(|path| vec![path])
        };

        match picked {
            Some(paths) => SelectionResult::Selected(
                paths.iter().map(|path| FileRef::from_path(path)).collect(),
            ),
            None => SelectionResult::Cancelled,
        }
    }
}

impl BrowserOps for DesktopHal {
    fn open_external(&self, url: &str) -> HalResult<()> {
        log::debug!("Opening {} in external browser", url);
        open::that(url).map_err(|source| HalError::OpenExternal {
            url: url.to_string(),
            source,
        })
    }
}
