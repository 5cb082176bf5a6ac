//! Outbound navigation trait.

use crate::HalResult;

/// Trait for handing URLs to the user's browser.
pub trait BrowserOps {
    /// Open `url` in the default external browser.
    ///
    /// Returns once the request has been handed to the host; there is no
    /// signal about whether the page actually loaded.
    fn open_external(&self, url: &str) -> HalResult<()>;
}
