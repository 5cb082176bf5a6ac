//! OAI host abstraction layer (HAL).
//!
//! Everything that leaves the process (native dialogs, the user's browser)
//! goes through the traits in [`hal`], so workflow and UI code can be driven
//! by [`FakeHal`] in tests.

pub mod hal;

pub use hal::{
    BrowserOps, DesktopHal, FakeHal, FilePickerOps, FileRef, HostHal, Operation, PickRequest,
    SelectionResult,
};
pub use oai_error::{HalError, HalResult};
