//! HAL trait definitions and implementations.
//!
//! This module defines the host-facing traits and provides both a real
//! (DesktopHal) and a fake (FakeHal) implementation.

pub mod browser_ops;
pub mod desktop_hal;
pub mod fake_hal;
pub mod picker_ops;

pub use browser_ops::BrowserOps;
pub use desktop_hal::DesktopHal;
pub use fake_hal::{FakeHal, Operation};
pub use picker_ops::{FilePickerOps, FileRef, PickRequest, SelectionResult};

/// Complete HAL combining all host operation traits.
pub trait HostHal: FilePickerOps + BrowserOps + Send + Sync {}

/// Automatically implement HostHal for any type implementing all required traits.
impl<T> HostHal for T where T: FilePickerOps + BrowserOps + Send + Sync {}
