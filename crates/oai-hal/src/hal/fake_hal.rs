//! Fake HAL implementation for testing.
//!
//! This implementation records all operations without touching the desktop,
//! and replays queued picker results in order.

use super::{BrowserOps, FilePickerOps, PickRequest, SelectionResult};
use crate::{HalError, HalResult};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Operation records for testing and verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    PickFiles {
        allow_multiple: bool,
        allowed_extensions: Vec<String>,
    },
    OpenExternal {
        url: String,
    },
}

/// Shared state for FakeHal operations.
#[derive(Debug, Default)]
struct FakeHalState {
    /// All operations that were recorded
    operations: Vec<Operation>,
    /// Results handed out by `pick_files`, front first
    selections: VecDeque<SelectionResult>,
    fail_browser: bool,
}

/// Fake HAL implementation that records operations without executing them.
///
/// Clones share state, so a test can keep one handle while the code under
/// test owns another. A pick with nothing queued yields `Cancelled`.
#[derive(Debug, Clone, Default)]
pub struct FakeHal {
    state: Arc<Mutex<FakeHalState>>,
}

impl FakeHal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result for the next `pick_files` call.
    pub fn queue_selection(&self, result: SelectionResult) {
        self.state.lock().unwrap().selections.push_back(result);
    }

    /// Make every `open_external` call fail.
    pub fn fail_browser(&self, fail: bool) {
        self.state.lock().unwrap().fail_browser = fail;
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<Operation> {
        self.state.lock().unwrap().operations.clone()
    }

    /// Get the number of operations recorded.
    pub fn operation_count(&self) -> usize {
        self.state.lock().unwrap().operations.len()
    }

    /// Check if a specific operation was recorded.
    pub fn has_operation(&self, check: impl Fn(&Operation) -> bool) -> bool {
        self.state.lock().unwrap().operations.iter().any(check)
    }

    /// URLs passed to `open_external`, in call order.
    pub fn opened_urls(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .operations
            .iter()
            .filter_map(|op| match op {
                Operation::OpenExternal { url } => Some(url.clone()),
                _ => None,
            })
            .collect()
    }

    /// Clear all recorded operations and queued results.
    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap();
        state.operations.clear();
        state.selections.clear();
    }

    fn record_operation(&self, op: Operation) {
        self.state.lock().unwrap().operations.push(op);
    }
}

impl FilePickerOps for FakeHal {
    fn pick_files(&self, request: &PickRequest) -> SelectionResult {
        self.record_operation(Operation::PickFiles {
            allow_multiple: request.allow_multiple,
            allowed_extensions: request.allowed_extensions.clone(),
        });
        self.state
            .lock()
            .unwrap()
            .selections
            .pop_front()
            .unwrap_or(SelectionResult::Cancelled)
    }
}

impl BrowserOps for FakeHal {
    fn open_external(&self, url: &str) -> HalResult<()> {
        self.record_operation(Operation::OpenExternal {
            url: url.to_string(),
        });
        if self.state.lock().unwrap().fail_browser {
            return Err(HalError::Other(format!("no browser available for {}", url)));
        }
        Ok(())
    }
}
