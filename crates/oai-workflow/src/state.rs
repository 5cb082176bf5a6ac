//! Injected handle over the cross-step [`WorkflowState`] record.

use oai_core::state_manager::WorkflowState;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable handle to the workflow record.
///
/// Every clone sees the same record. Reads are open to any step; each field
/// has one writing step, enforced by keeping the setters crate-private.
#[derive(Debug, Clone, Default)]
pub struct SharedWorkflowState {
    inner: Arc<RwLock<WorkflowState>>,
}

impl SharedWorkflowState {
    pub fn new(state: WorkflowState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    /// Copy of the whole record, e.g. for persisting.
    pub fn snapshot(&self) -> WorkflowState {
        self.read().clone()
    }

    pub fn addon_paths(&self) -> Vec<String> {
        self.read().addon_paths.clone()
    }

    /// Written only by the addon step.
    pub(crate) fn set_addon_paths(&self, paths: Vec<String>) {
        self.write().addon_paths = paths;
    }

    // Poisoning is ignored: every write replaces a whole field.
    fn read(&self) -> RwLockReadGuard<'_, WorkflowState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, WorkflowState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
