//! OAI workflow steps.
//!
//! Each step receives a [`SharedWorkflowState`] handle in its constructor and
//! owns the fields it writes. Rendering lives in `oai-tui`; everything here is
//! testable without a terminal.

pub mod addons;
pub mod state;

pub use addons::{AddonSelection, AddonSelectionController, SelectionOutcome};
pub use state::SharedWorkflowState;
