//! Addon selection step.

mod controller;

pub use controller::{
    AddonSelection, AddonSelectionController, SelectionOutcome, CANCELLED_MARKER, EMPTY_MARKER,
    LABEL_PREFIX,
};
