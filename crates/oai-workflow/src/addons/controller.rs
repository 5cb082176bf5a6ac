//! Turns picker results into the addon label and the shared addon list.

use crate::state::SharedWorkflowState;
use oai_core::validation::ADDON_EXTENSIONS;
use oai_error::{HalError, OaiError, OaiResult};
use oai_hal::{FilePickerOps, PickRequest, SelectionResult};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Static part of the label; everything after its `:` is replaced per pick.
pub const LABEL_PREFIX: &str = "Selected addons";
pub const CANCELLED_MARKER: &str = "Cancelled!";
/// Shown when the picker confirmed with no files.
pub const EMPTY_MARKER: &str = "none";

const PICKER_TITLE: &str = "Pick the addons you want to install";
const PICKER_FILTER: &str = "Addon archives";

/// What the step currently shows as selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonSelection {
    pub paths: Vec<String>,
    pub display_label: String,
}

impl Default for AddonSelection {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            display_label: format!("{}: ", LABEL_PREFIX),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// This many addons were recorded.
    Selected(usize),
    /// The picker confirmed without files; nothing was recorded.
    Empty,
    Cancelled,
}

/// Mediates between the file picker and the shared workflow state.
///
/// Owned by the UI thread. At most one pick is outstanding at a time; its
/// result is collected with [`poll_selection`](Self::poll_selection) or
/// [`wait_for_selection`](Self::wait_for_selection).
#[derive(Debug)]
pub struct AddonSelectionController {
    state: SharedWorkflowState,
    selection: AddonSelection,
    pending: Option<Receiver<SelectionResult>>,
    redraw: bool,
}

impl AddonSelectionController {
    pub fn new(state: SharedWorkflowState) -> Self {
        Self {
            state,
            selection: AddonSelection::default(),
            pending: None,
            redraw: false,
        }
    }

    /// Picker configuration used by this step: several `.zip` files.
    pub fn pick_request() -> PickRequest {
        PickRequest::new(PICKER_TITLE)
            .multiple(true)
            .with_filter(PICKER_FILTER, ADDON_EXTENSIONS)
    }

    /// Open the picker without blocking the caller.
    ///
    /// The dialog runs on a worker thread. Fails with
    /// [`OaiError::PickPending`] while an earlier pick has not been collected.
    pub fn request_pick(&mut self, picker: Arc<dyn FilePickerOps>) -> OaiResult<()> {
        if self.pending.is_some() {
            return Err(OaiError::PickPending);
        }

        let (tx, rx) = mpsc::channel();
        let request = Self::pick_request();
        thread::Builder::new()
            .name("addon-picker".to_string())
            .spawn(move || {
                let result = picker.pick_files(&request);
                let _ = tx.send(result);
            })
            .map_err(|err| HalError::Other(format!("failed to start file picker: {}", err)))?;

        log::info!("Opened addon file picker");
        self.pending = Some(rx);
        Ok(())
    }

    pub fn is_pick_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply the pick result if it has arrived. Never blocks.
    pub fn poll_selection(&mut self) -> Option<SelectionOutcome> {
        let result = match self.pending.as_ref()?.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                log::warn!("File picker ended without a result; treating it as cancelled");
                SelectionResult::Cancelled
            }
        };
        self.pending = None;
        Some(self.on_selection_result(result))
    }

    /// Like [`poll_selection`](Self::poll_selection) but waits up to `timeout`.
    pub fn wait_for_selection(&mut self, timeout: Duration) -> Option<SelectionOutcome> {
        let result = match self.pending.as_ref()?.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => return None,
            Err(RecvTimeoutError::Disconnected) => {
                log::warn!("File picker ended without a result; treating it as cancelled");
                SelectionResult::Cancelled
            }
        };
        self.pending = None;
        Some(self.on_selection_result(result))
    }

    /// Record a picker result.
    ///
    /// Files replace the shared addon list. A cancellation or an empty
    /// selection leaves the list as it was and only updates the label.
    pub fn on_selection_result(&mut self, result: SelectionResult) -> SelectionOutcome {
        let prefix = self.label_prefix().to_string();
        let outcome = match result {
            SelectionResult::Cancelled => {
                self.set_label(&prefix, CANCELLED_MARKER);
                log::info!("No addons selected.");
                SelectionOutcome::Cancelled
            }
            SelectionResult::Selected(files) if files.is_empty() => {
                self.set_label(&prefix, EMPTY_MARKER);
                log::info!("No addons selected.");
                SelectionOutcome::Empty
            }
            SelectionResult::Selected(files) => {
                let names = files
                    .iter()
                    .map(|file| file.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                self.set_label(&prefix, &names);

                let paths: Vec<String> = files.into_iter().map(|file| file.path).collect();
                self.state.set_addon_paths(paths.clone());
                log::info!("Selected addons: {:?}", paths);
                let count = paths.len();
                self.selection.paths = paths;
                SelectionOutcome::Selected(count)
            }
        };
        self.redraw = true;
        outcome
    }

    pub fn display_label(&self) -> &str {
        &self.selection.display_label
    }

    pub fn paths(&self) -> &[String] {
        &self.selection.paths
    }

    pub fn selection(&self) -> &AddonSelection {
        &self.selection
    }

    pub fn state(&self) -> &SharedWorkflowState {
        &self.state
    }

    /// Returns `true` once after each label change.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    fn label_prefix(&self) -> &str {
        self.selection
            .display_label
            .split(':')
            .next()
            .unwrap_or(LABEL_PREFIX)
    }

    fn set_label(&mut self, prefix: &str, suffix: &str) {
        self.selection.display_label = format!("{}: {}", prefix, suffix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oai_core::state_manager::WorkflowState;
    use oai_hal::{FakeHal, FileRef, Operation};

    const WAIT: Duration = Duration::from_secs(5);

    fn controller() -> (AddonSelectionController, SharedWorkflowState) {
        let state = SharedWorkflowState::default();
        (AddonSelectionController::new(state.clone()), state)
    }

    fn selected(files: &[(&str, &str)]) -> SelectionResult {
        SelectionResult::Selected(
            files
                .iter()
                .map(|(name, path)| FileRef::new(*name, *path))
                .collect(),
        )
    }

    fn prefix_of(label: &str) -> &str {
        label.split(':').next().unwrap()
    }

    struct DyingPicker;

    impl FilePickerOps for DyingPicker {
        fn pick_files(&self, _request: &PickRequest) -> SelectionResult {
            panic!("portal connection lost");
        }
    }

    #[test]
    fn single_addon_sets_label_and_state() {
        let (mut ctl, state) = controller();
        let outcome = ctl.on_selection_result(selected(&[("MindTheGapps.zip", "/tmp/a.zip")]));

        assert_eq!(outcome, SelectionOutcome::Selected(1));
        assert_eq!(ctl.display_label(), "Selected addons: MindTheGapps.zip");
        assert_eq!(state.addon_paths(), vec!["/tmp/a.zip".to_string()]);
        assert_eq!(ctl.paths(), state.addon_paths().as_slice());
    }

    #[test]
    fn several_addons_keep_order() {
        let (mut ctl, state) = controller();
        ctl.on_selection_result(selected(&[("a.zip", "/x/a.zip"), ("b.zip", "/x/b.zip")]));

        assert_eq!(ctl.display_label(), "Selected addons: a.zip, b.zip");
        assert_eq!(
            state.addon_paths(),
            vec!["/x/a.zip".to_string(), "/x/b.zip".to_string()]
        );
    }

    #[test]
    fn cancel_after_selection_keeps_paths() {
        let (mut ctl, state) = controller();
        ctl.on_selection_result(selected(&[("MindTheGapps.zip", "/tmp/a.zip")]));
        let outcome = ctl.on_selection_result(SelectionResult::Cancelled);

        assert_eq!(outcome, SelectionOutcome::Cancelled);
        assert_eq!(ctl.display_label(), "Selected addons: Cancelled!");
        assert_eq!(state.addon_paths(), vec!["/tmp/a.zip".to_string()]);
    }

    #[test]
    fn cancel_never_touches_existing_state() {
        let state = SharedWorkflowState::new(WorkflowState {
            addon_paths: vec!["/earlier/session.zip".to_string()],
            ..WorkflowState::new()
        });
        let mut ctl = AddonSelectionController::new(state.clone());

        ctl.on_selection_result(SelectionResult::Cancelled);
        ctl.on_selection_result(SelectionResult::Cancelled);

        assert_eq!(state.addon_paths(), vec!["/earlier/session.zip".to_string()]);
        assert!(ctl.paths().is_empty());
    }

    #[test]
    fn last_selection_wins() {
        let (mut ctl, state) = controller();
        ctl.on_selection_result(selected(&[("a.zip", "/x/a.zip"), ("b.zip", "/x/b.zip")]));
        ctl.on_selection_result(selected(&[("c.zip", "/y/c.zip")]));

        assert_eq!(state.addon_paths(), vec!["/y/c.zip".to_string()]);
        assert_eq!(ctl.display_label(), "Selected addons: c.zip");
    }

    #[test]
    fn empty_selection_is_not_recorded() {
        let (mut ctl, state) = controller();
        ctl.on_selection_result(selected(&[("a.zip", "/x/a.zip")]));
        let outcome = ctl.on_selection_result(SelectionResult::Selected(Vec::new()));

        assert_eq!(outcome, SelectionOutcome::Empty);
        assert_eq!(ctl.display_label(), "Selected addons: none");
        assert_eq!(state.addon_paths(), vec!["/x/a.zip".to_string()]);
        assert_eq!(ctl.paths(), ["/x/a.zip".to_string()]);
    }

    #[test]
    fn label_prefix_survives_any_sequence() {
        let (mut ctl, _state) = controller();
        let results = vec![
            SelectionResult::Cancelled,
            selected(&[("weird:name.zip", "/x/weird:name.zip")]),
            SelectionResult::Selected(Vec::new()),
            selected(&[("a.zip", "/x/a.zip"), ("b.zip", "/x/b.zip")]),
            SelectionResult::Cancelled,
        ];
        for result in results {
            ctl.on_selection_result(result);
            assert_eq!(prefix_of(ctl.display_label()), LABEL_PREFIX);
        }
    }

    #[test]
    fn every_result_requests_one_redraw() {
        let (mut ctl, _state) = controller();
        assert!(!ctl.take_redraw());
        ctl.on_selection_result(SelectionResult::Cancelled);
        assert!(ctl.take_redraw());
        assert!(!ctl.take_redraw());
    }

    #[test]
    fn pick_request_allows_multiple_zip_files() {
        let request = AddonSelectionController::pick_request();
        assert!(request.allow_multiple);
        assert_eq!(request.allowed_extensions, vec!["zip".to_string()]);
    }

    #[test]
    fn request_pick_delivers_result_through_wait() {
        let (mut ctl, state) = controller();
        let hal = FakeHal::new();
        hal.queue_selection(selected(&[("NikGapps-core.zip", "/dl/NikGapps-core.zip")]));

        ctl.request_pick(Arc::new(hal.clone())).unwrap();
        assert!(ctl.is_pick_pending());

        let outcome = ctl.wait_for_selection(WAIT);
        assert_eq!(outcome, Some(SelectionOutcome::Selected(1)));
        assert!(!ctl.is_pick_pending());
        assert_eq!(state.addon_paths(), vec!["/dl/NikGapps-core.zip".to_string()]);
        assert!(hal.has_operation(|op| matches!(
            op,
            Operation::PickFiles { allow_multiple: true, .. }
        )));
    }

    #[test]
    fn second_request_while_pending_is_rejected() {
        let (mut ctl, _state) = controller();
        let hal = Arc::new(FakeHal::new());

        ctl.request_pick(hal.clone()).unwrap();
        let err = ctl.request_pick(hal.clone()).unwrap_err();
        assert!(matches!(err, OaiError::PickPending));

        assert_eq!(ctl.wait_for_selection(WAIT), Some(SelectionOutcome::Cancelled));
        assert!(ctl.request_pick(hal).is_ok());
    }

    #[test]
    fn poll_without_request_is_idle() {
        let (mut ctl, _state) = controller();
        assert_eq!(ctl.poll_selection(), None);
        assert_eq!(ctl.wait_for_selection(Duration::from_millis(1)), None);
    }

    #[test]
    fn picker_that_dies_counts_as_cancelled() {
        let (mut ctl, state) = controller();
        ctl.on_selection_result(selected(&[("a.zip", "/x/a.zip")]));

        ctl.request_pick(Arc::new(DyingPicker)).unwrap();
        assert_eq!(ctl.wait_for_selection(WAIT), Some(SelectionOutcome::Cancelled));
        assert_eq!(ctl.display_label(), "Selected addons: Cancelled!");
        assert_eq!(state.addon_paths(), vec!["/x/a.zip".to_string()]);
    }
}
