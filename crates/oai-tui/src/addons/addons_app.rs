//! State and input handling for the addon step.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use oai_core::links::AddonLink;
use oai_error::OaiError;
use oai_hal::{BrowserOps, FilePickerOps, HostHal};
use oai_workflow::{AddonSelectionController, SelectionOutcome, SharedWorkflowState};
use std::sync::Arc;
use std::time::Duration;

pub const STEP_TITLE: &str = "You can select additional addons to install.";
pub const HELP_BUTTON: &str = "What kind of addons?";
pub const PICK_BUTTON: &str = "Pick the addons you want to install";
pub const CONFIRM_BUTTON: &str = "Next";

pub const PICK_PENDING_NOTE: &str = "A file picker is already open.";
const PICK_WAITING_NOTE: &str = "Waiting for the file picker...";

/// Result of handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
    /// The user pressed "Next"; the confirm callback has run.
    Confirmed,
}

/// Focusable controls, in screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Help,
    /// Index into the link list.
    Link(usize),
    Pick,
    Confirm,
}

/// The addon selection screen.
pub struct AddonsView {
    controller: AddonSelectionController,
    picker: Arc<dyn FilePickerOps>,
    browser: Arc<dyn BrowserOps>,
    links: Vec<AddonLink>,
    on_confirm: Box<dyn FnMut()>,
    focus: usize,
    help_open: bool,
    info: Option<String>,
}

impl AddonsView {
    pub fn new<H, F>(
        state: SharedWorkflowState,
        on_confirm: F,
        hal: Arc<H>,
        links: Vec<AddonLink>,
    ) -> Self
    where
        H: HostHal + 'static,
        F: FnMut() + 'static,
    {
        let picker: Arc<dyn FilePickerOps> = hal.clone();
        let browser: Arc<dyn BrowserOps> = hal;
        Self {
            controller: AddonSelectionController::new(state),
            picker,
            browser,
            links,
            on_confirm: Box::new(on_confirm),
            focus: 0,
            help_open: false,
            info: None,
        }
    }

    pub fn controls(&self) -> Vec<Control> {
        let mut controls = vec![Control::Help];
        controls.extend((0..self.links.len()).map(Control::Link));
        controls.push(Control::Pick);
        controls.push(Control::Confirm);
        controls
    }

    pub fn control_label(&self, control: Control) -> &str {
        match control {
            Control::Help => HELP_BUTTON,
            Control::Link(index) => self
                .links
                .get(index)
                .map(|link| link.label.as_str())
                .unwrap_or_default(),
            Control::Pick => PICK_BUTTON,
            Control::Confirm => CONFIRM_BUTTON,
        }
    }

    pub fn focused_control(&self) -> Control {
        self.controls()
            .get(self.focus)
            .copied()
            .unwrap_or(Control::Confirm)
    }

    pub fn is_help_open(&self) -> bool {
        self.help_open
    }

    /// Transient message shown above the confirm button.
    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    pub fn links(&self) -> &[AddonLink] {
        &self.links
    }

    pub fn controller(&self) -> &AddonSelectionController {
        &self.controller
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> InputResult {
        if key.kind != KeyEventKind::Press {
            return InputResult::Continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputResult::Quit;
        }
        if self.help_open {
            return self.handle_help_input(key);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.move_focus(-1);
                InputResult::Continue
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.move_focus(1);
                InputResult::Continue
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.focused_control()),
            KeyCode::Char('?') => self.activate(Control::Help),
            KeyCode::Char('p') => self.activate(Control::Pick),
            KeyCode::Char('n') => self.activate(Control::Confirm),
            KeyCode::Esc | KeyCode::Char('q') => InputResult::Quit,
            _ => InputResult::Continue,
        }
    }

    fn handle_help_input(&mut self, key: KeyEvent) -> InputResult {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?')
        ) {
            self.help_open = false;
        }
        InputResult::Continue
    }

    pub fn activate(&mut self, control: Control) -> InputResult {
        match control {
            Control::Help => {
                self.help_open = true;
                InputResult::Continue
            }
            Control::Link(index) => {
                self.open_link(index);
                InputResult::Continue
            }
            Control::Pick => {
                self.start_pick();
                InputResult::Continue
            }
            Control::Confirm => self.confirm(),
        }
    }

    /// Advance the workflow. "Next" is never disabled.
    pub fn confirm(&mut self) -> InputResult {
        log::info!(
            "Addon step confirmed with {} addon(s)",
            self.controller.state().addon_paths().len()
        );
        (self.on_confirm)();
        InputResult::Confirmed
    }

    /// Collect a finished pick, if any. Returns `true` when a redraw is due.
    pub fn tick(&mut self) -> bool {
        if let Some(outcome) = self.controller.poll_selection() {
            self.apply_outcome(outcome);
        }
        self.controller.take_redraw()
    }

    /// Block up to `timeout` for the outstanding pick.
    pub fn wait_for_selection(&mut self, timeout: Duration) -> Option<SelectionOutcome> {
        let outcome = self.controller.wait_for_selection(timeout)?;
        self.apply_outcome(outcome);
        Some(outcome)
    }

    fn apply_outcome(&mut self, outcome: SelectionOutcome) {
        log::debug!("Addon pick finished: {:?}", outcome);
        self.info = None;
    }

    fn start_pick(&mut self) {
        match self.controller.request_pick(self.picker.clone()) {
            Ok(()) => self.info = Some(PICK_WAITING_NOTE.to_string()),
            Err(OaiError::PickPending) => self.info = Some(PICK_PENDING_NOTE.to_string()),
            Err(err) => {
                log::error!("Could not open the addon file picker: {}", err);
                self.info = Some(format!("Could not open the file picker: {}", err));
            }
        }
    }

    fn open_link(&mut self, index: usize) {
        let Some(link) = self.links.get(index) else {
            return;
        };
        log::info!("Opening {} ({})", link.label, link.url);
        if let Err(err) = self.browser.open_external(&link.url) {
            log::warn!("{}", err);
        }
    }

    fn move_focus(&mut self, delta: isize) {
        let len = self.controls().len() as isize;
        if len == 0 {
            return;
        }
        self.focus = (self.focus as isize + delta).rem_euclid(len) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use oai_core::links::addon_links;
    use oai_hal::{FakeHal, FileRef, Operation, SelectionResult};
    use std::cell::Cell;
    use std::rc::Rc;

    const WAIT: Duration = Duration::from_secs(5);

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn view_with(hal: FakeHal) -> (AddonsView, Rc<Cell<usize>>, SharedWorkflowState) {
        let confirmed = Rc::new(Cell::new(0));
        let counter = confirmed.clone();
        let state = SharedWorkflowState::default();
        let links = addon_links().unwrap().links.clone();
        let view = AddonsView::new(
            state.clone(),
            move || counter.set(counter.get() + 1),
            Arc::new(hal),
            links,
        );
        (view, confirmed, state)
    }

    #[test]
    fn controls_follow_screen_order() {
        let (view, _, _) = view_with(FakeHal::new());
        assert_eq!(
            view.controls(),
            vec![
                Control::Help,
                Control::Link(0),
                Control::Link(1),
                Control::Link(2),
                Control::Pick,
                Control::Confirm
            ]
        );
        assert_eq!(view.focused_control(), Control::Help);
    }

    #[test]
    fn focus_wraps_both_ways() {
        let (mut view, _, _) = view_with(FakeHal::new());
        view.handle_input(key(KeyCode::Up));
        assert_eq!(view.focused_control(), Control::Confirm);
        view.handle_input(key(KeyCode::Tab));
        assert_eq!(view.focused_control(), Control::Help);
        view.handle_input(key(KeyCode::Char('j')));
        assert_eq!(view.focused_control(), Control::Link(0));
        view.handle_input(key(KeyCode::BackTab));
        assert_eq!(view.focused_control(), Control::Help);
    }

    #[test]
    fn help_opens_and_closes_without_touching_state() {
        let (mut view, _, state) = view_with(FakeHal::new());
        view.handle_input(key(KeyCode::Enter));
        assert!(view.is_help_open());

        // Keys other than close are swallowed while the dialog is up.
        assert_eq!(view.handle_input(key(KeyCode::Char('n'))), InputResult::Continue);
        assert!(view.is_help_open());

        view.handle_input(key(KeyCode::Esc));
        assert!(!view.is_help_open());

        view.handle_input(key(KeyCode::Char('?')));
        assert!(view.is_help_open());
        view.handle_input(key(KeyCode::Char('?')));
        assert!(!view.is_help_open());
        assert!(state.addon_paths().is_empty());
    }

    #[test]
    fn next_confirms_once_per_press() {
        let (mut view, confirmed, _) = view_with(FakeHal::new());
        assert_eq!(view.handle_input(key(KeyCode::Char('n'))), InputResult::Confirmed);
        assert_eq!(confirmed.get(), 1);
    }

    #[test]
    fn escape_and_q_quit() {
        let (mut view, confirmed, _) = view_with(FakeHal::new());
        assert_eq!(view.handle_input(key(KeyCode::Esc)), InputResult::Quit);
        assert_eq!(view.handle_input(key(KeyCode::Char('q'))), InputResult::Quit);
        assert_eq!(confirmed.get(), 0);
    }

    #[test]
    fn link_button_opens_its_url() {
        let hal = FakeHal::new();
        let (mut view, _, _) = view_with(hal.clone());
        view.activate(Control::Link(1));
        assert_eq!(
            hal.opened_urls(),
            vec!["https://wiki.lineageos.org/gapps#downloads".to_string()]
        );
    }

    #[test]
    fn pick_key_runs_picker_and_updates_label() {
        let hal = FakeHal::new();
        hal.queue_selection(SelectionResult::Selected(vec![FileRef::new(
            "MindTheGapps.zip",
            "/tmp/a.zip",
        )]));
        let (mut view, _, state) = view_with(hal.clone());

        view.handle_input(key(KeyCode::Char('p')));
        assert_eq!(view.info(), Some(PICK_WAITING_NOTE));

        assert_eq!(
            view.wait_for_selection(WAIT),
            Some(SelectionOutcome::Selected(1))
        );
        assert_eq!(view.info(), None);
        assert_eq!(
            view.controller().display_label(),
            "Selected addons: MindTheGapps.zip"
        );
        assert_eq!(state.addon_paths(), vec!["/tmp/a.zip".to_string()]);
        assert!(hal.has_operation(|op| matches!(op, Operation::PickFiles { .. })));
    }

    #[test]
    fn second_pick_shows_note() {
        let (mut view, _, _) = view_with(FakeHal::new());
        view.activate(Control::Pick);
        view.activate(Control::Pick);
        assert_eq!(view.info(), Some(PICK_PENDING_NOTE));

        assert_eq!(
            view.wait_for_selection(WAIT),
            Some(SelectionOutcome::Cancelled)
        );
        assert_eq!(
            view.controller().display_label(),
            "Selected addons: Cancelled!"
        );
    }

    #[test]
    fn release_events_are_ignored() {
        let (mut view, confirmed, _) = view_with(FakeHal::new());
        let mut release = key(KeyCode::Char('n'));
        release.kind = KeyEventKind::Release;
        assert_eq!(view.handle_input(release), InputResult::Continue);
        assert_eq!(confirmed.get(), 0);
    }
}
