use super::super::addons_app::{AddonsView, Control, STEP_TITLE};
use crate::widgets::button;

pub(super) const STEP_NAME: &str = "Select addons";
pub(super) const HELP_TITLE: &str = "What kind of addons are supported?";

const PICK_HEADING: &str = "Select addons:";
const DEFAULT_STATUS: &str = "Addons are optional. Press n to continue without any.";

pub(super) fn build_step_lines(view: &AddonsView) -> Vec<String> {
    let focused = view.focused_control();
    let mut items = Vec::new();
    items.push(format!("🧭 Step: {}", STEP_NAME));
    items.push(STEP_TITLE.to_string());
    items.push(button(
        view.control_label(Control::Help),
        focused == Control::Help,
    ));
    items.push("".to_string());

    for (index, link) in view.links().iter().enumerate() {
        let control = Control::Link(index);
        items.push(link.description.clone());
        items.push(button(view.control_label(control), focused == control));
    }
    items.push("".to_string());

    items.push(PICK_HEADING.to_string());
    items.push(button(
        view.control_label(Control::Pick),
        focused == Control::Pick,
    ));
    items.push(view.controller().display_label().to_string());
    items.push("".to_string());

    if let Some(info) = view.info() {
        items.push(format!("ℹ️ {}", info));
    }
    items.push(button(
        view.control_label(Control::Confirm),
        focused == Control::Confirm,
    ));
    items
}

pub(super) fn build_info_panel(view: &AddonsView) -> String {
    let paths = view.controller().state().addon_paths();
    let mut lines = vec!["Recorded addons:".to_string()];
    if paths.is_empty() {
        lines.push("(none)".to_string());
    } else {
        lines.extend(paths.iter().map(|path| format!("- {}", path)));
    }
    if view.controller().is_pick_pending() {
        lines.push("".to_string());
        lines.push("📂 File picker open".to_string());
    }
    lines.join("\n")
}

pub(super) fn expected_actions(view: &AddonsView) -> String {
    if view.is_help_open() {
        return "Esc/Enter/?: close help".to_string();
    }
    "↑/↓ or j/k or Tab: move  Enter/Space: activate  p: pick addons  n: next  ?: help  Esc/q: quit"
        .to_string()
}

pub(super) fn status_message(view: &AddonsView) -> String {
    match view.info() {
        Some(info) => format!("ℹ️ {}", info),
        None => format!("🧩 {}", DEFAULT_STATUS),
    }
}

/// Contents of the "What kind of addons?" dialog.
pub fn help_text() -> String {
    let lines = [
        "Please select all addons you want to install at once. The most common ones are listed below.",
        "",
        "Google Apps",
        "These packages bring back Google functionality that many proprietary apps require.",
        "- MicroG: a free re-implementation of Google's proprietary Android user space apps and libraries.",
        "- MindTheGapps: the full Google set, with every app found on a standard Android device.",
        "- NikGApps: pick your own set of Google apps and let NikGApps manage them.",
        "",
        "The right package depends on your Android OS version and the phone's architecture.",
        "LineageOS' device page (https://wiki.lineageos.org/devices) lists both.",
        "Use only one Google Apps package at a time. File names look like:",
        "- MindTheGapps-<AndroidVersion>-<architecture>-<date>_<time>.zip (Android 12L is 12.1)",
        "- NikGapps-<flavour>-<architecture>-<AndroidVersion>-<date>-signed.zip (flavours range from core to full)",
        "- MicroG ships a single zip.",
        "",
        "F-Droid App-Store",
        "F-Droid is an installable catalogue of libre software apps for Android.",
        "Its client lets you browse, install and update apps much like the Play Store.",
        "The recommended installation is the privileged OTA zip:",
        "https://f-droid.org/en/packages/org.fdroid.fdroid.privileged.ota",
    ];
    lines.join("\n")
}
