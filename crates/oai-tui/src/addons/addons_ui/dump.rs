use super::super::addons_app::AddonsView;
use super::content::{
    build_info_panel, build_step_lines, expected_actions, help_text, status_message, STEP_NAME,
};

pub fn dump_step(view: &AddonsView) -> String {
    let step_lines = build_step_lines(view);
    let header = "OAI Installer";
    let step_hint = step_lines
        .first()
        .cloned()
        .unwrap_or_else(|| "🧭 Step: (unknown)".to_string());
    let body_lines = if step_lines.len() > 1 {
        step_lines[1..].join("\n")
    } else {
        "(no body content)".to_string()
    };
    let help = if view.is_help_open() {
        format!("open\n{}", help_text())
    } else {
        "closed".to_string()
    };

    format!(
        "STEP: {}\n\n- Header: {}\n- Step hint line: {}\n- Body contents:\n{}\n- Info panel:\n{}\n- Help dialog: {}\n- Status: {}\n- Expected user actions (keys): {}\n",
        STEP_NAME,
        header,
        step_hint,
        body_lines,
        build_info_panel(view),
        help,
        status_message(view),
        expected_actions(view)
    )
}
