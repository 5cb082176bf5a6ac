//! OAI TUI.
//!
//! Installer steps rendered with ratatui; each step keeps its input handling
//! apart from its drawing so both can be exercised without a terminal.

pub mod addons;
pub mod widgets;
