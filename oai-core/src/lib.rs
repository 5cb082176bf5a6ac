//! OAI core library.
//!
//! `oai-core` holds shared types, config, and reusable building blocks used by
//! higher-level crates (workflow steps, TUI, binaries).

pub mod cli;
pub mod links;
pub mod logging;
pub mod state_manager;
pub mod validation;
