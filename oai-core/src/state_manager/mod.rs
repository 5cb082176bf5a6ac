//! Cross-step workflow record and its on-disk form.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

const STATE_VERSION: u32 = 1;

/// Inputs and outputs that outlive a single workflow step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkflowState {
    pub version: u32,
    /// Addon archives chosen on the addon step, in selection order.
    #[serde(default)]
    pub addon_paths: Vec<String>,
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            addon_paths: Vec::new(),
        }
    }
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_addons(&self) -> bool {
        !self.addon_paths.is_empty()
    }
}

pub fn load_state(path: &Path) -> Result<Option<WorkflowState>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file: {}", path.display()))?;
    let state: WorkflowState = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse state file: {}", path.display()))?;
    if state.version != STATE_VERSION {
        anyhow::bail!(
            "Unsupported state file version {} (expected {}): {}",
            state.version,
            STATE_VERSION,
            path.display()
        );
    }
    Ok(Some(state))
}

/// Write `state` next to `path` and rename it into place.
pub fn save_state_atomic(path: &Path, state: &WorkflowState) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create state directory: {}", parent.display()))?;
    }

    let payload = serde_json::to_string_pretty(state).context("Failed to serialize state")?;
    let tmp_path = temp_path(path);
    {
        let mut file = File::create(&tmp_path).with_context(|| {
            format!("Failed to create temp state file: {}", tmp_path.display())
        })?;
        file.write_all(payload.as_bytes())
            .context("Failed to write state")?;
        file.sync_all().context("Failed to flush state")?;
    }

    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to replace state file: {}", path.display()))?;
    log::debug!("Saved workflow state to {}", path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("oai-state.json");
    path.with_file_name(format!("{}.tmp", file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_state_file_is_not_an_error() {
        let dir = tempdir().unwrap();
        assert!(load_state(&dir.path().join("absent.json")).unwrap().is_none());
    }

    #[test]
    fn saved_state_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state").join("oai-state.json");
        let state = WorkflowState {
            addon_paths: vec!["/x/a.zip".to_string(), "/x/b.zip".to_string()],
            ..WorkflowState::new()
        };

        save_state_atomic(&path, &state).unwrap();
        assert_eq!(load_state(&path).unwrap(), Some(state));
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn older_files_without_addons_default_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("oai-state.json");
        fs::write(&path, r#"{ "version": 1 }"#).unwrap();

        let state = load_state(&path).unwrap().unwrap();
        assert!(!state.has_addons());
    }

    #[test]
    fn unknown_version_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("oai-state.json");
        fs::write(&path, r#"{ "version": 99, "addon_paths": [] }"#).unwrap();

        let err = load_state(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported state file version 99"));
    }
}
