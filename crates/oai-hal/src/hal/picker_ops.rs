//! Native file selection trait.

use std::path::Path;

/// A file chosen in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    /// Display name (final path component).
    pub name: String,
    /// Filesystem location as reported by the host.
    pub path: String,
}

impl FileRef {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Build a reference from a path, using its file name for display.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            name,
            path: path.to_string_lossy().into_owned(),
        }
    }
}

/// Outcome of a single picker invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionResult {
    /// The user dismissed the dialog without choosing.
    Cancelled,
    /// The user confirmed the dialog; may be empty on some hosts.
    Selected(Vec<FileRef>),
}

impl SelectionResult {
    pub fn files(&self) -> &[FileRef] {
        match self {
            SelectionResult::Cancelled => &[],
            SelectionResult::Selected(files) => files,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, SelectionResult::Cancelled)
    }
}

/// Picker configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickRequest {
    pub title: String,
    /// Label shown next to the extension filter.
    pub filter_name: String,
    pub allow_multiple: bool,
    /// Extensions without the leading dot. Empty means no filter.
    pub allowed_extensions: Vec<String>,
}

impl PickRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            filter_name: String::new(),
            allow_multiple: false,
            allowed_extensions: Vec::new(),
        }
    }

    pub fn multiple(mut self, allow: bool) -> Self {
        self.allow_multiple = allow;
        self
    }

    pub fn with_filter(mut self, name: impl Into<String>, extensions: &[&str]) -> Self {
        self.filter_name = name.into();
        self.allowed_extensions = extensions.iter().map(|ext| ext.to_string()).collect();
        self
    }
}

/// Trait for the host's file chooser.
///
/// Implementations block until the user answers and must produce exactly one
/// result per call. Callers that must not block run this on a worker thread.
pub trait FilePickerOps: Send + Sync {
    fn pick_files(&self, request: &PickRequest) -> SelectionResult;
}
