use std::path::{Path, PathBuf};

const DEFAULT_LOG_DIR: &str = "oai";
const DEFAULT_LOG_FILE: &str = "oai.log";

/// Default log location, used when `--log-file` is not given.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir()
        .join(DEFAULT_LOG_DIR)
        .join(DEFAULT_LOG_FILE)
}

/// Initialise the global logger.
///
/// The TUI owns the terminal, so records go to a file. If the file cannot be
/// created (permissions, readonly FS, etc.), fall back to stderr.
pub fn init_with(log_file: Option<PathBuf>) {
    use env_logger::Target;

    let path = log_file.unwrap_or_else(default_log_path);
    let target = open_log_file(&path)
        .map(|file| Target::Pipe(Box::new(file)))
        .unwrap_or(Target::Stderr);

    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(target)
        .try_init();
}

fn open_log_file(path: &Path) -> std::io::Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}
