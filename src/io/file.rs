use std::io;
use std::path::{Path, PathBuf};

/// Write an artifact, creating parent directories as needed.
pub fn write_text(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)
}

/// Resolve where the JSON artifact lands: a `.json` path is used as-is,
/// anything else is treated as a directory receiving `trace.json`.
pub fn json_artifact_path(out: &Path) -> PathBuf {
    if out.extension().is_some_and(|e| e == "json") {
        out.to_path_buf()
    } else {
        out.join("trace.json")
    }
}
