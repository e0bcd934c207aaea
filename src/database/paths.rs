use std::path::{Path, PathBuf};

/// Resolve the backing file for a named table: `<dir>/<table>.json`.
pub fn table_path(dir: &Path, table: &str) -> PathBuf {
    dir.join(format!("{}.json", table))
}
