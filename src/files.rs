use std::fs;
use std::path::Path;

use crate::error::{NoiseError, Result};

pub fn exists(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

/// Creates the directory that will hold `path`, if it is missing.
pub fn with_parent_dir(path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => return Ok(()),
    };

    if !exists(dir) {
        tracing::debug!("creating output directory {}", dir.display());
        fs::create_dir_all(dir).map_err(|source| NoiseError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
