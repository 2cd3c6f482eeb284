//! Filesystem layer: output root creation and resource writes.
//!
//! All writes happen under a single output root. Relative paths derived from
//! URLs are checked before use so a hostile page cannot steer a write outside
//! the root.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Ensures the output root directory exists.
///
/// Reusing an existing directory is fine; files from a previous run are
/// overwritten individually as the mirror proceeds.
pub fn prepare_output_root(root: &Path) -> Result<()> {
    if root.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(root)
        .with_context(|| format!("failed to create directory: {}", root.display()))?;
    tracing::info!("created directory: {}", root.display());
    Ok(())
}

/// Writes `content` at `relative` under `root`, creating parent directories
/// as needed. Returns the full path written.
///
/// `relative` must consist of normal components only. `..`, absolute paths
/// and an empty path are rejected rather than resolved.
pub fn save_bytes(root: &Path, relative: &Path, content: &[u8]) -> Result<PathBuf> {
    if relative.as_os_str().is_empty() {
        bail!("refusing to write empty relative path");
    }
    for component in relative.components() {
        match component {
            Component::Normal(_) => {}
            other => bail!(
                "path escapes the output root: {} (component {:?})",
                relative.display(),
                other
            ),
        }
    }

    let full_path = root.join(relative);
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    fs::write(&full_path, content)
        .with_context(|| format!("failed to write file: {}", full_path.display()))?;
    Ok(full_path)
}
