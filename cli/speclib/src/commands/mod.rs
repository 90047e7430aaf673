//! CLI command implementations.

pub mod diff;
pub mod entry;
pub mod init;
pub mod list;
pub mod show;
pub mod verify;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use speclib_criteria::{LibraryManager, RefactoredParameters};
use tracing::debug;

/// Read a library file. Also returns the parameters that legacy entries
/// handed back while loading, by key.
pub(crate) fn load_library(
    path: &Path,
) -> Result<(LibraryManager, BTreeMap<String, RefactoredParameters>)> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let loaded = LibraryManager::from_bytes(&bytes)
        .with_context(|| format!("loading {}", path.display()))?;
    debug!(path = %path.display(), entries = loaded.0.len(), "read library");
    Ok(loaded)
}

pub(crate) fn save_library(path: &Path, library: &LibraryManager) -> Result<()> {
    let bytes = library
        .to_bytes()
        .with_context(|| format!("serializing {}", path.display()))?;
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    debug!(path = %path.display(), entries = library.len(), "wrote library");
    Ok(())
}
