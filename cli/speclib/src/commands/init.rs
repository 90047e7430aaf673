//! `speclib init`: create a library with one default entry.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use speclib_criteria::LibraryManager;

use crate::commands::save_library;
use crate::config::{SpeclibConfig, CONFIG_FILE};

/// Key of the entry every new library starts with.
pub const DEFAULT_ENTRY: &str = "Default";

/// Create `library_path` holding a single default entry, and a
/// `speclib.toml` beside it when there is none.
pub fn run(library_path: &Path) -> Result<()> {
    if library_path.exists() {
        bail!("library '{}' already exists", library_path.display());
    }
    if let Some(parent) = library_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let mut library = LibraryManager::new();
    library.new_entry(DEFAULT_ENTRY)?;
    save_library(library_path, &library)?;
    println!("Created library '{}'", library_path.display());
    println!("  entry: {DEFAULT_ENTRY}");

    let dir = library_path.parent().unwrap_or_else(|| Path::new("."));
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        let file_name = library_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        fs::write(&config_path, SpeclibConfig::template(&file_name))
            .with_context(|| format!("writing {}", config_path.display()))?;
        println!("  {}", config_path.display());
    }
    Ok(())
}
