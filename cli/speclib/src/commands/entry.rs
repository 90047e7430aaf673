//! `speclib new` and `speclib remove`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::commands::{load_library, save_library};

/// Add a default entry under `key`.
pub fn new(library_path: &Path, key: &str) -> Result<()> {
    let (mut library, _) = load_library(library_path)?;
    library
        .new_entry(key)
        .with_context(|| format!("adding entry '{key}'"))?;
    save_library(library_path, &library)?;
    println!("Added entry '{key}'");
    Ok(())
}

pub fn remove(library_path: &Path, key: &str) -> Result<()> {
    let (mut library, _) = load_library(library_path)?;
    library
        .remove(key)
        .with_context(|| format!("removing entry '{key}'"))?;
    save_library(library_path, &library)?;
    println!("Removed entry '{key}'");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init;

    #[test]
    fn add_then_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("criteria.slf");
        init::run(&path).unwrap();

        new(&path, "WSDOT").unwrap();
        let (library, _) = load_library(&path).unwrap();
        assert!(library.contains("WSDOT"));

        remove(&path, "WSDOT").unwrap();
        let (library, _) = load_library(&path).unwrap();
        assert!(!library.contains("WSDOT"));
    }

    #[test]
    fn reserved_and_duplicate_keys_fail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("criteria.slf");
        init::run(&path).unwrap();

        let err = new(&path, "HL-93").unwrap_err();
        assert!(format!("{err:#}").contains("reserved"));
        assert!(new(&path, init::DEFAULT_ENTRY).is_err());
        assert!(remove(&path, "missing").is_err());
    }
}
