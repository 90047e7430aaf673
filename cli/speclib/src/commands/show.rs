//! `speclib show`: report every module of one entry.

use std::path::Path;

use anyhow::{Context, Result};
use speclib_criteria::{LibraryManager, TextReport};

use crate::commands::load_library;

pub fn run(library_path: &Path, key: &str) -> Result<()> {
    let (library, _) = load_library(library_path)?;
    print!("{}", render(&library, key)?);
    Ok(())
}

pub(crate) fn render(library: &LibraryManager, key: &str) -> Result<String> {
    let entry = library
        .get(key)
        .with_context(|| format!("no entry named '{key}'"))?;
    let mut report = TextReport::new();
    entry
        .report(&mut report)
        .with_context(|| format!("reporting '{key}'"))?;
    Ok(report.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_reports_entry() {
        let mut library = LibraryManager::new();
        library.new_entry("WSDOT").unwrap();
        let text = render(&library, "WSDOT").unwrap();
        assert!(text.starts_with("WSDOT"));
        assert!(text.contains("Bearings"));
    }

    #[test]
    fn render_unknown_entry() {
        let library = LibraryManager::new();
        assert!(render(&library, "missing").is_err());
    }
}
