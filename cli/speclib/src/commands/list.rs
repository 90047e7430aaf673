//! `speclib list`: entry keys with their edition and description.

use std::path::Path;

use anyhow::Result;
use speclib_criteria::LibraryManager;

use crate::commands::load_library;

pub fn run(library_path: &Path) -> Result<()> {
    let (library, _) = load_library(library_path)?;
    print!("{}", render(&library));
    Ok(())
}

pub(crate) fn render(library: &LibraryManager) -> String {
    if library.is_empty() {
        return "(no entries)\n".to_string();
    }
    let width = library.keys().map(str::len).max().unwrap_or(0);
    let mut out = String::new();
    for (key, entry) in library.iter() {
        let description = &entry.specification().description;
        out.push_str(&format!("{key:<width$}  {}", entry.edition().key()));
        if !description.is_empty() {
            out.push_str(&format!("  {description}"));
        }
        out.push('\n');
    }
    out
}
