//! `speclib diff`: group-level differences between two entries.

use std::path::Path;

use anyhow::{Context, Result};
use speclib_criteria::{DifferenceItem, Edition, SpecificationEntry};

use crate::commands::load_library;

pub struct DiffOptions<'a> {
    /// Library holding `b`, when it is not the main library.
    pub other: Option<&'a Path>,
    pub stop_on_first: bool,
    /// Edition to compare under; defaults to the edition of `a`.
    pub edition: Option<Edition>,
}

/// Print the differences between `a` and `b`. Returns `true` when the
/// entries are the same.
pub fn run(library_path: &Path, a: &str, b: &str, options: &DiffOptions<'_>) -> Result<bool> {
    let (library, _) = load_library(library_path)?;
    let first = library
        .get(a)
        .with_context(|| format!("no entry named '{a}' in {}", library_path.display()))?;

    let other_library;
    let (source, second) = match options.other {
        Some(path) => {
            other_library = load_library(path)?.0;
            let entry = other_library
                .get(b)
                .with_context(|| format!("no entry named '{b}' in {}", path.display()))?;
            (path, entry)
        }
        None => {
            let entry = library
                .get(b)
                .with_context(|| format!("no entry named '{b}' in {}", library_path.display()))?;
            (library_path, entry)
        }
    };
    tracing::debug!(a, b, other = %source.display(), "comparing entries");

    let (same, diffs, edition) = compare(first, second, options);
    println!("Comparing '{a}' with '{b}' under {}", edition.key());
    if same {
        println!("No differences");
    } else {
        for item in &diffs {
            println!("  {item}");
        }
        println!("{} difference(s)", diffs.len());
    }
    Ok(same)
}

pub(crate) fn compare(
    a: &SpecificationEntry,
    b: &SpecificationEntry,
    options: &DiffOptions<'_>,
) -> (bool, Vec<DifferenceItem>, Edition) {
    let edition = options.edition.unwrap_or_else(|| a.edition());
    let mut diffs = Vec::new();
    let same = a.compare_in(b, edition, &mut diffs, options.stop_on_first);
    (same, diffs, edition)
}
