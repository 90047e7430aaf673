//! `speclib verify`: load a library and report legacy conversions.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use speclib_criteria::RefactoredParameters;

use crate::commands::load_library;

pub fn run(library_path: &Path) -> Result<()> {
    let (library, refactored) = load_library(library_path)?;
    println!(
        "{}: {} entr{} loaded",
        library_path.display(),
        library.len(),
        if library.len() == 1 { "y" } else { "ies" }
    );
    print!("{}", render(&refactored)?);
    Ok(())
}

pub(crate) fn render(refactored: &BTreeMap<String, RefactoredParameters>) -> Result<String> {
    if refactored.is_empty() {
        return Ok("All entries are in the current format\n".to_string());
    }
    let mut out = String::new();
    for (key, params) in refactored {
        out.push_str(&format!("'{key}' was converted from an older format\n"));
        if params.is_empty() {
            continue;
        }
        let json = serde_json::to_string_pretty(params)
            .with_context(|| format!("formatting parameters of '{key}'"))?;
        out.push_str("  values moved out of the specification:\n");
        for line in json.lines() {
            out.push_str(&format!("    {line}\n"));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_library() {
        assert_eq!(
            render(&BTreeMap::new()).unwrap(),
            "All entries are in the current format\n"
        );
    }

    #[test]
    fn converted_entries_listed() {
        let mut refactored = BTreeMap::new();
        refactored.insert("Old".to_string(), RefactoredParameters::default());
        let params = RefactoredParameters {
            analysis_type: Some(2),
            ..Default::default()
        };
        refactored.insert("Older".to_string(), params);

        let text = render(&refactored).unwrap();
        assert!(text.contains("'Old' was converted"));
        assert!(text.contains("'Older' was converted"));
        assert!(text.contains("\"analysis_type\": 2"));
    }
}
