//! `speclib.toml` configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use speclib_criteria::Edition;

/// File name searched for from the working directory upward.
pub const CONFIG_FILE: &str = "speclib.toml";

/// Library file used when neither `--library` nor the config names one.
pub const DEFAULT_LIBRARY: &str = "criteria.slf";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeclibConfig {
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub compare: CompareConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Library file, relative to the directory holding `speclib.toml`.
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompareConfig {
    #[serde(default)]
    pub stop_on_first: bool,
    /// Edition key, e.g. `AashtoLrfd2020`.
    #[serde(default)]
    pub edition: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Tracing filter used when `RUST_LOG` is unset and no `-v` is given.
    #[serde(default)]
    pub filter: Option<String>,
}

impl SpeclibConfig {
    /// Search upward from `start_dir` for `speclib.toml`, parse it, and return
    /// it with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let config = Self::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((config, dir)));
            }
            if !dir.pop() {
                return Ok(None);
            }
        }
    }

    /// Parse and validate configuration text.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SpeclibConfig = toml::from_str(content)?;
        config.compare_edition()?;
        Ok(config)
    }

    /// The configured comparison edition, if any.
    pub fn compare_edition(&self) -> Result<Option<Edition>> {
        self.compare
            .edition
            .as_deref()
            .map(parse_edition)
            .transpose()
    }

    /// Configuration text written by `speclib init`.
    pub fn template(library_file: &str) -> String {
        format!(
            r#"[library]
path = "{library_file}"

[compare]
stop_on_first = false

[log]
filter = "warn"
"#
        )
    }
}

/// Parse an edition key such as `AashtoLrfd2020`.
pub fn parse_edition(key: &str) -> Result<Edition> {
    Edition::from_key(key).with_context(|| {
        let known: Vec<String> = Edition::ALL.iter().map(|e| e.key()).collect();
        format!("unknown edition '{key}' (expected one of: {})", known.join(", "))
    })
}

/// The library file to operate on: `--library`, then the config, then
/// [`DEFAULT_LIBRARY`] in the working directory.
pub fn resolve_library(
    explicit: Option<&Path>,
    config: Option<&(SpeclibConfig, PathBuf)>,
    cwd: &Path,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match config {
        Some((config, dir)) => match &config.library.path {
            Some(path) => dir.join(path),
            None => dir.join(DEFAULT_LIBRARY),
        },
        None => cwd.join(DEFAULT_LIBRARY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = SpeclibConfig::from_str("").unwrap();
        assert!(config.library.path.is_none());
        assert!(!config.compare.stop_on_first);
        assert!(config.compare_edition().unwrap().is_none());
    }

    #[test]
    fn full_config() {
        let config = SpeclibConfig::from_str(
            r#"
[library]
path = "libs/bridge.slf"

[compare]
stop_on_first = true
edition = "AashtoLrfd2020"

[log]
filter = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.library.path.as_deref(), Some("libs/bridge.slf"));
        assert!(config.compare.stop_on_first);
        assert_eq!(
            config.compare_edition().unwrap(),
            Some(Edition::NinthEdition2020)
        );
        assert_eq!(config.log.filter.as_deref(), Some("debug"));
    }

    #[test]
    fn unknown_edition_is_an_error() {
        let result = SpeclibConfig::from_str("[compare]\nedition = \"Lrfd1900\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn template_parses() {
        let config = SpeclibConfig::from_str(&SpeclibConfig::template("criteria.slf")).unwrap();
        assert_eq!(config.library.path.as_deref(), Some("criteria.slf"));
    }

    #[test]
    fn find_and_load_searches_upward() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            SpeclibConfig::template("bridge.slf"),
        )
        .unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = SpeclibConfig::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(found.1, dir.path());
        assert_eq!(
            resolve_library(None, Some(&found), &nested),
            dir.path().join("bridge.slf")
        );
        assert_eq!(
            resolve_library(Some(Path::new("x.slf")), Some(&found), &nested),
            PathBuf::from("x.slf")
        );
    }

    #[test]
    fn missing_config_falls_back_to_cwd() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            resolve_library(None, None, dir.path()),
            dir.path().join(DEFAULT_LIBRARY)
        );
    }
}
