//! Optional TOML diff profile.
//!
//! ```toml
//! ignore = ["system > host-name", "hw-id"]
//! include_identical = false
//! max_depth = 3
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use vyatta_config_core::DiffOptions;

/// Diff settings that can be kept alongside a set of configs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiffProfile {
    #[serde(default)]
    pub ignore: Vec<String>,
    #[serde(default)]
    pub include_identical: bool,
    #[serde(default)]
    pub max_depth: Option<u32>,
}

/// Errors returned when loading a diff profile.
#[derive(Debug, Error)]
pub enum ProfileLoadError {
    #[error("failed to read diff profile {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse diff profile {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load a diff profile from a TOML file.
pub fn load_diff_profile(path: &Path) -> Result<DiffProfile, ProfileLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| ProfileLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_diff_profile(&raw, path.display().to_string())
}

fn parse_diff_profile(raw: &str, path: String) -> Result<DiffProfile, ProfileLoadError> {
    toml::from_str(raw).map_err(|source| ProfileLoadError::Parse { path, source })
}

impl DiffProfile {
    /// Merge the profile with command-line settings. Ignore lists are combined;
    /// flags set on the command line win.
    pub fn to_options(&self, extra_ignore: &[String], include_identical: bool) -> DiffOptions {
        let mut ignore_paths = self.ignore.clone();
        for path in extra_ignore {
            if !ignore_paths.contains(path) {
                ignore_paths.push(path.clone());
            }
        }

        DiffOptions {
            include_identical: include_identical || self.include_identical,
            max_depth: self
                .max_depth
                .and_then(|depth| i32::try_from(depth).ok())
                .unwrap_or(-1),
            ignore_paths,
        }
    }
}
