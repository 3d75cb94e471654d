//! Branding and session defaults.
//!
//! Loaded from `config.yaml` in the platform config directory (or a path
//! given with `--config`). Every field has a built-in default so the tool
//! works out of the box.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },
}

/// Company identity and financial defaults applied to every new session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    /// Company name printed on document headers and share messages
    pub company: String,
    /// Secondary header line
    pub tagline: String,
    /// Contact number shown in the document header
    pub contact_phone: String,
    /// Currency prefix used on every amount, e.g. "S/." or "$"
    pub currency_prefix: String,
    /// Optional PNG logo for the document header; a missing or unreadable
    /// file falls back to the plain-text company name
    pub logo_path: Option<PathBuf>,
    /// Markup percentage applied to new sessions
    pub default_margin_percent: u8,
    /// General expenses applied to new sessions
    pub default_general_expenses: Decimal,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            company: "FIREQUOTE SYSTEMS".to_string(),
            tagline: "Fire Detection & Suppression Engineering".to_string(),
            contact_phone: String::new(),
            currency_prefix: "S/.".to_string(),
            logo_path: None,
            default_margin_percent: 30,
            default_general_expenses: Decimal::new(5000, 2),
        }
    }
}

impl Branding {
    /// Load branding from `override_path` when given, otherwise from the
    /// platform config file when present, otherwise built-in defaults.
    ///
    /// An explicitly named file that is missing or malformed is an error; a
    /// missing default file is not.
    pub fn load(override_path: Option<&Path>) -> Result<Self, ConfigError> {
        match override_path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Platform config file location, e.g. `~/.config/firequote/config.yaml`.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "firequote").map(|dirs| dirs.config_dir().join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_are_usable() {
        let branding = Branding::default();
        assert_eq!(branding.currency_prefix, "S/.");
        assert_eq!(branding.default_margin_percent, 30);
        assert_eq!(branding.default_general_expenses, dec!(50.00));
        assert!(branding.logo_path.is_none());
    }

    #[test]
    fn partial_config_files_fill_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "company: ACME Fire\ncurrency_prefix: \"$\"").unwrap();

        let branding = Branding::from_file(file.path()).unwrap();
        assert_eq!(branding.company, "ACME Fire");
        assert_eq!(branding.currency_prefix, "$");
        // Untouched fields keep their defaults
        assert_eq!(branding.default_margin_percent, 30);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = Branding::load(Some(Path::new("/nonexistent/config.yaml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "company: [unclosed").unwrap();

        assert!(matches!(
            Branding::from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
