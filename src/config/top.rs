//! The top-level config structure.

use super::err;
use crate::{exam::bail, Exam};
use serde::{Deserialize, Serialize};
use std::{fs, num::NonZeroU8, path::Path};

/// The top-level config structure.
///
/// # Examples
///
/// ```
/// use quiz::config::Config;
///
/// let config: Config = "name = \"demo\"\n[[pragma]]\nkey = \"strict\"\nvalue = true\n"
///     .parse()
///     .unwrap();
/// assert_eq!(config.name, "demo");
/// assert!(!config.skip_all);
/// assert_eq!(config.bail_status.get(), 1);
/// assert_eq!(config.pragmas.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The name of the exam.
    pub name: String,
    /// Whether every quiz in the exam should be skipped.
    pub skip_all: bool,
    /// The status the process exits with when the exam bails out.
    ///
    /// Zero, and anything that doesn't fit in a byte, is rejected when
    /// parsing.
    pub bail_status: NonZeroU8,
    /// Pragmas to issue, in order.
    #[serde(rename = "pragma")]
    pub pragmas: Vec<PragmaConfig>,
}

/// A pragma as written in config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PragmaConfig {
    /// The pragma's key.
    pub key: String,
    /// Whether the pragma is switched on.
    pub value: bool,
}

/// The default config describes an unnamed, unskipped exam with no pragmas.
impl Default for Config {
    fn default() -> Self {
        Self {
            name: String::new(),
            skip_all: false,
            bail_status: bail::DEFAULT_STATUS,
            pragmas: Vec::new(),
        }
    }
}

impl std::str::FromStr for Config {
    type Err = err::Error;

    fn from_str(s: &str) -> err::Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

impl Config {
    /// Tries to dump a config to a string.
    pub fn to_string(&self) -> err::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Tries to load a config from the file at `path`.
    ///
    /// This is a convenience for runners that keep their exam setup in a
    /// file; nothing else in the crate reads files.
    pub fn load(path: impl AsRef<Path>) -> err::Result<Self> {
        fs::read_to_string(path)?.parse()
    }

    /// Builds the exam this config describes.
    pub fn to_exam(&self) -> err::Result<Exam> {
        Ok(Exam::from_config(self)?)
    }
}
