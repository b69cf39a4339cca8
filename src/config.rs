//! Settings for the `bpqueue-knn` tool, read from a TOML file.
//!
//! ```toml
//! num_neighbors = 5
//!
//! [logger]
//! level = "debug"
//! output = "knn.log"
//! ```

use crate::LoggerConfig;

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_NUM_NEIGHBORS: usize = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Number of neighbors to return for each query.
    pub num_neighbors: usize,
    pub logger: LoggerConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            num_neighbors: DEFAULT_NUM_NEIGHBORS,
            logger: LoggerConfig::default(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&contents)
    }
}
