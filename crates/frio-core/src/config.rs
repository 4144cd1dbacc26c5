use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{EtlError, Result};

/// Directory paths supplied by the external `config.json` document. Loading
/// happens before any file is touched; every failure here aborts the run.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Directory scanned for `.xlsx` source files.
    pub input_dir: PathBuf,
    /// Directory receiving the consolidated output file.
    pub output_dir: PathBuf,
}

impl PathsConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| EtlError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&raw, path)?;
        if !config.input_dir.is_dir() {
            return Err(EtlError::MissingInputDir(config.input_dir.clone()));
        }
        Ok(config)
    }

    fn parse(raw: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(raw).map_err(|source| EtlError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
