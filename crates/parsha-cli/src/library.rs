//! Parsha JSON files on disk.
//!
//! The data directory holds one `<parsha>.json` file per parsha plus a
//! `metadata.json` listing the available text sources.

use std::fs;
use std::path::{Path, PathBuf};

use parsha_model::{Metadata, ParshaData};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const DEFAULT_DATA_DIR: &str = "json";
pub const METADATA_FILE: &str = "metadata.json";

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct ParshaLibrary {
    data_dir: PathBuf,
}

impl ParshaLibrary {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn parsha_json(&self, parsha: u32) -> PathBuf {
        self.data_dir.join(format!("{parsha}.json"))
    }

    pub fn load_parsha(&self, parsha: u32) -> Result<ParshaData, LibraryError> {
        read_json(&self.parsha_json(parsha))
    }

    pub fn load_metadata(&self) -> Result<Metadata, LibraryError> {
        read_json(&self.data_dir.join(METADATA_FILE))
    }
}

impl Default for ParshaLibrary {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LibraryError> {
    let content = fs::read_to_string(path).map_err(|e| LibraryError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let value = serde_json::from_str(&content).map_err(|e| LibraryError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!("Loaded {}", path.display());
    Ok(value)
}
