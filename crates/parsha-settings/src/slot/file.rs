//! File-backed slot.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::KeyValueSlot;
use crate::error::{Result, SettingsError};

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Slot in the per-user config directory.
    pub fn default_location() -> Self {
        let dir = directories::ProjectDirs::from("org", "ParshaReader", "parsha")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueSlot for FileSlot {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SettingsError::Io {
                operation: "read",
                path,
                source: e,
            }),
        }
    }

    /// Writes a temp file, syncs it, then renames it over the target.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let temp_path = path.with_extension("json.tmp");

        fs::create_dir_all(&self.dir).map_err(|e| SettingsError::Io {
            operation: "create directory",
            path: self.dir.clone(),
            source: e,
        })?;

        if let Err(error) = write_synced(&temp_path, value)
            .and_then(|()| {
                fs::rename(&temp_path, &path).map_err(|e| SettingsError::AtomicWriteFailed {
                    temp_path: temp_path.clone(),
                    target_path: path.clone(),
                    source: e,
                })
            })
        {
            let _ = fs::remove_file(&temp_path);
            return Err(error);
        }

        tracing::debug!("Wrote settings key {key} to {}", path.display());
        Ok(())
    }
}

/// Write `value` to `path` and flush it to disk.
fn write_synced(path: &Path, value: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|e| SettingsError::Io {
        operation: "create",
        path: path.to_path_buf(),
        source: e,
    })?;

    file.write_all(value.as_bytes())
        .map_err(|e| SettingsError::Io {
            operation: "write",
            path: path.to_path_buf(),
            source: e,
        })?;

    file.sync_all().map_err(|e| SettingsError::Io {
        operation: "sync",
        path: path.to_path_buf(),
        source: e,
    })
}
