//! One `<key>.json` file per document under a data directory.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DataDir` when the directory cannot be created or
    /// the path exists but is not a directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        if dir.exists() && !dir.is_dir() {
            return Err(StoreError::DataDir {
                path: dir,
                reason: "not a directory".into(),
            });
        }
        fs::create_dir_all(&dir).map_err(|e| StoreError::DataDir {
            path: dir.clone(),
            reason: e.to_string(),
        })?;
        tracing::debug!(dir = %dir.display(), "opened file store");
        Ok(Self { dir })
    }

    /// Path of the file backing `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

/// Write through a sibling temporary file and rename it over `path`.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<(), StoreError> {
    let temp = path.with_extension("json.tmp");
    let mut f = File::create(&temp)?;
    f.write_all(contents.as_bytes())?;
    f.sync_all()?;
    fs::rename(&temp, path)?;
    Ok(())
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        write_atomic(&self.path_for(key), value)
    }
}
