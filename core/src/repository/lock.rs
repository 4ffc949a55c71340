use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, warn};

use crate::error::{Result, StoreError};

/// RAII advisory lock on a sibling file; released on drop.
#[derive(Debug)]
pub struct StoreLock {
    held: Option<(File, PathBuf)>,
}

impl StoreLock {
    pub fn unlocked() -> Self {
        Self { held: None }
    }

    /// Blocks until the exclusive lock on `path` is ours.
    pub fn acquire(path: &Path) -> Result<Self> {
        let lock_err = |source| StoreError::Lock {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(lock_err)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)
            .map_err(lock_err)?;

        if FileExt::try_lock_exclusive(&file).is_err() {
            warn!(path = %path.display(), "todo store is locked by another process, waiting");
            FileExt::lock_exclusive(&file).map_err(lock_err)?;
        }
        debug!(path = %path.display(), "acquired store lock");

        Ok(Self {
            held: Some((file, path.to_path_buf())),
        })
    }

    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Some((file, path)) = &self.held {
            let _ = FileExt::unlock(file);
            debug!(path = %path.display(), "released store lock");
        }
    }
}
