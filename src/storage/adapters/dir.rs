//! Directory-backed snapshot store.
//!
//! Each key maps onto `<key>.json` inside a single data directory. Writes
//! land in a temporary sibling first and are renamed over the target, so a
//! reader never observes a half-written snapshot.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::debug;

use crate::storage::{SnapshotStore, StorageError, StorageResult};

/// Snapshot store persisting each key as a JSON file in a directory.
///
/// File operations run on the blocking thread pool.
#[derive(Debug, Clone)]
pub struct DirSnapshotStore {
    root: Utf8PathBuf,
    dir: Arc<Dir>,
    write_lock: Arc<Mutex<()>>,
}

impl DirSnapshotStore {
    /// Opens the data directory at `path`, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the directory cannot be created
    /// or opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> StorageResult<Self> {
        let root = path.as_ref();
        Dir::create_ambient_dir_all(root, ambient_authority()).map_err(StorageError::backend)?;
        let dir = Dir::open_ambient_dir(root, ambient_authority()).map_err(StorageError::backend)?;
        debug!(root = %root, "opened snapshot directory");
        Ok(Self {
            root: root.to_owned(),
            dir: Arc::new(dir),
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Returns the data directory path.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns the file name backing `key` after validating it.
    fn file_name(key: &str) -> StorageResult<String> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(format!("{key}.json"))
    }
}

/// Runs a blocking file operation on the blocking thread pool.
async fn run_blocking<F, T>(f: F) -> StorageResult<T>
where
    F: FnOnce() -> StorageResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(StorageError::backend)?
}

fn lock(write_lock: &Mutex<()>) -> StorageResult<std::sync::MutexGuard<'_, ()>> {
    write_lock
        .lock()
        .map_err(|err| StorageError::backend(io::Error::other(err.to_string())))
}

#[async_trait]
impl SnapshotStore for DirSnapshotStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let file_name = Self::file_name(key)?;
        let dir = Arc::clone(&self.dir);
        run_blocking(move || match dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::backend(err)),
        })
        .await
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let file_name = Self::file_name(key)?;
        let temp_name = format!("{file_name}.tmp");
        let dir = Arc::clone(&self.dir);
        let write_lock = Arc::clone(&self.write_lock);
        let contents = value.to_owned();
        let written = file_name.clone();
        run_blocking(move || {
            let _guard = lock(&write_lock)?;
            dir.write(&temp_name, contents)
                .map_err(StorageError::backend)?;
            dir.rename(&temp_name, &dir, &file_name)
                .map_err(StorageError::backend)
        })
        .await?;
        debug!(root = %self.root, file = %written, "snapshot written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let file_name = Self::file_name(key)?;
        let dir = Arc::clone(&self.dir);
        let write_lock = Arc::clone(&self.write_lock);
        run_blocking(move || {
            let _guard = lock(&write_lock)?;
            match dir.remove_file(&file_name) {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
                Err(err) => Err(StorageError::backend(err)),
            }
        })
        .await
    }
}
