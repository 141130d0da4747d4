//! JSON snapshot files.
//!
//! A snapshot is replaced wholesale on every write. Reads never fail: a
//! missing, unreadable or malformed file is reported as "no snapshot yet".

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A single JSON document on disk.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Snapshot `file_name` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self::new(dir.as_ref().join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and shape-check the snapshot.
    pub async fn load<T: DeserializeOwned>(&self) -> Option<T> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No snapshot on disk");
                return None;
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Snapshot unreadable, treating as absent");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Snapshot malformed, treating as absent");
                None
            }
        }
    }

    /// Overwrite the snapshot, creating parent directories as needed.
    ///
    /// Each write goes to its own temp file in the target directory and is
    /// renamed into place, so readers see either the old or the new snapshot
    /// and overlapping writers never touch each other's temp files.
    pub async fn save<T: Serialize>(&self, payload: &T) -> Result<()> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent.to_path_buf(),
            None => PathBuf::from("."),
        };
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        let json = serde_json::to_string_pretty(payload).context("Failed to serialize snapshot")?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_replacing(&dir, &path, json.as_bytes()))
            .await
            .context("Snapshot writer task failed")??;

        debug!(path = %self.path.display(), "Snapshot written");
        Ok(())
    }
}

fn write_replacing(dir: &Path, path: &Path, contents: &[u8]) -> Result<()> {
    let mut tmp = tempfile::Builder::new()
        .prefix(".snapshot-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(contents)
        .with_context(|| format!("Failed to write {}", tmp.path().display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}
