//! Local filesystem adapter using tokio::fs.
//!
//! Files are staged next to their target and renamed into place. The rename
//! runs inside the poll that resolves the write, so a write whose future is
//! dropped (timeout, fail-fast) never reaches the target path; the blocking
//! task that is still filling the staging file removes it when it finishes.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use layergen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{LayergenError, LayergenResult},
};

/// Production filesystem implementation using `tokio::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Filesystem for LocalFilesystem {
    async fn mkdir_if_absent(&self, path: &Path) -> LayergenResult<()> {
        tokio::fs::create_dir_all(path)
            .await
            .map_err(|e| map_io_error(path, e, "create directory"))
    }

    async fn list_entries(&self, path: &Path) -> LayergenResult<Vec<String>> {
        let mut dir = match tokio::fs::read_dir(path).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(map_io_error(path, e, "list directory")),
        };

        let mut names = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| map_io_error(path, e, "list directory"))?
        {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    async fn write_file(&self, path: &Path, content: &str) -> LayergenResult<()> {
        let mut staged = StagedWrite::new(path);

        let task = {
            let staging = staged.staging.clone();
            let stage = Arc::clone(&staged.stage);
            let content = content.to_owned();
            tokio::task::spawn_blocking(move || {
                let result = std::fs::write(&staging, content);
                let mut state = lock(&stage);
                if result.is_err() || *state == Stage::Abandoned {
                    remove_staging(&staging);
                } else {
                    *state = Stage::Staged;
                }
                result
            })
        };

        task.await
            .map_err(|e| map_io_error(path, io::Error::other(e), "write file"))?
            .map_err(|e| map_io_error(path, e, "write file"))?;

        // Blocking rename: the target only changes in the poll that returns Ok.
        std::fs::rename(&staged.staging, path).map_err(|e| map_io_error(path, e, "write file"))?;
        staged.committed = true;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Writing,
    Staged,
    Abandoned,
}

/// Owns the staging file of one write until it is renamed into place.
struct StagedWrite {
    staging: PathBuf,
    stage: Arc<Mutex<Stage>>,
    committed: bool,
}

impl StagedWrite {
    fn new(target: &Path) -> Self {
        let name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            staging: target.with_file_name(staging_name(&name)),
            stage: Arc::new(Mutex::new(Stage::Writing)),
            committed: false,
        }
    }
}

impl Drop for StagedWrite {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        let mut stage = lock(&self.stage);
        match *stage {
            Stage::Writing => *stage = Stage::Abandoned,
            Stage::Staged => remove_staging(&self.staging),
            Stage::Abandoned => {}
        }
    }
}

/// `.heroesService.js.<pid>.layergen-tmp`
fn staging_name(file_name: &str) -> String {
    format!(".{file_name}.{}.layergen-tmp", std::process::id())
}

fn lock(stage: &Mutex<Stage>) -> MutexGuard<'_, Stage> {
    stage.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn remove_staging(staging: &Path) {
    if let Err(e) = std::fs::remove_file(staging) {
        if e.kind() != io::ErrorKind::NotFound {
            tracing::warn!(path = %staging.display(), error = %e, "Could not remove staging file");
        }
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> LayergenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mkdir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("src").join("service");

        fs.mkdir_if_absent(&dir).await.unwrap();
        fs.mkdir_if_absent(&dir).await.unwrap();

        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn missing_directory_lists_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let entries = LocalFilesystem::new()
            .list_entries(&tmp.path().join("nope"))
            .await
            .unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn entries_are_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        for name in ["service", "factory", "repository"] {
            fs.mkdir_if_absent(&tmp.path().join(name)).await.unwrap();
        }

        let entries = fs.list_entries(tmp.path()).await.unwrap();
        assert_eq!(entries, ["factory", "repository", "service"]);
    }

    #[tokio::test]
    async fn write_then_read_back() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("heroesRepository.js");

        fs.write_file(&file, "export default class {}").await.unwrap();

        assert_eq!(
            std::fs::read_to_string(&file).unwrap(),
            "export default class {}"
        );
        assert_eq!(fs.list_entries(tmp.path()).await.unwrap(), ["heroesRepository.js"]);
    }

    #[tokio::test]
    async fn write_replaces_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("heroesService.js");
        std::fs::write(&file, "old").unwrap();

        fs.write_file(&file, "new").await.unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "new");
    }

    #[tokio::test]
    async fn dropped_write_leaves_no_file() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("heroesService.js");
        let content = "x".repeat(64 * 1024 * 1024);

        let result = tokio::time::timeout(
            std::time::Duration::from_millis(1),
            fs.write_file(&file, &content),
        )
        .await;
        assert!(result.is_err(), "64 MiB write finished within 1ms");

        // the blocking task removes its staging file once it finishes
        for _ in 0..100 {
            if std::fs::read_dir(tmp.path()).unwrap().next().is_none() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }
        assert!(!file.exists());
        assert!(std::fs::read_dir(tmp.path()).unwrap().next().is_none());
    }

    #[tokio::test]
    async fn failed_rename_cleans_up_staging() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("heroesRepository.js");
        std::fs::create_dir(&target).unwrap();

        let result = LocalFilesystem::new().write_file(&target, "x").await;

        assert!(result.is_err());
        assert!(target.is_dir());
        assert!(!tmp.path().join(staging_name("heroesRepository.js")).exists());
    }

    #[tokio::test]
    async fn write_into_missing_folder_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .write_file(&tmp.path().join("missing/heroes.js"), "x")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Failed to write file"));
    }

    #[tokio::test]
    async fn mkdir_over_a_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("service");
        std::fs::write(&blocker, "not a directory").unwrap();

        let result = LocalFilesystem::new().mkdir_if_absent(&blocker).await;
        assert!(result.is_err());
    }
}
