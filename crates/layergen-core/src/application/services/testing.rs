//! In-memory filesystem used by the service tests.
//!
//! `layergen-adapters` has a richer `MemoryFilesystem`, but it depends on this
//! crate and cannot be used from its unit tests. This one adds per-path
//! latency, which the timeout and fail-fast tests need.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::{ApplicationError, ports::Filesystem};
use crate::domain::{Language, Layer, LayerTemplate, TemplateRegistry};
use crate::error::LayergenResult;

#[derive(Default)]
pub(crate) struct RecordingFilesystem {
    dirs: Mutex<BTreeSet<PathBuf>>,
    files: Mutex<BTreeMap<PathBuf, String>>,
    failing_dirs: HashSet<PathBuf>,
    failing_writes: HashSet<PathBuf>,
    slow_writes: HashSet<PathBuf>,
    delay: Duration,
}

impl RecordingFilesystem {
    pub(crate) fn fail_mkdir(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing_dirs.insert(path.into());
        self
    }

    pub(crate) fn fail_write(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing_writes.insert(path.into());
        self
    }

    pub(crate) fn slow_write(mut self, path: impl Into<PathBuf>, delay: Duration) -> Self {
        self.slow_writes.insert(path.into());
        self.delay = delay;
        self
    }

    pub(crate) fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.lock().unwrap().contains(path.as_ref())
    }

    pub(crate) fn dirs(&self) -> BTreeSet<PathBuf> {
        self.dirs.lock().unwrap().clone()
    }

    pub(crate) fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub(crate) fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

#[async_trait]
impl Filesystem for RecordingFilesystem {
    async fn mkdir_if_absent(&self, path: &Path) -> LayergenResult<()> {
        if self.failing_dirs.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into());
        }
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors().filter(|a| !a.as_os_str().is_empty()) {
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    async fn list_entries(&self, path: &Path) -> LayergenResult<Vec<String>> {
        let dirs = self.dirs.lock().unwrap();
        Ok(dirs
            .iter()
            .filter(|d| d.parent() == Some(path))
            .filter_map(|d| d.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect())
    }

    async fn write_file(&self, path: &Path, content: &str) -> LayergenResult<()> {
        if self.slow_writes.contains(path) {
            tokio::time::sleep(self.delay).await;
        }
        if self.failing_writes.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into());
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

/// Minimal one-line templates for every layer, in JavaScript.
pub(crate) fn registry() -> TemplateRegistry {
    TemplateRegistry::new()
        .with_template(LayerTemplate::new(
            Layer::Repository,
            Language::JavaScript,
            "{{CLASS_NAME}}()",
        ))
        .with_template(LayerTemplate::new(
            Layer::Service,
            Language::JavaScript,
            "{{CLASS_NAME}}({{REPOSITORY_NAME}})",
        ))
        .with_template(LayerTemplate::new(
            Layer::Factory,
            Language::JavaScript,
            "{{CLASS_NAME}}({{REPOSITORY_NAME}}, {{SERVICE_NAME}})",
        ))
}
