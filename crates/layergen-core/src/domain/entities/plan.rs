use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{Layer, error::DomainError};

/// Every write a generation request will perform, computed before any I/O.
///
/// This is the output of the planning stage.
/// It contains no business logic, only data.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub(crate) base_dir: PathBuf,
    pub(crate) writes: Vec<PendingWrite>,
}

impl GenerationPlan {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            writes: Vec::new(),
        }
    }

    pub fn add_write(&mut self, layer: Layer, target_file: impl Into<PathBuf>, content: String) {
        self.writes.push(PendingWrite {
            layer,
            target_file: target_file.into(),
            content,
        });
    }

    pub fn with_write(
        mut self,
        layer: Layer,
        target_file: impl Into<PathBuf>,
        content: String,
    ) -> Self {
        self.add_write(layer, target_file, content);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for write in &self.writes {
            if !seen.insert(&write.target_file) {
                return Err(DomainError::DuplicatePath {
                    path: write.target_file.display().to_string(),
                });
            }
        }

        Ok(())
    }

    /// Parent of every layer folder.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn writes(&self) -> &[PendingWrite] {
        &self.writes
    }

    /// Layers in plan order.
    pub fn layers(&self) -> Vec<Layer> {
        self.writes.iter().map(|w| w.layer).collect()
    }

    /// Folder each layer's file lands in.
    pub fn layer_dir(&self, layer: Layer) -> PathBuf {
        self.base_dir.join(layer.as_str())
    }

    /// Drop the writes of the given layers, returning what was removed.
    pub fn remove_layers(&mut self, layers: &[Layer]) -> Vec<PendingWrite> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.writes)
            .into_iter()
            .partition(|w| layers.contains(&w.layer));
        self.writes = kept;
        removed
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }
}

/// One file to write. Lives only between planning and execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWrite {
    pub layer: Layer,
    pub target_file: PathBuf,
    pub content: String,
}

impl PendingWrite {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
