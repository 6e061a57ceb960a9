//! Outcome types returned by the application services.
//!
//! Every failure is attributed to a layer so that a caller can tell which
//! layers were generated and which were not.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::Layer;

/// Why a single layer did not get its directory or file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    /// The layer folder could not be created or verified.
    DirectoryCreation,
    /// The filesystem rejected the write.
    Write,
    /// The write did not complete within the configured timeout.
    TimedOut,
    /// The write was abandoned after another write failed (fail-fast).
    Cancelled,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DirectoryCreation => "directory creation failed",
            Self::Write => "write failed",
            Self::TimedOut => "timed out",
            Self::Cancelled => "cancelled",
        })
    }
}

/// A per-layer failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerFailure {
    pub layer: Layer,
    pub path: PathBuf,
    pub kind: FailureKind,
    pub reason: String,
}

impl LayerFailure {
    pub fn new(
        layer: Layer,
        path: impl Into<PathBuf>,
        kind: FailureKind,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            layer,
            path: path.into(),
            kind,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LayerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}: {}",
            self.layer,
            self.path.display(),
            self.kind,
            self.reason
        )
    }
}

/// Result of ensuring the layer folders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    /// Folders that did not exist and were created.
    pub created: Vec<Layer>,
    /// Folders that were already present.
    pub existing: Vec<Layer>,
    pub failures: Vec<LayerFailure>,
}

impl ScaffoldReport {
    /// Layers whose folder could not be created; their writes are skipped.
    pub fn failed_layers(&self) -> Vec<Layer> {
        self.failures.iter().map(|f| f.layer).collect()
    }
}

/// A file that was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub layer: Layer,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Result of a fully successful generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub written: Vec<WrittenFile>,
    pub created_directories: Vec<Layer>,
    pub existing_directories: Vec<Layer>,
}

impl GenerationReport {
    pub fn layers(&self) -> Vec<Layer> {
        self.written.iter().map(|w| w.layer).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_layers_follow_failures() {
        let report = ScaffoldReport {
            created: vec![],
            existing: vec![],
            failures: vec![LayerFailure::new(
                Layer::Factory,
                "src/factory",
                FailureKind::DirectoryCreation,
                "permission denied",
            )],
        };
        assert_eq!(report.failed_layers(), vec![Layer::Factory]);
    }

    #[test]
    fn failure_display_names_layer_and_kind() {
        let failure = LayerFailure::new(
            Layer::Service,
            "src/service/heroesService.js",
            FailureKind::TimedOut,
            "no response after 10ms",
        );
        let text = failure.to_string();
        assert!(text.starts_with("service (src/service/heroesService.js)"));
        assert!(text.contains("timed out"));
    }
}
