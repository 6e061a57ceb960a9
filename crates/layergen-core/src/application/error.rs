//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::report::{FailureKind, LayerFailure};
use crate::domain::Layer;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// One or more layer folders could not be created; no file was written
    /// for those layers. `written` lists the layers that did succeed.
    #[error("{} layer director{} could not be created: {}", .failures.len(), if .failures.len() == 1 { "y" } else { "ies" }, summarize(.failures))]
    DirectoryCreationFailed {
        written: Vec<Layer>,
        failures: Vec<LayerFailure>,
    },

    /// One or more file writes failed. Every failure of the batch is listed.
    #[error("{} of {} write(s) failed: {}", .failures.len(), .failures.len() + .written.len(), summarize(.failures))]
    WriteFailed {
        written: Vec<Layer>,
        failures: Vec<LayerFailure>,
    },

    /// A single filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared adapter state was poisoned by a panicking thread.
    #[error("Filesystem state lock poisoned")]
    LockPoisoned,
}

fn summarize(failures: &[LayerFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApplicationError {
    /// Build the error matching a set of per-layer failures.
    ///
    /// Directory failures take precedence: they explain why a layer has no
    /// file at all.
    pub fn from_failures(written: Vec<Layer>, failures: Vec<LayerFailure>) -> Self {
        if failures
            .iter()
            .any(|f| f.kind == FailureKind::DirectoryCreation)
        {
            Self::DirectoryCreationFailed { written, failures }
        } else {
            Self::WriteFailed { written, failures }
        }
    }

    /// Per-layer failures carried by this error, if any.
    pub fn failures(&self) -> &[LayerFailure] {
        match self {
            Self::DirectoryCreationFailed { failures, .. } | Self::WriteFailed { failures, .. } => {
                failures
            }
            _ => &[],
        }
    }

    /// Layers that were generated before the error was reported.
    pub fn written(&self) -> &[Layer] {
        match self {
            Self::DirectoryCreationFailed { written, .. } | Self::WriteFailed { written, .. } => {
                written
            }
            _ => &[],
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryCreationFailed { failures, .. } => {
                let mut out = vec!["Check that you have write permissions".into()];
                out.extend(
                    failures
                        .iter()
                        .map(|f| format!("Could not create: {}", f.path.display())),
                );
                out.push("Ensure no file exists with a layer folder's name".into());
                out
            }
            Self::WriteFailed { written, failures } => {
                let mut out: Vec<String> = failures
                    .iter()
                    .map(|f| format!("Not written: {} ({})", f.path.display(), f.kind))
                    .collect();
                if !written.is_empty() {
                    let names: Vec<_> = written.iter().map(|l| l.as_str()).collect();
                    out.push(format!("Written successfully: {}", names.join(", ")));
                }
                if failures.iter().any(|f| f.kind == FailureKind::TimedOut) {
                    out.push("Raise the per-write timeout with --timeout-ms".into());
                }
                out.push("Check available disk space and permissions".into());
                out
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::LockPoisoned => vec!["Try again; this should not happen".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryCreationFailed { .. }
            | Self::WriteFailed { .. }
            | Self::FilesystemError { .. } => ErrorCategory::Io,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
