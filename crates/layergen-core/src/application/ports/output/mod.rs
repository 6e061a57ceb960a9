//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `layergen-adapters` crate provides implementations.

use std::path::Path;

use async_trait::async_trait;

use crate::error::LayergenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `layergen_adapters::filesystem::LocalFilesystem` (production)
/// - `layergen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Every method is async; the services fan calls out concurrently
/// - Implementations must tolerate concurrent calls on distinct paths
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// Create a directory and any missing parents. Succeeds if it already exists.
    async fn mkdir_if_absent(&self, path: &Path) -> LayergenResult<()>;

    /// Names of the entries directly inside `path`, sorted.
    ///
    /// A missing directory has no entries.
    async fn list_entries(&self, path: &Path) -> LayergenResult<Vec<String>>;

    /// Write `content` to `path`, replacing any existing file.
    ///
    /// If the returned future is dropped before it resolves, `path` must be
    /// left as it was. The generator relies on this when it reports a write
    /// as timed out or cancelled.
    async fn write_file(&self, path: &Path, content: &str) -> LayergenResult<()>;
}
