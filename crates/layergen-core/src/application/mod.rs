//! Application layer for Layergen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, FileGenerator, LayerScaffolder)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Reports**: Per-layer outcomes of a run
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod report;
pub mod services;

// Re-export main services
pub use services::{FileGenerator, GeneratorOptions, LayerScaffolder, ScaffoldService};

pub use report::{FailureKind, GenerationReport, LayerFailure, ScaffoldReport, WrittenFile};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
