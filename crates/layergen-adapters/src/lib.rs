//! Infrastructure adapters for Layergen.
//!
//! This crate implements the ports defined in `layergen-core::application::ports`
//! and ships the built-in template sets. It contains all I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod template_loader;

// Re-export commonly used adapters
pub use builtin_templates::{all_templates, registry};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_loader::TemplateOverrides;
