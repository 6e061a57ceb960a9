//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `layergen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory and file operations
//!
//! The CLI drives `ScaffoldService` directly; there are no input ports.

pub mod output;

pub use output::Filesystem;

#[cfg(test)]
pub use output::MockFilesystem;
