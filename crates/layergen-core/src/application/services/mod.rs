//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "ensure the layer folders" or "generate a component".

pub mod file_generator;
pub mod layer_scaffolder;
pub mod scaffold_service;

#[cfg(test)]
pub(crate) mod testing;

pub use file_generator::{FileGenerator, GeneratorOptions};
pub use layer_scaffolder::LayerScaffolder;
pub use scaffold_service::ScaffoldService;
