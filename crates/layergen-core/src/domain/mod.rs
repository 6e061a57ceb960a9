// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Layergen.
//!
//! This module contains pure business logic: which layers exist, what they
//! depend on, how names are derived, and how templates turn into file text.
//! All I/O is handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable values**: Templates and the registry are built once, then read
//!
// Public API - what the world sees
pub mod casing;
pub mod entities;
pub mod error;
pub mod registry;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    plan::{GenerationPlan, PendingWrite},
    request::{DEFAULT_OUTPUT_FOLDER, GenerationRequest, GenerationRequestBuilder},
    template::{LayerTemplate, RenderContext, RenderedFile, TemplateSource},
};

pub use error::{DomainError, ErrorCategory};
pub use registry::TemplateRegistry;
pub use value_objects::{Language, Layer, Operation};

pub use validation::DomainValidator;
