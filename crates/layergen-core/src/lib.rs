//! Layergen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Layergen
//! component scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          layergen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, FileGenerator,       │
//! │   LayerScaffolder)                      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (Filesystem)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    layergen-adapters (Infrastructure)   │
//! │ (LocalFilesystem, MemoryFilesystem,     │
//! │  built-in template sets)                │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Layer, TemplateRegistry, Request,      │
//! │  GenerationPlan)                        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use layergen_core::prelude::*;
//!
//! # async fn run(registry: TemplateRegistry, filesystem: Arc<dyn Filesystem>) -> LayergenResult<()> {
//! let request = GenerationRequest::builder("heroes")
//!     .root_path("./my-app")
//!     .layers(["repository", "service", "factory"])
//!     .build()?;
//!
//! let service = ScaffoldService::new(Arc::new(registry), filesystem);
//! let report = service.scaffold(&request).await?;
//! assert_eq!(report.written.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FailureKind, FileGenerator, GenerationReport, GeneratorOptions, LayerFailure,
        LayerScaffolder, ScaffoldReport, ScaffoldService, WrittenFile, ports::Filesystem,
    };
    pub use crate::domain::{
        GenerationPlan, GenerationRequest, GenerationRequestBuilder, Language, Layer,
        LayerTemplate, Operation, PendingWrite, RenderContext, RenderedFile, TemplateRegistry,
    };
    pub use crate::error::{LayergenError, LayergenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
