pub mod plan;
pub mod request;
pub mod template;

pub use crate::domain::DomainError;
pub use plan::{GenerationPlan, PendingWrite};
pub use request::{GenerationRequest, GenerationRequestBuilder};
pub use template::{LayerTemplate, RenderContext, RenderedFile, TemplateSource};
