use crate::domain::{
    entities::{GenerationPlan, GenerationRequest},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_request(request: &GenerationRequest) -> Result<(), DomainError> {
        request.validate()
    }

    pub fn validate_plan(plan: &GenerationPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
