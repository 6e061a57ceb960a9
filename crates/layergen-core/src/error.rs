//! Unified error handling for Layergen Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Layergen Core operations.
///
/// This enum wraps all possible errors that can occur when using layergen-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum LayergenError {
    /// Errors from the domain layer (business rule violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl LayergenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when this error says a template could not be found.
    pub fn is_template_not_found(&self) -> bool {
        matches!(self, Self::Domain(DomainError::TemplateNotFound { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Io,
    Internal,
}

/// Convenient result type alias.
pub type LayergenResult<T> = Result<T, LayergenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{FailureKind, LayerFailure};
    use crate::domain::Layer;

    #[test]
    fn domain_category_is_mapped() {
        let err: LayergenError = DomainError::EmptyLayerList.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn template_not_found_detected() {
        let err: LayergenError = DomainError::TemplateNotFound {
            layer: "x".into(),
            language: "javascript".into(),
        }
        .into();
        assert!(err.is_template_not_found());
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn lock_poisoning_is_internal() {
        let err: LayergenError = ApplicationError::LockPoisoned.into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn write_failures_are_io() {
        let err: LayergenError = ApplicationError::WriteFailed {
            written: vec![],
            failures: vec![LayerFailure::new(
                Layer::Service,
                "src/service/heroesService.js",
                FailureKind::Write,
                "disk full",
            )],
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(!err.is_template_not_found());
    }
}
