// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside aggregate reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid component name '{name}': {reason}")]
    InvalidComponentName { name: String, reason: String },

    #[error("At least one layer must be requested")]
    EmptyLayerList,

    #[error("Duplicate path in generation plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("No template registered for layer '{layer}' ({language})")]
    TemplateNotFound { layer: String, language: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("layer '{layer}' expects {expected} dependency name(s), got {found}")]
    DependencyMismatch {
        layer: String,
        expected: usize,
        found: usize,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidComponentName { name, .. } => vec![
                format!("'{}' cannot be used as a class name prefix", name),
                "Start with a letter, '_' or '$'".into(),
                "Use only letters, digits, '_' and '$' afterwards".into(),
                "Examples: heroes, userProfile, Orders".into(),
            ],
            Self::EmptyLayerList => vec![
                "Pass at least one layer with --layer".into(),
                "Try: layergen layers to see available layers".into(),
            ],
            Self::TemplateNotFound { layer, language } => vec![
                format!("No {} template exists for layer '{}'", language, layer),
                "Known layers: repository, service, factory".into(),
                "Try: layergen layers".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("Two layers would write to {}", path),
                "Remove the repeated --layer argument".into(),
            ],
            Self::UnknownLanguage(_) => vec![
                "Supported languages: javascript (js), typescript (ts)".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidComponentName { .. }
            | Self::EmptyLayerList
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::UnknownLanguage(_) => ErrorCategory::Validation,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::DependencyMismatch { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
