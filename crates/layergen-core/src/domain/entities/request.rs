use std::path::{Path, PathBuf};

use crate::domain::{Language, error::DomainError};

/// Default folder, relative to the root path, that holds the layer folders.
pub const DEFAULT_OUTPUT_FOLDER: &str = "src";

/// Everything needed to generate one component across a set of layers.
///
/// Layers are kept as the raw identifiers supplied by the caller: an
/// unknown identifier is not a validation failure here but a
/// `TemplateNotFound` raised while planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    root_path: PathBuf,
    output_folder: PathBuf,
    layers: Vec<String>,
    component_name: String,
    language: Language,
}

impl GenerationRequest {
    pub fn builder(component_name: impl Into<String>) -> GenerationRequestBuilder {
        GenerationRequestBuilder::new(component_name)
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn output_folder(&self) -> &Path {
        &self.output_folder
    }

    pub fn layers(&self) -> &[String] {
        &self.layers
    }

    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// `root_path/output_folder`, the parent of every layer folder.
    pub fn base_dir(&self) -> PathBuf {
        self.root_path.join(&self.output_folder)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_component_name(&self.component_name)?;

        if self.layers.is_empty() {
            return Err(DomainError::EmptyLayerList);
        }

        if self.output_folder.is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: self.output_folder.display().to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for [`GenerationRequest`]; `build` validates.
#[derive(Debug, Clone)]
pub struct GenerationRequestBuilder {
    root_path: PathBuf,
    output_folder: PathBuf,
    layers: Vec<String>,
    component_name: String,
    language: Language,
}

impl GenerationRequestBuilder {
    fn new(component_name: impl Into<String>) -> Self {
        Self {
            root_path: PathBuf::from("."),
            output_folder: PathBuf::from(DEFAULT_OUTPUT_FOLDER),
            layers: Vec::new(),
            component_name: component_name.into(),
            language: Language::default(),
        }
    }

    pub fn root_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.root_path = path.into();
        self
    }

    pub fn output_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.output_folder = folder.into();
        self
    }

    pub fn layer(mut self, layer: impl Into<String>) -> Self {
        self.layers.push(layer.into());
        self
    }

    pub fn layers<I, S>(mut self, layers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.layers.extend(layers.into_iter().map(Into::into));
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn build(self) -> Result<GenerationRequest, DomainError> {
        let request = GenerationRequest {
            root_path: self.root_path,
            output_folder: self.output_folder,
            layers: self.layers,
            component_name: self.component_name,
            language: self.language,
        };
        request.validate()?;
        Ok(request)
    }
}

/// A component name must be usable as the prefix of a class name.
fn validate_component_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidComponentName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(invalid("name cannot be empty"));
    };

    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return Err(invalid("name must start with a letter, '_' or '$'"));
    }

    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '$')) {
        return Err(invalid(&format!("character '{bad}' is not allowed")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let request = GenerationRequest::builder("heroes")
            .layer("repository")
            .build()
            .unwrap();

        assert_eq!(request.root_path(), Path::new("."));
        assert_eq!(request.output_folder(), Path::new("src"));
        assert_eq!(request.language(), Language::JavaScript);
        assert_eq!(request.base_dir(), PathBuf::from("./src"));
    }

    #[test]
    fn layers_keep_caller_order() {
        let request = GenerationRequest::builder("heroes")
            .layers(["service", "repository"])
            .layer("factory")
            .build()
            .unwrap();

        assert_eq!(request.layers(), ["service", "repository", "factory"]);
    }

    #[test]
    fn empty_layers_rejected() {
        let err = GenerationRequest::builder("heroes").build().unwrap_err();
        assert_eq!(err, DomainError::EmptyLayerList);
    }

    #[test]
    fn absolute_output_folder_rejected() {
        let err = GenerationRequest::builder("heroes")
            .layer("service")
            .output_folder(std::env::temp_dir())
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::AbsolutePathNotAllowed { .. }));
    }

    #[test]
    fn unknown_layer_is_not_a_validation_error() {
        assert!(
            GenerationRequest::builder("heroes")
                .layer("controller")
                .build()
                .is_ok()
        );
    }

    #[test]
    fn valid_component_names() {
        for name in ["heroes", "Heroes", "user_profile", "_private", "$store", "v2Api"] {
            assert!(validate_component_name(name).is_ok(), "rejected: {name}");
        }
    }

    #[test]
    fn invalid_component_names() {
        for name in ["", "2heroes", "my-app", "my app", "heroes/x", "hé"] {
            assert!(
                matches!(
                    validate_component_name(name),
                    Err(DomainError::InvalidComponentName { .. })
                ),
                "accepted: {name}"
            );
        }
    }
}
