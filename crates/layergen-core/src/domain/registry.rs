//! Template registry.
//!
//! Holds one [`LayerTemplate`] per `(language, layer)` pair. Lookup is an
//! exact match on the [`Layer`] enum; iteration follows registration order.
//! The registry is filled once at startup and then shared read-only.

use crate::domain::{Language, Layer, LayerTemplate, error::DomainError};

#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<LayerTemplate>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template. A template already registered for the same
    /// language and layer is replaced in place.
    pub fn register(&mut self, template: LayerTemplate) {
        match self
            .templates
            .iter_mut()
            .find(|t| t.language() == template.language() && t.layer() == template.layer())
        {
            Some(slot) => *slot = template,
            None => self.templates.push(template),
        }
    }

    pub fn with_template(mut self, template: LayerTemplate) -> Self {
        self.register(template);
        self
    }

    pub fn get(&self, language: Language, layer: Layer) -> Option<&LayerTemplate> {
        self.templates
            .iter()
            .find(|t| t.language() == language && t.layer() == layer)
    }

    /// Resolve a caller-supplied layer identifier.
    ///
    /// Identifiers are matched case-insensitively against the known layers.
    pub fn resolve(&self, language: Language, layer_id: &str) -> Result<&LayerTemplate, DomainError> {
        let not_found = || DomainError::TemplateNotFound {
            layer: layer_id.to_string(),
            language: language.to_string(),
        };

        let layer: Layer = layer_id.parse().map_err(|_| not_found())?;
        self.get(language, layer).ok_or_else(not_found)
    }

    /// Layers with a template for `language`, in registration order.
    pub fn layers(&self, language: Language) -> Vec<Layer> {
        self.templates
            .iter()
            .filter(|t| t.language() == language)
            .map(|t| t.layer())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TemplateRegistry {
        TemplateRegistry::new()
            .with_template(LayerTemplate::new(Layer::Service, Language::JavaScript, "svc"))
            .with_template(LayerTemplate::new(Layer::Repository, Language::JavaScript, "repo"))
            .with_template(LayerTemplate::new(Layer::Repository, Language::TypeScript, "repo-ts"))
    }

    #[test]
    fn resolve_exact_and_case_insensitive() {
        let registry = registry();
        assert_eq!(
            registry.resolve(Language::JavaScript, "service").unwrap().source(),
            "svc"
        );
        assert_eq!(
            registry.resolve(Language::JavaScript, " Repository ").unwrap().source(),
            "repo"
        );
    }

    #[test]
    fn resolve_is_not_substring_search() {
        let err = registry()
            .resolve(Language::JavaScript, "repo")
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::TemplateNotFound {
                layer: "repo".into(),
                language: "javascript".into(),
            }
        );
    }

    #[test]
    fn known_layer_without_template_is_not_found() {
        let err = registry()
            .resolve(Language::TypeScript, "service")
            .unwrap_err();
        assert!(matches!(err, DomainError::TemplateNotFound { .. }));
    }

    #[test]
    fn layers_follow_registration_order() {
        assert_eq!(
            registry().layers(Language::JavaScript),
            vec![Layer::Service, Layer::Repository]
        );
    }

    #[test]
    fn re_registering_replaces_in_place() {
        let registry = registry()
            .with_template(LayerTemplate::new(Layer::Service, Language::JavaScript, "svc2"));

        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.get(Language::JavaScript, Layer::Service).unwrap().source(),
            "svc2"
        );
        assert_eq!(registry.layers(Language::JavaScript)[0], Layer::Service);
    }
}
