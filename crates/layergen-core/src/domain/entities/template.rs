//! # Layer Templates
//!
//! A [`LayerTemplate`] turns `(component_name, dependency names…)` into a
//! [`RenderedFile`]: the generated file name (no extension) and its text.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  LayerTemplate (Value Object)                               │
//! │  ├── layer:    Layer      (which folder / role)             │
//! │  ├── language: Language   (which source flavour)            │
//! │  └── source:   TemplateSource (raw text with placeholders)  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RenderContext (Value Object)                               │
//! │  └── Variable substitution: {{CLASS_NAME}} -> "HeroesService" │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Placeholders
//!
//! | Variable | Example (`heroes`, service) |
//! |----------|-----------------------------|
//! | `COMPONENT_NAME` | "heroes" |
//! | `COMPONENT_CLASS` | "Heroes" |
//! | `CLASS_NAME` | "HeroesService" |
//! | `FILE_NAME` | "heroesService" |
//! | `<DEP>_NAME` | `REPOSITORY_NAME` = "heroesRepository" |
//! | `<DEP>_CLASS` | `REPOSITORY_CLASS` = "HeroesRepository" |
//!
//! There is no control flow: rendering is plain substitution.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::domain::{
    Language, Layer,
    casing::{lower_case_first_letter, upper_case_first_letter},
    error::DomainError,
};

/// Raw template text.
///
/// `Static` covers templates compiled into the binary; `Owned` covers text
/// assembled at runtime (tests, user overrides).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Static(&'static str),
    Owned(String),
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s.as_str(),
        }
    }
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

/// Output of a template: file name without extension, plus content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub file_name: String,
    pub content: String,
}

/// Immutable template for one layer in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerTemplate {
    layer: Layer,
    language: Language,
    source: TemplateSource,
}

impl LayerTemplate {
    pub fn new(layer: Layer, language: Language, source: impl Into<TemplateSource>) -> Self {
        Self {
            layer,
            language,
            source: source.into(),
        }
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    /// Render this template for `component_name`.
    ///
    /// `dependencies` are matched positionally against
    /// [`Layer::dependencies`]; a count mismatch is rejected rather than
    /// leaving placeholders unresolved.
    pub fn render(
        &self,
        component_name: &str,
        dependencies: &[String],
    ) -> Result<RenderedFile, DomainError> {
        let expected = self.layer.dependencies();
        if expected.len() != dependencies.len() {
            return Err(DomainError::DependencyMismatch {
                layer: self.layer.to_string(),
                expected: expected.len(),
                found: dependencies.len(),
            });
        }

        let file_name = self.layer.file_name(component_name);

        let mut ctx = RenderContext::new(component_name)
            .with_variable("CLASS_NAME", upper_case_first_letter(&file_name))
            .with_variable("FILE_NAME", lower_case_first_letter(&file_name));

        for (dep_layer, dep_name) in expected.iter().zip(dependencies) {
            let prefix = dep_layer.placeholder_prefix();
            ctx = ctx
                .with_variable(format!("{prefix}_NAME"), dep_name.clone())
                .with_variable(format!("{prefix}_CLASS"), upper_case_first_letter(dep_name));
        }

        Ok(RenderedFile {
            file_name,
            content: ctx.render(self.source.as_str()).into_owned(),
        })
    }
}

/// Context for template rendering.
///
/// A **Value Object** holding the variables substituted into a template.
/// Immutable after creation - `with_variable` consumes and returns a new one.
#[derive(Debug, Clone)]
pub struct RenderContext {
    component_name: String,
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Create a context seeded with the component-derived variables.
    pub fn new(component_name: impl Into<String>) -> Self {
        let name = component_name.into();
        let mut vars = HashMap::new();

        vars.insert("COMPONENT_NAME".to_string(), name.clone());
        vars.insert("COMPONENT_CLASS".to_string(), upper_case_first_letter(&name));

        Self {
            component_name: name,
            variables: vars,
        }
    }

    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    /// Add a variable, consuming self and returning the extended context.
    ///
    /// ```rust
    /// use layergen_core::domain::RenderContext;
    ///
    /// let ctx = RenderContext::new("heroes").with_variable("CLASS_NAME", "HeroesService");
    /// assert_eq!(ctx.render("class {{CLASS_NAME}} {}"), "class HeroesService {}");
    /// ```
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace every `{{VARIABLE}}` placeholder with its value.
    ///
    /// - `{{UNKNOWN}}` stays as a literal `{{UNKNOWN}}`
    /// - text without placeholders is returned borrowed
    pub fn render<'a>(&self, template: &'a str) -> Cow<'a, str> {
        if !template.contains("{{") {
            return Cow::Borrowed(template);
        }

        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            if result.contains(&placeholder) {
                result = result.replace(&placeholder, value);
            }
        }

        Cow::Owned(result)
    }
}
