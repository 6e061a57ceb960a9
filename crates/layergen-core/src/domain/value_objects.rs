//! Domain value objects: Layer, Language, Operation.
//!
//! # Design
//!
//! Pure value types: `Copy` and compared by value.
//! Each closed set is an enum so that template lookup is an exact match
//! on the variant rather than a search over strings.
//!
//! # Adding a New Layer
//!
//! 1. Add the enum variant and its `as_str` / `FromStr` arms here
//! 2. Declare what it depends on in `Layer::dependencies`
//! 3. Ship a template for it in `layergen-adapters`

use crate::domain::casing::{lower_case_first_letter, upper_case_first_letter};
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Layer ────────────────────────────────────────────────────────────────────

/// An architectural role that gets its own folder and generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Repository,
    Service,
    Factory,
}

impl Layer {
    /// Every layer, in dependency order.
    pub const ALL: [Layer; 3] = [Layer::Repository, Layer::Service, Layer::Factory];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Repository => "repository",
            Self::Service => "service",
            Self::Factory => "factory",
        }
    }

    /// Layers whose generated constructs this layer receives by name.
    ///
    /// Order matters: it is the order in which dependency names are passed
    /// to the layer's template.
    pub const fn dependencies(&self) -> &'static [Layer] {
        match self {
            Self::Repository => &[],
            Self::Service => &[Layer::Repository],
            Self::Factory => &[Layer::Repository, Layer::Service],
        }
    }

    /// Placeholder prefix used when this layer is injected as a dependency,
    /// e.g. `{{REPOSITORY_NAME}}`.
    pub const fn placeholder_prefix(&self) -> &'static str {
        match self {
            Self::Repository => "REPOSITORY",
            Self::Service => "SERVICE",
            Self::Factory => "FACTORY",
        }
    }

    /// Generated file name without extension: `heroes` -> `heroesRepository`.
    pub fn file_name(&self, component_name: &str) -> String {
        format!("{}{}", component_name, upper_case_first_letter(self.as_str()))
    }

    /// Lower-camel identifier of this layer's construct for a component,
    /// which is also the stem of the generated file.
    pub fn identifier(&self, component_name: &str) -> String {
        lower_case_first_letter(&self.file_name(component_name))
    }

    /// Dependency names injected into this layer's template.
    ///
    /// `Factory.dependency_names("heroes")` -> `["heroesRepository", "heroesService"]`.
    pub fn dependency_names(&self, component_name: &str) -> Vec<String> {
        self.dependencies()
            .iter()
            .map(|dep| dep.identifier(component_name))
            .collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "repository" => Ok(Self::Repository),
            "service" => Ok(Self::Service),
            "factory" => Ok(Self::Factory),
            other => Err(DomainError::TemplateNotFound {
                layer: other.to_string(),
                language: "any".to_string(),
            }),
        }
    }
}

// ── Language ─────────────────────────────────────────────────────────────────

/// Language of the generated source files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    JavaScript,
    TypeScript,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::JavaScript, Language::TypeScript];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
        }
    }

    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::JavaScript => "js",
            Self::TypeScript => "ts",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" => Ok(Self::JavaScript),
            "typescript" | "ts" => Ok(Self::TypeScript),
            other => Err(DomainError::UnknownLanguage(other.to_string())),
        }
    }
}

// ── Operation ────────────────────────────────────────────────────────────────

/// The operations every generated repository and service exposes.
///
/// This is the explicit capability list of the generated constructs: a
/// repository rejects each of them, a service forwards each of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Create,
        Operation::Read,
        Operation::Update,
        Operation::Delete,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Parameter list of the generated method, as it appears at the call site.
    pub const fn arguments(&self) -> &'static str {
        match self {
            Self::Create => "data",
            Self::Read => "query",
            Self::Update => "id, data",
            Self::Delete => "id",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
