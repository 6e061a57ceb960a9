//! Filesystem-based template overrides.
//!
//! Lets a project replace any built-in template with its own text, using
//! the same layout the built-in sets are stored in:
//!
//! ```text
//! my-templates/
//! ├── javascript/
//! │   ├── repository.js.tpl
//! │   └── service.js.tpl
//! └── typescript/
//!     └── factory.ts.tpl
//! ```
//!
//! Only the files present are overridden; every other `(language, layer)`
//! keeps its built-in template. Files that do not follow the
//! `<layer>.<ext>.tpl` naming, or sit under an unknown language folder, are
//! skipped with a warning.
//!
//! # Environment variable
//!
//! ```env
//! LAYERGEN_TEMPLATES_DIR=./my-templates
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use layergen_core::{
    application::ApplicationError,
    domain::{Language, Layer, LayerTemplate, TemplateRegistry},
    error::LayergenResult,
};

/// Environment variable naming an override directory.
pub const TEMPLATES_DIR_ENV: &str = "LAYERGEN_TEMPLATES_DIR";

const TEMPLATE_SUFFIX: &str = ".tpl";

/// A directory of user templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateOverrides {
    root: PathBuf,
}

impl TemplateOverrides {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Overrides named by `$LAYERGEN_TEMPLATES_DIR`, if set and non-empty.
    pub fn from_env() -> Option<Self> {
        std::env::var(TEMPLATES_DIR_ENV)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(Self::new)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read every well-formed override template.
    ///
    /// A missing root directory is an error: an override directory is only
    /// ever named explicitly.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn load(&self) -> LayergenResult<Vec<LayerTemplate>> {
        if !self.root.is_dir() {
            return Err(ApplicationError::FilesystemError {
                path: self.root.clone(),
                reason: "Template directory does not exist".into(),
            }
            .into());
        }

        let mut templates = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(2)
            .max_depth(2)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: e
                    .path()
                    .map_or_else(|| self.root.clone(), Path::to_path_buf),
                reason: format!("Failed to read template directory: {e}"),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Some((language, layer)) = classify(path) else {
                warn!(path = %path.display(), "Skipping file that is not a layer template");
                continue;
            };

            let text = fs::read_to_string(path).map_err(|e| ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: format!("Failed to read template: {e}"),
            })?;

            debug!(path = %path.display(), %language, %layer, "Loaded template override");
            templates.push(LayerTemplate::new(layer, language, text));
        }

        Ok(templates)
    }

    /// Load the overrides into `registry`, replacing built-ins in place.
    /// Returns how many templates were replaced or added.
    pub fn apply(&self, registry: &mut TemplateRegistry) -> LayergenResult<usize> {
        let templates = self.load()?;
        let count = templates.len();
        for template in templates {
            registry.register(template);
        }
        info!(count, root = %self.root.display(), "Template overrides applied");
        Ok(count)
    }
}

/// `<root>/<language>/<layer>.<ext>.tpl` -> `(language, layer)`.
fn classify(path: &Path) -> Option<(Language, Layer)> {
    let language: Language = path
        .parent()?
        .file_name()?
        .to_str()?
        .parse()
        .ok()?;

    let name = path.file_name()?.to_str()?.strip_suffix(TEMPLATE_SUFFIX)?;
    let (layer, extension) = name.split_once('.')?;

    if extension != language.file_extension() {
        return None;
    }

    Some((language, layer.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(root: &Path, relative: &str, text: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    #[test]
    fn classify_accepts_builtin_layout() {
        assert_eq!(
            classify(Path::new("t/javascript/service.js.tpl")),
            Some((Language::JavaScript, Layer::Service))
        );
        assert_eq!(
            classify(Path::new("t/typescript/factory.ts.tpl")),
            Some((Language::TypeScript, Layer::Factory))
        );
    }

    #[test]
    fn classify_rejects_mismatches() {
        assert_eq!(classify(Path::new("t/javascript/service.ts.tpl")), None);
        assert_eq!(classify(Path::new("t/javascript/controller.js.tpl")), None);
        assert_eq!(classify(Path::new("t/rust/service.rs.tpl")), None);
        assert_eq!(classify(Path::new("t/javascript/service.js")), None);
    }

    #[test]
    fn load_reads_only_layer_templates() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "javascript/service.js.tpl", "// {{CLASS_NAME}}");
        write(tmp.path(), "javascript/README.md", "docs");
        write(tmp.path(), "typescript/repository.ts.tpl", "// ts");

        let templates = TemplateOverrides::new(tmp.path()).load().unwrap();

        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].layer(), Layer::Service);
        assert_eq!(templates[0].source(), "// {{CLASS_NAME}}");
        assert_eq!(templates[1].language(), Language::TypeScript);
    }

    #[test]
    fn apply_replaces_only_overridden_layers() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "javascript/service.js.tpl", "custom {{CLASS_NAME}}");

        let mut registry = crate::builtin_templates::registry();
        let count = TemplateOverrides::new(tmp.path())
            .apply(&mut registry)
            .unwrap();

        assert_eq!(count, 1);
        assert_eq!(registry.len(), 6);
        assert_eq!(
            registry
                .get(Language::JavaScript, Layer::Service)
                .unwrap()
                .source(),
            "custom {{CLASS_NAME}}"
        );
        assert_eq!(registry.layers(Language::JavaScript), Layer::ALL.to_vec());
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = TemplateOverrides::new(tmp.path().join("absent"))
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
