//! `layergen layers`: list what `generate` can produce.

use serde::Serialize;

use layergen_core::domain::{Language, Layer, TemplateRegistry};

use crate::{
    cli::{LayersArgs, ListFormat},
    commands::generate::build_registry,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// One row of the listing.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct LayerInfo {
    layer: Layer,
    language: Language,
    /// File produced for the component `example`.
    file: String,
    depends_on: Vec<Layer>,
}

pub fn execute(args: LayersArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let language = match args.language {
        Some(lang) => lang.into(),
        None => config.language()?,
    };
    let templates = build_registry(args.templates_dir.as_deref(), config)?;
    let rows = describe(&templates, language);

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Available layers ({language}):"))?;
            output.data(&format!("  {:<12} {:<24} DEPENDS ON", "LAYER", "FILE"))?;
            for row in &rows {
                output.data(&format!(
                    "  {:<12} {:<24} {}",
                    row.layer.as_str(),
                    row.file,
                    dependency_list(&row.depends_on, "-")
                ))?;
            }
        }
        ListFormat::List => {
            for row in &rows {
                output.data(row.layer.as_str())?;
            }
        }
        ListFormat::Json => output.json(&rows)?,
        ListFormat::Csv => {
            output.data("layer,language,file,depends_on")?;
            for row in &rows {
                output.data(&format!(
                    "{},{},{},{}",
                    row.layer,
                    row.language,
                    row.file,
                    dependency_list(&row.depends_on, "")
                ))?;
            }
        }
    }

    Ok(())
}

fn describe(registry: &TemplateRegistry, language: Language) -> Vec<LayerInfo> {
    registry
        .layers(language)
        .into_iter()
        .map(|layer| LayerInfo {
            layer,
            language,
            file: format!(
                "{}.{}",
                layer.identifier("example"),
                language.file_extension()
            ),
            depends_on: layer.dependencies().to_vec(),
        })
        .collect()
}

/// `repository;service`, or `empty` when there are none.
fn dependency_list(layers: &[Layer], empty: &str) -> String {
    if layers.is_empty() {
        return empty.to_owned();
    }
    layers
        .iter()
        .map(Layer::as_str)
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;
    use layergen_adapters::registry;

    #[test]
    fn rows_follow_dependency_order() {
        let rows = describe(&registry(), Language::JavaScript);
        let layers: Vec<Layer> = rows.iter().map(|r| r.layer).collect();
        assert_eq!(layers, Layer::ALL.to_vec());
    }

    #[test]
    fn file_names_use_language_extension() {
        let rows = describe(&registry(), Language::TypeScript);
        assert_eq!(rows[0].file, "exampleRepository.ts");
        assert_eq!(rows[2].file, "exampleFactory.ts");
    }

    #[test]
    fn factory_depends_on_repository_and_service() {
        let rows = describe(&registry(), Language::JavaScript);
        assert_eq!(rows[2].depends_on, vec![Layer::Repository, Layer::Service]);
        assert_eq!(dependency_list(&rows[2].depends_on, "-"), "repository;service");
        assert_eq!(dependency_list(&rows[0].depends_on, "-"), "-");
    }

    #[test]
    fn json_uses_lowercase_names() {
        let rows = describe(&registry(), Language::JavaScript);
        let json = serde_json::to_value(&rows[1]).unwrap();
        assert_eq!(json["layer"], "service");
        assert_eq!(json["language"], "javascript");
        assert_eq!(json["depends_on"][0], "repository");
    }

    #[test]
    fn empty_registry_lists_nothing() {
        assert!(describe(&TemplateRegistry::new(), Language::JavaScript).is_empty());
    }
}
