//! Built-in template sets.
//!
//! One template per `(language, layer)` pair, compiled into the binary from
//! `templates/<language>/<layer>.<ext>.tpl`. [`registry`] is the single
//! entry point; registration follows dependency order so that listing the
//! registry shows repository, service, factory.
//!
//! # Placeholders
//!
//! Templates only use plain `{{VARIABLE}}` substitution; see
//! `layergen_core::domain::entities::template` for the variable table.

use layergen_core::domain::{Language, Layer, LayerTemplate, TemplateRegistry};
use tracing::debug;

const JS_REPOSITORY: &str = include_str!("../templates/javascript/repository.js.tpl");
const JS_SERVICE: &str = include_str!("../templates/javascript/service.js.tpl");
const JS_FACTORY: &str = include_str!("../templates/javascript/factory.js.tpl");

const TS_REPOSITORY: &str = include_str!("../templates/typescript/repository.ts.tpl");
const TS_SERVICE: &str = include_str!("../templates/typescript/service.ts.tpl");
const TS_FACTORY: &str = include_str!("../templates/typescript/factory.ts.tpl");

/// Every built-in template, in registration order.
pub fn all_templates() -> Vec<LayerTemplate> {
    let sources: [(Language, [&'static str; 3]); 2] = [
        (Language::JavaScript, [JS_REPOSITORY, JS_SERVICE, JS_FACTORY]),
        (Language::TypeScript, [TS_REPOSITORY, TS_SERVICE, TS_FACTORY]),
    ];

    sources
        .into_iter()
        .flat_map(|(language, texts)| {
            Layer::ALL
                .into_iter()
                .zip(texts)
                .map(move |(layer, text)| LayerTemplate::new(layer, language, text))
        })
        .collect()
}

/// Registry holding every built-in template.
pub fn registry() -> TemplateRegistry {
    let registry = all_templates()
        .into_iter()
        .fold(TemplateRegistry::new(), TemplateRegistry::with_template);
    debug!(templates = registry.len(), "Built-in templates registered");
    registry
}
