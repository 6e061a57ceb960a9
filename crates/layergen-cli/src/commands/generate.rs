//! `layergen generate`: turn arguments into a request, run the scaffold
//! service and report per layer.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, instrument};

use layergen_adapters::{LocalFilesystem, TemplateOverrides, registry};
use layergen_core::{
    application::{GenerationReport, GeneratorOptions, ScaffoldService},
    domain::{GenerationPlan, GenerationRequest, Language, Layer, TemplateRegistry},
    error::LayergenError,
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(component = %args.component))]
pub fn execute(args: GenerateArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let request = build_request(&args, config)?;
    let registry = build_registry(args.templates_dir.as_deref(), config)?;
    let options = generator_options(&args, config);

    debug!(
        language = %request.language(),
        base = %request.base_dir().display(),
        layers = ?request.layers(),
        timeout_ms = options.write_timeout.as_millis() as u64,
        fail_fast = options.fail_fast,
        "Request resolved"
    );

    let service = ScaffoldService::new(Arc::new(registry), Arc::new(LocalFilesystem::new()))
        .with_options(options);

    if args.dry_run {
        let plan = service.plan(&request)?;
        return show_plan(&plan, output);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .with_cli_context(|| "Failed to start the async runtime")?;

    output.header(&format!(
        "Generating '{}' in {}...",
        request.component_name(),
        request.base_dir().display()
    ))?;

    let report = runtime.block_on(service.scaffold(&request))?;
    info!(files = report.written.len(), "Generation finished");

    show_report(&report, output)
}

/// Flags first, then configured defaults.
fn build_request(args: &GenerateArgs, config: &AppConfig) -> CliResult<GenerationRequest> {
    let language: Language = match args.language {
        Some(lang) => lang.into(),
        None => config.language()?,
    };

    let layers = if args.layers.is_empty() {
        &config.defaults.layers
    } else {
        &args.layers
    };

    GenerationRequest::builder(args.component.trim())
        .root_path(args.root.clone().unwrap_or_else(|| PathBuf::from(".")))
        .output_folder(
            args.output_folder
                .clone()
                .unwrap_or_else(|| config.defaults.output_folder.clone()),
        )
        .layers(layers.iter().map(String::as_str))
        .language(language)
        .build()
        .map_err(|e| CliError::Core(LayergenError::from(e)))
}

fn generator_options(args: &GenerateArgs, config: &AppConfig) -> GeneratorOptions {
    let mut options = config.generator_options();
    if let Some(ms) = args.timeout_ms {
        options = options.with_write_timeout(Duration::from_millis(ms));
    }
    if args.fail_fast {
        options = options.with_fail_fast(true);
    }
    options
}

/// `--templates-dir`, then `templates.dir`, then `$LAYERGEN_TEMPLATES_DIR`.
fn resolve_overrides(flag: Option<&Path>, config: &AppConfig) -> Option<TemplateOverrides> {
    flag.or(config.templates.dir.as_deref())
        .map(TemplateOverrides::new)
        .or_else(TemplateOverrides::from_env)
}

/// Built-in templates with any overrides applied. `layers` lists the same set.
pub(crate) fn build_registry(
    flag: Option<&Path>,
    config: &AppConfig,
) -> CliResult<TemplateRegistry> {
    let mut templates = registry();
    if let Some(overrides) = resolve_overrides(flag, config) {
        let count = overrides.apply(&mut templates)?;
        debug!(count, dir = %overrides.root().display(), "Using template overrides");
    }
    Ok(templates)
}

/// One planned file, as shown by `--dry-run`.
#[derive(Debug, Serialize)]
struct PlannedFile<'a> {
    layer: Layer,
    path: &'a Path,
    bytes: usize,
}

fn show_plan(plan: &GenerationPlan, output: &OutputManager) -> CliResult<()> {
    let files: Vec<PlannedFile<'_>> = plan
        .writes()
        .iter()
        .map(|w| PlannedFile {
            layer: w.layer,
            path: &w.target_file,
            bytes: w.size(),
        })
        .collect();

    if output.is_json() {
        output.json(&files)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would write {} file(s) under {}",
        files.len(),
        plan.base_dir().display()
    ))?;
    for file in &files {
        output.data(&format!(
            "  {:<10} {} ({} bytes)",
            file.layer.as_str(),
            file.path.display(),
            file.bytes
        ))?;
    }
    Ok(())
}

fn show_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(report)?;
        return Ok(());
    }

    for file in &report.written {
        let folder = if report.created_directories.contains(&file.layer) {
            "new folder"
        } else {
            "existing folder"
        };
        output.success(&format!(
            "{:<10} {} ({folder})",
            file.layer.as_str(),
            file.path.display()
        ))?;
    }
    output.print("")?;
    output.print(&format!("{} file(s) generated.", report.written.len()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalArgs, LanguageArg, OutputFormat};

    fn args(component: &str) -> GenerateArgs {
        GenerateArgs {
            component: component.into(),
            layers: Vec::new(),
            root: None,
            output_folder: None,
            language: None,
            templates_dir: None,
            dry_run: false,
            fail_fast: false,
            timeout_ms: None,
        }
    }

    fn quiet_output() -> OutputManager {
        let global = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&global, &AppConfig::default())
    }

    #[test]
    fn request_falls_back_to_config_defaults() {
        let request = build_request(&args("heroes"), &AppConfig::default()).unwrap();

        assert_eq!(request.layers(), ["repository", "service", "factory"]);
        assert_eq!(request.output_folder(), Path::new("src"));
        assert_eq!(request.root_path(), Path::new("."));
        assert_eq!(request.language(), Language::JavaScript);
    }

    #[test]
    fn flags_override_config() {
        let mut a = args("heroes");
        a.layers = vec!["service".into()];
        a.root = Some(PathBuf::from("app"));
        a.output_folder = Some(PathBuf::from("lib"));
        a.language = Some(LanguageArg::TypeScript);

        let request = build_request(&a, &AppConfig::default()).unwrap();

        assert_eq!(request.layers(), ["service"]);
        assert_eq!(request.base_dir(), PathBuf::from("app/lib"));
        assert_eq!(request.language(), Language::TypeScript);
    }

    #[test]
    fn invalid_component_is_user_error() {
        let err = build_request(&args("9lives"), &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn timeout_flag_beats_config() {
        let mut a = args("heroes");
        a.timeout_ms = Some(20);
        a.fail_fast = true;

        let options = generator_options(&a, &AppConfig::default());
        assert_eq!(options.write_timeout, Duration::from_millis(20));
        assert!(options.fail_fast);

        let options = generator_options(&args("heroes"), &AppConfig::default());
        assert_eq!(options.write_timeout, GeneratorOptions::DEFAULT_WRITE_TIMEOUT);
        assert!(!options.fail_fast);
    }

    #[test]
    fn templates_flag_beats_config() {
        let mut config = AppConfig::default();
        config.templates.dir = Some(PathBuf::from("from-config"));

        let chosen = resolve_overrides(Some(Path::new("from-flag")), &config).unwrap();
        assert_eq!(chosen.root(), Path::new("from-flag"));

        let chosen = resolve_overrides(None, &config).unwrap();
        assert_eq!(chosen.root(), Path::new("from-config"));
    }

    #[test]
    fn missing_templates_dir_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");
        assert!(build_registry(Some(&missing), &AppConfig::default()).is_err());
    }

    #[test]
    fn execute_writes_every_layer() {
        let tmp = tempfile::tempdir().unwrap();
        let mut a = args("heroes");
        a.root = Some(tmp.path().to_path_buf());

        execute(a, &AppConfig::default(), &quiet_output()).unwrap();

        let src = tmp.path().join("src");
        assert!(src.join("repository/heroesRepository.js").is_file());
        assert!(src.join("service/heroesService.js").is_file());
        assert!(src.join("factory/heroesFactory.js").is_file());
    }

    #[test]
    fn dry_run_touches_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let mut a = args("heroes");
        a.root = Some(tmp.path().to_path_buf());
        a.dry_run = true;

        execute(a, &AppConfig::default(), &quiet_output()).unwrap();

        assert!(!tmp.path().join("src").exists());
    }

    #[test]
    fn unknown_layer_exits_not_found_without_writing() {
        let tmp = tempfile::tempdir().unwrap();
        let mut a = args("heroes");
        a.root = Some(tmp.path().to_path_buf());
        a.layers = vec!["repository".into(), "controller".into()];

        let err = execute(a, &AppConfig::default(), &quiet_output()).unwrap_err();

        assert_eq!(err.exit_code(), 3);
        assert!(!tmp.path().join("src").exists());
    }
}
