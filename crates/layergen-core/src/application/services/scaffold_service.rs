//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Plan every write (unknown layers abort here)
//! 2. Ensure the layer folders
//! 3. Write the files whose folder is ready
//!
//! All I/O goes through the `Filesystem` port.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::Filesystem,
        report::GenerationReport,
        services::{FileGenerator, GeneratorOptions, LayerScaffolder},
    },
    domain::{GenerationPlan, GenerationRequest, TemplateRegistry},
    error::LayergenResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    generator: FileGenerator,
    scaffolder: LayerScaffolder,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given templates and filesystem.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    /// use layergen_core::prelude::*;
    ///
    /// # fn build(registry: TemplateRegistry, filesystem: Arc<dyn Filesystem>) {
    /// let service = ScaffoldService::new(Arc::new(registry), filesystem)
    ///     .with_options(GeneratorOptions::default().with_fail_fast(true));
    /// # }
    /// ```
    pub fn new(registry: Arc<TemplateRegistry>, filesystem: Arc<dyn Filesystem>) -> Self {
        Self {
            scaffolder: LayerScaffolder::new(Arc::clone(&filesystem)),
            generator: FileGenerator::new(registry, filesystem),
        }
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.generator = self.generator.with_options(options);
        self
    }

    pub fn registry(&self) -> &TemplateRegistry {
        self.generator.registry()
    }

    /// Dry run: compute what `scaffold` would write.
    pub fn plan(&self, request: &GenerationRequest) -> LayergenResult<GenerationPlan> {
        self.generator.plan(request)
    }

    /// Generate one file per requested layer.
    ///
    /// Layers whose folder could not be created are skipped; the others are
    /// still written. Any failure yields an error listing the layers that
    /// made it and every layer that did not.
    #[instrument(
        skip_all,
        fields(
            component = %request.component_name(),
            language = %request.language(),
            base = %request.base_dir().display()
        )
    )]
    pub async fn scaffold(&self, request: &GenerationRequest) -> LayergenResult<GenerationReport> {
        info!(layers = request.layers().len(), "Scaffolding component");

        let mut plan = self.generator.plan(request)?;

        let folders = self
            .scaffolder
            .ensure_layers(request.root_path(), request.output_folder(), &plan.layers())
            .await?;

        let skipped = plan.remove_layers(&folders.failed_layers());
        if !skipped.is_empty() {
            warn!(skipped = skipped.len(), "Skipping layers without a folder");
        }

        let (written, write_failures) = self.generator.write_all(plan.writes()).await;

        let mut failures = folders.failures;
        failures.extend(write_failures);

        if !failures.is_empty() {
            return Err(ApplicationError::from_failures(
                written.iter().map(|w| w.layer).collect(),
                failures,
            )
            .into());
        }

        info!(files = written.len(), "Scaffold completed successfully");
        Ok(GenerationReport {
            written,
            created_directories: folders.created,
            existing_directories: folders.existing,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::report::FailureKind;
    use crate::application::services::testing::{RecordingFilesystem, registry};
    use crate::domain::Layer;
    use crate::error::LayergenError;

    fn heroes(layers: &[&str]) -> GenerationRequest {
        GenerationRequest::builder("heroes")
            .root_path("app")
            .layers(layers.iter().copied())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn heroes_gets_one_file_per_layer() {
        let fs = Arc::new(RecordingFilesystem::default());
        let service = ScaffoldService::new(Arc::new(registry()), fs.clone());

        let report = service
            .scaffold(&heroes(&["repository", "service", "factory"]))
            .await
            .unwrap();

        assert_eq!(report.created_directories, Layer::ALL.to_vec());
        let paths: Vec<_> = report.written.iter().map(|w| w.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("app/src/repository/heroesRepository.js"),
                PathBuf::from("app/src/service/heroesService.js"),
                PathBuf::from("app/src/factory/heroesFactory.js"),
            ]
        );
        assert_eq!(
            fs.file("app/src/factory/heroesFactory.js").as_deref(),
            Some("HeroesFactory(heroesRepository, heroesService)")
        );
    }

    #[tokio::test]
    async fn rerun_reports_existing_folders() {
        let fs = Arc::new(RecordingFilesystem::default());
        let service = ScaffoldService::new(Arc::new(registry()), fs.clone());
        let request = heroes(&["service"]);

        service.scaffold(&request).await.unwrap();
        let second = service.scaffold(&request).await.unwrap();

        assert!(second.created_directories.is_empty());
        assert_eq!(second.existing_directories, vec![Layer::Service]);
        assert_eq!(fs.file_count(), 1);
    }

    #[tokio::test]
    async fn dry_run_touches_nothing() {
        let fs = Arc::new(RecordingFilesystem::default());
        let service = ScaffoldService::new(Arc::new(registry()), fs.clone());

        let plan = service.plan(&heroes(&["repository", "service"])).unwrap();

        assert_eq!(plan.len(), 2);
        assert!(fs.dirs().is_empty());
        assert_eq!(fs.file_count(), 0);
    }

    #[tokio::test]
    async fn unknown_layer_creates_no_folder() {
        let fs = Arc::new(RecordingFilesystem::default());
        let service = ScaffoldService::new(Arc::new(registry()), fs.clone());

        let err = service
            .scaffold(&heroes(&["repository", "controller"]))
            .await
            .unwrap_err();

        assert!(err.is_template_not_found());
        assert!(fs.dirs().is_empty());
        assert_eq!(fs.file_count(), 0);
    }

    #[tokio::test]
    async fn folder_failure_skips_only_that_layer() {
        let fs = Arc::new(RecordingFilesystem::default().fail_mkdir("app/src/service"));
        let service = ScaffoldService::new(Arc::new(registry()), fs.clone());

        let err = service
            .scaffold(&heroes(&["repository", "service", "factory"]))
            .await
            .unwrap_err();

        let LayergenError::Application(app) = err else {
            panic!("expected an application error");
        };
        assert!(matches!(app, ApplicationError::DirectoryCreationFailed { .. }));
        assert_eq!(app.written(), &[Layer::Repository, Layer::Factory]);
        assert_eq!(app.failures().len(), 1);
        assert_eq!(app.failures()[0].kind, FailureKind::DirectoryCreation);
        assert!(fs.file("app/src/service/heroesService.js").is_none());
    }

    #[tokio::test]
    async fn folder_and_write_failures_are_merged() {
        let fs = Arc::new(
            RecordingFilesystem::default()
                .fail_mkdir("app/src/factory")
                .fail_write("app/src/repository/heroesRepository.js"),
        );
        let service = ScaffoldService::new(Arc::new(registry()), fs);

        let err = service
            .scaffold(&heroes(&["repository", "service", "factory"]))
            .await
            .unwrap_err();

        let LayergenError::Application(app) = err else {
            panic!("expected an application error");
        };
        let failed: Vec<_> = app.failures().iter().map(|f| f.layer).collect();
        assert_eq!(failed, vec![Layer::Factory, Layer::Repository]);
        assert_eq!(app.written(), &[Layer::Service]);
    }
}
