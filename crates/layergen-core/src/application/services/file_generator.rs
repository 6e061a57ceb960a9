//! File Generator - renders one file per layer and writes them.
//!
//! Generation happens in two stages:
//! 1. **plan**: resolve and render every template; any unknown layer aborts
//!    here, before a single byte is written
//! 2. **execute**: write every planned file concurrently, each write bounded
//!    by a timeout, and wait for all of them
//!
//! The layer folders must already exist. [`super::ScaffoldService`] runs
//! the full flow including folder creation.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::Filesystem,
        report::{FailureKind, GenerationReport, LayerFailure, WrittenFile},
    },
    domain::{
        DomainValidator as validator, GenerationPlan, GenerationRequest, PendingWrite,
        TemplateRegistry, casing::lower_case_first_letter,
    },
    error::LayergenResult,
};

/// Knobs for the write stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Upper bound for a single file write.
    pub write_timeout: Duration,
    /// Stop waiting for the remaining writes after the first failure.
    pub fail_fast: bool,
}

impl GeneratorOptions {
    pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_millis(5000);

    pub fn with_write_timeout(mut self, write_timeout: Duration) -> Self {
        self.write_timeout = write_timeout;
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            write_timeout: Self::DEFAULT_WRITE_TIMEOUT,
            fail_fast: false,
        }
    }
}

type WriteOutcome = Result<(), (FailureKind, String)>;

pub struct FileGenerator {
    registry: Arc<TemplateRegistry>,
    filesystem: Arc<dyn Filesystem>,
    options: GeneratorOptions,
}

impl FileGenerator {
    pub fn new(registry: Arc<TemplateRegistry>, filesystem: Arc<dyn Filesystem>) -> Self {
        Self {
            registry,
            filesystem,
            options: GeneratorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> GeneratorOptions {
        self.options
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Compute every write for `request` without touching the filesystem.
    ///
    /// Layers are planned in request order. The target of each write is
    /// `root/output_folder/<layer>/<lowerCamel file name>.<ext>`.
    #[instrument(
        skip_all,
        fields(component = %request.component_name(), language = %request.language())
    )]
    pub fn plan(&self, request: &GenerationRequest) -> LayergenResult<GenerationPlan> {
        validator::validate_request(request)?;

        let language = request.language();
        let component = request.component_name();
        let mut plan = GenerationPlan::new(request.base_dir());

        for layer_id in request.layers() {
            let template = self.registry.resolve(language, layer_id)?;
            let layer = template.layer();

            let dependencies = layer.dependency_names(component);
            let rendered = template.render(component, &dependencies)?;

            let target = plan.layer_dir(layer).join(format!(
                "{}.{}",
                lower_case_first_letter(&rendered.file_name),
                language.file_extension()
            ));
            debug!(layer = %layer, path = %target.display(), ?dependencies, "Planned write");
            plan.add_write(layer, target, rendered.content);
        }

        validator::validate_plan(&plan)?;
        info!(writes = plan.len(), "Generation planned");
        Ok(plan)
    }

    /// Write every file of `plan` and wait for all outcomes.
    ///
    /// On failure the error lists every failed write together with the
    /// layers that were written.
    #[instrument(skip_all, fields(writes = plan.len(), fail_fast = self.options.fail_fast))]
    pub async fn execute(&self, plan: &GenerationPlan) -> LayergenResult<GenerationReport> {
        let (written, failures) = self.write_all(plan.writes()).await;

        if failures.is_empty() {
            info!(files = written.len(), "All files written");
            Ok(GenerationReport {
                written,
                ..GenerationReport::default()
            })
        } else {
            Err(ApplicationError::WriteFailed {
                written: written.iter().map(|w| w.layer).collect(),
                failures,
            }
            .into())
        }
    }

    /// Plan, then execute.
    pub async fn generate(&self, request: &GenerationRequest) -> LayergenResult<GenerationReport> {
        let plan = self.plan(request)?;
        self.execute(&plan).await
    }

    /// Run the writes concurrently. Results come back in plan order.
    pub(crate) async fn write_all(
        &self,
        writes: &[PendingWrite],
    ) -> (Vec<WrittenFile>, Vec<LayerFailure>) {
        let limit = self.options.write_timeout;

        let mut in_flight: FuturesUnordered<_> = writes
            .iter()
            .enumerate()
            .map(|(index, write)| {
                let filesystem = self.filesystem.as_ref();
                async move {
                    let outcome: WriteOutcome =
                        match timeout(limit, filesystem.write_file(&write.target_file, &write.content))
                            .await
                        {
                            Ok(Ok(())) => Ok(()),
                            Ok(Err(e)) => Err((FailureKind::Write, e.to_string())),
                            Err(_) => Err((
                                FailureKind::TimedOut,
                                format!("no response after {}ms", limit.as_millis()),
                            )),
                        };
                    (index, outcome)
                }
            })
            .collect();

        let mut outcomes: Vec<Option<WriteOutcome>> = vec![None; writes.len()];
        while let Some((index, outcome)) = in_flight.next().await {
            let failed = outcome.is_err();
            outcomes[index] = Some(outcome);
            if failed && self.options.fail_fast {
                warn!(remaining = in_flight.len(), "Write failed, cancelling the rest");
                break;
            }
        }
        // Dropping the set cancels whatever is still pending.
        drop(in_flight);

        let mut written = Vec::new();
        let mut failures = Vec::new();
        for (write, outcome) in writes.iter().zip(outcomes) {
            match outcome {
                Some(Ok(())) => {
                    debug!(layer = %write.layer, path = %write.target_file.display(), "Wrote file");
                    written.push(WrittenFile {
                        layer: write.layer,
                        path: write.target_file.clone(),
                        bytes: write.size(),
                    });
                }
                Some(Err((kind, reason))) => {
                    warn!(layer = %write.layer, path = %write.target_file.display(), %kind, %reason, "Write failed");
                    failures.push(LayerFailure::new(
                        write.layer,
                        write.target_file.clone(),
                        kind,
                        reason,
                    ));
                }
                None => failures.push(LayerFailure::new(
                    write.layer,
                    write.target_file.clone(),
                    FailureKind::Cancelled,
                    "abandoned after an earlier write failed",
                )),
            }
        }

        (written, failures)
    }
}
