//! Layer Scaffolder - makes sure every layer has its folder.
//!
//! Folders are created concurrently. A folder that already exists is not an
//! error, so running the scaffolder twice is harmless: the second run only
//! reports `existing` layers.

use std::path::Path;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::Filesystem,
        report::{FailureKind, LayerFailure, ScaffoldReport},
    },
    domain::Layer,
    error::LayergenResult,
};

pub struct LayerScaffolder {
    filesystem: Arc<dyn Filesystem>,
}

impl LayerScaffolder {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Ensure `root/output_folder/<layer>` exists for every layer.
    ///
    /// Per-layer failures are collected in the report, not returned as `Err`.
    /// The only hard error is failing to inspect `root/output_folder` itself.
    #[instrument(
        skip_all,
        fields(
            base = %root.join(output_folder).display(),
            layers = layers.len()
        )
    )]
    pub async fn ensure_layers(
        &self,
        root: &Path,
        output_folder: &Path,
        layers: &[Layer],
    ) -> LayergenResult<ScaffoldReport> {
        let base = root.join(output_folder);
        let existing = self.filesystem.list_entries(&base).await?;
        debug!(entries = existing.len(), "Listed output folder");

        let mut unique: Vec<Layer> = Vec::with_capacity(layers.len());
        for layer in layers {
            if !unique.contains(layer) {
                unique.push(*layer);
            }
        }

        let outcomes = join_all(unique.into_iter().map(|layer| {
            let path = base.join(layer.as_str());
            let filesystem = self.filesystem.as_ref();
            async move {
                let result = filesystem.mkdir_if_absent(&path).await;
                (layer, path, result)
            }
        }))
        .await;

        let mut report = ScaffoldReport::default();
        for (layer, path, result) in outcomes {
            match result {
                Ok(()) if existing.iter().any(|name| name == layer.as_str()) => {
                    report.existing.push(layer);
                }
                Ok(()) => {
                    debug!(layer = %layer, path = %path.display(), "Created layer folder");
                    report.created.push(layer);
                }
                Err(e) => {
                    warn!(layer = %layer, path = %path.display(), error = %e, "Layer folder failed");
                    report.failures.push(LayerFailure::new(
                        layer,
                        path,
                        FailureKind::DirectoryCreation,
                        e.to_string(),
                    ));
                }
            }
        }

        info!(
            created = report.created.len(),
            existing = report.existing.len(),
            failed = report.failures.len(),
            "Layer folders ensured"
        );

        Ok(report)
    }
}
