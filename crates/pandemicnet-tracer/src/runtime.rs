//! PandemicRuntime: owns the store, the loaded classifier and the tracer.
//!
//! The runtime is a singleton stored behind `OnceLock`. It's initialized once
//! via `initialize()` and accessed via `get()` for the lifetime of the process.
//! The classifier is loaded exactly once, here, and never reloaded.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use pandemicnet_core::config::{ClassifierConfig, PandemicConfig};
use pandemicnet_core::errors::{ConfigError, PandemicResult, PredictionError};
use pandemicnet_core::traits::ContactClassifier;
use pandemicnet_prediction::{reference_classifier, ClassifierArtifact, TemplateNarrator};
use pandemicnet_storage::StorageEngine;

use crate::report::TraceReport;
use crate::service::ContactTracer;
use crate::tracing_setup::events;

/// Global singleton.
static RUNTIME: OnceLock<Arc<PandemicRuntime>> = OnceLock::new();

pub struct PandemicRuntime {
    pub tracer: ContactTracer<StorageEngine>,
    pub narrator: TemplateNarrator,
    pub config: PandemicConfig,
    classifier_kind: &'static str,
}

/// Options for initializing the runtime.
#[derive(Debug, Default)]
pub struct RuntimeOptions {
    /// Path to the SQLite database. If None, uses in-memory.
    pub db_path: Option<PathBuf>,
    /// TOML configuration file, loaded with env overrides. Takes precedence
    /// over `config_toml`.
    pub config_path: Option<PathBuf>,
    /// TOML configuration string. If both are None, uses defaults.
    pub config_toml: Option<String>,
}

impl PandemicRuntime {
    /// Build a runtime without installing it as the global one.
    pub fn new(opts: RuntimeOptions) -> PandemicResult<Self> {
        let config = match (&opts.config_path, &opts.config_toml) {
            (Some(path), _) => PandemicConfig::load(path)?,
            (None, Some(toml_str)) => PandemicConfig::from_toml(toml_str)?,
            (None, None) => PandemicConfig::default(),
        };

        let store = match &opts.db_path {
            Some(path) => StorageEngine::open_with_config(path, &config.storage)?,
            None => StorageEngine::open_in_memory()?,
        };

        let (classifier, classifier_kind) = load_classifier(&config.classifier)?;
        let tracer = ContactTracer::new(store, classifier, config.prediction.clone());

        Ok(Self {
            tracer,
            narrator: TemplateNarrator::new(),
            config,
            classifier_kind,
        })
    }

    /// `forest`, `logistic`, or `reference`.
    pub fn classifier_kind(&self) -> &'static str {
        self.classifier_kind
    }

    /// handle → narrator sentence for every predicted candidate of `report`.
    pub fn narrate(&self, report: &TraceReport) -> BTreeMap<String, String> {
        report.narrate(&self.narrator)
    }
}

/// Load the configured artifact, or the built-in reference model when no
/// artifact path is set.
pub fn load_classifier(
    config: &ClassifierConfig,
) -> Result<(Arc<dyn ContactClassifier>, &'static str), PredictionError> {
    match &config.artifact_path {
        Some(path) => {
            let artifact = ClassifierArtifact::from_file(Path::new(path))?;
            let kind = artifact.kind();
            let classifier = artifact.into_classifier()?;
            events::classifier_loaded(kind, path);
            Ok((classifier, kind))
        }
        None => {
            events::classifier_loaded("reference", "built-in");
            Ok((Arc::new(reference_classifier()), "reference"))
        }
    }
}

/// Initialize the global PandemicRuntime singleton.
///
/// Returns an error if already initialized or if initialization fails.
pub fn initialize(opts: RuntimeOptions) -> PandemicResult<()> {
    if is_initialized() {
        return Err(already_initialized().into());
    }
    let runtime = PandemicRuntime::new(opts)?;
    RUNTIME
        .set(Arc::new(runtime))
        .map_err(|_| already_initialized().into())
}

/// Get a reference to the global PandemicRuntime.
///
/// Returns an error if not yet initialized.
pub fn get() -> PandemicResult<Arc<PandemicRuntime>> {
    RUNTIME
        .get()
        .cloned()
        .ok_or_else(|| PredictionError::NotInitialized.into())
}

/// Check if the runtime has been initialized.
pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}

fn already_initialized() -> ConfigError {
    ConfigError::ValidationFailed {
        field: "runtime".to_string(),
        message: "PandemicRuntime already initialized".to_string(),
    }
}
