//! Configuration for the tracer.
//! TOML-based, layered: env > file > compiled defaults.

pub mod classifier_config;
pub mod defaults;
pub mod observability_config;
pub mod pandemic_config;
pub mod prediction_config;
pub mod storage_config;

pub use classifier_config::ClassifierConfig;
pub use observability_config::ObservabilityConfig;
pub use pandemic_config::PandemicConfig;
pub use prediction_config::{BridgePolicy, PredictionConfig};
pub use storage_config::StorageConfig;
