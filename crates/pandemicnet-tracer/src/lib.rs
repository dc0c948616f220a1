//! # pandemicnet-tracer
//!
//! The operations an outer boundary (HTTP handler, CLI, UI) calls:
//! register people and contacts, trace a person. Also owns the
//! process-wide runtime, logging setup, and demo data seeding.

pub mod report;
pub mod runtime;
pub mod seed;
pub mod service;
pub mod tracing_setup;

pub use report::{PredictedContact, TraceReport};
pub use runtime::{PandemicRuntime, RuntimeOptions};
pub use seed::{demo_population, SeedSummary};
pub use service::ContactTracer;
