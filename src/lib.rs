pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::{CliConfig, RunConfig, SourceKind};
pub use crate::core::{etl::EtlEngine, pipeline::RecommendationPipeline};
pub use crate::utils::error::{RecsError, Result};
