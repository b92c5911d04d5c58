//! Use Cases
//!
//! Application services orchestrating the pipeline stages.

/// Documentation generation pipeline
pub mod pipeline;

pub use pipeline::{DocumentationPipeline, PipelineReport, PlannedModule};
