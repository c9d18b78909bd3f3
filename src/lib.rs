//! NEET panel pipeline
//!
//! Links three waves of a youth panel survey by subject ID, keeps the
//! subjects who were NEET (not in education, employment or training) in the
//! first wave, derives whether each of them found employment in a later wave
//! and writes an enriched per-subject table for downstream dashboards.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod schema;
pub mod utils;
pub mod writer;

// Re-export the most common types for easier use
pub use config::{PipelineConfig, PipelineVariant};
pub use error::{PipelineError, Result};
pub use models::{EnrichedRecord, Locale, Outcome, PanelRecord, SubjectId, Wave};
pub use pipeline::{Dataset, build_dataset, load_inputs, run_pipeline};

pub use algorithm::{CohortSummary, NeetCohort, derive_outcome, is_neet, merge_waves};
