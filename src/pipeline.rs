//! End-to-end pipeline
//!
//! load → merge → classify → derive → enrich → write. All three waves are
//! loaded before any processing starts, so a load failure never leaves a
//! partial output behind.

use std::path::Path;
use std::time::Instant;

use log::info;

use crate::algorithm::enrich::{EnrichContext, enrich_cohort};
use crate::algorithm::merge::merge_waves;
use crate::algorithm::neet::NeetCohort;
use crate::algorithm::statistics::CohortSummary;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::loader::{WaveTable, ensure_inputs_exist, load_wave};
use crate::models::enriched::EnrichedRecord;
use crate::models::wave::{FollowUpRecord, Wave, Wave1Record};
use crate::schema::fields::{FollowUpField, Wave1Field};
use crate::writer::{output_columns, to_record_batch, write_output};

/// The loaded tables of all three waves
#[derive(Debug, Clone)]
pub struct WaveInputs {
    pub wave1: WaveTable<Wave1Field>,
    pub wave2: WaveTable<FollowUpField>,
    pub wave3: WaveTable<FollowUpField>,
}

/// Load all three wave files
///
/// Every input is checked for existence first, so a missing wave-3 file
/// fails before wave 1 is parsed.
pub fn load_inputs(config: &PipelineConfig) -> Result<WaveInputs> {
    ensure_inputs_exist(Wave::ALL.map(|wave| (wave, config.wave_path(wave))))?;

    let catalog = &config.variables;
    let follow_up_fields = FollowUpField::whitelist(config.variant);
    let load_follow_up = |wave: Wave| {
        load_wave(
            wave,
            config.wave_path(wave),
            &follow_up_fields,
            catalog,
            config.batch_size,
        )
    };

    Ok(WaveInputs {
        wave1: load_wave(
            Wave::First,
            &config.wave1_path,
            &Wave1Field::whitelist(config.variant),
            catalog,
            config.batch_size,
        )?,
        wave2: load_follow_up(Wave::Second)?,
        wave3: load_follow_up(Wave::Third)?,
    })
}

/// The enriched cohort and its summary
#[derive(Debug, Clone)]
pub struct Dataset {
    /// One record per NEET subject, in wave-1 order
    pub records: Vec<EnrichedRecord>,
    pub summary: CohortSummary,
}

/// Run every stage except writing
pub fn build_dataset(config: &PipelineConfig) -> Result<Dataset> {
    let inputs = load_inputs(config)?;
    let catalog = &config.variables;

    let wave1 = Wave1Record::from_table(&inputs.wave1, catalog)?;
    let unlinked = inputs.wave1.num_rows().saturating_sub(wave1.len());
    let wave2 = FollowUpRecord::from_table(&inputs.wave2, catalog)?;
    let wave3 = FollowUpRecord::from_table(&inputs.wave3, catalog)?;

    let panel = merge_waves(wave1, wave2, wave3);
    let summary = CohortSummary::from_panel(&panel).with_unlinked_rows(unlinked);

    let cohort = NeetCohort::classify(panel);
    let context = EnrichContext::new(config, &inputs.wave1.presence);
    let records = enrich_cohort(cohort, &context);
    let summary = summary.with_cohort(&records);

    Ok(Dataset { records, summary })
}

/// Run the full pipeline and write the output table to `output_path`
///
/// # Returns
///
/// The cohort summary of the run.
pub fn run_pipeline(config: &PipelineConfig, output_path: &Path) -> Result<CohortSummary> {
    let start = Instant::now();
    config.validate()?;
    info!("{config}");

    let dataset = build_dataset(config)?;

    let columns = output_columns(config.variant, &config.variables);
    let batch = to_record_batch(&dataset.records, &columns, config.locale)?;
    write_output(&batch, output_path)?;

    info!("{}", dataset.summary);
    info!("Pipeline finished in {:?}", start.elapsed());
    Ok(dataset.summary)
}
