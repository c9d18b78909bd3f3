use anyhow::Context;
use log::info;

use neet_panel::{PipelineConfig, run_pipeline};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PipelineConfig::from_env().context("Failed to load pipeline configuration")?;
    let output = config.output_path.clone();

    let summary = run_pipeline(&config, &output)
        .with_context(|| format!("NEET panel pipeline failed (output {})", output.display()))?;

    info!(
        "Wrote {} NEET subjects to {} ({:.1}% employed after wave 1)",
        summary.neet_subjects,
        output.display(),
        summary.success_rate()
    );
    Ok(())
}
