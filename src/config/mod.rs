//! Configuration for the NEET panel pipeline.
//!
//! Everything has a default matching the YP2021 files, so a run with no
//! configuration reads `YP2021_w01.csv` .. `YP2021_w03.csv` from the working
//! directory. A JSON file can override any subset of the fields.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use serde::Deserialize;

use crate::error::util::safe_open_file;
use crate::error::{PipelineError, Result};
use crate::models::wave::Wave;
use crate::schema::variables::VariableCatalog;

pub use crate::models::codes::Locale;

/// Environment variable naming an optional JSON configuration file
pub const CONFIG_ENV_VAR: &str = "NEET_PANEL_CONFIG";

/// Survey year of wave 1; ages are computed relative to it
pub const DEFAULT_REFERENCE_YEAR: i64 = 2021;

/// Non-response codes used in the financial asset amount item
pub const DEFAULT_ASSET_SENTINELS: [f64; 3] = [999_999.0, 9_090_908.0, 9_090_909.0];

/// Which column set the pipeline loads and writes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineVariant {
    /// Demographics, health, experience, career guidance and career plan
    Basic,
    /// Basic plus self-efficacy, multi-wave career items, parental
    /// education, assets and job search
    #[default]
    Extended,
}

impl fmt::Display for PipelineVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => f.write_str("basic"),
            Self::Extended => f.write_str("extended"),
        }
    }
}

/// Configuration for a pipeline run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Wave-1 input file (`.csv` or `.parquet`)
    pub wave1_path: PathBuf,
    /// Wave-2 input file
    pub wave2_path: PathBuf,
    /// Wave-3 input file
    pub wave3_path: PathBuf,
    /// Output CSV file, replaced on every run
    pub output_path: PathBuf,
    /// Year ages are computed against
    pub reference_year: i64,
    /// Column set to load and write
    pub variant: PipelineVariant,
    /// Language of the label columns
    pub locale: Locale,
    /// Survey column names
    pub variables: VariableCatalog,
    /// Asset amounts equal to one of these are treated as non-response
    pub asset_sentinels: Vec<f64>,
    /// Rows per record batch when reading inputs
    pub batch_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            wave1_path: PathBuf::from("YP2021_w01.csv"),
            wave2_path: PathBuf::from("YP2021_w02.csv"),
            wave3_path: PathBuf::from("YP2021_w03.csv"),
            output_path: PathBuf::from("neet_dashboard_data.csv"),
            reference_year: DEFAULT_REFERENCE_YEAR,
            variant: PipelineVariant::default(),
            locale: Locale::default(),
            variables: VariableCatalog::default(),
            asset_sentinels: DEFAULT_ASSET_SENTINELS.to_vec(),
            batch_size: 8192,
        }
    }
}

impl PipelineConfig {
    /// Default configuration with all three inputs in one directory
    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
        let dir = data_dir.as_ref();
        let defaults = Self::default();
        Self {
            wave1_path: dir.join(&defaults.wave1_path),
            wave2_path: dir.join(&defaults.wave2_path),
            wave3_path: dir.join(&defaults.wave3_path),
            ..defaults
        }
    }

    /// Input path of a wave
    #[must_use]
    pub fn wave_path(&self, wave: Wave) -> &Path {
        match wave {
            Wave::First => &self.wave1_path,
            Wave::Second => &self.wave2_path,
            Wave::Third => &self.wave3_path,
        }
    }

    /// Load a configuration from a JSON file; absent fields keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = safe_open_file(path, "pipeline configuration")?;
        let config: Self = serde_json::from_reader(std::io::BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration from the file named by `NEET_PANEL_CONFIG`, or the defaults
    pub fn from_env() -> Result<Self> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_json_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Check values that would make a run meaningless
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(PipelineError::Config("batch_size must be positive".to_string()));
        }
        if self.reference_year <= 0 {
            return Err(PipelineError::Config(format!(
                "reference_year must be positive, got {}",
                self.reference_year
            )));
        }
        if self.variables.subject_id.trim().is_empty() {
            return Err(PipelineError::Config("subject ID column name is empty".to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for PipelineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pipeline Configuration:")?;
        for wave in Wave::ALL {
            writeln!(
                f,
                "  {} ({}) Input: {}",
                wave,
                self.reference_year + wave.year_offset(),
                self.wave_path(wave).display()
            )?;
        }
        writeln!(f, "  Output: {}", self.output_path.display())?;
        writeln!(f, "  Reference Year: {}", self.reference_year)?;
        writeln!(f, "  Variant: {}", self.variant)?;
        writeln!(f, "  Locale: {:?}", self.locale)?;
        writeln!(f, "  Subject ID Column: {}", self.variables.subject_id)?;
        writeln!(
            f,
            "  Asset Sentinels: {}",
            self.asset_sentinels.iter().join(", ")
        )?;
        Ok(())
    }
}
