use std::fs;
use std::path::{Path, PathBuf};

use neet_panel::{PipelineConfig, Wave};
use tempfile::TempDir;

/// Wave files written to a temporary directory
pub struct Fixture {
    pub dir: TempDir,
    pub config: PipelineConfig,
}

impl Fixture {
    /// Write the three wave CSVs and point a default configuration at them
    pub fn new(wave1: &str, wave2: &str, wave3: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut config = PipelineConfig::with_data_dir(dir.path());
        config.output_path = dir.path().join("neet_dashboard_data.csv");

        for (wave, contents) in Wave::ALL.into_iter().zip([wave1, wave2, wave3]) {
            fs::write(config.wave_path(wave), contents).expect("write wave fixture");
        }
        Self { dir, config }
    }

    /// Output path of the fixture's configuration
    pub fn output(&self) -> PathBuf {
        self.config.output_path.clone()
    }
}

/// Minimal wave-1 file: the end-to-end subject plus a non-NEET subject
pub const WAVE1_BASIC: &str = "\
sampid,w01ecoact,w01student,birthy,gender,w01edu,w01region,y01e606
1,3,2,1998,1,2,1,4
2,1,2,1995,2,4,8,3
";

pub const WAVE2_BASIC: &str = "\
sampid,w02ecoact,w02student
1,2,2
2,1,2
";

pub const WAVE3_BASIC: &str = "\
sampid,w03ecoact,w03student
1,1,2
2,1,2
";

/// A parsed output table
pub struct OutputTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl OutputTable {
    /// Index of a header column
    pub fn column(&self, name: &str) -> usize {
        self.header
            .iter()
            .position(|column| column == name)
            .unwrap_or_else(|| panic!("column {name} not in output"))
    }

    /// Value of a column in a row
    pub fn value(&self, row: usize, name: &str) -> &str {
        &self.rows[row][self.column(name)]
    }
}

/// Read an output CSV, checking and stripping its byte-order marker
///
/// Fields of the test fixtures never contain commas or quotes, so a plain
/// split is enough.
pub fn read_output(path: &Path) -> OutputTable {
    let bytes = fs::read(path).expect("read output");
    assert!(bytes.starts_with(b"\xEF\xBB\xBF"), "output must start with a UTF-8 BOM");
    let text = String::from_utf8(bytes[3..].to_vec()).expect("output is UTF-8");

    let mut lines = text.lines();
    let header = lines
        .next()
        .expect("output has a header")
        .split(',')
        .map(str::to_string)
        .collect();
    let rows = lines
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect();

    OutputTable { header, rows }
}
