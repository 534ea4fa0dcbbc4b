use std::fs;
use std::path::Path;

use crate::constants::{ANALYSIS_FILE, PLOTS_DIR, RAW_DATA_FILE};
use crate::error::Error;

/// Summary of the artifacts a previous run left behind
#[derive(Debug, Clone)]
pub struct OutputStats {
    /// Data rows in the raw price dump, `None` when the file is absent
    pub raw_rows: Option<usize>,
    /// Data rows in the metrics summary, `None` when the file is absent
    pub analysis_rows: Option<usize>,
    /// Trend chart images in the plots directory
    pub chart_count: usize,
}

impl OutputStats {
    pub fn is_empty(&self) -> bool {
        self.raw_rows.is_none() && self.analysis_rows.is_none() && self.chart_count == 0
    }
}

/// Collect output statistics under the given directory
pub fn get_output_stats(output_dir: &Path) -> Result<OutputStats, Error> {
    Ok(OutputStats {
        raw_rows: count_csv_rows(&output_dir.join(RAW_DATA_FILE))?,
        analysis_rows: count_csv_rows(&output_dir.join(ANALYSIS_FILE))?,
        chart_count: count_charts(&output_dir.join(PLOTS_DIR))?,
    })
}

/// Count data rows of a CSV file, header excluded
fn count_csv_rows(path: &Path) -> Result<Option<usize>, Error> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| Error::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    Ok(Some(content.lines().count().saturating_sub(1)))
}

fn count_charts(dir: &Path) -> Result<usize, Error> {
    if !dir.exists() {
        return Ok(0);
    }

    let entries = fs::read_dir(dir)
        .map_err(|e| Error::Io(format!("Failed to read {}: {}", dir.display(), e)))?;

    let mut count = 0;
    for entry in entries {
        let entry = entry.map_err(|e| Error::Io(format!("Failed to read directory entry: {}", e)))?;
        if entry.path().extension().map(|ext| ext == "png").unwrap_or(false) {
            count += 1;
        }
    }

    Ok(count)
}
