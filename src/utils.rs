use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Get output directory from environment variable or use the working directory
pub fn get_output_dir() -> PathBuf {
    std::env::var("OUTPUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Get the chart output directory under the output directory
pub fn get_plots_dir() -> PathBuf {
    get_output_dir().join(crate::constants::PLOTS_DIR)
}

/// Format a timestamp as a plain date (YYYY-MM-DD)
pub fn format_date(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let time = Utc.with_ymd_and_hms(2024, 3, 7, 14, 30, 0).unwrap();
        assert_eq!(format_date(&time), "2024-03-07");
    }
}
