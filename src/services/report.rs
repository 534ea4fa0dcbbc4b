//! CSV persistence for the fetched dataset and the computed metrics.

use csv::Writer;
use std::path::Path;

use crate::constants::ANALYSIS_HEADERS;
use crate::error::Error;
use crate::models::{MarketData, TickerMetrics};
use crate::utils::format_date;

/// Write the combined raw price dump: one row per daily bar, tickers in
/// universe order, bars in time order.
///
/// Returns the number of data rows written.
pub fn save_raw_data(path: &Path, tickers: &[String], data: &MarketData) -> Result<usize, Error> {
    let mut writer = Writer::from_path(path)
        .map_err(|e| Error::Io(format!("Failed to create {}: {}", path.display(), e)))?;

    writer.write_record(["ticker", "date", "open", "high", "low", "close", "volume"])?;

    let mut rows = 0usize;

    for ticker in tickers {
        let series = match data.get(ticker) {
            Some(Some(series)) => series,
            _ => continue,
        };

        for bar in series {
            let date = format_date(&bar.time);
            let open = bar.open.to_string();
            let high = bar.high.to_string();
            let low = bar.low.to_string();
            let close = bar.close.to_string();
            let volume = bar.volume.to_string();

            writer.write_record([
                ticker.as_str(),
                date.as_str(),
                open.as_str(),
                high.as_str(),
                low.as_str(),
                close.as_str(),
                volume.as_str(),
            ])?;
            rows += 1;
        }
    }

    writer.flush()?;
    Ok(rows)
}

/// Write the metrics summary: one row per analyzed ticker.
///
/// A NaN Sharpe ratio is rendered as an empty field.
pub fn save_analysis(path: &Path, metrics: &[TickerMetrics]) -> Result<(), Error> {
    let mut writer = Writer::from_path(path)
        .map_err(|e| Error::Io(format!("Failed to create {}: {}", path.display(), e)))?;

    writer.write_record(ANALYSIS_HEADERS)?;

    for record in metrics {
        let avg_return = record.avg_return.to_string();
        let volatility = record.volatility.to_string();
        let sharpe = if record.sharpe_ratio.is_nan() {
            String::new()
        } else {
            record.sharpe_ratio.to_string()
        };

        writer.write_record([
            record.symbol.as_str(),
            avg_return.as_str(),
            volatility.as_str(),
            sharpe.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{raw_csv_column, RAW_CSV_COLUMNS};
    use crate::models::Ohlcv;
    use chrono::{Duration, TimeZone, Utc};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn temp_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("topstocks-report-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    fn bars(symbol: &str, closes: &[f64]) -> Vec<Ohlcv> {
        let start = Utc.with_ymd_and_hms(2024, 1, 2, 14, 30, 0).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                Ohlcv::with_symbol(
                    start + Duration::days(i as i64),
                    close,
                    close + 1.0,
                    close - 1.0,
                    close,
                    1_000,
                    symbol.to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn test_save_raw_data_skips_missing_tickers() {
        let path = temp_file("raw.csv");
        let tickers = vec!["AAA".to_string(), "BBB".to_string()];

        let mut data: MarketData = HashMap::new();
        data.insert("AAA".to_string(), Some(bars("AAA", &[10.0, 11.0, 12.0])));
        data.insert("BBB".to_string(), None);

        let rows = save_raw_data(&path, &tickers, &data).unwrap();
        assert_eq!(rows, 3);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4); // header + 3 bars
        assert_eq!(lines[0], "ticker,date,open,high,low,close,volume");
        assert_eq!(lines[0].split(',').count(), RAW_CSV_COLUMNS);

        let fields: Vec<&str> = lines[1].split(',').collect();
        assert_eq!(fields[raw_csv_column::TICKER], "AAA");
        assert_eq!(fields[raw_csv_column::DATE], "2024-01-02");
        assert_eq!(fields[raw_csv_column::CLOSE], "10");
    }

    #[test]
    fn test_save_analysis_headers_and_row_count() {
        let path = temp_file("analysis.csv");
        let metrics = vec![
            TickerMetrics {
                symbol: "AAA".to_string(),
                avg_return: 0.25,
                volatility: 0.2,
                sharpe_ratio: 1.25,
            },
            TickerMetrics {
                symbol: "FLAT".to_string(),
                avg_return: 0.0,
                volatility: 0.0,
                sharpe_ratio: f64::NAN,
            },
        ];

        save_analysis(&path, &metrics).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers, ANALYSIS_HEADERS.to_vec());

        let records: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), metrics.len());

        // NaN Sharpe serializes as an empty field
        assert_eq!(&records[1][0], "FLAT");
        assert_eq!(&records[1][3], "");
        // Defined Sharpe is return over volatility
        assert_eq!(&records[0][3], "1.25");
    }
}
