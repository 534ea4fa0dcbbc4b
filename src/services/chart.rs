//! Per-ticker price trend charts.

use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::models::Ohlcv;

const CHART_WIDTH: u32 = 1000;
const CHART_HEIGHT: u32 = 600;

/// Render the one-year close-price line chart for a ticker into
/// `<out_dir>/<SYMBOL>_trend.png`, creating the directory if absent.
///
/// Returns the path of the written image.
pub fn render_trend_chart(symbol: &str, series: &[Ohlcv], out_dir: &Path) -> Result<PathBuf, Error> {
    if series.is_empty() {
        return Err(Error::InvalidInput(format!("no bars to plot for {}", symbol)));
    }

    std::fs::create_dir_all(out_dir)
        .map_err(|e| Error::Io(format!("Failed to create {}: {}", out_dir.display(), e)))?;
    let path = out_dir.join(format!("{}_trend.png", symbol));

    let first_date = series.first().unwrap().time.date_naive();
    let mut last_date = series.last().unwrap().time.date_naive();
    if last_date <= first_date {
        // Degenerate single-day series still needs a non-empty axis range
        last_date = first_date + Duration::days(1);
    }

    let (mut y_min, mut y_max) = series.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), bar| (lo.min(bar.close), hi.max(bar.close)),
    );
    let pad = ((y_max - y_min) * 0.05).max(y_max.abs() * 0.01).max(1e-6);
    y_min -= pad;
    y_max += pad;

    let root = BitMapBackend::new(&path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| Error::Chart(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{} - 1 Year Price Trend", symbol), ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(first_date..last_date, y_min..y_max)
        .map_err(|e| Error::Chart(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Close Price (USD)")
        .x_labels(8)
        .x_label_formatter(&|date: &NaiveDate| date.format("%Y-%m-%d").to_string())
        .draw()
        .map_err(|e| Error::Chart(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(
            series.iter().map(|bar| (bar.time.date_naive(), bar.close)),
            &BLUE,
        ))
        .map_err(|e| Error::Chart(e.to_string()))?
        .label(format!("{} Close Price", symbol))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(|e| Error::Chart(e.to_string()))?;

    root.present().map_err(|e| Error::Chart(e.to_string()))?;
    drop(chart);
    drop(root);

    Ok(path)
}
