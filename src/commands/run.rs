use crate::constants::{ANALYSIS_FILE, RAW_DATA_FILE};
use crate::error::Error;
use crate::models::{universe, TickerMetrics};
use crate::services::{chart, report, HistoryFetcher};
use crate::utils::{get_output_dir, get_plots_dir};

pub fn run() {
    match execute() {
        Ok(()) => {}
        Err(e) => {
            eprintln!("\n❌ Analysis failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn execute() -> Result<(), Error> {
    // Create Tokio runtime
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| Error::Config(format!("Failed to create runtime: {}", e)))?;

    runtime.block_on(run_pipeline())
}

/// The batch pipeline: fetch → persist raw data → metrics + charts → persist summary
async fn run_pipeline() -> Result<(), Error> {
    let tickers = universe::universe();
    let output_dir = get_output_dir();
    std::fs::create_dir_all(&output_dir)?;

    println!(
        "🚀 Downloading 1 year of daily history for {} US tickers...",
        tickers.len()
    );
    let mut fetcher = HistoryFetcher::new()?;
    let data = fetcher.batch_fetch(&tickers).await?;
    println!("✅ Download complete!");

    let raw_path = output_dir.join(RAW_DATA_FILE);
    let rows = report::save_raw_data(&raw_path, &tickers, &data)?;
    println!("💾 {} price rows saved to '{}'", rows, raw_path.display());

    let plots_dir = get_plots_dir();
    if !plots_dir.exists() {
        std::fs::create_dir_all(&plots_dir)?;
        println!("📂 Created '{}' for chart output", plots_dir.display());
    }

    println!("📊 Computing per-ticker return, volatility and Sharpe ratio...");

    let mut results: Vec<TickerMetrics> = Vec::new();
    let mut skipped = 0usize;

    for ticker in &tickers {
        let series = match data.get(ticker) {
            Some(Some(series)) if !series.is_empty() => series,
            _ => {
                println!("   ⚠️  {}: no usable data, skipping", ticker);
                skipped += 1;
                continue;
            }
        };

        let closes: Vec<f64> = series.iter().map(|bar| bar.close).collect();
        match TickerMetrics::from_closes(ticker, &closes) {
            Some(metrics) => results.push(metrics),
            None => {
                println!("   ⚠️  {}: series too short for metrics, skipping", ticker);
                skipped += 1;
                continue;
            }
        }

        let chart_path = chart::render_trend_chart(ticker, series, &plots_dir)?;
        println!("   🖼️  {} trend chart saved to '{}'", ticker, chart_path.display());
    }

    let analysis_path = output_dir.join(ANALYSIS_FILE);
    report::save_analysis(&analysis_path, &results)?;
    println!("💾 Analysis results saved to '{}'", analysis_path.display());

    print_results_table(&results);

    println!(
        "\n🎉 Done: {} tickers analyzed, {} skipped",
        results.len(),
        skipped
    );

    Ok(())
}

fn print_results_table(results: &[TickerMetrics]) {
    println!(
        "\n{:<8} {:>24} {:>24} {:>14}",
        "Stock", "Avg Return (Annualized)", "Volatility (Annualized)", "Sharpe Ratio"
    );

    for record in results {
        let sharpe = if record.sharpe_ratio.is_nan() {
            "NaN".to_string()
        } else {
            format!("{:.4}", record.sharpe_ratio)
        };
        println!(
            "{:<8} {:>24.4} {:>24.4} {:>14}",
            record.symbol, record.avg_return, record.volatility, sharpe
        );
    }
}
