//! Output layout and analysis constants.
//!
//! ## Raw data CSV format
//!
//! The combined price dump uses the 7-column basic layout
//! (ticker, date, open, high, low, close, volume), one row per daily bar,
//! tickers in universe order and bars in time order.

/// File name for the combined raw price dump
pub const RAW_DATA_FILE: &str = "top_100_stocks_data.csv";

/// File name for the per-ticker metrics summary
pub const ANALYSIS_FILE: &str = "top_100_stocks_analysis.csv";

/// Directory for per-ticker trend charts, created on demand
pub const PLOTS_DIR: &str = "stock_plots";

/// Header row of the metrics summary CSV
pub const ANALYSIS_HEADERS: [&str; 4] = [
    "Stock",
    "Avg Return (Annualized)",
    "Volatility (Annualized)",
    "Sharpe Ratio",
];

/// Trading days per year used for annualization
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Lookback window requested from the provider
pub const HISTORY_RANGE: &str = "1y";

/// Bar interval requested from the provider
pub const HISTORY_INTERVAL: &str = "1d";

/// Number of columns in the raw data CSV
pub const RAW_CSV_COLUMNS: usize = 7;

/// Column indices for the raw data CSV (0-indexed)
pub mod raw_csv_column {
    pub const TICKER: usize = 0;
    pub const DATE: usize = 1;
    pub const OPEN: usize = 2;
    pub const HIGH: usize = 3;
    pub const LOW: usize = 4;
    pub const CLOSE: usize = 5;
    pub const VOLUME: usize = 6;
}

/// Requests allowed per minute against the provider
pub const RATE_LIMIT_PER_MINUTE: u32 = 60;

/// Minimum closes required to form a sample standard deviation of returns
pub const MIN_CLOSES_FOR_METRICS: usize = 3;
