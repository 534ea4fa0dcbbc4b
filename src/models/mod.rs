mod ohlcv;
pub mod metrics;
pub mod universe;

pub use metrics::TickerMetrics;
pub use ohlcv::Ohlcv;

use std::collections::HashMap;

/// Time series of daily bars for a single ticker
pub type TimeSeries = Vec<Ohlcv>;

/// Fetched market data (ticker -> time series, `None` when the provider has no data)
pub type MarketData = HashMap<String, Option<TimeSeries>>;
