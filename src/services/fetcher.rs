use std::collections::HashMap;

use crate::constants::{HISTORY_INTERVAL, HISTORY_RANGE, RATE_LIMIT_PER_MINUTE};
use crate::error::Error;
use crate::models::MarketData;
use crate::services::yahoo::{YahooClient, YahooError};

/// Price history fetcher over the chart API client
pub struct HistoryFetcher {
    client: YahooClient,
}

impl HistoryFetcher {
    /// Create a new fetcher with user-agent rotation enabled
    pub fn new() -> Result<Self, Error> {
        let client = YahooClient::new(true, RATE_LIMIT_PER_MINUTE)
            .map_err(|e| Error::Config(format!("Failed to create chart client: {:?}", e)))?;

        Ok(Self { client })
    }

    /// Fetch the one-year daily series for every ticker, one rate-limited
    /// request at a time, in universe order.
    ///
    /// A ticker the provider has no history for maps to `None`; any request
    /// failure that survives the client's retry loop aborts the fetch.
    pub async fn batch_fetch(&mut self, tickers: &[String]) -> Result<MarketData, Error> {
        let mut results: MarketData = HashMap::new();
        let total = tickers.len();

        for (i, ticker) in tickers.iter().enumerate() {
            let current = i + 1;

            match self
                .client
                .get_history(ticker, HISTORY_RANGE, HISTORY_INTERVAL)
                .await
            {
                Ok(bars) => {
                    println!("   📥 [{}/{}] {}: {} bars", current, total, ticker, bars.len());
                    results.insert(ticker.clone(), Some(bars));
                }
                Err(YahooError::NoData(reason)) => {
                    println!(
                        "   ⚠️  [{}/{}] {}: no data ({}), skipping",
                        current, total, ticker, reason
                    );
                    tracing::warn!(ticker = %ticker, reason = %reason, "No history for ticker");
                    results.insert(ticker.clone(), None);
                }
                Err(e) => {
                    return Err(Error::Network(format!("{}: {}", ticker, e)));
                }
            }
        }

        Ok(results)
    }
}
