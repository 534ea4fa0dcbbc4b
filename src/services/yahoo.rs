//! Yahoo Finance v8 chart API client.
//!
//! One GET per symbol: `/v8/finance/chart/{symbol}?range=..&interval=..`.
//! The client rotates browser user agents, keeps requests under a
//! per-minute sliding window, and retries transient failures (429, 5xx,
//! transport errors) with exponential backoff.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use reqwest::Client;
use serde::Deserialize;
use std::time::{Duration as StdDuration, SystemTime};
use tokio::time::sleep;

use crate::models::Ohlcv;

#[derive(Debug)]
pub enum YahooError {
    Http(reqwest::Error),
    InvalidResponse(String),
    RateLimit,
    NoData(String),
}

impl From<reqwest::Error> for YahooError {
    fn from(error: reqwest::Error) -> Self {
        YahooError::Http(error)
    }
}

impl std::fmt::Display for YahooError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YahooError::Http(e) => write!(f, "HTTP error: {}", e),
            YahooError::InvalidResponse(s) => write!(f, "Invalid response: {}", s),
            YahooError::RateLimit => write!(f, "Rate limit exceeded"),
            YahooError::NoData(s) => write!(f, "No data available: {}", s),
        }
    }
}

impl std::error::Error for YahooError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            YahooError::Http(e) => Some(e),
            _ => None,
        }
    }
}

/// Chart payload schema (element-nullable arrays, one quote block per symbol)
#[derive(Deserialize, Debug)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Deserialize, Debug)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartApiError>,
}

#[derive(Deserialize, Debug)]
pub struct ChartApiError {
    pub code: String,
    pub description: String,
}

#[derive(Deserialize, Debug)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    pub indicators: Indicators,
}

#[derive(Deserialize, Debug)]
pub struct Indicators {
    pub quote: Vec<Quote>,
}

#[derive(Deserialize, Debug)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

pub struct YahooClient {
    client: Client,
    base_url: String,
    rate_limit_per_minute: u32,
    request_timestamps: Vec<SystemTime>,
    user_agents: Vec<String>,
    random_agent: bool,
}

impl YahooClient {
    pub fn new(random_agent: bool, rate_limit_per_minute: u32) -> Result<Self, YahooError> {
        let client = Client::builder()
            .timeout(StdDuration::from_secs(30))
            .build()?;

        let user_agents = vec![
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:120.0) Gecko/20100101 Firefox/120.0".to_string(),
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.3 Safari/605.1.15".to_string(),
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0".to_string(),
        ];

        Ok(YahooClient {
            client,
            base_url: "https://query1.finance.yahoo.com".to_string(),
            rate_limit_per_minute,
            request_timestamps: Vec::new(),
            user_agents,
            random_agent,
        })
    }

    fn get_user_agent(&self) -> String {
        if self.random_agent {
            self.user_agents
                .choose(&mut rand::thread_rng())
                .unwrap_or(&self.user_agents[0])
                .clone()
        } else {
            self.user_agents[0].clone()
        }
    }

    /// Sliding-window rate limiting over the last minute
    async fn enforce_rate_limit(&mut self) {
        let current_time = SystemTime::now();

        // Remove timestamps older than 1 minute
        self.request_timestamps.retain(|&timestamp| {
            current_time
                .duration_since(timestamp)
                .unwrap_or(StdDuration::from_secs(0))
                < StdDuration::from_secs(60)
        });

        // If we're at the rate limit, wait until the oldest request expires
        if self.request_timestamps.len() >= self.rate_limit_per_minute as usize {
            if let Some(&oldest_request) = self.request_timestamps.first() {
                let wait_time = StdDuration::from_secs(60)
                    - current_time
                        .duration_since(oldest_request)
                        .unwrap_or(StdDuration::from_secs(0));
                if !wait_time.is_zero() {
                    sleep(wait_time + StdDuration::from_millis(100)).await;
                }
            }
        }

        self.request_timestamps.push(current_time);
    }

    async fn make_request(&mut self, url: &str) -> Result<ChartResponse, YahooError> {
        const MAX_RETRIES: u32 = 5;

        let mut last_error: Option<String> = None;

        for attempt in 0..MAX_RETRIES {
            self.enforce_rate_limit().await;

            if attempt > 0 {
                let delay = StdDuration::from_secs_f64(
                    2.0_f64.powi(attempt as i32 - 1) + rand::random::<f64>(),
                );
                let delay = delay.min(StdDuration::from_secs(60));
                let reason = last_error.as_deref().unwrap_or("unknown error");
                tracing::info!(
                    "chart API retry backoff: attempt {}/{} - reason: {}, waiting {:.1}s before retry",
                    attempt + 1,
                    MAX_RETRIES,
                    reason,
                    delay.as_secs_f64()
                );
                sleep(delay).await;
            }

            let user_agent = self.get_user_agent();
            tracing::debug!("chart request: attempt={}, url={}", attempt + 1, url);

            let response = self
                .client
                .get(url)
                .header("Accept", "application/json, text/plain, */*")
                .header("Accept-Language", "en-US,en;q=0.9")
                .header("User-Agent", &user_agent)
                .send()
                .await;

            match response {
                Ok(resp) => {
                    let status = resp.status();

                    if status.is_success() {
                        match resp.json::<ChartResponse>().await {
                            Ok(data) => return Ok(data),
                            Err(e) => {
                                last_error = Some(format!("JSON parse error: {}", e));
                                continue;
                            }
                        }
                    } else if status == 429 {
                        last_error = Some("Too Many Requests (429) - rate limited".to_string());
                        continue;
                    } else if status.is_server_error() {
                        let status_text = status.canonical_reason().unwrap_or("Unknown");
                        last_error =
                            Some(format!("Server error ({}) - {}", status.as_u16(), status_text));
                        continue;
                    } else if status.is_client_error() {
                        // Unknown and delisted symbols come back as 404 with a
                        // chart.error body; surface those as no-data instead of
                        // a request failure.
                        if let Ok(body) = resp.json::<ChartResponse>().await {
                            if body.chart.error.is_some() {
                                return Ok(body);
                            }
                        }
                        let status_text = status.canonical_reason().unwrap_or("Unknown");
                        return Err(YahooError::InvalidResponse(format!(
                            "Client error ({}) - {} - not retryable",
                            status.as_u16(),
                            status_text
                        )));
                    } else {
                        let status_text = status.canonical_reason().unwrap_or("Unknown");
                        last_error =
                            Some(format!("HTTP error ({}) - {}", status.as_u16(), status_text));
                        continue;
                    }
                }
                Err(e) => {
                    last_error = Some(format!("Network error: {}", e));
                    continue;
                }
            }
        }

        let reason = last_error.unwrap_or_else(|| "all attempts failed".to_string());
        if reason.contains("429") {
            return Err(YahooError::RateLimit);
        }
        Err(YahooError::InvalidResponse(format!("Max retries exceeded - {}", reason)))
    }

    /// Fetch daily history for one symbol over the given range (e.g. "1y")
    pub async fn get_history(
        &mut self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<Vec<Ohlcv>, YahooError> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval={}&events=div%2Csplit",
            self.base_url, symbol, range, interval
        );

        let response = self.make_request(&url).await?;
        parse_chart(symbol, response)
    }
}

/// Extract the bar series for `symbol` from a chart payload.
///
/// Rows with a null close are dropped; bars come back time-ordered.
pub fn parse_chart(symbol: &str, response: ChartResponse) -> Result<Vec<Ohlcv>, YahooError> {
    if let Some(err) = response.chart.error {
        return Err(YahooError::NoData(format!("{}: {}", err.code, err.description)));
    }

    let result = response
        .chart
        .result
        .and_then(|mut items| {
            if items.is_empty() {
                None
            } else {
                Some(items.remove(0))
            }
        })
        .ok_or_else(|| YahooError::NoData(format!("empty chart result for {}", symbol)))?;

    let timestamps = result.timestamp.unwrap_or_default();
    if timestamps.is_empty() {
        return Err(YahooError::NoData(format!("no timestamps for {}", symbol)));
    }

    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| YahooError::InvalidResponse(format!("missing quote block for {}", symbol)))?;

    let length = timestamps.len();
    if [
        quote.open.len(),
        quote.high.len(),
        quote.low.len(),
        quote.close.len(),
        quote.volume.len(),
    ]
    .iter()
    .any(|&len| len != length)
    {
        return Err(YahooError::InvalidResponse(format!(
            "inconsistent array lengths for {}",
            symbol
        )));
    }

    let mut bars = Vec::new();

    for i in 0..length {
        // Null close means no tradable print for the slot; drop the row
        let close = match quote.close[i] {
            Some(close) => close,
            None => continue,
        };

        let time = DateTime::<Utc>::from_timestamp(timestamps[i], 0).ok_or_else(|| {
            YahooError::InvalidResponse(format!(
                "cannot convert timestamp {} at index {}",
                timestamps[i], i
            ))
        })?;

        bars.push(Ohlcv::with_symbol(
            time,
            quote.open[i].unwrap_or(0.0),
            quote.high[i].unwrap_or(0.0),
            quote.low[i].unwrap_or(0.0),
            close,
            quote.volume[i].unwrap_or(0),
            symbol.to_string(),
        ));
    }

    if bars.is_empty() {
        return Err(YahooError::NoData(format!("all rows null for {}", symbol)));
    }

    bars.sort_by(|a, b| a.time.cmp(&b.time));

    Ok(bars)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canned_payload() -> &'static str {
        r#"{
            "chart": {
                "result": [{
                    "meta": {"currency": "USD", "symbol": "AAPL"},
                    "timestamp": [1704115800, 1704202200, 1704288600],
                    "indicators": {
                        "quote": [{
                            "open":   [186.06, 184.22, null],
                            "high":   [186.74, 185.88, null],
                            "low":    [184.35, 183.43, null],
                            "close":  [185.64, 184.25, null],
                            "volume": [82488700, 58414500, null]
                        }]
                    }
                }],
                "error": null
            }
        }"#
    }

    #[test]
    fn test_parse_chart_drops_null_rows() {
        let response: ChartResponse = serde_json::from_str(canned_payload()).unwrap();
        let bars = parse_chart("AAPL", response).unwrap();

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].close, 185.64);
        assert_eq!(bars[0].volume, 82488700);
        assert_eq!(bars[0].symbol.as_deref(), Some("AAPL"));
        assert!(bars[0].time < bars[1].time);
    }

    #[test]
    fn test_parse_chart_reports_api_error_as_no_data() {
        let payload = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
            }
        }"#;
        let response: ChartResponse = serde_json::from_str(payload).unwrap();

        match parse_chart("GONE", response) {
            Err(YahooError::NoData(msg)) => assert!(msg.contains("delisted")),
            other => panic!("expected NoData, got {:?}", other.map(|bars| bars.len())),
        }
    }

    #[test]
    fn test_parse_chart_empty_result_is_no_data() {
        let payload = r#"{"chart": {"result": [], "error": null}}"#;
        let response: ChartResponse = serde_json::from_str(payload).unwrap();

        assert!(matches!(parse_chart("EMPTY", response), Err(YahooError::NoData(_))));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = YahooClient::new(true, 60);
        assert!(client.is_ok());
    }
}
