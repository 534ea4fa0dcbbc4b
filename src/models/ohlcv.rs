use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One daily OHLCV (Open, High, Low, Close, Volume) bar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ohlcv {
    /// Timestamp of the bar, serialized as a plain date
    #[serde(serialize_with = "serialize_time_as_date")]
    pub time: DateTime<Utc>,

    /// Opening price
    pub open: f64,

    /// Highest price
    pub high: f64,

    /// Lowest price
    pub low: f64,

    /// Closing price
    pub close: f64,

    /// Trading volume
    pub volume: u64,

    /// Optional ticker symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

fn serialize_time_as_date<S>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let date_string = time.format("%Y-%m-%d").to_string();
    serializer.serialize_str(&date_string)
}

impl Ohlcv {
    /// Create a new bar
    pub fn new(time: DateTime<Utc>, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume,
            symbol: None,
        }
    }

    /// Create a new bar tagged with its ticker symbol
    pub fn with_symbol(
        time: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
        symbol: String,
    ) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume,
            symbol: Some(symbol),
        }
    }
}
