//! The fixed ticker universe tracked by the analysis run.
//!
//! Large-cap US equities, compiled into the binary. The list is ordered;
//! every output (raw dump, metrics CSV, charts) follows this order.

/// Ticker symbols of the tracked US large-caps
pub const TOP_US_TICKERS: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "BRK-B", "NVDA", "META", "V", "JNJ",
    "WMT", "PG", "MA", "UNH", "HD", "DIS", "BAC", "PYPL", "CMCSA", "NFLX",
    "ADBE", "PFE", "KO", "PEP", "INTC", "CSCO", "XOM", "T", "VZ", "MRK",
    "ABT", "CVX", "CRM", "NKE", "ORCL", "ABBV", "COST", "DHR", "MDT", "TMO",
    "ACN", "QCOM", "NEE", "LLY", "UNP", "LOW", "HON", "UPS", "SBUX", "BMY",
    "AMGN", "TXN", "IBM", "BLK", "GS", "AXP", "CAT", "DE", "MMM", "GE",
    "BA", "RTX", "SPGI", "NOW", "INTU", "ISRG", "CHTR", "ADI", "AMD", "MU",
    "ATVI", "GILD", "FIS", "ZTS", "ADP", "TJX", "CME", "BDX", "REGN", "SYK",
    "CI", "ANTM", "PLD", "EQIX", "SHW", "KLAC", "VRTX", "MCD", "NOC", "AON",
    "ICE", "FDX", "ETN", "ITW", "ROST", "WM", "APD", "ECL", "EL", "DG",
    "MNST", "CDNS", "EA", "CTAS", "IDXX", "MTD", "ALGN", "DXCM", "MSCI", "ANSS",
    "CPRT", "FAST", "WST", "POOL", "TER", "SWKS", "CDW", "KEYS", "TT", "PAYX",
    "AVGO", "TEL", "TDG", "ODFL", "LHX", "FTV", "IFF", "VRSK", "APH", "RSG",
    "WAB", "RMD", "PKI", "NDAQ", "EXR", "BIO", "CTSH", "WDC", "NTAP", "AKAM",
    "FFIV", "JKHY", "BR", "PFG", "CBOE", "CINF", "CFG", "HBAN", "KEY", "MTB",
    "PNC", "RF", "STT", "TFC", "USB", "ZION",
];

/// Get the full universe as owned strings, in tracked order
pub fn universe() -> Vec<String> {
    TOP_US_TICKERS.iter().map(|s| s.to_string()).collect()
}

/// Number of tickers in the universe
pub fn ticker_count() -> usize {
    TOP_US_TICKERS.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_universe_size() {
        assert_eq!(ticker_count(), 156);
        assert_eq!(universe().len(), 156);
    }

    #[test]
    fn test_universe_has_no_duplicates() {
        let unique: HashSet<&str> = TOP_US_TICKERS.iter().copied().collect();
        assert_eq!(unique.len(), TOP_US_TICKERS.len());
    }

    #[test]
    fn test_universe_order_is_stable() {
        assert_eq!(TOP_US_TICKERS[0], "AAPL");
        assert_eq!(TOP_US_TICKERS[5], "BRK-B");
        assert_eq!(*TOP_US_TICKERS.last().unwrap(), "ZION");
    }
}
