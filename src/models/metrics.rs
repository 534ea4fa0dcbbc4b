//! Return and risk metrics over daily close series.
//!
//! All metrics are annualized with the 252-trading-day convention; the
//! standard deviation is the sample deviation (n−1 denominator).

use serde::Serialize;

use crate::constants::{MIN_CLOSES_FOR_METRICS, TRADING_DAYS_PER_YEAR};

/// Risk/return summary for a single ticker over the analysis window
#[derive(Debug, Clone, Serialize)]
pub struct TickerMetrics {
    /// Ticker symbol
    pub symbol: String,

    /// Annualized average daily return
    pub avg_return: f64,

    /// Annualized volatility of daily returns
    pub volatility: f64,

    /// `avg_return / volatility`; NaN when volatility is exactly zero
    pub sharpe_ratio: f64,
}

impl TickerMetrics {
    /// Compute the metrics record for one ticker from its daily closes.
    ///
    /// Returns `None` when the series is too short to form a sample
    /// standard deviation of returns; such a ticker counts as missing data.
    pub fn from_closes(symbol: &str, closes: &[f64]) -> Option<Self> {
        if closes.len() < MIN_CLOSES_FOR_METRICS {
            return None;
        }

        let returns = daily_returns(closes);
        let avg_return = annualized_return(&returns);
        let volatility = annualized_volatility(&returns);
        let sharpe = sharpe_ratio(avg_return, volatility);

        Some(Self {
            symbol: symbol.to_string(),
            avg_return,
            volatility,
            sharpe_ratio: sharpe,
        })
    }
}

/// Percentage change between consecutive closes.
///
/// The leading undefined value is dropped, so the result has one element
/// fewer than the input.
pub fn daily_returns(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) / pair[0])
        .collect()
}

/// Mean daily return scaled to a year (× 252)
pub fn annualized_return(returns: &[f64]) -> f64 {
    mean(returns) * TRADING_DAYS_PER_YEAR
}

/// Sample standard deviation of daily returns scaled to a year (× √252)
pub fn annualized_volatility(returns: &[f64]) -> f64 {
    sample_std(returns) * TRADING_DAYS_PER_YEAR.sqrt()
}

/// Risk-adjusted return with a zero risk-free rate.
///
/// Undefined (NaN) when volatility is exactly zero.
pub fn sharpe_ratio(avg_return: f64, volatility: f64) -> f64 {
    if volatility == 0.0 {
        f64::NAN
    } else {
        avg_return / volatility
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn sample_std(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_returns_drops_leading_gap() {
        let closes = vec![100.0, 110.0, 99.0];
        let returns = daily_returns(&closes);

        assert_eq!(returns.len(), 2);
        assert!((returns[0] - 0.1).abs() < 1e-12);
        assert!((returns[1] - (-0.1)).abs() < 1e-12);
    }

    #[test]
    fn test_annualization_factors() {
        let returns = vec![0.01, -0.02, 0.03];

        // mean = 0.02/3, scaled by 252
        assert!((annualized_return(&returns) - 1.68).abs() < 1e-9);
        // sample std = 0.025166114784235832, scaled by sqrt(252)
        assert!((annualized_volatility(&returns) - 0.3994996871087636).abs() < 1e-9);
    }

    #[test]
    fn test_sharpe_is_return_over_volatility() {
        let closes = vec![100.0, 103.0, 101.0, 106.0, 104.0, 108.0];
        let metrics = TickerMetrics::from_closes("TEST", &closes).unwrap();

        assert!(metrics.volatility > 0.0);
        assert_eq!(metrics.sharpe_ratio, metrics.avg_return / metrics.volatility);
    }

    #[test]
    fn test_constant_series_has_zero_volatility_and_nan_sharpe() {
        let closes = vec![50.0; 10];
        let metrics = TickerMetrics::from_closes("FLAT", &closes).unwrap();

        assert_eq!(metrics.avg_return, 0.0);
        assert_eq!(metrics.volatility, 0.0);
        assert!(metrics.sharpe_ratio.is_nan());
    }

    #[test]
    fn test_monotonic_series_near_zero_volatility() {
        // Constant 1% daily increment; floating point may leave the
        // volatility at exactly zero or at rounding-noise scale, so the
        // Sharpe ratio is either NaN or very large.
        let mut price = 100.0;
        let closes: Vec<f64> = (0..10)
            .map(|_| {
                let p = price;
                price *= 1.01;
                p
            })
            .collect();

        let metrics = TickerMetrics::from_closes("MONO", &closes).unwrap();

        assert!((metrics.avg_return - 0.01 * 252.0).abs() < 1e-6);
        assert!(metrics.volatility.abs() < 1e-6);
        assert!(metrics.sharpe_ratio.is_nan() || metrics.sharpe_ratio.abs() > 1e3);
    }

    #[test]
    fn test_short_series_yields_no_record() {
        assert!(TickerMetrics::from_closes("ONE", &[100.0]).is_none());
        assert!(TickerMetrics::from_closes("TWO", &[100.0, 101.0]).is_none());
        assert!(TickerMetrics::from_closes("THREE", &[100.0, 101.0, 102.0]).is_some());
    }
}
