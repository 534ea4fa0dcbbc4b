pub mod chart;
pub mod fetcher;
pub mod output_stats;
pub mod report;
pub mod yahoo;

pub use fetcher::HistoryFetcher;
pub use output_stats::{get_output_stats, OutputStats};
pub use yahoo::{YahooClient, YahooError};
