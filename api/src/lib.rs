//! Data layer of the ticker dashboard: the feed client that turns the
//! positional wire format into named records, and the sort engine the table
//! orders them with.

pub mod currency_detail;
pub mod feed;
pub mod quote_currency;
pub mod sort;

pub use currency_detail::CurrencyDetail;
pub use currency_detail::RawTickerRecord;
pub use feed::FeedError;
pub use feed::TickerFeed;
pub use quote_currency::QuoteCurrency;

use feed::bitfinex::Bitfinex;

/// Fetches ticker snapshots for the given base assets from the default
/// (live) provider.
///
/// Failures are logged here at the feed boundary and propagated; retrying is
/// the caller's responsibility, via reload.
pub async fn fetch_tickers(
    assets: &[&str],
    quote: QuoteCurrency,
) -> Result<Vec<CurrencyDetail>, FeedError> {
    match Bitfinex.fetch_tickers(assets, quote).await {
        Ok(tickers) => {
            dioxus_logger::tracing::info!("fetched {} tickers", tickers.len());
            Ok(tickers)
        }
        Err(e) => {
            dioxus_logger::tracing::error!("failed to load ticker data: {e}");
            Err(e)
        }
    }
}
