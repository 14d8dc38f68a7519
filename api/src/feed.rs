//! Defines the ticker feed trait and its provider implementations.

use crate::currency_detail::CurrencyDetail;
use crate::currency_detail::RawTickerRecord;
use crate::quote_currency::QuoteCurrency;
use thiserror::Error;

/// An error at the ticker feed boundary.
///
/// Every variant is recoverable by a user-triggered reload; no retry is
/// performed inside the feed itself.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The caller asked for an empty symbol set.
    #[error("no ticker symbols requested")]
    NoSymbols,
    /// Network-level failure issuing the request.
    #[error("ticker request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The feed answered with a non-success status.
    #[error("ticker feed returned status {0}")]
    Status(reqwest::StatusCode),
    /// The body is not valid JSON, or a record has the wrong arity/types.
    #[error("could not decode ticker response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Builds the feed-specific composite symbol for a trading pair,
/// e.g. `"BTC"` quoted in USD becomes `"tBTCUSD"`.
pub fn composite_symbol(asset: &str, quote: QuoteCurrency) -> String {
    format!("t{}{}", asset.to_uppercase(), quote.code())
}

/// Upper-cases and joins the requested pairs, rejecting an empty request.
fn composite_symbols(assets: &[&str], quote: QuoteCurrency) -> Result<Vec<String>, FeedError> {
    if assets.is_empty() {
        return Err(FeedError::NoSymbols);
    }
    Ok(assets
        .iter()
        .map(|asset| composite_symbol(asset, quote))
        .collect())
}

/// Decodes a feed body into named records.
fn decode_tickers(body: &str) -> Result<Vec<CurrencyDetail>, FeedError> {
    let records: Vec<RawTickerRecord> = serde_json::from_str(body)?;
    Ok(records.into_iter().map(CurrencyDetail::from).collect())
}

/// A trait for any service that can provide ticker snapshots for a set of
/// trading pairs.
pub trait TickerFeed {
    /// Fetches one snapshot per requested pair. Every call re-issues the
    /// request; nothing is cached.
    async fn fetch_tickers(
        &self,
        assets: &[&str],
        quote: QuoteCurrency,
    ) -> Result<Vec<CurrencyDetail>, FeedError>;
}

/// Provides live ticker data from the public Bitfinex v2 API.
pub mod bitfinex {
    use super::*;

    const BASE_URL: &str = "https://api-pub.bitfinex.com/v2/tickers";

    /// An implementation of the `TickerFeed` trait for Bitfinex.
    pub struct Bitfinex;

    impl TickerFeed for Bitfinex {
        async fn fetch_tickers(
            &self,
            assets: &[&str],
            quote: QuoteCurrency,
        ) -> Result<Vec<CurrencyDetail>, FeedError> {
            let symbols = composite_symbols(assets, quote)?.join(",");
            let url = format!("{BASE_URL}?symbols={symbols}");

            let client = reqwest::Client::new();
            let resp = client.get(url).send().await?;
            if !resp.status().is_success() {
                return Err(FeedError::Status(resp.status()));
            }

            // Decode from text rather than resp.json() so that a malformed
            // body surfaces as a Decode error carrying the serde cause.
            let body = resp.text().await?;
            decode_tickers(&body)
        }
    }
}

/// Provides ticker data from a bundled snapshot, in the same positional
/// shape the live feed delivers.
///
/// Useful offline and in tests: no network call is made, and the snapshot
/// is filtered to the requested pairs.
pub mod fixture {
    use super::*;

    const SNAPSHOT: &str = include_str!("../fixture/data.json");

    /// An implementation of the `TickerFeed` trait backed by the snapshot.
    pub struct StaticFixture;

    impl TickerFeed for StaticFixture {
        async fn fetch_tickers(
            &self,
            assets: &[&str],
            quote: QuoteCurrency,
        ) -> Result<Vec<CurrencyDetail>, FeedError> {
            let wanted = composite_symbols(assets, quote)?;
            let tickers = decode_tickers(SNAPSHOT)?;
            Ok(tickers
                .into_iter()
                .filter(|t| wanted.iter().any(|w| *w == t.symbol))
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixture::StaticFixture;
    use super::*;

    #[test]
    fn builds_composite_symbols() {
        assert_eq!(composite_symbol("btc", QuoteCurrency::USD), "tBTCUSD");
        assert_eq!(composite_symbol("ETH", QuoteCurrency::EUR), "tETHEUR");
    }

    #[tokio::test]
    async fn fixture_honors_the_requested_pairs() {
        let tickers = StaticFixture
            .fetch_tickers(&["BTC", "ETH"], QuoteCurrency::USD)
            .await
            .unwrap();

        let symbols: Vec<&str> = tickers.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["tBTCUSD", "tETHUSD"]);
    }

    #[tokio::test]
    async fn fixture_rejects_an_empty_request() {
        let result = StaticFixture.fetch_tickers(&[], QuoteCurrency::USD).await;
        assert!(matches!(result, Err(FeedError::NoSymbols)));
    }

    #[tokio::test]
    async fn fixture_snapshot_decodes_into_full_records() {
        let tickers = StaticFixture
            .fetch_tickers(&["BTC", "ETH", "XRP", "LTC"], QuoteCurrency::USD)
            .await
            .unwrap();

        assert_eq!(tickers.len(), 4);
        for ticker in &tickers {
            assert!(ticker.daily_high >= ticker.daily_low);
            assert!(ticker.daily_volume > 0.0);
        }
    }
}
