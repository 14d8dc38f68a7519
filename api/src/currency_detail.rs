//! The named ticker record displayed by the dashboard, and the positional
//! wire record it is projected from.

use serde::Deserialize;
use serde::Serialize;

/// A quoted price snapshot for one trading pair.
///
/// All numeric fields are plain real numbers with no currency or locale
/// encoding. `daily_change_percent` is a fraction (0.0123 = 1.23%); the
/// presentation layer multiplies by 100 at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyDetail {
    pub symbol: String,
    pub bid: f64,
    pub ask: f64,
    pub last: f64,
    pub daily_high: f64,
    pub daily_low: f64,
    pub daily_volume: f64,
    pub daily_change_percent: f64,
}

/// One entry of the feed response: a fixed-position array of 11 fields.
///
/// The positional contract is load-bearing: the feed carries no field names,
/// so any change in field order would silently corrupt the mapping. Serde
/// enforces arity and element types, so a short or mistyped record fails the
/// whole decode instead of producing half-filled entities.
///
/// Field positions, in feed order:
///
/// | idx | field            |           |
/// |-----|------------------|-----------|
/// | 0   | symbol           | kept      |
/// | 1   | bid              | kept      |
/// | 2   | bid size         | discarded |
/// | 3   | ask              | kept      |
/// | 4   | ask size         | discarded |
/// | 5   | daily change     | discarded |
/// | 6   | daily change (%) | kept      |
/// | 7   | last price       | kept      |
/// | 8   | daily volume     | kept      |
/// | 9   | daily high       | kept      |
/// | 10  | daily low        | kept      |
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawTickerRecord(
    pub String, // symbol
    pub f64,    // bid
    pub f64,    // bid size
    pub f64,    // ask
    pub f64,    // ask size
    pub f64,    // daily change, absolute
    pub f64,    // daily change, fractional
    pub f64,    // last price
    pub f64,    // daily volume
    pub f64,    // daily high
    pub f64,    // daily low
);

impl From<RawTickerRecord> for CurrencyDetail {
    fn from(raw: RawTickerRecord) -> Self {
        let RawTickerRecord(
            symbol,
            bid,
            _bid_size,
            ask,
            _ask_size,
            _daily_change,
            daily_change_percent,
            last,
            daily_volume,
            daily_high,
            daily_low,
        ) = raw;

        Self {
            symbol,
            bid,
            ask,
            last,
            daily_high,
            daily_low,
            daily_volume,
            daily_change_percent,
        }
    }
}
