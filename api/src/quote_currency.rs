//! Defines the quote currencies the feed can price trading pairs in.

use serde::Deserialize;
use serde::Serialize;

/// The currency a ticker price is quoted in.
///
/// Only the fiat currencies the feed actually quotes pairs in are listed
/// here; USD is the deployment default.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum QuoteCurrency {
    EUR, // Euro
    GBP, // Great British Pound
    JPY, // Japanese Yen
    #[default]
    USD, // United States Dollar
}

impl QuoteCurrency {
    /// Returns the ISO 4217 string code for the currency (e.g. "USD").
    /// Handled by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the graphical symbol for the currency (e.g. '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::EUR => "€",
            Self::GBP => "£",
            Self::JPY => "¥",
            Self::USD => "$",
        }
    }
}
