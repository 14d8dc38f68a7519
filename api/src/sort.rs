//! Orders a ticker list by a chosen column and direction.

use std::cmp::Ordering;

use crate::currency_detail::CurrencyDetail;

/// The sortable columns of the ticker table.
///
/// Each variant maps to a typed accessor on [`CurrencyDetail`], so there is
/// no string-keyed field lookup anywhere. Variant order doubles as the
/// table's column display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum SortColumn {
    Symbol,
    Bid,
    Ask,
    Last,
    DailyHigh,
    DailyChangePercent,
    DailyLow,
    DailyVolume,
}

impl SortColumn {
    /// The header label shown for this column.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Symbol => "Symbol",
            Self::Bid => "Bid",
            Self::Ask => "Ask",
            Self::Last => "Last",
            Self::DailyHigh => "Daily High",
            Self::DailyChangePercent => "Change, %",
            Self::DailyLow => "Daily Low",
            Self::DailyVolume => "Volume",
        }
    }

    /// Compares two tickers by this column's natural ordering: lexicographic
    /// for the symbol, numeric (`f64::total_cmp`) for everything else.
    fn compare(&self, a: &CurrencyDetail, b: &CurrencyDetail) -> Ordering {
        match self {
            Self::Symbol => a.symbol.cmp(&b.symbol),
            Self::Bid => a.bid.total_cmp(&b.bid),
            Self::Ask => a.ask.total_cmp(&b.ask),
            Self::Last => a.last.total_cmp(&b.last),
            Self::DailyHigh => a.daily_high.total_cmp(&b.daily_high),
            Self::DailyChangePercent => {
                a.daily_change_percent.total_cmp(&b.daily_change_percent)
            }
            Self::DailyLow => a.daily_low.total_cmp(&b.daily_low),
            Self::DailyVolume => a.daily_volume.total_cmp(&b.daily_volume),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Returns a new vector holding `rows` ordered by `column` and `direction`.
///
/// The input is never mutated. With no active column the rows come back in
/// their last-fetched order. Ties keep their relative input order
/// (`slice::sort_by` is stable).
pub fn sort_tickers(
    rows: &[CurrencyDetail],
    column: Option<SortColumn>,
    direction: SortDirection,
) -> Vec<CurrencyDetail> {
    let mut sorted = rows.to_vec();
    if let Some(column) = column {
        sorted.sort_by(|a, b| {
            let ordering = column.compare(a, b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(symbol: &str, bid: f64) -> CurrencyDetail {
        CurrencyDetail {
            symbol: symbol.to_string(),
            bid,
            ask: bid + 1.0,
            last: bid + 0.5,
            daily_high: bid + 2.0,
            daily_low: bid - 2.0,
            daily_volume: 1000.0,
            daily_change_percent: 0.01,
        }
    }

    fn sample() -> Vec<CurrencyDetail> {
        vec![
            ticker("tETHUSD", 3412.4),
            ticker("tBTCUSD", 67890.0),
            ticker("tLTCUSD", 84.61),
            ticker("tXRPUSD", 0.5231),
        ]
    }

    #[test]
    fn no_active_column_is_a_passthrough() {
        let rows = sample();
        let out = sort_tickers(&rows, None, SortDirection::Descending);
        assert_eq!(out, rows);
    }

    #[test]
    fn sorts_ascending_by_bid() {
        let out = sort_tickers(&sample(), Some(SortColumn::Bid), SortDirection::Ascending);
        let bids: Vec<f64> = out.iter().map(|t| t.bid).collect();
        assert_eq!(bids, vec![0.5231, 84.61, 3412.4, 67890.0]);
    }

    #[test]
    fn sorts_lexicographically_by_symbol() {
        let out = sort_tickers(
            &sample(),
            Some(SortColumn::Symbol),
            SortDirection::Ascending,
        );
        let symbols: Vec<&str> = out.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["tBTCUSD", "tETHUSD", "tLTCUSD", "tXRPUSD"]);
    }

    #[test]
    fn descending_is_the_reverse_of_ascending_without_ties() {
        let rows = sample();
        let asc = sort_tickers(&rows, Some(SortColumn::Bid), SortDirection::Ascending);
        let desc = sort_tickers(&rows, Some(SortColumn::Bid), SortDirection::Descending);

        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(reversed, desc);
    }

    #[test]
    fn sorting_a_sorted_list_again_is_idempotent() {
        let once = sort_tickers(&sample(), Some(SortColumn::Bid), SortDirection::Ascending);
        let twice = sort_tickers(&once, Some(SortColumn::Bid), SortDirection::Ascending);
        assert_eq!(once, twice);
    }

    #[test]
    fn does_not_mutate_the_input() {
        let rows = sample();
        let before = rows.clone();
        let _ = sort_tickers(&rows, Some(SortColumn::Last), SortDirection::Descending);
        assert_eq!(rows, before);
    }
}
