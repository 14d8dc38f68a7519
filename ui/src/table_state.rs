//! The table's view state, modeled as an explicit state machine value owned
//! by the screen rather than an ambient async-state wrapper.

use api::sort::sort_tickers;
use api::sort::SortColumn;
use api::sort::SortDirection;
use api::CurrencyDetail;

/// Load status of the ticker table.
///
/// `Idle → Loading → {Loaded, Errored}`; both terminal-looking states
/// re-enter `Loading` on reload. The view persists for the screen's
/// lifetime.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored(String),
}

/// The ticker table's complete view state: load status, the last-fetched
/// list (in feed order), and the active sort column/direction.
///
/// The fetched list is kept separately from the displayed order, so sorting
/// is reversible without re-fetching.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickerTable {
    status: LoadStatus,
    fetched: Vec<CurrencyDetail>,
    sort_column: Option<SortColumn>,
    sort_direction: SortDirection,
}

impl TickerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn sort_column(&self) -> Option<SortColumn> {
        self.sort_column
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Enters `Loading` and discards any prior sort state. Called whenever a
    /// fresh fetch is triggered, at mount and on reload alike.
    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
        self.sort_column = None;
        self.sort_direction = SortDirection::Ascending;
    }

    /// A fetch completed: the rows become the table's data source, in feed
    /// order.
    pub fn load_succeeded(&mut self, rows: Vec<CurrencyDetail>) {
        self.status = LoadStatus::Loaded;
        self.fetched = rows;
    }

    /// A fetch failed. Previously fetched rows are retained in memory, but
    /// the error view replaces the table until the user retries.
    pub fn load_failed(&mut self, message: String) {
        self.status = LoadStatus::Errored(message);
    }

    /// A header click: the active column flips direction, any other column
    /// becomes active ascending.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if self.sort_column == Some(column) {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_column = Some(column);
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// The rows to display: the fetched list passed through the sort engine
    /// with the current column/direction.
    pub fn rows(&self) -> Vec<CurrencyDetail> {
        sort_tickers(&self.fetched, self.sort_column, self.sort_direction)
    }
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
            daily_volume: 500.0,
            daily_change_percent: -0.002,
        }
    }

    #[test]
    fn walks_idle_loading_loaded_and_sorts_on_header_clicks() {
        let mut table = TickerTable::new();
        assert_eq!(*table.status(), LoadStatus::Idle);

        table.begin_load();
        assert_eq!(*table.status(), LoadStatus::Loading);

        // Feed order: ETH first, then BTC.
        table.load_succeeded(vec![ticker("tETHUSD", 3412.4), ticker("tBTCUSD", 67890.0)]);
        assert_eq!(*table.status(), LoadStatus::Loaded);
        assert_eq!(table.sort_column(), None);

        let rows = table.rows();
        assert_eq!(rows[0].symbol, "tETHUSD");
        assert_eq!(rows[1].symbol, "tBTCUSD");

        // First click on Bid sorts ascending.
        table.toggle_sort(SortColumn::Bid);
        assert_eq!(table.sort_direction(), SortDirection::Ascending);
        assert_eq!(table.rows()[0].symbol, "tETHUSD");

        // Second click flips to descending.
        table.toggle_sort(SortColumn::Bid);
        assert_eq!(table.sort_direction(), SortDirection::Descending);
        assert_eq!(table.rows()[0].symbol, "tBTCUSD");
    }

    #[test]
    fn switching_columns_resets_direction_to_ascending() {
        let mut table = TickerTable::new();
        table.load_succeeded(vec![ticker("tBTCUSD", 67890.0), ticker("tETHUSD", 3412.4)]);

        table.toggle_sort(SortColumn::Bid);
        table.toggle_sort(SortColumn::Bid);
        assert_eq!(table.sort_direction(), SortDirection::Descending);

        table.toggle_sort(SortColumn::Ask);
        assert_eq!(table.sort_column(), Some(SortColumn::Ask));
        assert_eq!(table.sort_direction(), SortDirection::Ascending);
    }

    #[test]
    fn reload_resets_sort_state() {
        let mut table = TickerTable::new();
        table.load_succeeded(vec![ticker("tBTCUSD", 67890.0), ticker("tETHUSD", 3412.4)]);

        table.toggle_sort(SortColumn::Last);
        table.toggle_sort(SortColumn::Last);
        assert_eq!(table.sort_direction(), SortDirection::Descending);

        table.begin_load();
        table.load_succeeded(vec![ticker("tETHUSD", 3412.4)]);

        assert_eq!(table.sort_column(), None);
        assert_eq!(table.sort_direction(), SortDirection::Ascending);
    }

    #[test]
    fn failure_keeps_previously_fetched_rows() {
        let mut table = TickerTable::new();
        table.load_succeeded(vec![ticker("tBTCUSD", 67890.0)]);

        table.begin_load();
        table.load_failed("ticker feed returned status 502".to_string());

        assert!(matches!(table.status(), LoadStatus::Errored(_)));
        assert_eq!(table.rows().len(), 1);
    }
}
