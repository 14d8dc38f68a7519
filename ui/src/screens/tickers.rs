//! The ticker table screen: one fetch at mount, reload on demand, and
//! click-to-sort column headers.

use dioxus::prelude::*;
use strum::IntoEnumIterator;

use api::sort::SortColumn;
use api::sort::SortDirection;
use api::QuoteCurrency;

use crate::components::cells::CoinCell;
use crate::components::cells::MoneyCell;
use crate::components::cells::PercentCell;
use crate::components::explainer::Explainer;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::table_state::LoadStatus;
use crate::table_state::TickerTable;

/// The fixed symbol set of the reference deployment, quoted in USD.
const DEFAULT_ASSETS: [&str; 4] = ["BTC", "ETH", "XRP", "LTC"];

/// Spawns one fetch against the feed and drives the table state through it.
///
/// Overlapping fetches are not guarded; each one writes the state when it
/// completes, so the later-completing response wins.
fn start_fetch(mut state: Signal<TickerTable>) {
    spawn(async move {
        dioxus_logger::tracing::info!("loading ticker data");
        state.write().begin_load();
        match api::fetch_tickers(&DEFAULT_ASSETS, QuoteCurrency::default()).await {
            Ok(rows) => state.write().load_succeeded(rows),
            Err(e) => state.write().load_failed(e.to_string()),
        }
    });
}

#[component]
fn SortableHeader(column: SortColumn, state: Signal<TickerTable>) -> Element {
    let arrow_char = {
        let table = state.read();
        if table.sort_column() == Some(column) {
            match table.sort_direction() {
                SortDirection::Ascending => "▲",
                SortDirection::Descending => "▼",
            }
        } else {
            "\u{00A0}"
        }
    };
    let align = match column {
        SortColumn::Symbol => "left",
        _ => "right",
    };

    rsx! {
        th {
            style: "cursor: pointer; white-space: nowrap; text-align: {align};",
            onclick: move |_| state.write().toggle_sort(column),
            "{column.label()}"
            span {
                style: "display: inline-block; width: 1.2em; text-align: right;",
                "{arrow_char}"
            }
        }
    }
}

#[component]
pub fn TickersScreen() -> Element {
    let state = use_signal(TickerTable::new);
    let mut show_explainer = use_signal(|| false);

    // Kick off the initial load once the screen is mounted.
    use_effect(move || start_fetch(state));

    let status = state.read().status().clone();

    rsx! {
        div {
            style: "margin-bottom: 1rem; display: flex; gap: 0.5rem;",
            Button {
                on_click: move |_| start_fetch(state),
                "Reload data"
            }
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| show_explainer.toggle(),
                if show_explainer() {
                    "Hide Explainer"
                } else {
                    "Show Explainer"
                }
            }
        }
        if show_explainer() {
            Explainer {}
        }
        match status {
            LoadStatus::Idle | LoadStatus::Loading => rsx! {
                Card {
                    p {
                        "Loading..."
                    }
                    progress {
                    }
                }
            },
            LoadStatus::Errored(message) => rsx! {
                Card {
                    h3 {
                        "Error"
                    }
                    p {
                        "Failed to load ticker data: {message}"
                    }
                    button {
                        onclick: move |_| start_fetch(state),
                        "Retry"
                    }
                }
            },
            LoadStatus::Loaded => {
                let rows = state.read().rows();
                rsx! {
                    Card {
                        h3 {
                            "Currency Tickers ({rows.len()})"
                        }
                        div {
                            style: "overflow-x: auto;",
                            table {
                                thead {
                                    tr {
                                        for column in SortColumn::iter() {
                                            SortableHeader {
                                                column,
                                                state,
                                            }
                                        }
                                    }
                                }
                                tbody {
                                    for ticker in rows.iter() {
                                        tr {
                                            for column in SortColumn::iter() {
                                                match column {
                                                    SortColumn::Symbol => rsx! {
                                                        CoinCell { symbol: ticker.symbol.clone() }
                                                    },
                                                    SortColumn::Bid => rsx! {
                                                        MoneyCell { value: ticker.bid }
                                                    },
                                                    SortColumn::Ask => rsx! {
                                                        MoneyCell { value: ticker.ask }
                                                    },
                                                    SortColumn::Last => rsx! {
                                                        MoneyCell { value: ticker.last }
                                                    },
                                                    SortColumn::DailyHigh => rsx! {
                                                        MoneyCell { value: ticker.daily_high }
                                                    },
                                                    SortColumn::DailyChangePercent => rsx! {
                                                        PercentCell { value: ticker.daily_change_percent }
                                                    },
                                                    SortColumn::DailyLow => rsx! {
                                                        MoneyCell { value: ticker.daily_low }
                                                    },
                                                    SortColumn::DailyVolume => rsx! {
                                                        MoneyCell { value: ticker.daily_volume }
                                                    },
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
