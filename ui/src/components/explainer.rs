//! The cosmetic explainer panel. It holds no data of its own and nothing
//! flows from it back into the table; the screen owns its visibility flag.

use dioxus::prelude::*;

use crate::components::pico::Card;

#[component]
pub fn Explainer() -> Element {
    rsx! {
        Card {
            h3 { "Reading the table" }
            p {
                "Each row is one ticker: a quoted price snapshot for a "
                "trading pair, here a crypto asset quoted in USD."
            }
            ul {
                li {
                    strong { "Bid / Ask" }
                    " — the highest buy offer and lowest sell offer currently quoted."
                }
                li {
                    strong { "Last" }
                    " — the most recent traded price."
                }
                li {
                    strong { "Daily High / Low / Volume" }
                    " — extremes and traded volume over the past 24 hours."
                }
                li {
                    strong { "Change, %" }
                    " — the 24-hour price change. Green means the pair is up on the day."
                }
            }
            p {
                "Click any column header to sort; clicking it again reverses the order."
            }
        }
    }
}
