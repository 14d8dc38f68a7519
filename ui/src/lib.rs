// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
mod screens;
pub mod table_state;

use screens::tickers::TickersScreen;

use components::pico::Container;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    table thead th {
        position: sticky;
        top: 0;
        background: var(--pico-card-background-color);
    }

    table tbody td kbd {
        font-size: 0.8em;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{app_css}"
        }
        Container {
            h1 {
                "Currency Tickers"
            }
            TickersScreen {}
        }
    }
}
