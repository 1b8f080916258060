use cards::CardsConfig;
use dioxus::prelude::*;

use ui::{IdCardsView, RosterProvider};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const DATASET: Asset = asset!("/assets/nursery_indus_student.json");
const CONFIG: &str = include_str!("../cards.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> CardsConfig {
    match CardsConfig::from_toml(CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{}: {e}; using defaults", CardsConfig::filename());
            CardsConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    let dataset_url = config.dataset_url(&DATASET.to_string()).to_string();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "School ID Cards" }

        header {
            class: "page-header",
            h1 { "School ID Cards" }
        }

        RosterProvider {
            dataset_url,
            IdCardsView { config }
        }
    }
}
