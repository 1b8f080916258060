//! Dataset loading and the roster context.

use std::sync::Arc;

use cards::{CardsError, Roster};
use dioxus::prelude::*;

use crate::platform;

/// Load state of the dataset document.
#[derive(Clone, Debug, PartialEq)]
pub enum RosterState {
    Loading,
    Ready(Arc<Roster>),
    /// Fetch or parse failed; nothing is rendered.
    Failed(String),
}

/// Get the roster load state.
pub fn use_roster() -> Signal<RosterState> {
    use_context::<Signal<RosterState>>()
}

/// Fetch and parse the dataset document at an absolute URL.
pub async fn fetch_roster(url: &str) -> Result<Roster, CardsError> {
    let response = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| CardsError::Fetch(e.to_string()))?;
    let body = response
        .text()
        .await
        .map_err(|e| CardsError::Fetch(e.to_string()))?;
    Roster::from_json(&body)
}

/// Provider component that loads the dataset once and shares it.
///
/// `dataset_url` may be relative; it is resolved against the current page.
#[component]
pub fn RosterProvider(dataset_url: String, children: Element) -> Element {
    let mut state = use_signal(|| RosterState::Loading);

    let _ = use_resource(move || {
        let dataset_url = dataset_url.clone();
        async move {
            let url = match platform::page_location().resolve(&dataset_url) {
                Ok(url) => url,
                Err(e) => {
                    tracing::error!("Error loading data: {e}");
                    state.set(RosterState::Failed(e.to_string()));
                    return;
                }
            };
            tracing::info!("Loading ID card data from {url}");
            match fetch_roster(&url).await {
                Ok(roster) => {
                    tracing::info!(
                        "Loaded {} students and {} teachers",
                        roster.students.len(),
                        roster.teachers.len()
                    );
                    state.set(RosterState::Ready(Arc::new(roster)));
                }
                Err(e) => {
                    tracing::error!("Error loading data: {e}");
                    state.set(RosterState::Failed(e.to_string()));
                }
            }
        }
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}
