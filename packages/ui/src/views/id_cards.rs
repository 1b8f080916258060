use std::time::Duration;

use cards::{CardsConfig, Deck, PersonType, Tab, VerificationDetail, VerificationOutcome, ViewState};
use dioxus::prelude::*;

use crate::{
    platform, use_roster, CardGrid, CardToolbar, RosterState, StatusBanner, TabBar, TabPanel,
    VerificationPanel, CARDS_CSS,
};

/// The whole ID card page: student and teacher card sections plus verification.
///
/// Must be rendered inside a `RosterProvider`. Once the roster is ready, the page
/// query string is checked a single time for a `type`/`id` pair.
#[component]
pub fn IdCardsView(config: CardsConfig) -> Element {
    let roster = use_roster();
    let mut view = use_signal(ViewState::default);
    let mut outcome = use_signal(|| Option::<VerificationOutcome>::None);
    let mut checked = use_signal(|| false);
    let location = use_hook(platform::page_location);

    let verify_location = location.clone();
    use_effect(move || {
        let loaded = roster.read();
        let RosterState::Ready(roster) = &*loaded else {
            return;
        };
        if *checked.peek() {
            return;
        }
        checked.set(true);

        let Some(query) = verify_location.verification_query() else {
            return;
        };
        let result = VerificationOutcome::resolve(roster, &query);
        match result.person() {
            Some(person) => {
                tracing::info!("Verified {} {}", person.person_type(), person.id);
                view.write().activate(Tab::Verification);
                spawn(async move {
                    platform::sleep(Duration::from_millis(100)).await;
                    platform::scroll_into_view(Tab::Verification.id());
                });
            }
            None => tracing::info!("No {} found with ID: {}", query.person_type, query.id),
        }
        outcome.set(Some(result));
    });

    let deck_config = config.clone();
    let deck = use_memo(move || match &*roster.read() {
        RosterState::Ready(roster) => Deck::build(roster, &deck_config),
        _ => Deck::default(),
    });

    let state = roster();
    match state {
        RosterState::Loading => {
            return rsx! {
                document::Stylesheet { href: CARDS_CSS }
                p { class: "cards-loading", "Loading ID cards..." }
            };
        }
        RosterState::Failed(message) => {
            return rsx! {
                document::Stylesheet { href: CARDS_CSS }
                p { class: "cards-error", "Could not load ID card data: {message}" }
            };
        }
        RosterState::Ready(_) => {}
    }

    let current = view();
    let status = outcome
        .read()
        .as_ref()
        .map(|o| o.status(&platform::today()));
    let detail = outcome
        .read()
        .as_ref()
        .and_then(|o| o.person())
        .map(|p| VerificationDetail::build(p, &config));
    let qr_size = config.qr.size;

    rsx! {
        document::Stylesheet { href: CARDS_CSS }

        div {
            class: "id-cards-app",
            StatusBanner { status }
            TabBar { view }

            for group in PersonType::ALL {
                TabPanel {
                    key: "{group}",
                    tab: Tab::cards_for(group),
                    visible: current.is_visible(Tab::cards_for(group)),
                    CardToolbar { group, view }
                    CardGrid {
                        cards: deck.read().group(group).to_vec(),
                        location: location.clone(),
                        qr_size,
                    }
                }
            }

            TabPanel {
                tab: Tab::Verification,
                visible: current.is_visible(Tab::Verification),
                VerificationPanel { detail }
            }
        }
    }
}
