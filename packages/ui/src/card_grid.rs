use cards::{CardView, PageLocation, VerificationQuery};
use dioxus::prelude::*;

use crate::IdCard;

/// All cards of one group, each with its verification code.
#[component]
pub fn CardGrid(cards: Vec<CardView>, location: PageLocation, qr_size: u32) -> Element {
    if cards.is_empty() {
        return rsx! {
            p { class: "cards-empty", "No cards to show." }
        };
    }

    rsx! {
        div {
            class: "cards-container",
            for card in cards.iter() {
                IdCard {
                    key: "{card.person_type}-{card.id}",
                    card: card.clone(),
                    verification_url: location.url_for(&VerificationQuery::for_card(card)),
                    qr_size,
                }
            }
        }
    }
}
