use cards::{CardBack, CardFront, CardView};
use dioxus::prelude::*;

use crate::{CardImage, QrSlot};

/// One printable front/back card pair.
#[component]
pub fn IdCard(card: CardView, verification_url: String, qr_size: u32) -> Element {
    rsx! {
        div {
            class: "id-card-wrapper",
            CardFrontFace { front: card.front.clone(), verification_url, qr_size }
            CardBackFace { back: card.back.clone() }
        }
    }
}

#[component]
fn CardFrontFace(front: CardFront, verification_url: String, qr_size: u32) -> Element {
    let header = &front.header;

    rsx! {
        article {
            class: "id-card",
            header {
                class: "school-card__header",
                h1 { class: "school-name", "{header.name}" }
                div {
                    class: "school-details",
                    p { class: "school-address", "{header.address}" }
                    p { class: "school-number", "Phone: {header.phone}" }
                    p {
                        class: "school-session",
                        span { class: "session-label", "Session:" }
                        span { class: "session-value", "{header.session}" }
                    }
                }
            }
            section {
                class: "body-section",
                div {
                    class: "qr-code",
                    QrSlot { slot_id: front.code_slot.clone(), url: verification_url, size: qr_size }
                }
                div {
                    class: "photo",
                    CardImage { image: front.photo.clone() }
                }
                div {
                    class: "details",
                    div {
                        class: "chairman-sign",
                        CardImage { image: front.signature.clone() }
                    }
                    div { class: "chairman-title", "Chairman" }
                    h1 { class: "name", "{front.name}" }
                    div {
                        class: "info-list",
                        for line in front.info.iter() {
                            div {
                                class: "{line.class}",
                                span { "{line.label}: " }
                                " {line.value}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CardBackFace(back: CardBack) -> Element {
    rsx! {
        article {
            class: "id-card back",
            if let Some(logo) = back.logo.clone() {
                CardImage { image: logo, class: "back-logo" }
            }
            h2 { class: "back-title", "{back.school_name}" }
            p { "Dise Code: {back.dise_code}" }
            if let Some(building) = back.building.clone() {
                CardImage { image: building, class: "building" }
            }
            div {
                class: "back-info",
                p { "{back.address}" }
            }
            div {
                class: "back-contact",
                p { "Email: {back.email}" }
            }
        }
    }
}
