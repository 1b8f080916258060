use cards::{DetailSection, VerificationDetail, VerificationStatus};
use dioxus::prelude::*;

use crate::icons::{FaCalendarCheck, FaCircleCheck, FaCircleXmark, FaPhone, FaSchool, FaUser};
use crate::{CardImage, Icon};

/// Result line of the one-shot verification check.
#[component]
pub fn StatusBanner(#[props(!optional)] status: Option<VerificationStatus>) -> Element {
    let Some(status) = status else {
        return rsx! {
            div { id: "statusText", class: "status-text" }
        };
    };

    rsx! {
        div {
            id: "statusText",
            class: if status.valid { "status-text status-valid" } else { "status-text status-invalid" },
            if status.valid {
                Icon { icon: FaCircleCheck, width: 16, height: 16 }
            } else {
                Icon { icon: FaCircleXmark, width: 16, height: 16 }
            }
            " {status.headline}"
            small { "{status.detail}" }
        }
    }
}

/// Details of a verified person, or a prompt when nothing was verified.
#[component]
pub fn VerificationPanel(#[props(!optional)] detail: Option<VerificationDetail>) -> Element {
    let Some(detail) = detail else {
        return rsx! {
            div {
                id: "verificationDetails",
                p { class: "verification-empty", "Scan the QR code on an ID card to verify it." }
            }
        };
    };

    rsx! {
        div {
            id: "verificationDetails",
            div {
                class: "verification-photo",
                div {
                    class: "photo-container",
                    CardImage { image: detail.photo.clone() }
                }
                div { class: "photo-meta", "{detail.photo_caption}" }
            }
            div {
                class: "detail-grid",
                for card in detail.cards.iter() {
                    div {
                        key: "{card.title}",
                        class: "detail-card",
                        h3 {
                            {
                                match card.section {
                                    DetailSection::Person => rsx! { Icon { icon: FaUser, width: 16, height: 16 } },
                                    DetailSection::School => rsx! { Icon { icon: FaSchool, width: 16, height: 16 } },
                                    DetailSection::SchoolContact => rsx! { Icon { icon: FaPhone, width: 16, height: 16 } },
                                    DetailSection::Validity => rsx! { Icon { icon: FaCalendarCheck, width: 16, height: 16 } },
                                }
                            }
                            " {card.title}"
                        }
                        for line in card.lines.iter() {
                            p {
                                strong { "{line.label}:" }
                                " {line.value}"
                            }
                        }
                    }
                }
            }
        }
    }
}
