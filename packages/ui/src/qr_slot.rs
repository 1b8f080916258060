use dioxus::prelude::*;

use crate::platform;

/// Verification code for one card. Clicking it opens the verification page.
#[component]
pub fn QrSlot(slot_id: String, url: String, size: u32) -> Element {
    let svg = match cards::qr::render_svg(&url, size) {
        Ok(svg) => svg,
        Err(e) => {
            tracing::warn!("No verification code for {slot_id}: {e}");
            String::new()
        }
    };

    rsx! {
        div {
            id: "{slot_id}",
            class: "qr-code-container",
            title: "Open verification page",
            onclick: move |_| platform::open_in_new_tab(&url),
            dangerous_inner_html: "{svg}",
        }
    }
}
