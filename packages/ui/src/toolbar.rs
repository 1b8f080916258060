use std::time::Duration;

use cards::{PersonType, ViewState};
use dioxus::prelude::*;

use crate::icons::{FaDownload, FaPrint};
use crate::platform;
use crate::Icon;

/// Print and export actions for one card group.
#[component]
pub fn CardToolbar(group: PersonType, view: Signal<ViewState>) -> Element {
    let mut view = view;

    let print = move |_| async move {
        let started = view.write().begin_print(group);
        let Some(session) = started else {
            tracing::debug!("Print already in progress");
            return;
        };
        tracing::info!("Printing {group} cards");
        // Let the print layout render before the dialog snapshots the page.
        platform::sleep(Duration::from_millis(50)).await;
        platform::print_page();
        session.finish(&mut view.write());
    };

    let export = move |_| {
        let message = format!(
            "{} QR Code export feature will be implemented soon",
            group.label()
        );
        tracing::info!("{message}");
        platform::notify(&message);
    };

    rsx! {
        div {
            class: "card-toolbar",
            button {
                class: "btn btn-print",
                disabled: view().printing().is_some(),
                onclick: print,
                Icon { icon: FaPrint, width: 14, height: 14 }
                " Print {group} cards"
            }
            button {
                class: "btn btn-export",
                onclick: export,
                Icon { icon: FaDownload, width: 14, height: 14 }
                " Export {group} QR codes"
            }
        }
    }
}
