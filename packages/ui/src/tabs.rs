use cards::{Tab, ViewState};
use dioxus::prelude::*;

use crate::icons::{FaIdCard, FaQrcode, FaUserTie};
use crate::Icon;

/// Tab buttons. The clicked tab becomes the only active one.
#[component]
pub fn TabBar(view: Signal<ViewState>) -> Element {
    let mut view = view;

    rsx! {
        nav {
            class: "tabs",
            for tab in Tab::ALL {
                button {
                    key: "{tab.id()}",
                    class: if view().is_active(tab) { "tab-btn active" } else { "tab-btn" },
                    "data-tab": tab.id(),
                    onclick: move |_| view.write().activate(tab),
                    {
                        match tab {
                            Tab::StudentCards => rsx! { Icon { icon: FaIdCard, width: 14, height: 14 } },
                            Tab::TeacherCards => rsx! { Icon { icon: FaUserTie, width: 14, height: 14 } },
                            Tab::Verification => rsx! { Icon { icon: FaQrcode, width: 14, height: 14 } },
                        }
                    }
                    " {tab.title()}"
                }
            }
        }
    }
}

/// Content panel paired with the tab of the same id.
#[component]
pub fn TabPanel(tab: Tab, visible: bool, children: Element) -> Element {
    rsx! {
        section {
            id: tab.id(),
            class: if visible { "tab-content active" } else { "tab-content" },
            {children}
        }
    }
}
