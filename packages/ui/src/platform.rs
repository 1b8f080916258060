//! Thin browser layer.
//!
//! - **Web** (WASM): `web-sys` calls on the current window.
//! - **Native**: no browser to drive; actions are logged so views still run in tests.

use std::time::Duration;

use cards::PageLocation;

/// Origin, path and query of the current page.
pub fn page_location() -> PageLocation {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return PageLocation::default();
        };
        let location = window.location();
        PageLocation {
            origin: location.origin().unwrap_or_default(),
            path: location.pathname().unwrap_or_default(),
            query: location.search().unwrap_or_default(),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        PageLocation {
            origin: "http://localhost:8080".to_string(),
            path: "/".to_string(),
            query: String::new(),
        }
    }
}

/// Open a URL in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                tracing::error!("Failed to open {url}: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("open {url}");
    }
}

/// Hand the page to the platform print dialog. Blocks until the dialog closes.
pub fn print_page() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.print() {
                tracing::error!("Print failed: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("print requested");
    }
}

/// Show a short notice to the user.
pub fn notify(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("{message}");
    }
}

/// Smooth-scroll the element with this id into view, if it exists.
pub fn scroll_into_view(element_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id));
        if let Some(element) = element {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("scroll to #{element_id}");
    }
}

/// Today's date in the user's locale.
pub fn today() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        date.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED)
            .into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "today".to_string()
    }
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
