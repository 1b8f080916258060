use cards::ImageView;
use dioxus::prelude::*;

/// An image that never shows a broken state: on a load error it either swaps
/// to its placeholder or disappears.
///
/// The failure is remembered per source, so a new `image.src` is tried afresh.
#[component]
pub fn CardImage(image: ImageView, #[props(default)] class: String) -> Element {
    let mut failed_src = use_signal(|| Option::<String>::None);

    let Some(src) = image.display_src(failed_src.read().as_deref()).map(str::to_string) else {
        return rsx! {};
    };

    let current = image.src.clone();
    rsx! {
        img {
            class: "{class}",
            src: "{src}",
            alt: "{image.alt}",
            onerror: move |_| {
                if failed_src.peek().as_deref() != Some(current.as_str()) {
                    failed_src.set(Some(current.clone()));
                }
            },
        }
    }
}
