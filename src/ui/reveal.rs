//! Scroll-triggered reveal container
//!
//! Wraps its children in a container that starts offset and transparent and
//! slides in the first time it scrolls into view. The transition state lives
//! in [`crate::core::reveal::Reveal`]; this component only feeds it
//! intersection samples from a `web_sys::IntersectionObserver` and mirrors
//! the flag onto a CSS class.

use leptos::prelude::*;

use crate::core::reveal::Reveal;

/// One-shot reveal wrapper around a block of page content.
///
/// Renders a plain container on the server; the observer is attached after
/// hydration. The transition itself is CSS (`.scroll-reveal` /
/// `.scroll-reveal.visible`).
#[component]
pub fn ScrollReveal(
    /// Extra classes on the animated container
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let reveal = RwSignal::new(Reveal::new());
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast, JsValue};

        use crate::core::reveal::REVEAL_THRESHOLD;

        Effect::new(move |_| {
            let Some(element) = container.get() else {
                return;
            };

            let callback = Closure::wrap(Box::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                        let fired = reveal
                            .try_update(|r| r.intersect(entry.intersection_ratio()))
                            .unwrap_or(false);
                        if fired {
                            observer.unobserve(&entry.target());
                        }
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

            // The animation is cosmetic: if the observer cannot be built the
            // content simply stays in place.
            if let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                observer.observe(&element);
            }

            // Keep the closure alive for the lifetime of the page
            callback.forget();
        });
    }

    view! {
        <div
            node_ref=container
            class=format!("scroll-reveal {}", class)
            class:visible=move || reveal.get().is_visible()
        >
            {children()}
        </div>
    }
}
