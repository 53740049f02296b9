//! Static store map embed, mounted with no parameters.

use leptos::prelude::*;

/// Embedded map showing the store location. Purely presentational; the page
/// has no data contract with it.
#[component]
pub fn ContactMap() -> impl IntoView {
    view! {
        <div class="w-full h-96 rounded-lg overflow-hidden border border-gray-200 shadow-lg">
            <iframe
                src="https://www.openstreetmap.org/export/embed.html?bbox=-122.6900%2C45.5120%2C-122.6650%2C45.5260&layer=mapnik&marker=45.5190%2C-122.6775"
                class="w-full h-full border-0"
                loading="lazy"
                referrerpolicy="no-referrer-when-downgrade"
                title="QuickLink store location"
            ></iframe>
        </div>
    }
}
