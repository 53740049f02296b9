//! Contact information cards shown next to the form.

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Store address, phone, email and opening hours
#[component]
pub fn ContactInfo() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <InfoCard
                icon=icons::MAP_PIN
                title="Our Store"
                lines=vec!["412 Riverside Avenue", "Portland, OR 97201"]
            />
            <InfoCard
                icon=icons::PHONE
                title="Phone"
                lines=vec!["+1 (555) 123-4567"]
            />
            <InfoCard
                icon=icons::MAIL
                title="Email"
                lines=vec!["support@quicklink.shop"]
            />
            <InfoCard
                icon=icons::CLOCK
                title="Opening Hours"
                lines=vec!["Mon-Fri: 9:00 - 18:00", "Sat: 10:00 - 16:00"]
            />
        </div>
    }
}

/// Single icon + title + text-lines card
#[component]
fn InfoCard(
    icon: &'static str,
    title: &'static str,
    lines: Vec<&'static str>,
) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4 bg-white p-4 rounded-lg border border-gray-200">
            <div class="w-10 h-10 rounded-lg bg-blue-600/10 flex items-center justify-center flex-shrink-0">
                <Icon name=icon class="w-5 h-5 text-blue-600" />
            </div>
            <div>
                <h3 class="font-semibold text-gray-900 mb-1">{title}</h3>
                {lines.into_iter().map(|line| {
                    view! { <p class="text-sm text-gray-600">{line}</p> }
                }).collect_view()}
            </div>
        </div>
    }
}
