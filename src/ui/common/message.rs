//! Inline status-line components for the contact form

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error status line with an alert icon
/// Shown when the signal is Some, hidden when None
#[component]
pub fn ErrorMessage(
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Success status line with a check icon
/// Shown when the signal is Some, hidden when None
#[component]
pub fn SuccessMessage(
    #[prop(into)] message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="success-message">
                <Icon name=icons::CHECK class="icon-text"/>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
