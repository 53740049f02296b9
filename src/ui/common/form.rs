use leptos::prelude::*;

/// Labeled single-line form field
#[component]
pub fn FormField(
    /// Control id, also used as the submitted field name
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Whether the field is required (shows a red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=id class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                type=input_type
                id=id
                name=id
                class="input-base"
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Labeled multi-line form field
#[component]
pub fn TextAreaField(
    /// Control id, also used as the submitted field name
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Whether the field is required (shows a red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Number of rows
    #[prop(default = 3)]
    rows: u32,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=id class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <textarea
                id=id
                name=id
                class="input-base resize-none"
                placeholder=placeholder
                rows=rows
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
