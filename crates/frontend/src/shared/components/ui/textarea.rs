use leptos::prelude::*;

use super::FieldError;

/// Multi-line text field (descriptions, dispute replies)
#[component]
pub fn Textarea(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    /// Number of visible rows
    #[prop(optional, default = 4)]
    rows: u32,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <textarea
                class="form__textarea"
                rows=rows
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
            <FieldError error=error />
        </div>
    }
}
