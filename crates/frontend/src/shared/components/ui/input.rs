use leptos::prelude::*;

use super::FieldError;

/// Controlled text input bound to a draft field
#[component]
pub fn Input(
    /// Label text
    #[prop(into)]
    label: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    on_input: Callback<String>,
    /// Validation error for this field
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    /// Input type: "text" (default), "email", "number", "url"
    #[prop(optional, into)]
    input_type: Option<String>,
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Marks the label with an asterisk
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let input_t = input_type.unwrap_or_else(|| "text".to_string());
    let class = move || {
        if error.with(Option::is_some) {
            "form__input form__input--invalid"
        } else {
            "form__input"
        }
    };

    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                class=class
                type=input_t
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=error />
        </div>
    }
}
