use leptos::prelude::*;

use super::FieldError;

/// Select component with label and error
#[component]
pub fn Select(
    #[prop(into)]
    label: String,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    on_change: Callback<String>,
    /// Options: (value, label)
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    /// Text of the empty first option
    #[prop(optional, into)]
    placeholder: Option<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Выберите...".to_string());

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
            <FieldError error=error />
        </div>
    }
}
