use contracts::shared::upload::UploadRule;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::FieldError;

/// `<input type="file">` с подсказкой об ограничениях.
///
/// Сама проверка файла делается в обработчике `on_pick`.
#[component]
pub fn FileInput(
    #[prop(into)]
    label: String,
    rule: UploadRule,
    /// `None` — выбор сброшен
    on_pick: Callback<Option<web_sys::File>>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    /// Текущий файл на сервере, если есть
    #[prop(default = None)]
    current: Option<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let hint = format!("до {} МБ: {}", rule.limit_mb(), rule.mime_types.join(", "));

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            {current.map(|href| {
                let text = href.clone();
                view! { <a class="form__current-file" href=href target="_blank">{text}</a> }
            })}
            <input
                type="file"
                class="form__file"
                accept=rule.accept()
                disabled=move || disabled.get()
                on:change=move |ev| {
                    let file = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                        .and_then(|input| input.files())
                        .and_then(|files| files.get(0));
                    on_pick.run(file);
                }
            />
            <div class="form__hint">{hint}</div>
            <FieldError error=error />
        </div>
    }
}
