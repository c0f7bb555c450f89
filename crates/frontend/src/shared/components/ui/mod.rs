pub mod checkbox;
pub mod file_input;
pub mod input;
pub mod select;
pub mod textarea;

pub use checkbox::Checkbox;
pub use file_input::FileInput;
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;

use leptos::prelude::*;

/// Текст ошибки под полем формы
#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
    }
}
