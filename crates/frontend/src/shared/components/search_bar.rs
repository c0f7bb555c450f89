use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Поле поиска с явной кнопкой.
///
/// Запрос уходит только по кнопке или Enter, не на каждое нажатие клавиши.
#[component]
pub fn SearchBar(
    /// Текущий применённый поиск
    #[prop(into)]
    applied: Signal<Option<String>>,
    on_search: Callback<String>,
    /// Сброс поиска, сортировки и фильтров
    on_reset: Callback<()>,
    #[prop(optional, into)]
    placeholder: Option<String>,
) -> impl IntoView {
    let text = RwSignal::new(applied.get_untracked().unwrap_or_default());

    // Reset снаружи очищает и поле ввода
    Effect::new(move |_| {
        if applied.get().is_none() {
            text.set(String::new());
        }
    });

    let submit = move || on_search.run(text.get_untracked());

    view! {
        <div class="search-bar">
            <input
                class="form__input search-bar__input"
                type="search"
                placeholder=placeholder.unwrap_or_else(|| "Поиск...".to_string())
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        submit();
                    }
                }
            />
            <Button appearance=ButtonAppearance::Primary on_click=move |_| submit()>
                {icon("search")}
                " Найти"
            </Button>
            <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_reset.run(())>
                {icon("x")}
                " Сбросить"
            </Button>
        </div>
    }
}
