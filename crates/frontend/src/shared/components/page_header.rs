use leptos::prelude::*;

/// Заголовок страницы списка: название, число записей, кнопки справа
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Всего записей на сервере
    #[prop(optional, into)]
    count: Option<Signal<u64>>,

    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || count.map(|c| view! {
                        <div class="page-header__subtitle">{format!("Всего: {}", c.get())}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
