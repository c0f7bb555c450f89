use contracts::domain::a011_ad::aggregate::Ad;
use leptos::prelude::*;

use super::details::AdDialog;
use crate::shared::components::table::{CellValue, Column};
use crate::shared::resource_page::{created_column, ListPageConfig, ResourceListPage};

pub fn columns() -> Vec<Column<Ad>> {
    vec![
        Column::new("image", "Баннер", |a: &Ad| CellValue::Image(a.image.clone())),
        Column::new("title", "Заголовок", |a: &Ad| CellValue::text(&a.title)).sortable(),
        Column::new("priority", "Приоритет", |a: &Ad| CellValue::text(&a.priority)).sortable(),
        Column::new("link", "Ссылка", |a: &Ad| CellValue::opt(a.link.as_deref())),
        Column::new("is_active", "Показ", |a: &Ad| CellValue::Flag {
            value: a.is_active,
            on: "Активна",
            off: "Выключена",
        }),
        created_column(),
    ]
}

#[component]
pub fn AdList() -> impl IntoView {
    let config = ListPageConfig::catalog("a011_ad--list", columns()).with_dialog(|mode, on_close, fetch_data| {
        view! { <AdDialog mode=mode on_close=on_close fetch_data=fetch_data /> }.into_any()
    });

    view! { <ResourceListPage config=config /> }
}
