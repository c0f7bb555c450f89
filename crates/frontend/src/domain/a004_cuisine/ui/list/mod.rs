use contracts::domain::a004_cuisine::aggregate::Cuisine;
use leptos::prelude::*;

use super::details::CuisineDialog;
use crate::shared::components::table::{CellValue, Column};
use crate::shared::resource_page::{created_column, ListPageConfig, ResourceListPage};

pub fn columns() -> Vec<Column<Cuisine>> {
    vec![
        Column::new("image", "Фото", |c: &Cuisine| CellValue::Image(c.image.clone())),
        Column::new("name", "Название", |c: &Cuisine| CellValue::text(&c.name)).sortable(),
        Column::new("name_ru", "Название (рус.)", |c: &Cuisine| CellValue::opt(c.name_ru.as_deref())).sortable(),
        created_column(),
    ]
}

#[component]
pub fn CuisineList() -> impl IntoView {
    let config = ListPageConfig::catalog("a004_cuisine--list", columns()).with_dialog(
        |mode, on_close, fetch_data| {
            view! { <CuisineDialog mode=mode on_close=on_close fetch_data=fetch_data /> }.into_any()
        },
    );

    view! { <ResourceListPage config=config /> }
}
