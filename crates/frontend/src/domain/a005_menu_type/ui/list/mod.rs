use contracts::domain::a005_menu_type::aggregate::MenuType;
use leptos::prelude::*;

use super::details::MenuTypeDialog;
use crate::shared::components::table::{CellValue, Column};
use crate::shared::resource_page::{created_column, ListPageConfig, ResourceListPage};

pub fn columns() -> Vec<Column<MenuType>> {
    vec![
        Column::new("name", "Название", |m: &MenuType| CellValue::text(&m.name)).sortable(),
        Column::new("name_ru", "Название (рус.)", |m: &MenuType| CellValue::opt(m.name_ru.as_deref())),
        created_column(),
    ]
}

#[component]
pub fn MenuTypeList() -> impl IntoView {
    let config = ListPageConfig::catalog("a005_menu_type--list", columns()).with_dialog(
        |mode, on_close, fetch_data| {
            view! { <MenuTypeDialog mode=mode on_close=on_close fetch_data=fetch_data /> }.into_any()
        },
    );

    view! { <ResourceListPage config=config /> }
}
