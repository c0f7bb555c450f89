use contracts::domain::a006_menu_item::aggregate::MenuItem;
use leptos::prelude::*;

use super::details::MenuItemDialog;
use crate::shared::components::filter_panel::FilterSpec;
use crate::shared::components::table::{CellValue, Column};
use crate::shared::resource_page::{created_column, ListPageConfig, ResourceListPage};

pub fn columns() -> Vec<Column<MenuItem>> {
    vec![
        Column::new("image", "Фото", |m: &MenuItem| CellValue::Image(m.image.clone())),
        Column::new("name", "Блюдо", |m: &MenuItem| CellValue::text(&m.name)).sortable(),
        Column::new("business", "Заведение", |m: &MenuItem| {
            CellValue::text(m.business_name.clone().unwrap_or_else(|| m.business.to_string()))
        }),
        Column::new("menu_type", "Раздел", |m: &MenuItem| CellValue::opt(m.menu_type_name.as_deref())),
        Column::new("price", "Цена", |m: &MenuItem| CellValue::text(format!("{} ₸", m.price))).sortable(),
        created_column(),
    ]
}

/// Меню заведений, с загрузкой из CSV
#[component]
pub fn MenuItemList() -> impl IntoView {
    let mut config = ListPageConfig::catalog("a006_menu_item--list", columns())
        .with_filters(vec![FilterSpec::text("business", "Заведение (id)")])
        .with_dialog(|mode, on_close, fetch_data| {
            view! { <MenuItemDialog mode=mode on_close=on_close fetch_data=fetch_data /> }.into_any()
        });
    config.csv_import = true;

    view! { <ResourceListPage config=config /> }
}
