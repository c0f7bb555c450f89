use contracts::domain::a002_category::aggregate::Category;
use leptos::prelude::*;

use super::details::CategoryDialog;
use crate::shared::components::table::{CellValue, Column};
use crate::shared::resource_page::{created_column, ListPageConfig, ResourceListPage};

pub fn columns() -> Vec<Column<Category>> {
    vec![
        Column::new("icon", "Иконка", |c: &Category| CellValue::Image(c.icon.clone())),
        Column::new("name", "Название", |c: &Category| CellValue::text(&c.name)).sortable(),
        Column::new("name_ru", "Название (рус.)", |c: &Category| {
            CellValue::opt(c.name_ru.as_deref())
        })
        .sortable(),
        created_column(),
    ]
}

#[component]
pub fn CategoryList() -> impl IntoView {
    let config = ListPageConfig::catalog("a002_category--list", columns()).with_dialog(
        |mode, on_close, fetch_data| {
            view! { <CategoryDialog mode=mode on_close=on_close fetch_data=fetch_data /> }.into_any()
        },
    );

    view! { <ResourceListPage config=config /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::pagination_controls::PagerModel;
    use crate::shared::config::PAGE_SIZE;
    use contracts::shared::api::decode_page;
    use serde_json::json;

    #[test]
    fn test_single_category_page_renders_row_without_pager() {
        let body = json!({
            "status": true,
            "results": [{
                "id": 1,
                "name": "Desserts",
                "name_ru": "Десерты",
                "created_at": "2024-01-01T00:00:00Z"
            }],
            "count": 1
        });
        let page = decode_page::<Category>(body).unwrap();
        assert_eq!(page.results.len(), 1);

        let row = &page.results[0];
        let cells: Vec<String> = columns().iter().map(|c| c.cell(row).as_text()).collect();
        assert_eq!(cells[1], "Desserts");
        assert_eq!(cells[2], "Десерты");
        assert_eq!(cells[3], "01.01.2024 00:00");

        let pager = PagerModel {
            page: 1,
            page_size: PAGE_SIZE,
            count: page.count,
        };
        assert_eq!(pager.total_pages(), 1);
        assert!(!pager.is_visible());
    }

    #[test]
    fn test_sortable_columns() {
        let sortable: Vec<&str> = columns().iter().filter(|c| c.sortable).map(|c| c.key).collect();
        assert_eq!(sortable, vec!["name", "name_ru", "created_at"]);
    }
}
