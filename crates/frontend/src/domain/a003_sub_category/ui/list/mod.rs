use contracts::domain::a003_sub_category::aggregate::SubCategory;
use leptos::prelude::*;

use super::details::SubCategoryDialog;
use crate::shared::components::table::{CellValue, Column};
use crate::shared::resource_page::{created_column, ListPageConfig, ResourceListPage};

pub fn columns() -> Vec<Column<SubCategory>> {
    vec![
        Column::new("name", "Название", |s: &SubCategory| CellValue::text(&s.name)).sortable(),
        Column::new("name_ru", "Название (рус.)", |s: &SubCategory| CellValue::opt(s.name_ru.as_deref())),
        Column::new("category", "Категория", |s: &SubCategory| match &s.category_name {
            Some(name) => CellValue::text(name),
            None => CellValue::text(s.category.to_string()),
        }),
        created_column(),
    ]
}

#[component]
pub fn SubCategoryList() -> impl IntoView {
    let config = ListPageConfig::catalog("a003_sub_category--list", columns()).with_dialog(
        |mode, on_close, fetch_data| {
            view! { <SubCategoryDialog mode=mode on_close=on_close fetch_data=fetch_data /> }.into_any()
        },
    );

    view! { <ResourceListPage config=config /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::EntityBase;

    #[test]
    fn test_category_falls_back_to_id() {
        let sub = SubCategory {
            base: EntityBase::new(5),
            name: "Cakes".into(),
            name_ru: None,
            category: 2.into(),
            category_name: None,
        };
        assert_eq!(columns()[2].cell(&sub).as_text(), "2");
    }
}
