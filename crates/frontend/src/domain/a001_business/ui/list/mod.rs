use contracts::domain::a001_business::aggregate::Business;
use leptos::prelude::*;

use super::details::BusinessDialog;
use crate::shared::components::filter_panel::FilterSpec;
use crate::shared::components::row_actions::RowAction;
use crate::shared::components::table::{CellValue, Column};
use crate::shared::resource_page::{created_column, ListPageConfig, ResourceListPage};

fn rating(business: &Business) -> CellValue {
    match business.rating {
        Some(r) => CellValue::text(format!("{:.1}", r)),
        None => CellValue::Empty,
    }
}

pub fn columns() -> Vec<Column<Business>> {
    vec![
        Column::new("logo", "Логотип", |b: &Business| CellValue::Image(b.logo.clone())),
        Column::new("name", "Название", |b: &Business| CellValue::text(&b.name)).sortable(),
        Column::new("address", "Адрес", |b: &Business| CellValue::text(&b.address)),
        Column::new("phone", "Телефон", |b: &Business| CellValue::opt(b.phone.as_deref())),
        Column::new("owner_email", "Владелец", |b: &Business| CellValue::opt(b.owner_email.as_deref())),
        Column::new("rating", "Рейтинг", rating).sortable(),
        Column::new("is_approved", "Статус", |b: &Business| CellValue::Flag {
            value: b.is_approved,
            on: "Одобрено",
            off: "Ожидает",
        }),
        created_column(),
    ]
}

/// Заведения: справочник с модерацией
#[component]
pub fn BusinessList() -> impl IntoView {
    let mut config = ListPageConfig::catalog("a001_business--list", columns())
        .with_filters(vec![FilterSpec::approval()])
        .with_dialog(|mode, on_close, fetch_data| {
            view! { <BusinessDialog mode=mode on_close=on_close fetch_data=fetch_data /> }.into_any()
        });
    config.actions = vec![RowAction::Edit, RowAction::Approve, RowAction::Delete];

    view! { <ResourceListPage config=config /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::EntityBase;

    #[test]
    fn test_rating_and_status_cells() {
        let business = Business {
            base: EntityBase::new(3),
            name: "Navat".into(),
            name_ru: None,
            address: "Абая 10".into(),
            phone: None,
            rating: Some(4.3),
            is_approved: false,
            owner_email: None,
            cuisines: Vec::new(),
            logo: None,
        };
        let cells: Vec<String> = columns().iter().map(|c| c.cell(&business).as_text()).collect();
        assert_eq!(cells[3], "—");
        assert_eq!(cells[5], "4.3");
        assert_eq!(cells[6], "Ожидает");
    }
}
