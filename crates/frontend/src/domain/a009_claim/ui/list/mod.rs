use contracts::domain::a009_claim::aggregate::Claim;
use leptos::prelude::*;

use crate::shared::components::filter_panel::FilterSpec;
use crate::shared::components::row_actions::RowAction;
use crate::shared::components::table::{CellValue, Column};
use crate::shared::resource_page::{created_column, ListPageConfig, ResourceListPage};

pub fn columns() -> Vec<Column<Claim>> {
    vec![
        Column::new("business", "Заведение", |c: &Claim| {
            CellValue::text(c.business_name.clone().unwrap_or_else(|| c.business.to_string()))
        }),
        Column::new("user_email", "Заявитель", |c: &Claim| CellValue::opt(c.user_email.as_deref())),
        Column::new("message", "Сообщение", |c: &Claim| CellValue::opt(c.message.as_deref())),
        Column::new("document", "Документ", |c: &Claim| CellValue::opt(c.document.as_deref())),
        Column::new("is_approved", "Статус", |c: &Claim| CellValue::Flag {
            value: c.is_approved,
            on: "Одобрено",
            off: "Ожидает",
        }),
        created_column(),
    ]
}

/// Заявки на владение заведением
#[component]
pub fn ClaimList() -> impl IntoView {
    let config = ListPageConfig::moderation(
        "a009_claim--list",
        columns(),
        vec![RowAction::Approve, RowAction::Delete],
    )
    .with_filters(vec![FilterSpec::approval()]);

    view! { <ResourceListPage config=config /> }
}
