use contracts::domain::a010_dispute::aggregate::Dispute;
use leptos::prelude::*;

use super::details::DisputeReplyDialog;
use crate::shared::components::filter_panel::FilterSpec;
use crate::shared::components::row_actions::RowAction;
use crate::shared::components::table::{CellValue, Column};
use crate::shared::resource_page::{created_column, ListPageConfig, ResourceListPage};

pub fn columns() -> Vec<Column<Dispute>> {
    vec![
        Column::new("subject", "Тема", |d: &Dispute| CellValue::text(&d.subject)).sortable(),
        Column::new("business_name", "Заведение", |d: &Dispute| CellValue::opt(d.business_name.as_deref())),
        Column::new("user_email", "Пользователь", |d: &Dispute| CellValue::opt(d.user_email.as_deref())),
        Column::new("is_resolved", "Статус", |d: &Dispute| CellValue::Flag {
            value: d.is_resolved,
            on: "Решено",
            off: "Открыто",
        }),
        created_column(),
    ]
}

#[component]
pub fn DisputeList() -> impl IntoView {
    let config = ListPageConfig::moderation(
        "a010_dispute--list",
        columns(),
        vec![RowAction::Reply, RowAction::Delete],
    )
    .with_filters(vec![FilterSpec::resolution()])
    .with_dialog(|mode, on_close, fetch_data| {
        view! { <DisputeReplyDialog mode=mode on_close=on_close fetch_data=fetch_data /> }.into_any()
    });

    view! { <ResourceListPage config=config /> }
}
