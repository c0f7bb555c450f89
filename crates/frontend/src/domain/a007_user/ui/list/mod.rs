use contracts::domain::a007_user::aggregate::User;
use leptos::prelude::*;

use super::details::UserDialog;
use crate::shared::components::table::{CellValue, Column};
use crate::shared::resource_page::{created_column, ListPageConfig, ResourceListPage};

pub fn columns() -> Vec<Column<User>> {
    vec![
        Column::new("email", "Email", |u: &User| CellValue::text(&u.email)).sortable(),
        Column::new("full_name", "Имя", |u: &User| CellValue::opt(u.full_name.as_deref())).sortable(),
        Column::new("phone", "Телефон", |u: &User| CellValue::opt(u.phone.as_deref())),
        Column::new("is_active", "Активен", |u: &User| CellValue::Flag {
            value: u.is_active,
            on: "Да",
            off: "Заблокирован",
        }),
        Column::new("is_staff", "Роль", |u: &User| {
            CellValue::text(if u.is_staff { "Администратор" } else { "Пользователь" })
        }),
        created_column(),
    ]
}

/// Пользователи регистрируются сами, здесь только правка и блокировка
#[component]
pub fn UserList() -> impl IntoView {
    let mut config = ListPageConfig::catalog("a007_user--list", columns()).with_dialog(
        |mode, on_close, fetch_data| {
            view! { <UserDialog mode=mode on_close=on_close fetch_data=fetch_data /> }.into_any()
        },
    );
    config.can_create = false;

    view! { <ResourceListPage config=config /> }
}
