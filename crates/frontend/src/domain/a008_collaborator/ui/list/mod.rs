use contracts::domain::a008_collaborator::aggregate::{Collaborator, COLLABORATOR_ROLES};
use leptos::prelude::*;

use super::details::CollaboratorDialog;
use crate::shared::components::table::{CellValue, Column};
use crate::shared::resource_page::{created_column, ListPageConfig, ResourceListPage};

fn role_label(code: &str) -> CellValue {
    let label = COLLABORATOR_ROLES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(code);
    CellValue::opt(Some(label))
}

pub fn columns() -> Vec<Column<Collaborator>> {
    vec![
        Column::new("email", "Email", |c: &Collaborator| CellValue::text(&c.email)).sortable(),
        Column::new("business", "Заведение", |c: &Collaborator| {
            CellValue::text(c.business_name.clone().unwrap_or_else(|| c.business.to_string()))
        }),
        Column::new("role", "Роль", |c: &Collaborator| role_label(&c.role)),
        created_column(),
    ]
}

#[component]
pub fn CollaboratorList() -> impl IntoView {
    let config = ListPageConfig::catalog("a008_collaborator--list", columns()).with_dialog(
        |mode, on_close, fetch_data| {
            view! { <CollaboratorDialog mode=mode on_close=on_close fetch_data=fetch_data /> }.into_any()
        },
    );

    view! { <ResourceListPage config=config /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_label() {
        assert_eq!(role_label("manager").as_text(), "Менеджер");
        assert_eq!(role_label("owner").as_text(), "owner");
        assert_eq!(role_label(""), CellValue::Empty);
    }
}
