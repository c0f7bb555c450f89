//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Название"
//!     field="name"
//!     sort=Signal::derive(move || state.with(|s| s.query.sort.clone()))
//!     on_sort=Callback::new(move |field| dispatch(ListAction::SetSort(field)))
//! />
//! ```

use contracts::shared::list_query::{Sort, SortDirection};
use leptos::prelude::*;
use thaw::*;

/// Индикатор сортировки для колонки `field`
pub fn sort_indicator(sort: Option<&Sort>, field: &str) -> &'static str {
    match sort {
        Some(s) if s.field == field => match s.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => " ⇅",
    }
}

pub fn sort_class(sort: Option<&Sort>, field: &str) -> &'static str {
    match sort {
        Some(s) if s.field == field => "table__sort-indicator table__sort-indicator--active",
        _ => "table__sort-indicator",
    }
}

/// Ячейка заголовка: клик передаёт поле в `on_sort`,
/// направление переключает контроллер списка.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для `ordering`
    field: &'static str,

    /// Текущая сортировка списка
    #[prop(into)]
    sort: Signal<Option<Sort>>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,
) -> impl IntoView {

    view! {
        <TableHeaderCell>
            <div
                class="table__sortable-header"
                style="cursor: pointer; padding-right: 12px;"
                on:click=move |_| on_sort.run(field.to_string())
            >
                {label}
                <span class=move || sort.with(|s| sort_class(s.as_ref(), field))>
                    {move || sort.with(|s| sort_indicator(s.as_ref(), field))}
                </span>
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        let asc = Sort::asc("name");
        let desc = Sort {
            field: "name".into(),
            direction: SortDirection::Desc,
        };

        assert_eq!(sort_indicator(None, "name"), " ⇅");
        assert_eq!(sort_indicator(Some(&asc), "name"), " ▲");
        assert_eq!(sort_indicator(Some(&desc), "name"), " ▼");
        assert_eq!(sort_indicator(Some(&asc), "price"), " ⇅");
        assert!(sort_class(Some(&asc), "name").ends_with("--active"));
    }
}
