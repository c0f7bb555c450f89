//! Таблица списка: заголовки с сортировкой, чекбоксы выбора, колонка действий.
//!
//! Состояния не хранит, всё приходит из контроллера списка через сигналы
//! и уходит обратно через колбэки.

use contracts::domain::common::{EntityId, Resource};
use contracts::shared::list_query::Sort;
use leptos::prelude::*;
use std::collections::BTreeSet;
use std::sync::Arc;
use thaw::*;

use super::{HeaderCheck, SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};

/// Содержимое ячейки
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    /// Флаг со своими подписями для да/нет
    Flag {
        value: bool,
        on: &'static str,
        off: &'static str,
    },
    Image(Option<String>),
    Empty,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn opt(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => CellValue::Text(v.to_string()),
            _ => CellValue::Empty,
        }
    }

    /// Текстовое представление (заголовок для картинки, подпись для флага)
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Flag { value, on, off } => if *value { on } else { off }.to_string(),
            CellValue::Image(src) => src.clone().unwrap_or_default(),
            CellValue::Empty => "—".to_string(),
        }
    }

    fn into_view(self) -> AnyView {
        match self {
            CellValue::Flag { value, on, off } => {
                let color = if value { BadgeColor::Success } else { BadgeColor::Warning };
                view! {
                    <Badge appearance=BadgeAppearance::Tint color=color>
                        {if value { on } else { off }}
                    </Badge>
                }
                .into_any()
            }
            CellValue::Image(Some(src)) => {
                view! { <img class="table__thumb" src=src alt="" /> }.into_any()
            }
            other => view! { <TableCellLayout>{other.as_text()}</TableCellLayout> }.into_any(),
        }
    }
}

pub struct Column<R> {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub render: Arc<dyn Fn(&R) -> CellValue + Send + Sync>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            sortable: self.sortable,
            render: Arc::clone(&self.render),
        }
    }
}

impl<R> Column<R> {
    pub fn new(
        key: &'static str,
        label: &'static str,
        render: impl Fn(&R) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            label,
            sortable: false,
            render: Arc::new(render),
        }
    }

    /// Сортировка по `key` на сервере
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn cell(&self, row: &R) -> CellValue {
        (self.render)(row)
    }
}

/// Сколько пустых строк дорисовать до размера страницы.
/// Пустой результат показывается строкой "Нет данных" без добивки.
pub fn padding_rows(rows: usize, page_size: usize) -> usize {
    if rows == 0 {
        0
    } else {
        page_size.saturating_sub(rows)
    }
}

#[component]
pub fn DataTable<R>(
    #[prop(into)] rows: Signal<Vec<R>>,
    columns: Vec<Column<R>>,
    #[prop(into)] sort: Signal<Option<Sort>>,
    on_sort: Callback<String>,
    #[prop(into)] selection: Signal<BTreeSet<EntityId>>,
    on_toggle_row: Callback<EntityId>,
    on_toggle_all: Callback<bool>,
    #[prop(into)] loading: Signal<bool>,
    page_size: usize,
    /// Клик по строке (обычно открывает диалог редактирования)
    #[prop(default = None)]
    on_row_click: Option<Callback<R>>,
    /// Меню действий строки
    #[prop(default = None)]
    actions: Option<Callback<R, AnyView>>,
    #[prop(optional, default = true)] selectable: bool,
) -> impl IntoView
where
    R: Resource,
{
    let span = columns.len() + usize::from(selectable) + usize::from(actions.is_some());
    let columns = StoredValue::new(columns);

    let header_state = Signal::derive(move || {
        let ids: Vec<EntityId> = rows.with(|r| r.iter().map(|row| row.id().clone()).collect());
        selection.with(|sel| HeaderCheck::of(sel, &ids))
    });

    let header = move || {
        columns.with_value(|cols| {
            cols.iter()
                .map(|col| {
                    let label: &'static str = col.label;
                    let field: &'static str = col.key;
                    if col.sortable {
                        view! {
                            <SortableHeaderCell label=label field=field sort=sort on_sort=on_sort />
                        }
                        .into_any()
                    } else {
                        view! { <TableHeaderCell>{label}</TableHeaderCell> }.into_any()
                    }
                })
                .collect_view()
        })
    };

    let render_row = move |row: R| {
        let id = row.id().clone();
        let id_for_check = id.clone();
        let checked = Signal::derive(move || selection.with(|s| s.contains(&id_for_check)));
        let row_for_click = row.clone();
        let action_view = actions.map(|render| render.run(row.clone()));
        let cells = columns.with_value(|cols| {
            cols.iter()
                .map(|col| {
                    let cell = col.cell(&row).into_view();
                    view! { <TableCell>{cell}</TableCell> }
                })
                .collect_view()
        });

        view! {
            <TableRow
                class="table__row"
                on:click=move |_| {
                    if let Some(cb) = on_row_click {
                        cb.run(row_for_click.clone());
                    }
                }
            >
                {selectable.then(|| view! {
                    <TableCellCheckbox
                        checked=checked
                        on_toggle=Callback::new(move |_| on_toggle_row.run(id.clone()))
                    />
                })}
                {cells}
                {action_view.map(|menu| view! {
                    <TableCell class="table__actions" on:click=|e| e.stop_propagation()>
                        {menu}
                    </TableCell>
                })}
            </TableRow>
        }
    };

    let body = move || {
        let current = rows.get();
        if current.is_empty() {
            let text = if loading.get() { "Загрузка..." } else { "Нет данных" };
            return view! {
                <tr class="table__no-data">
                    <td colspan=span>{text}</td>
                </tr>
            }
            .into_any();
        }

        let padding = padding_rows(current.len(), page_size);
        view! {
            {current.into_iter().map(render_row).collect_view()}
            {(0..padding)
                .map(|_| view! {
                    <tr class="table__row table__row--placeholder">
                        <td colspan=span>"\u{00a0}"</td>
                    </tr>
                })
                .collect_view()}
        }
        .into_any()
    };

    view! {
        <div class="table-wrapper" class:table-wrapper--loading=move || loading.get()>
            <Table>
                <TableHeader>
                    <TableRow>
                        {selectable.then(|| view! {
                            <TableHeaderCheckbox state=header_state on_change=on_toggle_all />
                        })}
                        {header}
                        {actions.is_some().then(|| view! { <TableHeaderCell>""</TableHeaderCell> })}
                    </TableRow>
                </TableHeader>
                <TableBody>{body}</TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_rows() {
        assert_eq!(padding_rows(0, 15), 0);
        assert_eq!(padding_rows(1, 15), 14);
        assert_eq!(padding_rows(15, 15), 0);
        assert_eq!(padding_rows(20, 15), 0);
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(CellValue::opt(None).as_text(), "—");
        assert_eq!(CellValue::opt(Some("")), CellValue::Empty);
        let flag = CellValue::Flag {
            value: false,
            on: "Одобрено",
            off: "Ожидает",
        };
        assert_eq!(flag.as_text(), "Ожидает");
    }

    #[test]
    fn test_columns_render_cells_for_a_row() {
        use contracts::domain::a002_category::aggregate::Category;
        use contracts::domain::common::EntityBase;

        let columns: Vec<Column<Category>> = vec![
            Column::new("name", "Название", |c: &Category| CellValue::text(&c.name)).sortable(),
            Column::new("icon", "Иконка", |c: &Category| CellValue::Image(c.icon.clone())),
            Column::new("name_ru", "Название (рус.)", |c: &Category| CellValue::opt(c.name_ru.as_deref())),
        ];
        let row = Category {
            base: EntityBase::new(1),
            name: "Desserts".into(),
            name_ru: None,
            icon: Some("/media/icons/cake.svg".into()),
        };

        let cells: Vec<String> = columns.iter().map(|c| c.cell(&row).as_text()).collect();
        assert_eq!(cells, vec!["Desserts", "/media/icons/cake.svg", "—"]);
        assert!(columns[0].sortable);
        assert!(!columns.clone()[1].sortable);
    }
}
