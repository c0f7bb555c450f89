//! Универсальная страница списка ресурса.
//!
//! Связывает контроллер списка, загрузку страницы, таблицу, поиск, фильтры,
//! действия строк, массовое удаление и диалоги. Экран сущности задаёт только
//! колонки, фильтры, набор действий и диалог.

use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

use crate::shared::api::http::HttpTransport;
use crate::shared::components::csv_import::CsvImportDialog;
use crate::shared::components::filter_panel::{FilterPanel, FilterSpec};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::{PagerModel, PaginationControls};
use crate::shared::components::row_actions::{RowAction, RowActionMenu, RowMutation};
use crate::shared::components::search_bar::SearchBar;
use crate::shared::components::table::{CellValue, Column, DataTable};
use crate::shared::config::AppConfig;
use crate::shared::date_utils::format_optional;
use crate::shared::dialog::DialogMode;
use crate::shared::icons::icon;
use crate::shared::list_controller::{ListAction, ListEffect, ListState};
use crate::shared::modal::confirm;
use crate::shared::mutations;
use crate::shared::page_frame::PageFrame;
use crate::shared::remote::use_remote_list;
use crate::shared::toast::use_toast;

/// Рисует диалог: режим, `on_close`, `fetch_data`
pub type DialogRenderer<R> =
    Arc<dyn Fn(DialogMode<R>, Callback<()>, Callback<()>) -> AnyView + Send + Sync>;

/// Колонка "Создано" с сортировкой по `created_at`
pub fn created_column<R: Resource>() -> Column<R> {
    Column::new("created_at", "Создано", |r: &R| {
        CellValue::text(format_optional(r.base().created_at.as_deref()))
    })
    .sortable()
}

pub struct ListPageConfig<R: Resource> {
    pub page_id: &'static str,
    pub columns: Vec<Column<R>>,
    pub filters: Vec<FilterSpec>,
    pub actions: Vec<RowAction>,
    pub dialog: Option<DialogRenderer<R>>,
    pub can_create: bool,
    pub bulk_delete: bool,
    pub csv_import: bool,
}

impl<R: Resource> ListPageConfig<R> {
    /// Справочник: создание, изменение, удаление
    pub fn catalog(page_id: &'static str, columns: Vec<Column<R>>) -> Self {
        Self {
            page_id,
            columns,
            filters: Vec::new(),
            actions: vec![RowAction::Edit, RowAction::Delete],
            dialog: None,
            can_create: true,
            bulk_delete: true,
            csv_import: false,
        }
    }

    /// Очередь модерации: без создания, только просмотр и решения
    pub fn moderation(page_id: &'static str, columns: Vec<Column<R>>, actions: Vec<RowAction>) -> Self {
        Self {
            page_id,
            columns,
            filters: Vec::new(),
            actions,
            dialog: None,
            can_create: false,
            bulk_delete: false,
            csv_import: false,
        }
    }

    pub fn with_dialog(
        mut self,
        render: impl Fn(DialogMode<R>, Callback<()>, Callback<()>) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        self.dialog = Some(Arc::new(render));
        self
    }

    pub fn with_filters(mut self, filters: Vec<FilterSpec>) -> Self {
        self.filters = filters;
        self
    }
}

#[component]
pub fn ResourceListPage<R: Resource>(config: ListPageConfig<R>) -> impl IntoView {
    let ListPageConfig {
        page_id,
        columns,
        filters,
        actions,
        dialog,
        can_create,
        bulk_delete,
        csv_import,
    } = config;

    let app = use_context::<AppConfig>().unwrap_or_default();
    let transport = use_context::<HttpTransport>().expect("HttpTransport not found in context");
    let toast = use_toast();

    let state = RwSignal::new(ListState::default());
    let remote = use_remote_list::<R, _>(transport.clone(), ListState::default().query);
    let transport = StoredValue::new(transport);

    let dispatch = Callback::new(move |action: ListAction| {
        let Some((next, effect)) = state.try_with_untracked(|s| s.reduce(action)) else {
            return;
        };
        state.set(next);
        if let ListEffect::Fetch(query) = effect {
            remote.refetch(transport.get_value(), query);
        }
    });
    let refetch = Callback::new(move |_: ()| {
        if let Some(query) = state.try_with_untracked(|s| s.query.clone()) {
            remote.refetch(transport.get_value(), query);
        }
    });

    let page_size = app.page_size;
    let after_delete = Callback::new(move |deleted: usize| {
        let remaining = remote
            .page
            .try_with_untracked(|p| p.count.saturating_sub(deleted as u64))
            .unwrap_or_default();
        dispatch.run(ListAction::Deleted { remaining, page_size });
    });

    let open_dialog = RwSignal::new(None::<DialogMode<R>>);
    let show_import = RwSignal::new(false);
    let has_dialog = dialog.is_some();
    let dialog = StoredValue::new(dialog);
    let close_dialog = Callback::new(move |_: ()| open_dialog.set(None));

    let on_row_action = Callback::new(move |(row, action): (R, RowAction)| {
        if action.opens_dialog() {
            if has_dialog {
                open_dialog.set(Some(DialogMode::Edit(row)));
            }
            return;
        }
        let Some(mutation) = action.mutation() else {
            return;
        };
        let transport = transport.get_value();
        spawn_local(async move {
            let id = row.id().clone();
            let result = match mutation {
                RowMutation::Delete => mutations::delete::<R, _>(&transport, &id).await,
                RowMutation::Action(name) => {
                    mutations::run_action::<R, _>(&transport, &id, name).await.map(|_| ())
                }
            };
            match result {
                Ok(()) => {
                    log::debug!("{}: {:?} {}", R::ENDPOINT, action, id);
                    toast.success(mutation.notice());
                    if mutation == RowMutation::Delete {
                        after_delete.run(1);
                    } else {
                        refetch.run(());
                    }
                }
                Err(e) => {
                    log::error!("{}: {:?} {} failed: {}", R::ENDPOINT, action, id, e);
                    toast.error(e.user_message());
                }
            }
        });
    });

    let row_actions = (!actions.is_empty()).then(|| {
        let actions = StoredValue::new(actions.clone());
        Callback::new(move |row: R| {
            view! {
                <RowActionMenu
                    actions=actions.get_value()
                    on_action=Callback::new(move |action: RowAction| on_row_action.run((row.clone(), action)))
                />
            }
            .into_any()
        })
    });
    let opens_on_click = has_dialog && actions.iter().any(|a| a.opens_dialog());
    let on_row_click = opens_on_click.then(|| {
        Callback::new(move |row: R| open_dialog.set(Some(DialogMode::Edit(row))))
    });

    let delete_selected = move |_| {
        let ids: Vec<EntityId> = state.with_untracked(|s| s.selection.iter().cloned().collect());
        if ids.is_empty() || !confirm(&format!("Удалить выбранные записи ({})?", ids.len())) {
            return;
        }
        let transport = transport.get_value();
        spawn_local(async move {
            let outcome = mutations::delete_many::<R, _>(&transport, ids).await;
            if outcome.is_complete() {
                toast.success(outcome.summary());
            } else {
                toast.warning(outcome.summary());
            }
            after_delete.run(outcome.deleted.len());
        });
    };

    let pager = Signal::derive(move || PagerModel {
        page: state.with(|s| s.query.page),
        page_size,
        count: remote.page.with(|p| p.count),
    });
    let selected_count = Signal::derive(move || state.with(|s| s.selection.len()));

    view! {
        <PageFrame page_id=page_id>
            <PageHeader title=R::TITLE count=Signal::derive(move || remote.page.with(|p| p.count))>
                <Flex>
                    {(has_dialog && can_create).then(|| view! {
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| open_dialog.set(Some(DialogMode::Create))
                        >
                            {icon("plus")}
                            " Добавить"
                        </Button>
                    })}
                    {csv_import.then(|| view! {
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| show_import.set(true)>
                            {icon("upload")}
                            " Импорт CSV"
                        </Button>
                    })}
                    {bulk_delete.then(|| view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=delete_selected
                            disabled=Signal::derive(move || selected_count.get() == 0)
                        >
                            {icon("trash")}
                            {move || format!(" Удалить ({})", selected_count.get())}
                        </Button>
                    })}
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| refetch.run(())>
                        {icon("refresh")}
                    </Button>
                </Flex>
            </PageHeader>

            <div class="page__toolbar">
                <SearchBar
                    applied=Signal::derive(move || state.with(|s| s.query.search.clone()))
                    on_search=Callback::new(move |text: String| dispatch.run(ListAction::SetSearch(text)))
                    on_reset=Callback::new(move |_| dispatch.run(ListAction::Reset))
                />
                {(!filters.is_empty()).then(|| view! {
                    <FilterPanel
                        filters=filters
                        values=Signal::derive(move || state.with(|s| s.query.filters.clone()))
                        on_change=Callback::new(move |(key, value): (String, Option<String>)| {
                            dispatch.run(ListAction::SetFilter { key, value })
                        })
                    />
                })}
            </div>

            <div class="page__content">
                <DataTable
                    rows=Signal::derive(move || remote.page.with(|p| p.results.clone()))
                    columns=columns
                    sort=Signal::derive(move || state.with(|s| s.query.sort.clone()))
                    on_sort=Callback::new(move |field: String| dispatch.run(ListAction::SetSort(field)))
                    selection=Signal::derive(move || state.with(|s| s.selection.clone()))
                    on_toggle_row=Callback::new(move |id: EntityId| dispatch.run(ListAction::ToggleRow(id)))
                    on_toggle_all=Callback::new(move |checked: bool| {
                        let ids_on_page = remote.page.with_untracked(|p| {
                            p.results.iter().map(|r| r.id().clone()).collect()
                        });
                        dispatch.run(ListAction::ToggleAll { checked, ids_on_page })
                    })
                    loading=remote.loading
                    page_size=page_size as usize
                    on_row_click=on_row_click
                    actions=row_actions
                    selectable=bulk_delete
                />
                <PaginationControls
                    model=pager
                    on_page_change=Callback::new(move |page: u32| dispatch.run(ListAction::SetPage(page)))
                />
            </div>

            {move || {
                open_dialog.get().and_then(|mode| {
                    dialog.with_value(|render| render.as_ref().map(|r| r(mode, close_dialog, refetch)))
                })
            }}
            <Show when=move || show_import.get()>
                <CsvImportDialog on_close=Callback::new(move |_| show_import.set(false)) fetch_data=refetch />
            </Show>
        </PageFrame>
    }
}
