//! Меню действий строки таблицы.

use crate::shared::icons::icon;
use crate::shared::modal::confirm;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    View,
    Edit,
    Reply,
    Approve,
    Delete,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::View => "Просмотр",
            RowAction::Edit => "Изменить",
            RowAction::Reply => "Ответить",
            RowAction::Approve => "Одобрить",
            RowAction::Delete => "Удалить",
        }
    }

    fn icon_name(self) -> &'static str {
        match self {
            RowAction::View => "eye",
            RowAction::Edit => "edit",
            RowAction::Reply => "reply",
            RowAction::Approve => "check",
            RowAction::Delete => "trash",
        }
    }

    /// Текст подтверждения для разрушающих действий
    pub fn confirmation(self) -> Option<&'static str> {
        match self {
            RowAction::Delete => Some("Удалить запись? Действие нельзя отменить."),
            _ => None,
        }
    }

    /// Открывает диалог, а не вызывает мутацию
    pub fn opens_dialog(self) -> bool {
        matches!(self, RowAction::View | RowAction::Edit | RowAction::Reply)
    }
}

/// Запрос, который действие отправляет напрямую
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMutation {
    Delete,
    /// POST на `{ENDPOINT}{id}/{action}/`
    Action(&'static str),
}

impl RowMutation {
    pub fn notice(self) -> &'static str {
        match self {
            RowMutation::Delete => "Запись удалена",
            RowMutation::Action("approve") => "Запись одобрена",
            RowMutation::Action(_) => "Действие выполнено",
        }
    }
}

impl RowAction {
    pub fn mutation(self) -> Option<RowMutation> {
        match self {
            RowAction::Delete => Some(RowMutation::Delete),
            RowAction::Approve => Some(RowMutation::Action("approve")),
            RowAction::View | RowAction::Edit | RowAction::Reply => None,
        }
    }
}

/// Запускать ли действие: разрушающие только после подтверждения
pub fn should_fire(action: RowAction, ask: impl FnOnce(&str) -> bool) -> bool {
    match action.confirmation() {
        Some(message) => ask(message),
        None => true,
    }
}

/// Кнопка "..." и выпадающий список действий
#[component]
pub fn RowActionMenu(
    #[prop(into)]
    actions: Vec<RowAction>,
    on_action: Callback<RowAction>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);

    let items = actions
        .into_iter()
        .map(|action| {
            let class = if action == RowAction::Delete {
                "row-actions__item row-actions__item--danger"
            } else {
                "row-actions__item"
            };
            view! {
                <button
                    class=class
                    on:click=move |_| {
                        is_open.set(false);
                        if should_fire(action, confirm) {
                            on_action.run(action);
                        }
                    }
                >
                    {icon(action.icon_name())}
                    <span>{action.label()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="row-actions">
            <button
                class="row-actions__trigger"
                title="Действия"
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                {icon("more")}
            </button>
            <Show when=move || is_open.get()>
                <div class="row-actions__backdrop" on:click=move |_| is_open.set(false)></div>
            </Show>
            <div class="row-actions__menu" class:row-actions__menu--open=move || is_open.get()>
                {items}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_requires_confirmation() {
        assert!(!should_fire(RowAction::Delete, |_| false));
        assert!(should_fire(RowAction::Delete, |_| true));
    }

    #[test]
    fn test_non_destructive_actions_fire_immediately() {
        for action in [RowAction::Approve, RowAction::Edit, RowAction::View, RowAction::Reply] {
            assert!(should_fire(action, |_| panic!("no confirmation expected")));
        }
        assert!(RowAction::Edit.opens_dialog());
        assert!(!RowAction::Approve.opens_dialog());
    }

    #[test]
    fn test_only_delete_and_approve_send_requests() {
        assert_eq!(RowAction::Delete.mutation(), Some(RowMutation::Delete));
        assert_eq!(RowAction::Approve.mutation(), Some(RowMutation::Action("approve")));
        for action in [RowAction::View, RowAction::Edit, RowAction::Reply] {
            assert_eq!(action.mutation(), None);
            assert!(action.opens_dialog());
        }
        assert_eq!(RowMutation::Action("approve").notice(), "Запись одобрена");
    }
}
