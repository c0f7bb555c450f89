//! Контроллер списка: страница, сортировка, поиск, фильтры и выбор строк.
//!
//! Одно состояние на экран и один редьюсер вместо разрозненных сигналов.
//! Любое изменение запроса возвращает `ListEffect::Fetch` и сбрасывает выбор:
//! выбор относится только к текущей странице.

use contracts::domain::common::EntityId;
use contracts::shared::list_query::ListQuery;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListState {
    pub query: ListQuery,
    pub selection: BTreeSet<EntityId>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction {
    SetPage(u32),
    SetSort(String),
    /// Явный поиск по кнопке, не на каждое нажатие клавиши
    SetSearch(String),
    SetFilter { key: String, value: Option<String> },
    Reset,
    /// Записи удалены; `remaining` — сколько осталось всего
    Deleted { remaining: u64, page_size: u64 },
    ToggleRow(EntityId),
    ToggleAll { checked: bool, ids_on_page: Vec<EntityId> },
    ClearSelection,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListEffect {
    None,
    Fetch(ListQuery),
}

impl ListState {
    pub fn with_query(query: ListQuery) -> Self {
        Self {
            query,
            selection: BTreeSet::new(),
        }
    }

    pub fn is_selected(&self, id: &EntityId) -> bool {
        self.selection.contains(id)
    }

    fn refetch(query: ListQuery) -> (Self, ListEffect) {
        (Self::with_query(query.clone()), ListEffect::Fetch(query))
    }

    pub fn reduce(&self, action: ListAction) -> (Self, ListEffect) {
        match action {
            ListAction::SetPage(page) => Self::refetch(self.query.with_page(page)),
            ListAction::SetSort(field) => Self::refetch(self.query.with_sort_toggled(&field)),
            ListAction::SetSearch(text) => Self::refetch(self.query.with_search(&text)),
            ListAction::SetFilter { key, value } => {
                Self::refetch(self.query.with_filter(&key, value.as_deref()))
            }
            ListAction::Reset => Self::refetch(ListQuery::default()),
            ListAction::Deleted { remaining, page_size } => {
                // Опустевшая последняя страница: переходим на новую последнюю
                let last = if page_size == 0 {
                    1
                } else {
                    remaining.div_ceil(page_size).max(1)
                };
                let page = u64::from(self.query.page).min(last) as u32;
                Self::refetch(self.query.with_page(page))
            }
            ListAction::ToggleRow(id) => {
                let mut selection = self.selection.clone();
                if !selection.remove(&id) {
                    selection.insert(id);
                }
                (
                    Self {
                        selection,
                        ..self.clone()
                    },
                    ListEffect::None,
                )
            }
            ListAction::ToggleAll { checked, ids_on_page } => {
                let selection = if checked {
                    ids_on_page.into_iter().collect()
                } else {
                    BTreeSet::new()
                };
                (
                    Self {
                        selection,
                        ..self.clone()
                    },
                    ListEffect::None,
                )
            }
            ListAction::ClearSelection => (
                Self {
                    selection: BTreeSet::new(),
                    ..self.clone()
                },
                ListEffect::None,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(ids: &[i64]) -> ListState {
        let mut state = ListState::default();
        for id in ids {
            state = state.reduce(ListAction::ToggleRow(EntityId::Number(*id))).0;
        }
        state
    }

    fn fetched(effect: &ListEffect) -> &ListQuery {
        match effect {
            ListEffect::Fetch(q) => q,
            ListEffect::None => panic!("expected a fetch"),
        }
    }

    #[test]
    fn test_set_page_fetches_once_and_clears_selection() {
        let state = selected(&[1, 2]);
        assert_eq!(state.selection.len(), 2);

        let (next, effect) = state.reduce(ListAction::SetPage(3));
        assert_eq!(fetched(&effect).params()["page"], "3");
        assert!(next.selection.is_empty());

        let (_, effect) = next.reduce(ListAction::SetPage(0));
        assert_eq!(fetched(&effect).page, 1);
    }

    #[test]
    fn test_sort_same_column_twice_toggles_direction() {
        let (state, effect) = ListState::default().reduce(ListAction::SetSort("name".into()));
        assert_eq!(fetched(&effect).params()["ordering"], "name");

        let (state, effect) = state.reduce(ListAction::SetSort("name".into()));
        assert_eq!(fetched(&effect).params()["ordering"], "-name");

        let (_, effect) = state.reduce(ListAction::SetSort("created_at".into()));
        assert_eq!(fetched(&effect).params()["ordering"], "created_at");
    }

    #[test]
    fn test_search_goes_back_to_first_page() {
        let (state, _) = ListState::default().reduce(ListAction::SetPage(4));
        let (_, effect) = state.reduce(ListAction::SetSearch("  lagman ".into()));
        let query = fetched(&effect);
        assert_eq!(query.page, 1);
        assert_eq!(query.params()["search"], "lagman");
    }

    #[test]
    fn test_reset_is_idempotent() {
        let (state, _) = ListState::default().reduce(ListAction::SetSearch("cafe".into()));
        let (state, _) = state.reduce(ListAction::SetSort("name".into()));
        let (state, _) = state.reduce(ListAction::SetFilter {
            key: "is_approved".into(),
            value: Some("true".into()),
        });
        let (state, _) = state.reduce(ListAction::SetPage(5));

        let (once, first) = state.reduce(ListAction::Reset);
        let (_, second) = once.reduce(ListAction::Reset);
        assert_eq!(first, second);

        let params = fetched(&first).params();
        assert_eq!(params.len(), 1);
        assert_eq!(params["page"], "1");
    }

    #[test]
    fn test_selection_toggles() {
        let state = selected(&[1, 2, 1]);
        assert_eq!(state.selection, BTreeSet::from([EntityId::Number(2)]));

        let ids = vec![EntityId::Number(1), EntityId::Number(2), EntityId::Number(3)];
        let (all, effect) = state.reduce(ListAction::ToggleAll {
            checked: true,
            ids_on_page: ids.clone(),
        });
        assert_eq!(effect, ListEffect::None);
        assert_eq!(all.selection.len(), 3);

        let (none, _) = all.reduce(ListAction::ToggleAll {
            checked: false,
            ids_on_page: ids,
        });
        assert!(none.selection.is_empty());

        assert!(selected(&[4]).reduce(ListAction::ClearSelection).0.selection.is_empty());
    }

    #[test]
    fn test_delete_emptying_last_page_steps_back() {
        let (state, _) = ListState::default().reduce(ListAction::SetPage(3));
        let (state, _) = state.reduce(ListAction::ToggleRow(EntityId::Number(31)));
        assert!(state.is_selected(&EntityId::Number(31)));
        let (next, effect) = state.reduce(ListAction::Deleted {
            remaining: 30,
            page_size: 15,
        });
        assert_eq!(fetched(&effect).page, 2);
        assert!(next.selection.is_empty());

        let (_, effect) = state.reduce(ListAction::Deleted {
            remaining: 31,
            page_size: 15,
        });
        assert_eq!(fetched(&effect).page, 3);

        let (_, effect) = ListState::default().reduce(ListAction::Deleted {
            remaining: 0,
            page_size: 15,
        });
        assert_eq!(fetched(&effect).page, 1);
    }
}
