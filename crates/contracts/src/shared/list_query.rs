//! Соглашение о параметрах списочных эндпоинтов.
//!
//! `page` — с единицы, `ordering` — `field` или `-field`, `search` — подстрока,
//! плюс фильтры конкретной сущности (`is_approved`, `is_resolved`, ...).
//! `ListQuery` неизменяем: каждый переход возвращает новое значение.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Значение параметра `ordering`
    pub fn ordering(&self) -> String {
        match self.direction {
            SortDirection::Asc => self.field.clone(),
            SortDirection::Desc => format!("-{}", self.field),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: u32,
    pub sort: Option<Sort>,
    pub search: Option<String>,
    pub filters: BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            sort: None,
            search: None,
            filters: BTreeMap::new(),
        }
    }
}

impl ListQuery {
    /// Переход на страницу; номера меньше 1 прижимаются к 1
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Повторный клик по тому же полю меняет направление, новое поле — всегда по возрастанию
    pub fn with_sort_toggled(&self, field: &str) -> Self {
        let sort = match &self.sort {
            Some(current) if current.field == field => Sort {
                field: current.field.clone(),
                direction: current.direction.flipped(),
            },
            _ => Sort::asc(field),
        };
        Self {
            sort: Some(sort),
            ..self.clone()
        }
    }

    /// Новый поиск всегда начинается с первой страницы; пустая строка снимает поиск
    pub fn with_search(&self, query: &str) -> Self {
        let trimmed = query.trim();
        Self {
            page: 1,
            search: (!trimmed.is_empty()).then(|| trimmed.to_string()),
            ..self.clone()
        }
    }

    /// `None` снимает фильтр
    pub fn with_filter(&self, key: &str, value: Option<&str>) -> Self {
        let mut filters = self.filters.clone();
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => {
                filters.insert(key.to_string(), v.to_string());
            }
            None => {
                filters.remove(key);
            }
        }
        Self {
            page: 1,
            filters,
            ..self.clone()
        }
    }

    pub fn ordering(&self) -> Option<String> {
        self.sort.as_ref().map(Sort::ordering)
    }

    /// Параметры запроса в виде плоской карты (для `serde_qs`)
    pub fn params(&self) -> BTreeMap<String, String> {
        let mut params = self.filters.clone();
        params.insert("page".to_string(), self.page.to_string());
        if let Some(ordering) = self.ordering() {
            params.insert("ordering".to_string(), ordering);
        }
        if let Some(search) = &self.search {
            params.insert("search".to_string(), search.clone());
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_clamped_to_one() {
        let q = ListQuery::default().with_page(0);
        assert_eq!(q.page, 1);
        assert_eq!(ListQuery::default().with_page(4).params()["page"], "4");
    }

    #[test]
    fn test_sort_toggles_on_same_field_and_resets_on_new() {
        let q = ListQuery::default().with_sort_toggled("name");
        assert_eq!(q.ordering().as_deref(), Some("name"));

        let q = q.with_sort_toggled("name");
        assert_eq!(q.ordering().as_deref(), Some("-name"));

        let q = q.with_sort_toggled("name");
        assert_eq!(q.ordering().as_deref(), Some("name"));

        let q = q.with_sort_toggled("name").with_sort_toggled("created_at");
        assert_eq!(q.ordering().as_deref(), Some("created_at"));
    }

    #[test]
    fn test_search_is_trimmed_and_resets_page() {
        let q = ListQuery::default().with_page(3).with_search("  pizza ");
        assert_eq!(q.page, 1);
        assert_eq!(q.search.as_deref(), Some("pizza"));
        assert_eq!(q.with_search("   ").search, None);
    }

    #[test]
    fn test_filters_land_in_params() {
        let q = ListQuery::default()
            .with_filter("is_approved", Some("false"))
            .with_sort_toggled("name")
            .with_search("cafe");
        let params = q.params();
        assert_eq!(params["is_approved"], "false");
        assert_eq!(params["ordering"], "name");
        assert_eq!(params["search"], "cafe");
        assert_eq!(params["page"], "1");

        let cleared = q.with_filter("is_approved", None);
        assert!(!cleared.params().contains_key("is_approved"));
    }
}
