use crate::shared::icons::icon;
use leptos::prelude::*;
use std::collections::BTreeMap;

/// Вид фильтра списка
#[derive(Debug, Clone, PartialEq)]
pub enum FilterKind {
    /// Выбор из фиксированных значений (value, label)
    Choice(Vec<(&'static str, &'static str)>),
    /// Произвольное значение, например id заведения
    Text,
}

/// Фильтр списка, уходит в query как `key=value`
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

impl FilterSpec {
    pub fn approval() -> Self {
        Self {
            key: "is_approved",
            label: "Статус",
            kind: FilterKind::Choice(vec![("true", "Одобрено"), ("false", "Ожидает")]),
        }
    }

    pub fn resolution() -> Self {
        Self {
            key: "is_resolved",
            label: "Статус",
            kind: FilterKind::Choice(vec![("true", "Решено"), ("false", "Открыто")]),
        }
    }

    pub fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FilterKind::Text,
        }
    }

    /// Подпись выбранного значения для чипа фильтра
    pub fn describe(&self, value: &str) -> String {
        let shown = match &self.kind {
            FilterKind::Choice(options) => options
                .iter()
                .find(|(v, _)| *v == value)
                .map(|(_, label)| *label)
                .unwrap_or(value),
            FilterKind::Text => value,
        };
        format!("{}: {}", self.label, shown)
    }
}

/// Пустое значение снимает фильтр
fn normalize(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// FilterPanel component - collapsible panel with entity filters and active filter chips
#[component]
pub fn FilterPanel(
    filters: Vec<FilterSpec>,

    /// Текущие значения фильтров из query
    #[prop(into)]
    values: Signal<BTreeMap<String, String>>,

    /// (key, value); None снимает фильтр
    on_change: Callback<(String, Option<String>)>,
) -> impl IntoView {
    let is_expanded = RwSignal::new(false);
    let filters = StoredValue::new(filters);
    let active_count = Signal::derive(move || values.with(BTreeMap::len));

    let controls = move || {
        filters.with_value(|specs| {
            specs
                .iter()
                .map(|spec| {
                    let key = spec.key;
                    let current = move || values.with(|v| v.get(key).cloned().unwrap_or_default());
                    let control = match &spec.kind {
                        FilterKind::Choice(options) => view! {
                            <select
                                class="form__select"
                                prop:value=current
                                on:change=move |ev| {
                                    on_change.run((key.to_string(), normalize(event_target_value(&ev))))
                                }
                            >
                                <option value="">"Все"</option>
                                {options
                                    .iter()
                                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                    .collect_view()}
                            </select>
                        }
                        .into_any(),
                        FilterKind::Text => view! {
                            <input
                                class="form__input"
                                prop:value=current
                                on:change=move |ev| {
                                    on_change.run((key.to_string(), normalize(event_target_value(&ev))))
                                }
                            />
                        }
                        .into_any(),
                    };
                    view! {
                        <div class="form__group">
                            <label class="form__label">{spec.label}</label>
                            {control}
                        </div>
                    }
                })
                .collect_view()
        })
    };

    let tags = move || {
        values
            .get()
            .into_iter()
            .map(|(key, value)| {
                let label = filters.with_value(|specs| {
                    specs
                        .iter()
                        .find(|s| s.key == key)
                        .map(|s| s.describe(&value))
                        .unwrap_or_else(|| format!("{}: {}", key, value))
                });
                view! {
                    <FilterTag
                        label=label
                        on_remove=Callback::new(move |_| on_change.run((key.clone(), None)))
                    />
                }
            })
            .collect_view()
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    {icon("filter")}
                    <span class="filter-panel__title">"Фильтры"</span>
                    {move || {
                        let count = active_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel__tags">{tags}</div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">{controls}</div>
            </div>
        </div>
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_uses_option_label() {
        assert_eq!(FilterSpec::approval().describe("false"), "Статус: Ожидает");
        assert_eq!(FilterSpec::resolution().describe("true"), "Статус: Решено");
        assert_eq!(FilterSpec::text("business", "Заведение").describe("7"), "Заведение: 7");
    }

    #[test]
    fn test_blank_value_clears_filter() {
        assert_eq!(normalize("  ".into()), None);
        assert_eq!(normalize(" 7 ".into()), Some("7".into()));
    }
}
