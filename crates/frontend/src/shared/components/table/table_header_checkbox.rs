//! Компонент чекбокса в заголовке таблицы для выбора всех строк страницы

use contracts::domain::common::EntityId;
use leptos::prelude::*;
use std::collections::BTreeSet;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheck {
    Unchecked,
    Checked,
    Indeterminate,
}

impl HeaderCheck {
    /// Состояние по выбору и строкам текущей страницы
    pub fn of(selection: &BTreeSet<EntityId>, ids_on_page: &[EntityId]) -> Self {
        let selected = ids_on_page.iter().filter(|id| selection.contains(id)).count();
        if ids_on_page.is_empty() || selected == 0 {
            HeaderCheck::Unchecked
        } else if selected == ids_on_page.len() {
            HeaderCheck::Checked
        } else {
            HeaderCheck::Indeterminate
        }
    }
}

/// Чекбокс "выбрать все".
///
/// `indeterminate` есть только у DOM-свойства, поэтому выставляется через `NodeRef`.
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)]
    state: Signal<HeaderCheck>,

    /// true = выбрать все, false = снять все
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        let indeterminate = state.get() == HeaderCheck::Indeterminate;
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == HeaderCheck::Checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[i64]) -> Vec<EntityId> {
        raw.iter().copied().map(EntityId::from).collect()
    }

    #[test]
    fn test_header_state() {
        let page = ids(&[1, 2, 3]);

        assert_eq!(HeaderCheck::of(&BTreeSet::new(), &page), HeaderCheck::Unchecked);
        assert_eq!(
            HeaderCheck::of(&ids(&[2]).into_iter().collect(), &page),
            HeaderCheck::Indeterminate
        );
        assert_eq!(HeaderCheck::of(&page.iter().cloned().collect(), &page), HeaderCheck::Checked);
        // Пустая страница никогда не считается выбранной
        assert_eq!(HeaderCheck::of(&ids(&[1]).into_iter().collect(), &[]), HeaderCheck::Unchecked);
    }
}
