use crate::shared::icons::icon;
use leptos::prelude::*;

/// Состояние пагинатора: страницы с 1, как в параметре `page`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerModel {
    pub page: u32,
    pub page_size: u64,
    pub count: u64,
}

impl PagerModel {
    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            return 1;
        }
        (self.count.div_ceil(self.page_size) as u32).max(1)
    }

    /// Пагинатор не показывается, если всё помещается на одну страницу
    pub fn is_visible(&self) -> bool {
        self.count > self.page_size
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn label(&self) -> String {
        format!("{} / {} ({})", self.page, self.total_pages(), self.count)
    }
}

/// PaginationControls component - first/prev/next/last over a 1-indexed page
#[component]
pub fn PaginationControls(
    #[prop(into)]
    model: Signal<PagerModel>,

    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let go = move |page: u32| on_page_change.run(page);

    view! {
        <Show when=move || model.get().is_visible()>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| go(1)
                    disabled=move || !model.get().can_prev()
                    title="Первая страница"
                >
                    {icon("chevrons-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| go(model.get_untracked().page.saturating_sub(1))
                    disabled=move || !model.get().can_prev()
                    title="Предыдущая страница"
                >
                    {icon("chevron-left")}
                </button>
                <span class="pagination-info">{move || model.get().label()}</span>
                <button
                    class="pagination-btn"
                    on:click=move |_| go(model.get_untracked().page + 1)
                    disabled=move || !model.get().can_next()
                    title="Следующая страница"
                >
                    {icon("chevron-right")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| go(model.get_untracked().total_pages())
                    disabled=move || !model.get().can_next()
                    title="Последняя страница"
                >
                    {icon("chevrons-right")}
                </button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(page: u32, count: u64) -> PagerModel {
        PagerModel {
            page,
            page_size: 15,
            count,
        }
    }

    #[test]
    fn test_single_page_hides_pager() {
        let p = pager(1, 1);
        assert_eq!(p.total_pages(), 1);
        assert!(!p.is_visible());
        assert_eq!(p.label(), "1 / 1 (1)");

        assert!(!pager(1, 15).is_visible());
        assert!(!pager(1, 0).is_visible());
        assert_eq!(pager(1, 0).total_pages(), 1);
    }

    #[test]
    fn test_navigation_bounds() {
        let first = pager(1, 31);
        assert!(first.is_visible());
        assert_eq!(first.total_pages(), 3);
        assert!(!first.can_prev());
        assert!(first.can_next());

        let last = pager(3, 31);
        assert!(last.can_prev());
        assert!(!last.can_next());
    }
}
