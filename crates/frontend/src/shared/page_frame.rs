//! PageFrame: корневая обёртка страницы списка.
//!
//! Sets `id="{entity}--list"` on the root element for DOM inspection.

use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id, e.g. `"a002_category--list"`
    page_id: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class="page" data-page-category="list">
            {children()}
        </div>
    }
}
