pub mod sidebar;

use crate::shared::icons::icon;
use crate::system::auth::storage;
use leptos::prelude::*;
use sidebar::Sidebar;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside class="app-sidebar">
                    <Sidebar />
                </aside>
                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}

#[component]
fn TopHeader() -> impl IntoView {
    let logout = move |_| {
        storage::clear_tokens();
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">{icon("store")}<span>"Restaurant Admin"</span></div>
            <button class="top-header__logout" title="Выйти" on:click=logout>
                {icon("x")}
                " Выйти"
            </button>
        </header>
    }
}
