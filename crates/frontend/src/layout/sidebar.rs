//! Sidebar navigation with collapsible groups

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (href, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "catalog",
            label: "Каталог",
            icon: "store",
            items: vec![
                ("/businesses", "Заведения", "store"),
                ("/menu-items", "Меню", "book"),
                ("/menu-types", "Разделы меню", "list"),
            ],
        },
        MenuGroup {
            id: "references",
            label: "Справочники",
            icon: "grid",
            items: vec![
                ("/categories", "Категории", "grid"),
                ("/sub-categories", "Подкатегории", "layers"),
                ("/cuisines", "Кухни", "globe"),
            ],
        },
        MenuGroup {
            id: "people",
            label: "Пользователи",
            icon: "users",
            items: vec![
                ("/users", "Пользователи", "users"),
                ("/collaborators", "Сотрудники", "user-plus"),
            ],
        },
        MenuGroup {
            id: "moderation",
            label: "Модерация",
            icon: "flag",
            items: vec![
                ("/claims", "Заявки на владение", "flag"),
                ("/disputes", "Обращения", "message"),
                ("/reported-reviews", "Жалобы на отзывы", "alert"),
            ],
        },
        MenuGroup {
            id: "marketing",
            label: "Реклама",
            icon: "megaphone",
            items: vec![("/ads", "Рекламные баннеры", "megaphone")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id)
            .collect::<Vec<&'static str>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let gid = group.id;
                let items = StoredValue::new(group.items);
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| *x == gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=move || expanded_groups.get().contains(&gid)>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|(href, label, icon_name)| view! {
                                    <A href=href attr:class="app-sidebar__item">
                                        <div class="app-sidebar__item-content">
                                            {icon(icon_name)}
                                            <span>{label}</span>
                                        </div>
                                    </A>
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
