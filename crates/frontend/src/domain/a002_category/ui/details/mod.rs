use contracts::domain::a002_category::aggregate::{Category, CategoryForm};
use contracts::shared::upload::IMAGE_RULE;
use leptos::prelude::*;

use crate::shared::components::ui::{FileInput, Input};
use crate::shared::dialog::component::{use_entity_form, EntityDialogFrame};
use crate::shared::dialog::{DialogMode, PayloadEncoding};

#[component]
pub fn CategoryDialog(
    mode: DialogMode<Category>,
    on_close: Callback<()>,
    fetch_data: Callback<()>,
) -> impl IntoView {
    let current_icon = match &mode {
        DialogMode::Edit(category) => category.icon.clone(),
        DialogMode::Create => None,
    };
    let form = use_entity_form::<Category, CategoryForm>(mode, PayloadEncoding::Multipart, on_close, fetch_data);
    let (name, set_name) = form.text(|d| &d.name, |d, v| d.name = v);
    let (name_ru, set_name_ru) = form.text(|d| &d.name_ru, |d, v| d.name_ru = v);
    let title = if form.is_edit() { "Редактирование категории" } else { "Новая категория" };

    view! {
        <EntityDialogFrame
            title=title
            submitting=form.submitting()
            on_close=on_close
            on_save=Callback::new(move |_| form.save())
        >
            <Input label="Название" value=name on_input=set_name error=form.error("name") required=true />
            <Input
                label="Название (рус.)"
                value=name_ru
                on_input=set_name_ru
                error=form.error("name_ru")
                required=true
            />
            <FileInput
                label="Иконка"
                rule=IMAGE_RULE
                current=current_icon
                on_pick=Callback::new(move |file: Option<web_sys::File>| form.pick_file("icon", IMAGE_RULE, file))
                error=form.error("icon")
                disabled=form.submitting()
            />
        </EntityDialogFrame>
    }
}
