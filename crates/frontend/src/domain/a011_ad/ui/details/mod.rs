use contracts::domain::a011_ad::aggregate::{Ad, AdForm};
use contracts::shared::upload::IMAGE_RULE;
use leptos::prelude::*;

use crate::shared::components::ui::{Checkbox, FileInput, Input, Textarea};
use crate::shared::dialog::component::{use_entity_form, EntityDialogFrame};
use crate::shared::dialog::{DialogMode, PayloadEncoding};

#[component]
pub fn AdDialog(mode: DialogMode<Ad>, on_close: Callback<()>, fetch_data: Callback<()>) -> impl IntoView {
    let current_image = match &mode {
        DialogMode::Edit(ad) => ad.image.clone(),
        DialogMode::Create => None,
    };
    let form = use_entity_form::<Ad, AdForm>(mode, PayloadEncoding::Multipart, on_close, fetch_data);

    let (title, set_title) = form.text(|d| &d.title, |d, v| d.title = v);
    let (description, set_description) = form.text(|d| &d.description, |d, v| d.description = v);
    let (priority, set_priority) = form.text(|d| &d.priority, |d, v| d.priority = v);
    let (link, set_link) = form.text(|d| &d.link, |d, v| d.link = v);
    let (is_active, set_is_active) = form.flag(|d| d.is_active, |d, v| d.is_active = v);

    view! {
        <EntityDialogFrame
            title=if form.is_edit() { "Редактирование рекламы" } else { "Новая реклама" }
            submitting=form.submitting()
            on_close=on_close
            on_save=Callback::new(move |_| form.save())
        >
            <Input label="Заголовок" value=title on_input=set_title error=form.error("title") required=true />
            <Textarea label="Описание" value=description on_input=set_description error=form.error("description") />
            <Input
                label="Приоритет"
                input_type="number"
                value=priority
                on_input=set_priority
                error=form.error("priority")
            />
            <Input
                label="Ссылка"
                input_type="url"
                placeholder="https://"
                value=link
                on_input=set_link
                error=form.error("link")
            />
            <FileInput
                label="Баннер"
                rule=IMAGE_RULE
                current=current_image
                on_pick=Callback::new(move |file: Option<web_sys::File>| form.pick_file("image", IMAGE_RULE, file))
                error=form.error("image")
            />
            <Checkbox label="Показывать" checked=is_active on_change=set_is_active />
        </EntityDialogFrame>
    }
}
