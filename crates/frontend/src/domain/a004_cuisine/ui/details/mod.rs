use contracts::domain::a004_cuisine::aggregate::{Cuisine, CuisineForm};
use contracts::shared::upload::IMAGE_RULE;
use leptos::prelude::*;

use crate::shared::components::ui::{FileInput, Input};
use crate::shared::dialog::component::{use_entity_form, EntityDialogFrame};
use crate::shared::dialog::{DialogMode, PayloadEncoding};

#[component]
pub fn CuisineDialog(
    mode: DialogMode<Cuisine>,
    on_close: Callback<()>,
    fetch_data: Callback<()>,
) -> impl IntoView {
    let current_image = match &mode {
        DialogMode::Edit(cuisine) => cuisine.image.clone(),
        DialogMode::Create => None,
    };
    let form = use_entity_form::<Cuisine, CuisineForm>(mode, PayloadEncoding::Multipart, on_close, fetch_data);
    let (name, set_name) = form.text(|d| &d.name, |d, v| d.name = v);
    let (name_ru, set_name_ru) = form.text(|d| &d.name_ru, |d, v| d.name_ru = v);

    view! {
        <EntityDialogFrame
            title=if form.is_edit() { "Редактирование кухни" } else { "Новая кухня" }
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
            />
            <FileInput
                label="Фото"
                rule=IMAGE_RULE
                current=current_image
                on_pick=Callback::new(move |file: Option<web_sys::File>| form.pick_file("image", IMAGE_RULE, file))
                error=form.error("image")
            />
        </EntityDialogFrame>
    }
}
