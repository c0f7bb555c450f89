use contracts::domain::a001_business::aggregate::{Business, BusinessForm};
use contracts::shared::upload::IMAGE_RULE;
use leptos::prelude::*;

use crate::shared::components::ui::{FileInput, Input};
use crate::shared::dialog::component::{use_entity_form, EntityDialogFrame};
use crate::shared::dialog::{DialogMode, PayloadEncoding};

#[component]
pub fn BusinessDialog(
    mode: DialogMode<Business>,
    on_close: Callback<()>,
    fetch_data: Callback<()>,
) -> impl IntoView {
    let current_logo = match &mode {
        DialogMode::Edit(business) => business.logo.clone(),
        DialogMode::Create => None,
    };
    let form = use_entity_form::<Business, BusinessForm>(mode, PayloadEncoding::Multipart, on_close, fetch_data);

    let (name, set_name) = form.text(|d| &d.name, |d, v| d.name = v);
    let (name_ru, set_name_ru) = form.text(|d| &d.name_ru, |d, v| d.name_ru = v);
    let (address, set_address) = form.text(|d| &d.address, |d, v| d.address = v);
    let (phone, set_phone) = form.text(|d| &d.phone, |d, v| d.phone = v);

    view! {
        <EntityDialogFrame
            title=if form.is_edit() { "Редактирование заведения" } else { "Новое заведение" }
            submitting=form.submitting()
            on_close=on_close
            on_save=Callback::new(move |_| form.save())
        >
            <Input label="Название" value=name on_input=set_name error=form.error("name") required=true />
            <Input label="Название (рус.)" value=name_ru on_input=set_name_ru error=form.error("name_ru") />
            <Input
                label="Адрес"
                value=address
                on_input=set_address
                error=form.error("address")
                required=true
            />
            <Input
                label="Телефон"
                input_type="tel"
                placeholder="+7 700 000 00 00"
                value=phone
                on_input=set_phone
                error=form.error("phone")
            />
            <FileInput
                label="Логотип"
                rule=IMAGE_RULE
                current=current_logo
                on_pick=Callback::new(move |file: Option<web_sys::File>| form.pick_file("logo", IMAGE_RULE, file))
                error=form.error("logo")
                disabled=form.submitting()
            />
        </EntityDialogFrame>
    }
}
