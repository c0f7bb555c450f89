use contracts::domain::a007_user::aggregate::{User, UserForm};
use leptos::prelude::*;

use crate::shared::components::ui::{Checkbox, Input};
use crate::shared::dialog::component::{use_entity_form, EntityDialogFrame};
use crate::shared::dialog::{DialogMode, PayloadEncoding};

#[component]
pub fn UserDialog(mode: DialogMode<User>, on_close: Callback<()>, fetch_data: Callback<()>) -> impl IntoView {
    let email = match &mode {
        DialogMode::Edit(user) => user.email.clone(),
        DialogMode::Create => String::new(),
    };
    let form = use_entity_form::<User, UserForm>(mode, PayloadEncoding::Json, on_close, fetch_data);
    let (full_name, set_full_name) = form.text(|d| &d.full_name, |d, v| d.full_name = v);
    let (phone, set_phone) = form.text(|d| &d.phone, |d, v| d.phone = v);
    let (is_active, set_is_active) = form.flag(|d| d.is_active, |d, v| d.is_active = v);

    view! {
        <EntityDialogFrame
            title=format!("Пользователь {}", email)
            submitting=form.submitting()
            on_close=on_close
            on_save=Callback::new(move |_| form.save())
        >
            <Input label="Имя" value=full_name on_input=set_full_name error=form.error("full_name") />
            <Input label="Телефон" input_type="tel" value=phone on_input=set_phone error=form.error("phone") />
            <Checkbox label="Активен" checked=is_active on_change=set_is_active />
        </EntityDialogFrame>
    }
}
