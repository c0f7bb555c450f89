use contracts::domain::a005_menu_type::aggregate::{MenuType, MenuTypeForm};
use leptos::prelude::*;

use crate::shared::components::ui::Input;
use crate::shared::dialog::component::{use_entity_form, EntityDialogFrame};
use crate::shared::dialog::{DialogMode, PayloadEncoding};

#[component]
pub fn MenuTypeDialog(
    mode: DialogMode<MenuType>,
    on_close: Callback<()>,
    fetch_data: Callback<()>,
) -> impl IntoView {
    let form = use_entity_form::<MenuType, MenuTypeForm>(mode, PayloadEncoding::Json, on_close, fetch_data);
    let (name, set_name) = form.text(|d| &d.name, |d, v| d.name = v);
    let (name_ru, set_name_ru) = form.text(|d| &d.name_ru, |d, v| d.name_ru = v);

    view! {
        <EntityDialogFrame
            title=if form.is_edit() { "Редактирование раздела меню" } else { "Новый раздел меню" }
            submitting=form.submitting()
            on_close=on_close
            on_save=Callback::new(move |_| form.save())
        >
            <Input label="Название" value=name on_input=set_name error=form.error("name") required=true />
            <Input label="Название (рус.)" value=name_ru on_input=set_name_ru error=form.error("name_ru") />
        </EntityDialogFrame>
    }
}
