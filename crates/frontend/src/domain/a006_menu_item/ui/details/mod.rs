use contracts::domain::a001_business::aggregate::Business;
use contracts::domain::a005_menu_type::aggregate::MenuType;
use contracts::domain::a006_menu_item::aggregate::{MenuItem, MenuItemForm};
use contracts::shared::upload::IMAGE_RULE;
use leptos::prelude::*;

use crate::shared::components::ui::{FileInput, Input, Select, Textarea};
use crate::shared::dialog::component::{use_entity_form, EntityDialogFrame};
use crate::shared::dialog::{DialogMode, PayloadEncoding};
use crate::shared::remote::use_options;

#[component]
pub fn MenuItemDialog(
    mode: DialogMode<MenuItem>,
    on_close: Callback<()>,
    fetch_data: Callback<()>,
) -> impl IntoView {
    let current_image = match &mode {
        DialogMode::Edit(item) => item.image.clone(),
        DialogMode::Create => None,
    };
    let form = use_entity_form::<MenuItem, MenuItemForm>(mode, PayloadEncoding::Multipart, on_close, fetch_data);
    let businesses = use_options::<Business>(|b| b.name.clone());
    let menu_types = use_options::<MenuType>(|m| m.name.clone());

    let (business, set_business) = form.text(|d| &d.business, |d, v| d.business = v);
    let (menu_type, set_menu_type) = form.text(|d| &d.menu_type, |d, v| d.menu_type = v);
    let (name, set_name) = form.text(|d| &d.name, |d, v| d.name = v);
    let (description, set_description) = form.text(|d| &d.description, |d, v| d.description = v);
    let (price, set_price) = form.text(|d| &d.price, |d, v| d.price = v);

    view! {
        <EntityDialogFrame
            title=if form.is_edit() { "Редактирование блюда" } else { "Новое блюдо" }
            submitting=form.submitting()
            on_close=on_close
            on_save=Callback::new(move |_| form.save())
        >
            <Select
                label="Заведение"
                value=business
                on_change=set_business
                options=businesses
                error=form.error("business")
            />
            <Select
                label="Раздел меню"
                value=menu_type
                on_change=set_menu_type
                options=menu_types
                placeholder="Без раздела"
            />
            <Input label="Название" value=name on_input=set_name error=form.error("name") required=true />
            <Textarea label="Описание" value=description on_input=set_description rows=3 />
            <Input
                label="Цена"
                input_type="number"
                value=price
                on_input=set_price
                error=form.error("price")
                required=true
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
