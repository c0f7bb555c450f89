use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::a003_sub_category::aggregate::{SubCategory, SubCategoryForm};
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Select};
use crate::shared::dialog::component::{use_entity_form, EntityDialogFrame};
use crate::shared::dialog::{DialogMode, PayloadEncoding};
use crate::shared::remote::use_options;

#[component]
pub fn SubCategoryDialog(
    mode: DialogMode<SubCategory>,
    on_close: Callback<()>,
    fetch_data: Callback<()>,
) -> impl IntoView {
    let form = use_entity_form::<SubCategory, SubCategoryForm>(mode, PayloadEncoding::Json, on_close, fetch_data);
    let categories = use_options::<Category>(|c| c.name.clone());

    let (name, set_name) = form.text(|d| &d.name, |d, v| d.name = v);
    let (name_ru, set_name_ru) = form.text(|d| &d.name_ru, |d, v| d.name_ru = v);
    let (category, set_category) = form.text(|d| &d.category, |d, v| d.category = v);

    view! {
        <EntityDialogFrame
            title=if form.is_edit() { "Редактирование подкатегории" } else { "Новая подкатегория" }
            submitting=form.submitting()
            on_close=on_close
            on_save=Callback::new(move |_| form.save())
        >
            <Select
                label="Категория"
                value=category
                on_change=set_category
                options=categories
                error=form.error("category")
            />
            <Input label="Название" value=name on_input=set_name error=form.error("name") required=true />
            <Input
                label="Название (рус.)"
                value=name_ru
                on_input=set_name_ru
                error=form.error("name_ru")
            />
        </EntityDialogFrame>
    }
}
