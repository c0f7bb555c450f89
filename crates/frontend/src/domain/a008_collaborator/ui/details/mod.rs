use contracts::domain::a001_business::aggregate::Business;
use contracts::domain::a008_collaborator::aggregate::{Collaborator, CollaboratorForm, COLLABORATOR_ROLES};
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Select};
use crate::shared::dialog::component::{use_entity_form, EntityDialogFrame};
use crate::shared::dialog::{DialogMode, PayloadEncoding};
use crate::shared::remote::use_options;

#[component]
pub fn CollaboratorDialog(
    mode: DialogMode<Collaborator>,
    on_close: Callback<()>,
    fetch_data: Callback<()>,
) -> impl IntoView {
    let form = use_entity_form::<Collaborator, CollaboratorForm>(mode, PayloadEncoding::Json, on_close, fetch_data);
    let businesses = use_options::<Business>(|b| b.name.clone());
    let roles: Vec<(String, String)> = COLLABORATOR_ROLES
        .iter()
        .map(|(code, label)| (code.to_string(), label.to_string()))
        .collect();

    let (email, set_email) = form.text(|d| &d.email, |d, v| d.email = v);
    let (business, set_business) = form.text(|d| &d.business, |d, v| d.business = v);
    let (role, set_role) = form.text(|d| &d.role, |d, v| d.role = v);

    view! {
        <EntityDialogFrame
            title=if form.is_edit() { "Редактирование сотрудника" } else { "Новый сотрудник" }
            submitting=form.submitting()
            on_close=on_close
            on_save=Callback::new(move |_| form.save())
        >
            <Input
                label="Email"
                input_type="email"
                value=email
                on_input=set_email
                error=form.error("email")
                required=true
            />
            <Select
                label="Заведение"
                value=business
                on_change=set_business
                options=businesses
                error=form.error("business")
            />
            <Select label="Роль" value=role on_change=set_role options=roles error=form.error("role") />
        </EntityDialogFrame>
    }
}
