use contracts::domain::a010_dispute::aggregate::{Dispute, DisputeReplyForm};
use leptos::prelude::*;

use crate::shared::components::ui::{Checkbox, Textarea};
use crate::shared::dialog::component::{use_entity_form, EntityDialogFrame};
use crate::shared::dialog::{DialogMode, PayloadEncoding};

/// Ответ на обращение; показывает исходное сообщение над формой
#[component]
pub fn DisputeReplyDialog(
    mode: DialogMode<Dispute>,
    on_close: Callback<()>,
    fetch_data: Callback<()>,
) -> impl IntoView {
    let (subject, message) = match &mode {
        DialogMode::Edit(dispute) => (dispute.subject.clone(), dispute.message.clone()),
        DialogMode::Create => (String::new(), String::new()),
    };
    let form = use_entity_form::<Dispute, DisputeReplyForm>(mode, PayloadEncoding::Json, on_close, fetch_data);
    let (reply, set_reply) = form.text(|d| &d.reply, |d, v| d.reply = v);
    let (is_resolved, set_is_resolved) = form.flag(|d| d.is_resolved, |d, v| d.is_resolved = v);

    view! {
        <EntityDialogFrame
            title=format!("Обращение: {}", subject)
            submitting=form.submitting()
            on_close=on_close
            on_save=Callback::new(move |_| form.save())
            save_label="Отправить ответ"
        >
            <blockquote class="dispute__message">{message}</blockquote>
            <Textarea label="Ответ" value=reply on_input=set_reply error=form.error("reply") rows=5 />
            <Checkbox label="Вопрос решён" checked=is_resolved on_change=set_is_resolved />
        </EntityDialogFrame>
    }
}
