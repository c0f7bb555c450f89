//! Хук формы диалога и общая рамка (заголовок, ошибки, Отмена/Сохранить).

use contracts::domain::common::Resource;
use contracts::shared::api::ApiError;
use contracts::shared::form::{FieldErrors, FormDraft};
use contracts::shared::upload::UploadRule;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::{finish_submit, submit_draft, DialogMode, DialogState, PayloadEncoding, SubmitOutcome, SubmitSink};
use crate::shared::api::http::HttpTransport;
use crate::shared::api::FormPart;
use crate::shared::modal::Modal;
use crate::shared::toast::{use_toast, ToastService};

/// Состояние одной открытой формы.
///
/// `files` живут в локальном сигнале: `web_sys::File` не `Send`.
pub struct EntityForm<R: Resource, D: FormDraft<Entity = R>> {
    pub draft: RwSignal<D>,
    pub state: RwSignal<DialogState<R>>,
    pub files: RwSignal<Vec<FormPart>, LocalStorage>,
    pub upload_errors: RwSignal<FieldErrors>,
    encoding: PayloadEncoding,
    transport: StoredValue<HttpTransport>,
    toast: ToastService,
    on_close: Callback<()>,
    fetch_data: Callback<()>,
}

impl<R: Resource, D: FormDraft<Entity = R>> Clone for EntityForm<R, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource, D: FormDraft<Entity = R>> Copy for EntityForm<R, D> {}

pub fn use_entity_form<R, D>(
    mode: DialogMode<R>,
    encoding: PayloadEncoding,
    on_close: Callback<()>,
    fetch_data: Callback<()>,
) -> EntityForm<R, D>
where
    R: Resource,
    D: FormDraft<Entity = R>,
{
    let initial = match &mode {
        DialogMode::Create => D::default(),
        DialogMode::Edit(entity) => D::from_entity(entity),
    };
    let transport = use_context::<HttpTransport>().expect("HttpTransport not found in context");

    EntityForm {
        draft: RwSignal::new(initial),
        state: RwSignal::new(DialogState::open(mode)),
        files: RwSignal::new_local(Vec::new()),
        upload_errors: RwSignal::new(FieldErrors::new()),
        encoding,
        transport: StoredValue::new(transport),
        toast: use_toast(),
        on_close,
        fetch_data,
    }
}

impl<R: Resource, D: FormDraft<Entity = R>> EntityForm<R, D> {
    pub fn is_edit(&self) -> bool {
        self.state
            .with_untracked(|s| s.mode().map(DialogMode::is_edit).unwrap_or(false))
    }

    pub fn submitting(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(DialogState::is_submitting))
    }

    /// Ошибка поля: сначала проверка файла, потом валидация формы
    pub fn error(&self, field: &'static str) -> Signal<Option<String>> {
        let state = self.state;
        let uploads = self.upload_errors;
        Signal::derive(move || {
            uploads
                .with(|u| u.get(field).map(str::to_string))
                .or_else(|| state.with(|s| s.errors().get(field).map(str::to_string)))
        })
    }

    /// Двусторонняя привязка текстового поля черновика
    pub fn text(&self, get: fn(&D) -> &String, set: fn(&mut D, String)) -> (Signal<String>, Callback<String>) {
        let draft = self.draft;
        (
            Signal::derive(move || draft.with(|d| get(d).clone())),
            Callback::new(move |value: String| draft.update(|d| set(d, value))),
        )
    }

    pub fn flag(&self, get: fn(&D) -> bool, set: fn(&mut D, bool)) -> (Signal<bool>, Callback<bool>) {
        let draft = self.draft;
        (
            Signal::derive(move || draft.with(get)),
            Callback::new(move |value: bool| draft.update(|d| set(d, value))),
        )
    }

    pub fn save(&self) {
        if self.state.with_untracked(DialogState::is_submitting) {
            return;
        }
        if !self.upload_errors.with_untracked(FieldErrors::is_empty) {
            self.toast.error("Исправьте ошибки в файлах");
            return;
        }

        self.state.update(|s| {
            let current = std::mem::replace(s, DialogState::Closed);
            *s = current.submit();
        });
        let Some(mode) = self.state.with_untracked(|s| s.mode().cloned()) else {
            return;
        };

        let this = *self;
        let draft = self.draft.get_untracked();
        let files = self.files.get_untracked();
        let transport = self.transport.get_value();
        spawn_local(async move {
            let result = submit_draft(&transport, &mode, &draft, files, this.encoding).await;

            this.state.try_update(|s| {
                let current = std::mem::replace(s, DialogState::Closed);
                *s = current.settle(&result);
            });

            match &result {
                Ok(_) | Err(ApiError::Validation(_)) => {}
                Err(e) => log::error!("{}: save failed: {}", R::ENDPOINT, e),
            }
            finish_submit(&this, mode.is_edit(), &result);
        });
    }

    /// Выбор файла: проверка размера и типа до отправки
    pub fn pick_file(&self, field: &'static str, rule: UploadRule, file: Option<web_sys::File>) {
        self.files.update(|parts| parts.retain(|p| p.name != field));
        self.upload_errors.update(|e| e.remove(field));

        let Some(file) = file else {
            return;
        };
        match rule.check(&file.name(), file.size() as u64, &file.type_()) {
            Ok(()) => self.files.update(|parts| parts.push(FormPart::file(field, file))),
            Err(e) => self.upload_errors.update(|errors| errors.insert(field, e.to_string())),
        }
    }
}

impl<R: Resource, D: FormDraft<Entity = R>> SubmitSink for EntityForm<R, D> {
    fn notify(&self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Saved { .. } => {
                log::debug!("{}: saved", R::ENDPOINT);
                if let Some(notice) = outcome.notice() {
                    self.toast.success(notice);
                }
            }
            SubmitOutcome::Invalid => {}
            SubmitOutcome::Failed(message) => self.toast.error(message.clone()),
        }
    }

    fn reset(&self) {
        self.draft.try_set(D::default());
        self.files.try_set(Vec::new());
    }

    fn close(&self) {
        self.on_close.run(());
    }

    fn refetch(&self) {
        self.fetch_data.run(());
    }
}

/// Рамка диалога сущности
#[component]
pub fn EntityDialogFrame(
    #[prop(into)] title: String,
    #[prop(into)] submitting: Signal<bool>,
    on_close: Callback<()>,
    on_save: Callback<()>,
    #[prop(optional, into)] save_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let save_label = save_label.unwrap_or_else(|| "Сохранить".to_string());

    view! {
        <Modal title=title on_close=on_close>
            <div class="form">
                {children()}
                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=submitting
                    >
                        "Отмена"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_save.run(())
                        disabled=submitting
                    >
                        {move || if submitting.get() { "Сохранение...".to_string() } else { save_label.clone() }}
                    </Button>
                </div>
            </div>
        </Modal>
    }
}
