//! Диалог создания/редактирования записи.
//!
//! Переходы: `Closed → Open → Submitting → Closed` при успехе, либо обратно в
//! `Open` с ошибками полей (валидация) или без них (ошибка сервера, toast).

pub mod component;

use contracts::domain::common::Resource;
use contracts::shared::api::ApiError;
use contracts::shared::form::{changed_fields, full_fields, FieldErrors, FormDraft};
use serde_json::{Map, Value};

use crate::shared::api::{ApiTransport, FormPart, Payload};
use crate::shared::mutations;

/// Режим диалога: без записи — создание, с записью — редактирование
#[derive(Debug, Clone, PartialEq)]
pub enum DialogMode<E> {
    Create,
    Edit(E),
}

impl<E> DialogMode<E> {
    pub fn is_edit(&self) -> bool {
        matches!(self, DialogMode::Edit(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogState<E> {
    Closed,
    Open { mode: DialogMode<E>, errors: FieldErrors },
    Submitting { mode: DialogMode<E> },
}

impl<E: Clone> DialogState<E> {
    pub fn open(mode: DialogMode<E>) -> Self {
        DialogState::Open {
            mode,
            errors: FieldErrors::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, DialogState::Submitting { .. })
    }

    pub fn mode(&self) -> Option<&DialogMode<E>> {
        match self {
            DialogState::Closed => None,
            DialogState::Open { mode, .. } | DialogState::Submitting { mode } => Some(mode),
        }
    }

    pub fn errors(&self) -> FieldErrors {
        match self {
            DialogState::Open { errors, .. } => errors.clone(),
            _ => FieldErrors::new(),
        }
    }

    /// Повторная отправка во время `Submitting` игнорируется
    pub fn submit(self) -> Self {
        match self {
            DialogState::Open { mode, .. } => DialogState::Submitting { mode },
            other => other,
        }
    }

    pub fn settle<T>(self, outcome: &Result<T, ApiError>) -> Self {
        let DialogState::Submitting { mode } = self else {
            return self;
        };
        match outcome {
            Ok(_) => DialogState::Closed,
            Err(ApiError::Validation(errors)) => DialogState::Open {
                mode,
                errors: errors.clone(),
            },
            Err(_) => DialogState::open(mode),
        }
    }
}

/// Итог отправки формы для пользователя
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved { edit: bool },
    /// Ошибки уже показаны у полей
    Invalid,
    Failed(String),
}

impl SubmitOutcome {
    pub fn of<T>(is_edit: bool, result: &Result<T, ApiError>) -> Self {
        match result {
            Ok(_) => SubmitOutcome::Saved { edit: is_edit },
            Err(ApiError::Validation(_)) => SubmitOutcome::Invalid,
            Err(e) => SubmitOutcome::Failed(e.user_message()),
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Saved { edit: true } => Some("Изменения сохранены"),
            SubmitOutcome::Saved { edit: false } => Some("Запись создана"),
            _ => None,
        }
    }
}

/// Получатель последствий отправки: уведомления, форма, диалог, список
pub trait SubmitSink {
    fn notify(&self, outcome: &SubmitOutcome);
    fn reset(&self);
    fn close(&self);
    fn refetch(&self);
}

/// Завершить отправку: уведомить, а при успехе сбросить форму,
/// закрыть диалог и только потом перезагрузить список.
pub fn finish_submit<T>(sink: &impl SubmitSink, is_edit: bool, result: &Result<T, ApiError>) -> SubmitOutcome {
    let outcome = SubmitOutcome::of(is_edit, result);
    sink.notify(&outcome);
    if let SubmitOutcome::Saved { .. } = outcome {
        sink.reset();
        sink.close();
        sink.refetch();
    }
    outcome
}

/// Как кодировать тело запроса
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadEncoding {
    Json,
    /// Для форм с файлами
    Multipart,
}

fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

fn encode(fields: Map<String, Value>, files: Vec<FormPart>, encoding: PayloadEncoding) -> Payload {
    match encoding {
        PayloadEncoding::Json => Payload::Json(Value::Object(fields)),
        PayloadEncoding::Multipart => {
            let mut parts: Vec<FormPart> = Vec::with_capacity(fields.len() + files.len());
            for (name, value) in fields {
                if let Some(text) = text_value(&value) {
                    parts.push(FormPart::text(name, text));
                }
            }
            parts.extend(files);
            Payload::Multipart(parts)
        }
    }
}

/// Собрать тело запроса.
///
/// Создание отправляет все поля черновика, редактирование только изменённые
/// относительно `D::from_entity(entity)`. `Ok(None)` значит "менять нечего".
pub fn build_payload<D: FormDraft>(
    mode: &DialogMode<D::Entity>,
    draft: &D,
    files: Vec<FormPart>,
    encoding: PayloadEncoding,
) -> Result<Option<Payload>, ApiError> {
    draft.validate().map_err(ApiError::Validation)?;

    let fields = match mode {
        DialogMode::Create => full_fields(draft)?,
        DialogMode::Edit(entity) => changed_fields(&D::from_entity(entity), draft)?,
    };
    if mode.is_edit() && fields.is_empty() && files.is_empty() {
        return Ok(None);
    }
    Ok(Some(encode(fields, files, encoding)))
}

/// Валидация, сборка тела и POST/PATCH.
///
/// Редактирование без изменений завершается успехом без запроса.
pub async fn submit_draft<R, D, T>(
    transport: &T,
    mode: &DialogMode<R>,
    draft: &D,
    files: Vec<FormPart>,
    encoding: PayloadEncoding,
) -> Result<Value, ApiError>
where
    R: Resource,
    D: FormDraft<Entity = R>,
    T: ApiTransport,
{
    let Some(payload) = build_payload(mode, draft, files, encoding)? else {
        return Ok(Value::Null);
    };
    match mode {
        DialogMode::Create => mutations::create::<R, T>(transport, payload).await,
        DialogMode::Edit(entity) => mutations::update::<R, T>(transport, entity.id(), payload).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::mock::MockTransport;
    use crate::shared::api::Method;
    use contracts::domain::a002_category::aggregate::{Category, CategoryForm};
    use contracts::domain::a011_ad::aggregate::{Ad, AdForm};
    use contracts::domain::common::EntityBase;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;

    fn sample_ad() -> Ad {
        Ad {
            base: EntityBase::new(9),
            title: "Plov day".into(),
            description: Some("Every Thursday".into()),
            priority: "2".into(),
            link: None,
            image: None,
            is_active: true,
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<String>>,
    }

    impl Recorder {
        fn push(&self, event: impl Into<String>) {
            self.events.borrow_mut().push(event.into());
        }

        fn events(&self) -> Vec<String> {
            self.events.borrow().clone()
        }
    }

    impl SubmitSink for Recorder {
        fn notify(&self, outcome: &SubmitOutcome) {
            match outcome {
                SubmitOutcome::Failed(message) => self.push(format!("error: {}", message)),
                SubmitOutcome::Invalid => self.push("invalid"),
                saved => self.push(format!("success: {}", saved.notice().unwrap_or_default())),
            }
        }

        fn reset(&self) {
            self.push("reset");
        }

        fn close(&self) {
            self.push("close");
        }

        fn refetch(&self) {
            self.push("refetch");
        }
    }

    #[test]
    fn test_create_flow_posts_once_then_closes_and_refetches() {
        let transport = MockTransport::new();
        let recorder = Recorder::default();
        let draft = CategoryForm {
            name: "Desserts".into(),
            name_ru: "Десерты".into(),
        };

        let state = DialogState::<Category>::open(DialogMode::Create).submit();
        assert!(state.is_submitting());

        let mode = state.mode().cloned().unwrap();
        let result = block_on(submit_draft(
            &transport,
            &mode,
            &draft,
            Vec::new(),
            PayloadEncoding::Json,
        ));
        let state = state.settle(&result);
        let outcome = finish_submit(&recorder, mode.is_edit(), &result);

        assert_eq!(transport.count(Method::Post), 1);
        assert_eq!(transport.calls().len(), 1);
        assert_eq!(
            transport.calls()[0].json,
            Some(json!({"name": "Desserts", "name_ru": "Десерты"}))
        );
        assert_eq!(outcome, SubmitOutcome::Saved { edit: false });
        assert_eq!(
            recorder.events(),
            vec!["success: Запись создана", "reset", "close", "refetch"]
        );
        assert_eq!(state, DialogState::Closed);
    }

    #[test]
    fn test_failed_submit_neither_closes_nor_refetches() {
        let recorder = Recorder::default();
        let result: Result<Value, ApiError> = Err(ApiError::Application {
            message: "Duplicate name".into(),
        });
        assert_eq!(
            finish_submit(&recorder, true, &result),
            SubmitOutcome::Failed("Duplicate name".into())
        );
        assert_eq!(recorder.events(), vec!["error: Duplicate name"]);

        let invalid = Recorder::default();
        let result: Result<Value, ApiError> = Err(ApiError::Validation(FieldErrors::new()));
        assert_eq!(finish_submit(&invalid, false, &result), SubmitOutcome::Invalid);
        assert_eq!(invalid.events(), vec!["invalid"]);
    }

    #[test]
    fn test_edit_sends_only_changed_fields() {
        let transport = MockTransport::new();
        let ad = sample_ad();
        let draft = AdForm {
            priority: "3".into(),
            ..AdForm::from_entity(&ad)
        };

        block_on(submit_draft(
            &transport,
            &DialogMode::Edit(ad),
            &draft,
            Vec::new(),
            PayloadEncoding::Json,
        ))
        .unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, Method::Patch);
        assert_eq!(calls[0].path, "/api/ads/9/");
        assert_eq!(calls[0].json, Some(json!({"priority": "3"})));
    }

    #[test]
    fn test_edit_without_changes_skips_request() {
        let transport = MockTransport::new();
        let ad = sample_ad();
        let draft = AdForm::from_entity(&ad);

        let result = block_on(submit_draft(
            &transport,
            &DialogMode::Edit(ad),
            &draft,
            Vec::new(),
            PayloadEncoding::Multipart,
        ));
        assert!(result.is_ok());
        assert!(transport.calls().is_empty());
    }

    #[test]
    fn test_validation_error_keeps_dialog_open_without_request() {
        let transport = MockTransport::new();
        let state = DialogState::<Category>::open(DialogMode::Create).submit();
        let result = block_on(submit_draft(
            &transport,
            &DialogMode::<Category>::Create,
            &CategoryForm::default(),
            Vec::new(),
            PayloadEncoding::Json,
        ));

        let state = state.settle(&result);
        assert!(transport.calls().is_empty());
        assert!(state.is_open());
        assert!(state.errors().get("name").is_some());
    }

    #[test]
    fn test_server_error_keeps_dialog_open() {
        let transport = MockTransport::new().reply(
            Method::Post,
            "/api/categories/",
            Ok(json!({"status": false, "message": "Duplicate name"})),
        );
        let draft = CategoryForm {
            name: "Desserts".into(),
            name_ru: "Десерты".into(),
        };
        let state = DialogState::<Category>::open(DialogMode::Create).submit();
        let result = block_on(submit_draft(
            &transport,
            &DialogMode::<Category>::Create,
            &draft,
            Vec::new(),
            PayloadEncoding::Json,
        ));

        assert_eq!(result.unwrap_err().user_message(), "Duplicate name");
        let state = state.settle(&Err::<(), _>(ApiError::Application {
            message: "Duplicate name".into(),
        }));
        assert_eq!(state, DialogState::open(DialogMode::Create));
    }

    #[test]
    fn test_multipart_encodes_fields_as_text() {
        let draft = AdForm {
            title: "Banner".into(),
            priority: "1".into(),
            is_active: true,
            ..Default::default()
        };
        let payload = build_payload(&DialogMode::<Ad>::Create, &draft, Vec::new(), PayloadEncoding::Multipart)
            .unwrap()
            .unwrap();

        let Payload::Multipart(parts) = payload else {
            panic!("expected multipart");
        };
        let fields: Vec<(String, String)> = parts
            .iter()
            .map(|p| match &p.value {
                crate::shared::api::FormValue::Text(t) => (p.name.clone(), t.clone()),
                crate::shared::api::FormValue::File(_) => unreachable!(),
            })
            .collect();
        assert!(fields.contains(&("is_active".into(), "true".into())));
        assert!(fields.contains(&("priority".into(), "1".into())));
        assert!(fields.contains(&("title".into(), "Banner".into())));
    }
}
