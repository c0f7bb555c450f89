//! Массовая загрузка меню из CSV.

use contracts::domain::a006_menu_item::aggregate::{MENU_BULK_UPLOAD_FIELD, MENU_BULK_UPLOAD_PATH};
use contracts::shared::upload::CSV_RULE;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api::http::HttpTransport;
use crate::shared::api::FormPart;
use crate::shared::components::ui::FileInput;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::mutations;
use crate::shared::toast::use_toast;

/// Диалог импорта: ссылка на шаблон, выбор файла, загрузка
#[component]
pub fn CsvImportDialog(on_close: Callback<()>, fetch_data: Callback<()>) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let transport = use_context::<HttpTransport>().expect("HttpTransport not found in context");
    let transport = StoredValue::new(transport);
    let toast = use_toast();

    let file = RwSignal::new_local(None::<web_sys::File>);
    let error = RwSignal::new(None::<String>);
    let uploading = RwSignal::new(false);

    let on_pick = Callback::new(move |picked: Option<web_sys::File>| {
        error.set(None);
        file.set(None);
        let Some(picked) = picked else {
            return;
        };
        match CSV_RULE.check(&picked.name(), picked.size() as u64, &picked.type_()) {
            Ok(()) => file.set(Some(picked)),
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    let upload = move |_| {
        let Some(picked) = file.get_untracked() else {
            error.set(Some("Выберите файл".to_string()));
            return;
        };
        uploading.set(true);
        let transport = transport.get_value();
        spawn_local(async move {
            let part = FormPart::file(MENU_BULK_UPLOAD_FIELD, picked);
            let result = mutations::upload(&transport, MENU_BULK_UPLOAD_PATH, part).await;
            uploading.try_set(false);
            match result {
                Ok(_) => {
                    toast.success("Меню загружено");
                    on_close.run(());
                    fetch_data.run(());
                }
                Err(e) => {
                    log::error!("{}: upload failed: {}", MENU_BULK_UPLOAD_PATH, e);
                    toast.error(e.user_message());
                }
            }
        });
    };

    view! {
        <Modal title="Импорт меню из CSV" on_close=on_close>
            <div class="form">
                <p class="form__hint">
                    "Заполните шаблон и загрузите его. "
                    <a class="csv-import__template" href=config.csv_template_url download="">
                        {icon("download")}
                        " Скачать шаблон"
                    </a>
                </p>
                <FileInput
                    label="Файл CSV"
                    rule=CSV_RULE
                    on_pick=on_pick
                    error=error
                    disabled=uploading
                />
                <div class="modal-footer">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Отмена"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=upload disabled=uploading>
                        {icon("upload")}
                        {move || if uploading.get() { " Загрузка..." } else { " Загрузить" }}
                    </Button>
                </div>
            </div>
        </Modal>
    }
}
