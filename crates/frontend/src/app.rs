use crate::routes::routes::AppRoutes;
use crate::shared::api::http::HttpTransport;
use crate::shared::config::AppConfig;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();

    // Один транспорт и один сервис уведомлений на всё приложение
    provide_context(HttpTransport::new(config.api_base.clone()));
    provide_context(ToastService::new());
    provide_context(config);

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
