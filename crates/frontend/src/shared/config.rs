//! Runtime configuration of the admin console.
//!
//! The API base can be pinned at build time with `ADMIN_API_BASE`,
//! otherwise it is derived from the current window location (port 3000).

/// Размер страницы на сервере; пагинатор скрыт, пока `count <= PAGE_SIZE`
pub const PAGE_SIZE: u64 = 15;

pub const CSV_TEMPLATE_URL: &str = "/static/templates/menu_items_template.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub page_size: u64,
    pub csv_template_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            page_size: PAGE_SIZE,
            csv_template_url: CSV_TEMPLATE_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_base = resolve_api_base(option_env!("ADMIN_API_BASE"), window_origin());
        log::debug!("API base: {}", api_base);
        Self {
            api_base,
            ..Self::default()
        }
    }
}

/// (protocol, hostname) текущей страницы
fn window_origin() -> Option<(String, String)> {
    let location = web_sys::window()?.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    Some((protocol, hostname))
}

fn resolve_api_base(pinned: Option<&str>, origin: Option<(String, String)>) -> String {
    if let Some(base) = pinned.map(str::trim).filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }
    match origin {
        Some((protocol, hostname)) => format!("{}//{}:3000", protocol, hostname),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_base_wins() {
        let origin = Some(("https:".to_string(), "admin.example.kz".to_string()));
        assert_eq!(
            resolve_api_base(Some("https://api.example.kz/"), origin.clone()),
            "https://api.example.kz"
        );
        assert_eq!(resolve_api_base(Some("  "), origin), "https://admin.example.kz:3000");
    }

    #[test]
    fn test_no_window_gives_relative_base() {
        assert_eq!(resolve_api_base(None, None), "");
        assert_eq!(AppConfig::default().page_size, 15);
    }
}
