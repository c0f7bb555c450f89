//! Ограничения на загружаемые файлы, проверяются до отправки формы.

use thiserror::Error;

const MB: u64 = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadRule {
    pub max_bytes: u64,
    pub mime_types: &'static [&'static str],
}

/// Логотипы, иконки, изображения блюд и рекламы
pub const IMAGE_RULE: UploadRule = UploadRule {
    max_bytes: 3 * MB,
    mime_types: &["image/jpeg", "image/png", "image/jpg", "image/svg+xml"],
};

/// Массовая загрузка меню
pub const CSV_RULE: UploadRule = UploadRule {
    max_bytes: 10 * MB,
    mime_types: &["text/csv"],
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Файл {file_name} больше {limit_mb} МБ")]
    TooLarge { file_name: String, limit_mb: u64 },

    #[error("Тип файла {file_name} ({mime}) не поддерживается")]
    UnsupportedType { file_name: String, mime: String },
}

impl UploadRule {
    pub fn limit_mb(&self) -> u64 {
        self.max_bytes / MB
    }

    /// Значение атрибута `accept` для `<input type="file">`
    pub fn accept(&self) -> String {
        self.mime_types.join(",")
    }

    pub fn check(&self, file_name: &str, size: u64, mime: &str) -> Result<(), UploadError> {
        if !self.mime_types.iter().any(|allowed| allowed.eq_ignore_ascii_case(mime)) {
            return Err(UploadError::UnsupportedType {
                file_name: file_name.to_string(),
                mime: mime.to_string(),
            });
        }
        if size > self.max_bytes {
            return Err(UploadError::TooLarge {
                file_name: file_name.to_string(),
                limit_mb: self.limit_mb(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_rule() {
        assert!(IMAGE_RULE.check("logo.png", 3 * MB, "image/png").is_ok());
        assert!(IMAGE_RULE.check("logo.svg", 10, "image/svg+xml").is_ok());
        assert_eq!(
            IMAGE_RULE.check("big.jpg", 3 * MB + 1, "image/jpeg"),
            Err(UploadError::TooLarge {
                file_name: "big.jpg".into(),
                limit_mb: 3
            })
        );
        assert!(matches!(
            IMAGE_RULE.check("anim.gif", 10, "image/gif"),
            Err(UploadError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_csv_rule() {
        assert!(CSV_RULE.check("menu.csv", 9 * MB, "text/csv").is_ok());
        assert!(CSV_RULE.check("menu.csv", 11 * MB, "text/csv").is_err());
        assert!(CSV_RULE.check("menu.xlsx", 10, "application/vnd.ms-excel").is_err());
        assert_eq!(CSV_RULE.accept(), "text/csv");
    }
}
