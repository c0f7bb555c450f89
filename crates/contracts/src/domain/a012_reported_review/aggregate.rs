use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityBase, Resource};

/// Жалоба на отзыв.
///
/// `approve` оставляет отзыв и закрывает жалобу, удаление убирает отзыв.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportedReview {
    #[serde(flatten)]
    pub base: EntityBase,

    #[serde(default)]
    pub review_text: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub reporter_email: Option<String>,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub is_resolved: bool,
}

impl Resource for ReportedReview {
    const ENDPOINT: &'static str = "/api/reported-reviews/";
    const TITLE: &'static str = "Жалобы на отзывы";

    fn base(&self) -> &EntityBase {
        &self.base
    }
}
