use contracts::domain::a012_reported_review::aggregate::ReportedReview;
use leptos::prelude::*;

use crate::shared::components::filter_panel::FilterSpec;
use crate::shared::components::row_actions::RowAction;
use crate::shared::components::table::{CellValue, Column};
use crate::shared::resource_page::{created_column, ListPageConfig, ResourceListPage};

fn stars(rating: Option<u8>) -> CellValue {
    match rating {
        Some(r) => CellValue::text("★".repeat(r.min(5) as usize)),
        None => CellValue::Empty,
    }
}

pub fn columns() -> Vec<Column<ReportedReview>> {
    vec![
        Column::new("business_name", "Заведение", |r: &ReportedReview| CellValue::opt(r.business_name.as_deref())),
        Column::new("review_text", "Отзыв", |r: &ReportedReview| CellValue::text(&r.review_text)),
        Column::new("rating", "Оценка", |r: &ReportedReview| stars(r.rating)),
        Column::new("reason", "Причина жалобы", |r: &ReportedReview| CellValue::text(&r.reason)),
        Column::new("reporter_email", "Автор жалобы", |r: &ReportedReview| {
            CellValue::opt(r.reporter_email.as_deref())
        }),
        Column::new("is_resolved", "Статус", |r: &ReportedReview| CellValue::Flag {
            value: r.is_resolved,
            on: "Рассмотрено",
            off: "Новая",
        }),
        created_column(),
    ]
}

/// Жалобы на отзывы: "Одобрить" закрывает жалобу, "Удалить" удаляет отзыв
#[component]
pub fn ReportedReviewList() -> impl IntoView {
    let config = ListPageConfig::moderation(
        "a012_reported_review--list",
        columns(),
        vec![RowAction::Approve, RowAction::Delete],
    )
    .with_filters(vec![FilterSpec::resolution()]);

    view! { <ResourceListPage config=config /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_are_capped() {
        assert_eq!(stars(Some(3)).as_text(), "★★★");
        assert_eq!(stars(Some(9)).as_text(), "★★★★★");
        assert_eq!(stars(None), CellValue::Empty);
    }
}
