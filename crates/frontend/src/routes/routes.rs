use crate::domain::a001_business::ui::list::BusinessList;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_sub_category::ui::list::SubCategoryList;
use crate::domain::a004_cuisine::ui::list::CuisineList;
use crate::domain::a005_menu_type::ui::list::MenuTypeList;
use crate::domain::a006_menu_item::ui::list::MenuItemList;
use crate::domain::a007_user::ui::list::UserList;
use crate::domain::a008_collaborator::ui::list::CollaboratorList;
use crate::domain::a009_claim::ui::list::ClaimList;
use crate::domain::a010_dispute::ui::list::DisputeList;
use crate::domain::a011_ad::ui::list::AdList;
use crate::domain::a012_reported_review::ui::list::ReportedReviewList;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page-header__title">"Страница не найдена"</h1>
        </div>
    }
}

/// Один маршрут на список каждой сущности
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=BusinessList />
                    <Route path=path!("/businesses") view=BusinessList />
                    <Route path=path!("/categories") view=CategoryList />
                    <Route path=path!("/sub-categories") view=SubCategoryList />
                    <Route path=path!("/cuisines") view=CuisineList />
                    <Route path=path!("/menu-types") view=MenuTypeList />
                    <Route path=path!("/menu-items") view=MenuItemList />
                    <Route path=path!("/users") view=UserList />
                    <Route path=path!("/collaborators") view=CollaboratorList />
                    <Route path=path!("/claims") view=ClaimList />
                    <Route path=path!("/disputes") view=DisputeList />
                    <Route path=path!("/ads") view=AdList />
                    <Route path=path!("/reported-reviews") view=ReportedReviewList />
                </Routes>
            </Shell>
        </Router>
    }
}
