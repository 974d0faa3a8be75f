use axum::{extract::State, Extension, Json};
use entity::prelude::*;
use repository::query::Selection;

use crate::{user::response::SessionResp, ApiState};

use self::response::{HomeResp, ViewResp};

pub mod response;

const VIEWS: &[(&str, &str, bool)] = &[
    ("/opportunities", "팝업 기회", false),
    ("/qna", "Q&A", false),
    ("/community", "커뮤니티", false),
    ("/applications", "신청 현황", true),
    ("/seller", "셀러 대시보드", true),
    ("/organization", "기관 대시보드", true),
];

/// Home
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Views and headline counts", body = HomeResp)
    )
)]
pub async fn get_home(
    Extension(session): Extension<Session>,
    State(state): State<ApiState>,
) -> Json<HomeResp> {
    let active = Selection::new().status(OpportunityStatus::Active.as_ref());
    let active_opportunities = state.repo.opportunity.find(&active).await.len();

    Json(HomeResp {
        session: SessionResp::from(session),
        views: VIEWS
            .iter()
            .map(|(path, name, protected)| ViewResp {
                path: path.to_string(),
                name: name.to_string(),
                protected: *protected,
            })
            .collect(),
        active_opportunities,
        questions: state.repo.question.len().await,
        posts: state.repo.post.len().await,
    })
}
