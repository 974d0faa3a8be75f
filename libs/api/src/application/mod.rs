use axum::{
    extract::{Query, State},
    Json,
};
use entity::prelude::*;
use repository::query::{self, Selection};

use crate::{util::response::StatsResp, ApiState};

use self::{
    request::GetApplicationsParam,
    response::{ApplicationResp, GetApplicationsResp},
};

pub mod request;
pub mod response;

/// My applications
#[utoipa::path(
    get,
    path = "/applications",
    params(GetApplicationsParam),
    responses(
        (status = 200, description = "Filtered applications with status counts", body = GetApplicationsResp),
        (status = 303, description = "Not signed in")
    )
)]
pub async fn get_applications(
    State(state): State<ApiState>,
    Query(param): Query<GetApplicationsParam>,
) -> Json<GetApplicationsResp> {
    let selection = Selection::new()
        .search(param.search.unwrap_or_default())
        .status(param.status.unwrap_or_default())
        .category(param.category.unwrap_or_default());

    let applications = state.repo.application.find(&selection).await;
    let total = applications.len();
    let applications = query::paginate(
        applications,
        param.pagination.offset,
        param.pagination.limit,
    );
    let stats = state.repo.application.stats().await;

    Json(GetApplicationsResp {
        applications: applications
            .into_iter()
            .map(ApplicationResp::from)
            .collect(),
        total,
        stats: StatsResp::new(stats, ApplicationStatus::label),
    })
}
