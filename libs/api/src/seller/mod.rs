use axum::{
    extract::{Query, State},
    Extension, Json,
};
use entity::{category, prelude::*};
use repository::query::{self, Selection};

use crate::{
    application::response::ApplicationResp,
    auth::signed_in,
    response::ApiResponse,
    user::response::UserResp,
    util::response::{options, StatsResp},
    ApiState,
};

use self::{
    request::GetDashboardParam,
    response::{ListingResp, SellerDashboardResp},
};

pub mod request;
pub mod response;

const RECENT_APPLICATIONS: usize = 3;

/// Seller dashboard
#[utoipa::path(
    get,
    path = "/seller",
    params(GetDashboardParam),
    responses(
        (status = 200, description = "Listings, recent applications and counts", body = SellerDashboardResp),
        (status = 303, description = "Not signed in")
    )
)]
pub async fn get_dashboard(
    Extension(session): Extension<Session>,
    State(state): State<ApiState>,
    Query(param): Query<GetDashboardParam>,
) -> ApiResponse<Json<SellerDashboardResp>> {
    let user = signed_in(&session)?;

    let selection = Selection::new()
        .search(param.search.unwrap_or_default())
        .location(param.location.unwrap_or_default())
        .category(param.category.unwrap_or_default())
        .status(param.status.unwrap_or_default());

    let listings = state.repo.listing.find(&selection).await;
    let total = listings.len();
    let listings =
        query::paginate(listings, param.pagination.offset, param.pagination.limit);
    let recent = state.repo.application.recent(RECENT_APPLICATIONS).await;
    let stats = state.repo.application.stats().await;

    Ok(Json(SellerDashboardResp {
        user: UserResp::from(user),
        listings: listings.into_iter().map(ListingResp::from).collect(),
        total,
        recent_applications: recent
            .into_iter()
            .map(ApplicationResp::from)
            .collect(),
        stats: StatsResp::new(stats, ApplicationStatus::label),
        locations: options(category::LOCATIONS),
        categories: options(category::BUSINESS),
    }))
}
