use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use entity::{category, prelude::*};
use repository::{
    form::ApplicationForm,
    query::{self, Selection},
    RepositoryError,
};

use crate::{
    application::response::ApplicationResp,
    auth::signed_in,
    response::{ApiResponse, IntoApiResponse},
    util::response::options,
    ApiState,
};

use self::{
    request::{ApplyReq, GetOpportunitiesParam},
    response::{ApplyResp, GetOpportunitiesResp, OpportunityResp},
};

pub mod request;
pub mod response;

/// Browse opportunities
#[utoipa::path(
    get,
    path = "/opportunities",
    params(GetOpportunitiesParam),
    responses(
        (status = 200, description = "Matching opportunities", body = GetOpportunitiesResp)
    )
)]
pub async fn get_opportunities(
    State(state): State<ApiState>,
    Query(param): Query<GetOpportunitiesParam>,
) -> Json<GetOpportunitiesResp> {
    let status = param
        .status
        .unwrap_or_else(|| OpportunityStatus::Active.to_string());
    let selection = Selection::new()
        .search(param.search.unwrap_or_default())
        .category(param.category.unwrap_or_default())
        .status(status);

    let opportunities = state.repo.opportunity.find(&selection).await;
    let total = opportunities.len();
    let opportunities = query::paginate(
        opportunities,
        param.pagination.offset,
        param.pagination.limit,
    );

    Json(GetOpportunitiesResp {
        opportunities: opportunities
            .into_iter()
            .map(OpportunityResp::from)
            .collect(),
        total,
        categories: options(category::OPPORTUNITY),
    })
}

/// Apply to an opportunity
///
/// Sellers only. The opportunity must be active with a free slot.
#[utoipa::path(
    post,
    path = "/opportunities/{id}/apply",
    params(("id" = String, Path, description = "Opportunity id")),
    request_body = ApplyReq,
    responses(
        (status = 200, description = "Application filed", body = ApplyResp),
        (status = 303, description = "Not signed in"),
        (status = 400, description = "Missing proposal, not recruiting or full"),
        (status = 403, description = "Not a seller account"),
        (status = 404, description = "Unknown opportunity")
    )
)]
pub async fn apply(
    Extension(session): Extension<Session>,
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(req): Json<ApplyReq>,
) -> ApiResponse<Json<ApplyResp>> {
    signed_in(&session)?
        .require_type(UserType::Seller)
        .into_response("403-001")?;

    let opportunity = state
        .repo
        .opportunity
        .find_by_id(&id)
        .await
        .ok_or(RepositoryError::NotFound {
            kind: "팝업 기회",
            id,
        })
        .into_response("404-001")?;

    let form = ApplicationForm {
        proposal: req.proposal,
        portfolio: req.portfolio.unwrap_or_default(),
        experience: req.experience.unwrap_or_default(),
    };
    let application = state
        .repo
        .application
        .apply(&opportunity, form)
        .await
        .into_response("400-005")?;

    Ok(Json(ApplyResp {
        message: "신청이 완료되었습니다!".to_string(),
        application: ApplicationResp::from(application),
    }))
}
