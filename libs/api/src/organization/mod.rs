use axum::{
    extract::{Query, State},
    Extension, Json,
};
use entity::{category, prelude::*};
use repository::{form::RecruitmentForm, query::Selection};

use crate::{
    auth::signed_in,
    response::{ApiResponse, IntoApiResponse},
    user::response::UserResp,
    util::response::{options, StatsResp},
    ApiState,
};

use self::{
    request::{CreateRecruitmentReq, GetDashboardParam},
    response::{
        ApplicantResp, CreateRecruitmentResp, OrganizationDashboardResp,
        RecruitmentResp,
    },
};

pub mod request;
pub mod response;

/// Organization dashboard
#[utoipa::path(
    get,
    path = "/organization",
    params(GetDashboardParam),
    responses(
        (status = 200, description = "Recruitments, applicants and counts", body = OrganizationDashboardResp),
        (status = 303, description = "Not signed in")
    )
)]
pub async fn get_dashboard(
    Extension(session): Extension<Session>,
    State(state): State<ApiState>,
    Query(param): Query<GetDashboardParam>,
) -> ApiResponse<Json<OrganizationDashboardResp>> {
    let user = signed_in(&session)?;

    let recruitments = state.repo.recruitment.find(&Selection::new()).await;
    let applicants = state
        .repo
        .applicant
        .find(&Selection::new().search(param.search.unwrap_or_default()))
        .await;

    Ok(Json(OrganizationDashboardResp {
        user: UserResp::from(user),
        recruitments: recruitments
            .into_iter()
            .map(RecruitmentResp::from)
            .collect(),
        applicants: applicants.into_iter().map(ApplicantResp::from).collect(),
        recruitment_stats: StatsResp::new(
            state.repo.recruitment.stats().await,
            RecruitmentStatus::label,
        ),
        applicant_stats: StatsResp::new(
            state.repo.applicant.stats().await,
            ApplicantStatus::label,
        ),
        categories: options(category::BUSINESS),
    }))
}

/// Post a recruitment
#[utoipa::path(
    post,
    path = "/organization/recruitments",
    request_body = CreateRecruitmentReq,
    responses(
        (status = 200, description = "Recruitment created", body = CreateRecruitmentResp),
        (status = 400, description = "Missing field, unknown category or bad number"),
        (status = 303, description = "Not signed in")
    )
)]
pub async fn create_recruitment(
    State(state): State<ApiState>,
    Json(req): Json<CreateRecruitmentReq>,
) -> ApiResponse<Json<CreateRecruitmentResp>> {
    let form = RecruitmentForm {
        title: req.title,
        location: req.location,
        period: req.period,
        deadline: req.deadline,
        category: req.category,
        description: req.description,
        requirements: req.requirements,
        benefits: req.benefits,
        max_applicants: req.max_applicants,
    };
    let recruitment = state
        .repo
        .recruitment
        .create(form)
        .await
        .into_response("400-006")?;

    Ok(Json(CreateRecruitmentResp {
        message: "모집 공고가 등록되었습니다.".to_string(),
        recruitment: RecruitmentResp::from(recruitment),
    }))
}
