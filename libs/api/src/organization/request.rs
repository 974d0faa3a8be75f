use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetDashboardParam {
    /// Matches applicant names and recruitment titles.
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateRecruitmentReq {
    pub title: String,
    pub location: String,
    pub period: String,
    pub deadline: String,
    pub category: String,
    pub description: String,
    /// One item per line.
    pub requirements: String,
    /// One item per line.
    pub benefits: String,
    /// Blank for no cap.
    pub max_applicants: String,
}
