use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::util::request::Pagination;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetOpportunitiesParam {
    pub search: Option<String>,
    pub category: Option<String>,
    /// Defaults to `active`; `all` lifts the constraint.
    pub status: Option<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

#[derive(Deserialize, ToSchema)]
pub struct ApplyReq {
    pub proposal: String,
    pub portfolio: Option<String>,
    pub experience: Option<String>,
}
