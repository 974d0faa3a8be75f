use serde::Deserialize;
use utoipa::IntoParams;

use crate::util::request::Pagination;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetApplicationsParam {
    pub search: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}
