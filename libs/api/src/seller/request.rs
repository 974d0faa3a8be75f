use serde::Deserialize;
use utoipa::IntoParams;

use crate::util::request::Pagination;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetDashboardParam {
    pub search: Option<String>,
    /// Substring of the listing's address, e.g. `강남`.
    pub location: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}
