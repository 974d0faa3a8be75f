use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};
use utoipa::{IntoParams, ToSchema};

/// `?limit=&offset=` over a view's list. Both are optional.
#[serde_as]
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub limit: Option<usize>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub offset: Option<usize>,
}
