use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::util::request::Pagination;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetPostsParam {
    pub search: Option<String>,
    pub category: Option<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreatePostReq {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: String,
}
