use serde::Serialize;
use utoipa::ToSchema;

use crate::user::response::SessionResp;

#[derive(Serialize, ToSchema)]
pub struct ViewResp {
    pub path: String,
    pub name: String,
    /// Anonymous visitors are sent to `/login` instead.
    pub protected: bool,
}

#[derive(Serialize, ToSchema)]
pub struct HomeResp {
    pub session: SessionResp,
    pub views: Vec<ViewResp>,
    pub active_opportunities: usize,
    pub questions: usize,
    pub posts: usize,
}
