use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LoginReq {
    pub email: String,
    pub password: String,
    /// `seller` or `organization`; blank means seller.
    pub user_type: Option<String>,
}

#[derive(Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct RegisterReq {
    pub user_type: Option<String>,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub business_type: String,
    pub description: String,
    pub agree_terms: bool,
    pub agree_privacy: bool,
    pub agree_marketing: bool,
}
