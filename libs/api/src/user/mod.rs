use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Extension, Json,
};
use entity::{
    prelude::*,
    user::{Credentials, Registration},
};
use tracing::info;

use crate::{
    auth::{bearer_token, LOGIN_PATH},
    response::{ApiResponse, IntoApiResponse},
    ApiState,
};

use self::{
    request::{LoginReq, RegisterReq},
    response::{LoginResp, RegisterResp, SessionResp, UserResp},
};

pub mod request;
pub mod response;

/// Sign in
///
/// Any non-empty email and password pair is accepted.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginReq,
    responses(
        (status = 200, description = "Signed in", body = LoginResp),
        (status = 400, description = "Missing email or password")
    )
)]
pub async fn login(
    State(state): State<ApiState>,
    Json(req): Json<LoginReq>,
) -> ApiResponse<Json<LoginResp>> {
    let user_type =
        UserType::parse(req.user_type.as_deref()).into_response("400-001")?;
    let user = Credentials {
        email: req.email,
        password: req.password,
        user_type,
    }
    .login()
    .into_response("400-001")?;

    let token = state.sessions.open(user.clone()).await;

    Ok(Json(LoginResp {
        token,
        redirect: user.user_type.landing_path().to_string(),
        user: UserResp::from(user),
    }))
}

/// Sign out
#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 204, description = "Session cleared")
    )
)]
pub async fn logout(
    State(state): State<ApiState>,
    headers: HeaderMap,
) -> StatusCode {
    if let Some(token) = bearer_token(&headers) {
        state.sessions.close(token).await;
    }
    StatusCode::NO_CONTENT
}

/// Register
///
/// Validates the form only. No account is stored.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterReq,
    responses(
        (status = 200, description = "Registration accepted", body = RegisterResp),
        (status = 400, description = "Invalid registration form")
    )
)]
pub async fn register(Json(req): Json<RegisterReq>) -> ApiResponse<Json<RegisterResp>> {
    let user_type =
        UserType::parse(req.user_type.as_deref()).into_response("400-002")?;
    let registration = Registration {
        user_type,
        email: req.email,
        password: req.password,
        confirm_password: req.confirm_password,
        name: req.name,
        phone: req.phone,
        address: req.address,
        business_type: req.business_type,
        description: req.description,
        agree_terms: req.agree_terms,
        agree_privacy: req.agree_privacy,
        agree_marketing: req.agree_marketing,
    };
    registration.validate().into_response("400-002")?;

    info!(
        task = "register",
        user_type = %registration.user_type,
        agree_marketing = registration.agree_marketing,
    );

    Ok(Json(RegisterResp {
        message: "회원가입이 완료되었습니다. 로그인해주세요.".to_string(),
        redirect: LOGIN_PATH.to_string(),
    }))
}

/// Current session
#[utoipa::path(
    get,
    path = "/me",
    responses(
        (status = 200, description = "Who is signed in", body = SessionResp)
    )
)]
pub async fn get_me(Extension(session): Extension<Session>) -> Json<SessionResp> {
    Json(SessionResp::from(session))
}
