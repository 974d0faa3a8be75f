use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Extension,
};
use entity::{prelude::*, user::SessionError};

use crate::{
    response::{ApiResponse, IntoApiResponse},
    ApiState,
};

pub const LOGIN_PATH: &str = "/login";

/// Token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Attaches the caller's [`Session`] to every request.
pub async fn resolve_session(
    State(state): State<ApiState>,
    mut req: Request,
    next: Next,
) -> Response {
    let session = match bearer_token(req.headers()) {
        Some(token) => state.sessions.resolve(token).await,
        None => Session::Anonymous,
    };

    req.extensions_mut().insert(session);
    next.run(req).await
}

pub async fn require_login(
    Extension(session): Extension<Session>,
    req: Request,
    next: Next,
) -> Response {
    if !session.is_authenticated() {
        return Redirect::to(LOGIN_PATH).into_response();
    }

    next.run(req).await
}

/// The user behind a view routed through [`require_login`]. Fails only when
/// that layer is missing from the route.
pub(crate) fn signed_in(session: &Session) -> ApiResponse<User> {
    IntoApiResponse::into_response(
        session.user().cloned().ok_or(SessionError::LoginRequired),
        "401-001",
    )
}
