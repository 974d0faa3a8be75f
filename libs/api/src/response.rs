use std::{collections::HashMap, fmt::Display, sync::OnceLock};

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::error;

use crate::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, message) = match self {
            ApiError::AuthError(message) => (StatusCode::UNAUTHORIZED, message),
            ApiError::ClientError(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Forbidden(message) => (StatusCode::FORBIDDEN, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };
        (status_code, Json(json!({ "message": message }))).into_response()
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T>;
}

impl<T, E: Display> IntoApiResponse<T> for Result<T, E> {
    /// Every code is a 4xx; the domain message goes back so the form can
    /// show it, and the registered summary goes to the log.
    fn into_response(self, error_code: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!(error_code, summary = summary(error_code), "{}", e);

            match error_code.get(..3) {
                Some("401") => ApiError::AuthError(e.to_string()),
                Some("403") => ApiError::Forbidden(e.to_string()),
                Some("404") => ApiError::NotFound(e.to_string()),
                _ => ApiError::ClientError(e.to_string()),
            }
        })
    }
}

fn error_codes() -> &'static HashMap<String, String> {
    static ERROR_CODES: OnceLock<HashMap<String, String>> = OnceLock::new();
    ERROR_CODES.get_or_init(|| {
        serde_json::from_str(include_str!("error-code.json")).unwrap_or_else(
            |e| {
                error!("malformed error-code.json: {}", e);
                HashMap::new()
            },
        )
    })
}

fn summary(error_code: &str) -> &'static str {
    error_codes()
        .get(error_code)
        .map(String::as_str)
        .unwrap_or("unregistered error code")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_every_code_is_registered() {
        for code in [
            "400-001", "400-002", "400-003", "400-004", "400-005", "400-006",
            "401-001", "403-001", "404-001",
        ] {
            assert!(error_codes().contains_key(code), "{code}");
        }
    }

    #[test]
    fn test_client_error_keeps_message() {
        let result: Result<(), &str> = Err("제안서를 입력해주세요.");

        let Err(ApiError::ClientError(message)) =
            IntoApiResponse::into_response(result, "400-005")
        else {
            panic!("expected a client error");
        };

        assert_eq!(message, "제안서를 입력해주세요.");
    }

    #[test]
    fn test_code_prefix_picks_the_status() {
        let forbidden: Result<(), &str> = Err("셀러 계정만 이용할 수 있습니다.");
        let missing: Result<(), &str> = Err("없음");

        assert!(matches!(
            IntoApiResponse::into_response(forbidden, "403-001"),
            Err(ApiError::Forbidden(_))
        ));
        assert!(matches!(
            IntoApiResponse::into_response(missing, "404-001"),
            Err(ApiError::NotFound(_))
        ));
        assert_eq!(summary("999-999"), "unregistered error code");
    }
}
