//! API 에러 응답 타입.
//!
//! 도메인 에러를 HTTP 상태 코드와 일관된 JSON 바디로 매핑합니다.
//!
//! # 상태 코드 매핑
//!
//! - `InvalidCredentials` → 403 (401은 토큰 오류 전용)
//! - `Unauthorized` → 401 + `WWW-Authenticate: Bearer` 헤더
//! - `Forbidden` → 403 (필요 역할 목록 포함)
//! - `NoPriceDefined` / `NotFound` → 404
//! - 요청 검증 실패 → 422
//! - 서버 에러 → 500 (상세는 로그에만 기록)

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use clinic_core::ClinicError;

/// API 에러 응답 바디.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorBody {
    /// 에러 코드 (예: "UNAUTHORIZED", "NO_PRICE_DEFINED")
    pub code: String,
    /// 사람이 읽을 수 있는 에러 메시지
    pub message: String,
}

/// API 에러.
///
/// 핸들러에서 `?`로 전파되며 `IntoResponse`로 HTTP 응답이 됩니다.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 도메인 에러
    #[error(transparent)]
    Clinic(#[from] ClinicError),

    /// 요청 바디 검증 실패
    #[error("요청 검증 실패: {0}")]
    Validation(String),
}

impl ApiError {
    /// 인증 실패 (401).
    pub fn unauthorized() -> Self {
        Self::Clinic(ClinicError::Unauthorized)
    }

    /// 조회 실패 (404).
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::Clinic(ClinicError::NotFound(what.into()))
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Clinic(e) => match e {
                ClinicError::InvalidCredentials => (StatusCode::FORBIDDEN, "INVALID_CREDENTIALS"),
                ClinicError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
                ClinicError::Forbidden { .. } => (StatusCode::FORBIDDEN, "FORBIDDEN"),
                ClinicError::NoPriceDefined => (StatusCode::NOT_FOUND, "NO_PRICE_DEFINED"),
                ClinicError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                ClinicError::Config(_) | ClinicError::Database(_) | ClinicError::Internal(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
                }
            },
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        Self::Clinic(ClinicError::Database(e.to_string()))
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(e: validator::ValidationErrors) -> Self {
        Self::Validation(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // 서버 에러 상세는 클라이언트에 노출하지 않음
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "내부 에러");
            "내부 서버 에러".to_string()
        } else {
            self.to_string()
        };

        let body = Json(ApiErrorBody {
            code: code.to_string(),
            message,
        });

        // 인증 실패는 WWW-Authenticate 헤더를 동반해야 함
        if status == StatusCode::UNAUTHORIZED {
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

/// API 핸들러 Result 타입 별칭.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_core::Role;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::Clinic(ClinicError::InvalidCredentials),
                StatusCode::FORBIDDEN,
            ),
            (
                ApiError::Clinic(ClinicError::Unauthorized),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::Clinic(ClinicError::forbidden(&[Role::Admin])),
                StatusCode::FORBIDDEN,
            ),
            (
                ApiError::Clinic(ClinicError::NoPriceDefined),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::Clinic(ClinicError::NotFound("facture".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::Clinic(ClinicError::Database("down".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::Validation("bad input".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_unauthorized_carries_www_authenticate() {
        let response = ApiError::unauthorized().into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response
                .headers()
                .get(header::WWW_AUTHENTICATE)
                .and_then(|v| v.to_str().ok()),
            Some("Bearer")
        );
    }

    #[test]
    fn test_forbidden_has_no_www_authenticate() {
        let response = ApiError::Clinic(ClinicError::forbidden(&[Role::Admin])).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }
}
