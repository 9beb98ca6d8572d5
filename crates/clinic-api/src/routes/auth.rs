//! 인증 endpoint.
//!
//! 로그인 및 토큰 발급을 담당합니다.
//!
//! # 엔드포인트
//!
//! - `POST /login` - 이메일/비밀번호로 액세스 토큰 발급
//!
//! 로그인 실패는 401이 아닌 403으로 보고됩니다. 401은 토큰
//! 오류 전용입니다.

use axum::{extract::State, routing::post, Form, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

use clinic_core::ClinicError;

use crate::auth::{create_token, verify_password, Claims};
use crate::error::ApiResult;
use crate::repository::UserRepository;
use crate::state::AppState;

/// 로그인 폼 (form-encoded).
///
/// OAuth2 password flow 호환을 위해 이메일 필드 이름은
/// `username`입니다.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginForm {
    /// 사용자 이메일
    pub username: String,
    /// 평문 비밀번호
    pub password: String,
}

/// 토큰 발급 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// 서명된 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (항상 "bearer")
    pub token_type: String,
}

/// 로그인 및 토큰 발급.
///
/// 사용자 조회 실패와 비밀번호 불일치는 동일한 메시지로
/// 보고됩니다.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "토큰 발급 성공", body = TokenResponse),
        (status = 403, description = "이메일 또는 비밀번호 불일치")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> ApiResult<Json<TokenResponse>> {
    let user = UserRepository::find_auth_by_email(&state.db_pool, &form.username)
        .await?
        .ok_or(ClinicError::InvalidCredentials)?;

    verify_password(&form.password, &user.mot_de_passe)
        .map_err(|_| ClinicError::InvalidCredentials)?;

    let claims = Claims::new(&user.email, state.config.auth.token_expire_minutes);
    let access_token = create_token(&claims, &state.config.auth.jwt_secret)
        .map_err(|e| ClinicError::Internal(e.to_string()))?;

    info!(email = %user.email, "로그인 성공");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

/// 인증 라우터 생성.
pub fn auth_router() -> Router<Arc<AppState>> {
    Router::new().route("/login", post(login))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_shape() {
        let response = TokenResponse {
            access_token: "abc".to_string(),
            token_type: "bearer".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["token_type"], "bearer");
        assert!(json["access_token"].is_string());
    }

    #[test]
    fn test_login_form_parses_urlencoded() {
        let form: LoginForm =
            serde_urlencoded::from_str("username=a%40b.tn&password=secret123").unwrap();
        assert_eq!(form.username, "a@b.tn");
        assert_eq!(form.password, "secret123");
    }
}
