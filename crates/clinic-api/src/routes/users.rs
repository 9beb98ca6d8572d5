//! 사용자 계정 endpoint.
//!
//! # 엔드포인트
//!
//! - `POST /users` - 사용자 계정 생성 (비밀번호는 Argon2로 해싱)
//! - `GET /users` - 사용자 목록

use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use clinic_core::ClinicError;

use crate::auth::hash_password;
use crate::error::ApiResult;
use crate::repository::{NewUser, UserRecord, UserRepository};
use crate::state::AppState;

/// 사용자 계정 생성.
///
/// 평문 비밀번호는 저장 전에 해싱되며 응답에 포함되지 않습니다.
pub async fn creer_utilisateur(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewUser>,
) -> ApiResult<Json<UserRecord>> {
    input.validate()?;

    let hashed = hash_password(&input.mot_de_passe)
        .map_err(|e| ClinicError::Internal(e.to_string()))?;

    let record = UserRepository::create(&state.db_pool, &input, &hashed).await?;
    info!(id_utilisateur = record.id_utilisateur, "사용자 생성");

    Ok(Json(record))
}

/// 사용자 목록 조회.
pub async fn lister_utilisateurs(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<UserRecord>>> {
    let records = UserRepository::list(&state.db_pool).await?;
    Ok(Json(records))
}

/// 사용자 라우터 생성.
pub fn users_router() -> Router<Arc<AppState>> {
    Router::new().route("/", post(creer_utilisateur).get(lister_utilisateurs))
}
