//! 방문 endpoint.
//!
//! # 엔드포인트
//!
//! - `POST /visites` - 방문 생성 (방문일은 서버 날짜)
//! - `GET /visites/{id}` - 방문 상세

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use crate::repository::{NewVisite, VisiteRecord, VisiteRepository};
use crate::state::AppState;

/// 방문 생성.
pub async fn creer_visite(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewVisite>,
) -> ApiResult<Json<VisiteRecord>> {
    let record = VisiteRepository::create(&state.db_pool, &input).await?;
    Ok(Json(record))
}

/// 방문 상세 조회.
pub async fn obtenir_visite(
    State(state): State<Arc<AppState>>,
    Path(id_visite): Path<i32>,
) -> ApiResult<Json<VisiteRecord>> {
    let record = VisiteRepository::find_by_id(&state.db_pool, id_visite)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("방문 {}", id_visite)))?;

    Ok(Json(record))
}

/// 방문 라우터 생성.
pub fn visites_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(creer_visite))
        .route("/{id}", get(obtenir_visite))
}
