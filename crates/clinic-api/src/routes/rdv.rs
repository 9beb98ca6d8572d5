//! 예약(RDV) endpoint.
//!
//! # 엔드포인트
//!
//! - `POST /rdv` - 예약 생성 (기본 상태 "Prévu")
//! - `GET /rdv` - 예약 목록
//! - `GET /rdv/{id}` - 예약 상세

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use crate::repository::{NewRdv, RdvRecord, RdvRepository};
use crate::state::AppState;

/// 예약 생성.
pub async fn creer_rdv(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewRdv>,
) -> ApiResult<Json<RdvRecord>> {
    let record = RdvRepository::create(&state.db_pool, &input).await?;
    Ok(Json(record))
}

/// 예약 목록 조회.
pub async fn lister_rdv(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<RdvRecord>>> {
    let records = RdvRepository::list(&state.db_pool).await?;
    Ok(Json(records))
}

/// 예약 상세 조회.
pub async fn obtenir_rdv(
    State(state): State<Arc<AppState>>,
    Path(id_rdv): Path<i32>,
) -> ApiResult<Json<RdvRecord>> {
    let record = RdvRepository::find_by_id(&state.db_pool, id_rdv)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("예약 {}", id_rdv)))?;

    Ok(Json(record))
}

/// 예약 라우터 생성.
pub fn rdv_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(creer_rdv).get(lister_rdv))
        .route("/{id}", get(obtenir_rdv))
}
