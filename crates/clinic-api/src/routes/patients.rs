//! 환자 endpoint.
//!
//! # 엔드포인트
//!
//! - `POST /patients` - 환자 생성 (기존 사용자 계정에 연결)
//! - `GET /patients` - 환자 목록
//! - `GET /patients/{id}` - 환자 상세

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use crate::repository::{NewPatient, PatientRecord, PatientRepository};
use crate::state::AppState;

/// 환자 생성.
pub async fn creer_patient(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewPatient>,
) -> ApiResult<Json<PatientRecord>> {
    let record = PatientRepository::create(&state.db_pool, &input).await?;
    Ok(Json(record))
}

/// 환자 목록 조회.
pub async fn lister_patients(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<PatientRecord>>> {
    let records = PatientRepository::list(&state.db_pool).await?;
    Ok(Json(records))
}

/// 환자 상세 조회.
pub async fn obtenir_patient(
    State(state): State<Arc<AppState>>,
    Path(id_patient): Path<i32>,
) -> ApiResult<Json<PatientRecord>> {
    let record = PatientRepository::find_by_id(&state.db_pool, id_patient)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("환자 {}", id_patient)))?;

    Ok(Json(record))
}

/// 환자 라우터 생성.
pub fn patients_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(creer_patient).get(lister_patients))
        .route("/{id}", get(obtenir_patient))
}
