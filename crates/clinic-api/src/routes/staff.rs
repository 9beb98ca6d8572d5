//! 직원 endpoint.
//!
//! # 엔드포인트
//!
//! - `POST /staff` - 직원 생성 (역할 부여)
//! - `GET /staff` - 직원 목록
//! - `POST /staff/medecins` - 의사 생성
//! - `GET /staff/medecins` - 의사 목록

use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;
use tracing::info;

use crate::error::ApiResult;
use crate::repository::{
    EmployeeRecord, MedecinRecord, NewEmployee, NewMedecin, StaffRepository,
};
use crate::state::AppState;

/// 직원 생성.
pub async fn creer_employe(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewEmployee>,
) -> ApiResult<Json<EmployeeRecord>> {
    let record = StaffRepository::create_employee(&state.db_pool, &input).await?;
    info!(
        id_employer = record.id_employer,
        role = %record.role,
        "직원 생성"
    );

    Ok(Json(record))
}

/// 직원 목록 조회.
pub async fn lister_employes(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<EmployeeRecord>>> {
    let records = StaffRepository::list_employees(&state.db_pool).await?;
    Ok(Json(records))
}

/// 의사 생성.
pub async fn creer_medecin(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewMedecin>,
) -> ApiResult<Json<MedecinRecord>> {
    let record = StaffRepository::create_medecin(&state.db_pool, &input).await?;
    Ok(Json(record))
}

/// 의사 목록 조회.
pub async fn lister_medecins(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<MedecinRecord>>> {
    let records = StaffRepository::list_medecins(&state.db_pool).await?;
    Ok(Json(records))
}

/// 직원 라우터 생성.
pub fn staff_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(creer_employe).get(lister_employes))
        .route("/medecins", post(creer_medecin).get(lister_medecins))
}
