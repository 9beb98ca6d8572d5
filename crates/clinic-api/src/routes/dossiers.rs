//! 의료 기록 endpoint.
//!
//! # 엔드포인트
//!
//! - `POST /dossiers` - 진료 기록부 생성
//! - `GET /dossiers/patient/{id_patient}` - 환자의 진료 기록부 조회
//! - `POST /dossiers/ordonnances` - 처방전 생성 (방문에 연결)
//! - `POST /dossiers/ordonnances/{id}/medicaments` - 처방 약품 라인 추가
//! - `POST /dossiers/medicaments` - 약품 생성
//! - `GET /dossiers/medicaments` - 약품 목록

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use crate::repository::{
    DossierRecord, DossierRepository, MedicamentRecord, NewDossier, NewMedicament, NewOrdonnance,
    NewPrescriptionMed, OrdonnanceRecord, PrescriptionMedRecord,
};
use crate::state::AppState;

/// 진료 기록부 생성.
pub async fn creer_dossier(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewDossier>,
) -> ApiResult<Json<DossierRecord>> {
    let record = DossierRepository::create_dossier(&state.db_pool, &input).await?;
    Ok(Json(record))
}

/// 환자의 진료 기록부 조회.
pub async fn obtenir_dossier_patient(
    State(state): State<Arc<AppState>>,
    Path(id_patient): Path<i32>,
) -> ApiResult<Json<DossierRecord>> {
    let record = DossierRepository::find_by_patient(&state.db_pool, id_patient)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("환자 {}의 진료 기록부", id_patient)))?;

    Ok(Json(record))
}

/// 처방전 생성.
pub async fn creer_ordonnance(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewOrdonnance>,
) -> ApiResult<Json<OrdonnanceRecord>> {
    let record = DossierRepository::create_ordonnance(&state.db_pool, &input).await?;
    Ok(Json(record))
}

/// 처방전에 약품 라인 추가.
pub async fn ajouter_prescription_med(
    State(state): State<Arc<AppState>>,
    Path(id_ordonnance): Path<i32>,
    Json(input): Json<NewPrescriptionMed>,
) -> ApiResult<Json<PrescriptionMedRecord>> {
    let record =
        DossierRepository::add_prescription_med(&state.db_pool, id_ordonnance, &input).await?;
    Ok(Json(record))
}

/// 약품 생성.
pub async fn creer_medicament(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewMedicament>,
) -> ApiResult<Json<MedicamentRecord>> {
    let record = DossierRepository::create_medicament(&state.db_pool, &input).await?;
    Ok(Json(record))
}

/// 약품 목록 조회.
pub async fn lister_medicaments(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<MedicamentRecord>>> {
    let records = DossierRepository::list_medicaments(&state.db_pool).await?;
    Ok(Json(records))
}

/// 의료 기록 라우터 생성.
pub fn dossiers_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(creer_dossier))
        .route("/patient/{id_patient}", get(obtenir_dossier_patient))
        .route("/ordonnances", post(creer_ordonnance))
        .route(
            "/ordonnances/{id}/medicaments",
            post(ajouter_prescription_med),
        )
        .route("/medicaments", post(creer_medicament).get(lister_medicaments))
}
