//! 청구 endpoint.
//!
//! 방문한 진료 행위에 대한 청구서 생성/조회를 제공합니다.
//! 청구 금액은 카탈로그 가격의 스냅샷이며, 이후 가격이 바뀌어도
//! 기존 청구서는 재계산되지 않습니다.
//!
//! # 엔드포인트
//!
//! - `POST /factures` - 가격 조회 + 청구 계산 + 저장 (단일 트랜잭션)
//! - `GET /factures/{id_visite}` - 방문의 첫 번째 청구서 조회

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tracing::info;

use clinic_core::{compute_billing, ClinicError};

use crate::error::{ApiError, ApiResult};
use crate::repository::{CatalogueRepository, FactureRecord, FactureRepository, NewFacture};
use crate::state::AppState;

/// 청구서 자동 생성.
///
/// 행위의 첫 번째 가격 항목을 조회하고, 없으면 404
/// (`NO_PRICE_DEFINED`)로 실패합니다. 조회와 저장은 하나의
/// 요청 단위 트랜잭션에서 실행되며, 에러 시 아무 행도 남지
/// 않습니다.
#[utoipa::path(
    post,
    path = "/factures",
    request_body = NewFacture,
    responses(
        (status = 200, description = "청구서 생성 성공", body = FactureRecord),
        (status = 404, description = "행위에 정의된 가격 없음")
    ),
    tag = "factures"
)]
pub async fn creer_facture(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewFacture>,
) -> ApiResult<Json<FactureRecord>> {
    let mut tx = state.db_pool.begin().await.map_err(ApiError::from)?;

    let tarif = CatalogueRepository::find_first_tarif_by_acte(&mut *tx, input.id_acte)
        .await?
        .ok_or(ClinicError::NoPriceDefined)?;

    let billing = compute_billing(tarif.prix, input.avance);

    let record = FactureRepository::insert(&mut *tx, &input, &billing).await?;
    tx.commit().await.map_err(ApiError::from)?;

    info!(
        id_facture = record.id_facture,
        id_visite = record.id_visite,
        montant = %record.montant,
        etat = %record.etat,
        "청구서 생성"
    );

    Ok(Json(record))
}

/// 방문의 청구서 조회.
///
/// 같은 방문에 여러 청구서가 있을 수 있으며, 가장 먼저 생성된
/// 것을 반환합니다.
#[utoipa::path(
    get,
    path = "/factures/{id_visite}",
    params(("id_visite" = i32, Path, description = "방문 ID")),
    responses(
        (status = 200, description = "청구서 조회 성공", body = FactureRecord),
        (status = 404, description = "해당 방문의 청구서 없음")
    ),
    tag = "factures"
)]
pub async fn obtenir_facture_visite(
    State(state): State<Arc<AppState>>,
    Path(id_visite): Path<i32>,
) -> ApiResult<Json<FactureRecord>> {
    let record = FactureRepository::find_first_by_visite(&state.db_pool, id_visite)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("방문 {}의 청구서", id_visite)))?;

    Ok(Json(record))
}

/// 청구 라우터 생성.
pub fn factures_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(creer_facture))
        .route("/{id_visite}", get(obtenir_facture_visite))
}
