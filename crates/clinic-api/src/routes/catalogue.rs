//! 카탈로그 및 가격 endpoint.
//!
//! 의료 행위, 카탈로그, 가격 항목 관리를 위한 REST API를
//! 제공합니다.
//!
//! # 엔드포인트
//!
//! - `POST /catalogue/actes` - 의료 행위 생성 (Admin 전용)
//! - `GET /catalogue/actes` - 의료 행위 목록
//! - `POST /catalogue` - 카탈로그 생성
//! - `GET /catalogue` - 카탈로그 목록
//! - `POST /catalogue/tarifer` - 가격 항목 생성
//! - `GET /catalogue/prix` - 가격 항목 목록

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::auth::AdminUser;
use crate::error::{ApiError, ApiResult};
use crate::repository::{
    ActeRecord, CatalogueRecord, CatalogueRepository, NewActe, NewCatalogue, NewTarif, TarifRecord,
};
use crate::state::AppState;

/// 의료 행위 생성 (Admin 전용).
///
/// 인증(401)이 인가(403)보다 먼저 평가됩니다 - `AdminUser`
/// 추출기가 토큰 검증 후 역할을 검사합니다.
pub async fn creer_acte(
    AdminUser(identity): AdminUser,
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewActe>,
) -> ApiResult<Json<ActeRecord>> {
    input.validate()?;

    let record = CatalogueRepository::create_acte(&state.db_pool, &input).await?;
    info!(
        id_acte = record.id_acte,
        par = %identity.email(),
        "의료 행위 생성"
    );

    Ok(Json(record))
}

/// 의료 행위 목록 조회.
pub async fn lister_actes(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ActeRecord>>> {
    let records = CatalogueRepository::list_actes(&state.db_pool).await?;
    Ok(Json(records))
}

/// 카탈로그 생성.
pub async fn creer_catalogue(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewCatalogue>,
) -> ApiResult<Json<CatalogueRecord>> {
    input.validate()?;

    let record = CatalogueRepository::create_catalogue(&state.db_pool, &input).await?;
    Ok(Json(record))
}

/// 카탈로그 목록 조회.
pub async fn lister_catalogues(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CatalogueRecord>>> {
    let records = CatalogueRepository::list_catalogues(&state.db_pool).await?;
    Ok(Json(records))
}

/// 가격 항목 생성.
///
/// 이 엔드포인트에는 역할 제한이 없습니다. 음수 가격만
/// 거부합니다.
#[utoipa::path(
    post,
    path = "/catalogue/tarifer",
    request_body = NewTarif,
    responses(
        (status = 200, description = "가격 항목 생성 성공", body = TarifRecord),
        (status = 422, description = "음수 가격")
    ),
    tag = "catalogue"
)]
pub async fn fixer_prix(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewTarif>,
) -> ApiResult<Json<TarifRecord>> {
    input
        .validate_price()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let record = CatalogueRepository::create_tarif(&state.db_pool, &input).await?;
    info!(
        id_acte = record.id_acte,
        id_catalogue = record.id_catalogue,
        prix = %record.prix,
        "가격 항목 생성"
    );

    Ok(Json(record))
}

/// 가격 항목 목록 조회.
pub async fn lister_prix(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<TarifRecord>>> {
    let records = CatalogueRepository::list_tarifs(&state.db_pool).await?;
    Ok(Json(records))
}

/// 카탈로그 라우터 생성.
pub fn catalogue_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(creer_catalogue).get(lister_catalogues))
        .route("/actes", post(creer_acte).get(lister_actes))
        .route("/tarifer", post(fixer_prix))
        .route("/prix", get(lister_prix))
}
