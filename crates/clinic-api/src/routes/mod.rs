//! API 라우트.
//!
//! 모든 REST API 엔드포인트를 정의하고 라우터를 구성합니다.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness/readiness)
//! - `/login` - 인증 및 토큰 발급
//! - `/users` - 사용자 계정
//! - `/patients` - 환자
//! - `/staff` - 직원 및 의사
//! - `/rdv` - 예약
//! - `/visites` - 방문
//! - `/catalogue` - 의료 행위, 카탈로그, 가격
//! - `/factures` - 청구
//! - `/dossiers` - 의료 기록 (진료 기록부, 처방전, 약품)

pub mod auth;
pub mod catalogue;
pub mod dossiers;
pub mod factures;
pub mod health;
pub mod patients;
pub mod rdv;
pub mod staff;
pub mod users;
pub mod visites;

pub use auth::{auth_router, LoginForm, TokenResponse};
pub use catalogue::catalogue_router;
pub use dossiers::dossiers_router;
pub use factures::factures_router;
pub use health::{health_router, HealthResponse};
pub use patients::patients_router;
pub use rdv::rdv_router;
pub use staff::staff_router;
pub use users::users_router;
pub use visites::visites_router;

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
///
/// 모든 서브 라우터를 조합하여 하나의 라우터로 반환합니다.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        // 헬스 체크 엔드포인트
        .nest("/health", health_router())
        // 인증 (POST /login)
        .merge(auth_router())
        // 리소스 엔드포인트
        .nest("/users", users_router())
        .nest("/patients", patients_router())
        .nest("/staff", staff_router())
        .nest("/rdv", rdv_router())
        .nest("/visites", visites_router())
        .nest("/catalogue", catalogue_router())
        .nest("/factures", factures_router())
        .nest("/dossiers", dossiers_router())
}
