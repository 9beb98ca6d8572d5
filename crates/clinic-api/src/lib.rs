//! 클리닉 관리 REST API 서버.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - Axum 기반 REST API
//! - JWT 인증 및 역할 기반 접근 제어
//! - 청구 계산 엔드포인트
//! - 헬스 체크 엔드포인트
//! - OpenAPI 문서 (Swagger UI)
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`routes`]: REST API 엔드포인트
//! - [`auth`]: JWT 인증 및 권한 관리
//! - [`repository`]: 데이터베이스 접근 계층
//! - [`error`]: HTTP 에러 매핑
//! - [`openapi`]: OpenAPI 문서 및 Swagger UI

pub mod auth;
pub mod error;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod state;

pub use auth::{hash_password, verify_password, AdminUser, Claims, CurrentUser};
pub use error::{ApiError, ApiErrorBody, ApiResult};
pub use openapi::swagger_ui_router;
pub use routes::create_api_router;
pub use state::AppState;
