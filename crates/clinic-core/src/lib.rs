//! # Clinic Core
//!
//! 클리닉 관리 백엔드의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 백엔드 전반에서 사용되는 기본 타입을 제공합니다:
//! - 사용자 신원 및 역할 정의
//! - 청구 금액 계산기
//! - 설정 관리
//! - 에러 타입
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
