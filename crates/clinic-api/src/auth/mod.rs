//! 인증 및 권한 부여.
//!
//! JWT 기반 인증 및 역할 기반 접근 제어를 제공합니다.
//!
//! # 구성 요소
//!
//! - [`Claims`]: JWT 페이로드 구조체 (subject = 이메일)
//! - [`CurrentUser`]: Axum 추출기 - 토큰 검증 후 저장소에서 신원 조회
//! - [`AdminUser`]: Admin 역할을 요구하는 추출기
//! - 비밀번호 해싱/검증 함수
//!
//! # 검사 순서
//!
//! 인증(401 계열)이 먼저 평가되고, 그 다음에 인가(403 계열)가
//! 평가됩니다. 토큰이 유효하지 않으면 역할 검사는 실행되지 않습니다.

mod extract;
mod jwt;
mod password;

pub use extract::{require_role, AdminUser, CurrentUser};
pub use jwt::{create_token, decode_token, Claims, JwtError};
pub use password::{hash_password, verify_password, PasswordError};
