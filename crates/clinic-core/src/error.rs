//! 클리닉 백엔드의 에러 타입.
//!
//! 인증/인가 및 청구 로직에서 발생하는 도메인 에러를 정의합니다.
//! HTTP 상태 코드 매핑은 API 크레이트에서 담당합니다.

use thiserror::Error;

use crate::domain::Role;

/// 핵심 도메인 에러.
#[derive(Debug, Error)]
pub enum ClinicError {
    /// 로그인 실패 (이메일 또는 비밀번호 불일치)
    #[error("이메일 또는 비밀번호가 올바르지 않습니다")]
    InvalidCredentials,

    /// 인증 실패 (토큰 누락/만료/위조 또는 사용자 조회 실패)
    ///
    /// 어떤 검사가 실패했는지는 노출하지 않습니다.
    #[error("유효하지 않은 인증 정보입니다")]
    Unauthorized,

    /// 인가 실패 (인증은 되었으나 역할이 부족함)
    ///
    /// 필요한 역할 목록은 민감 정보가 아니므로 메시지에 포함됩니다.
    #[error("필요한 권한이 없습니다 (필요 역할: {})", format_roles(.required))]
    Forbidden {
        /// 접근에 필요한 역할 목록
        required: Vec<Role>,
    },

    /// 카탈로그에 해당 의료 행위의 가격이 없음
    #[error("카탈로그에 이 의료 행위의 가격이 정의되지 않았습니다")]
    NoPriceDefined,

    /// 조회 실패
    #[error("찾을 수 없음: {0}")]
    NotFound(String),

    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 데이터베이스 에러
    #[error("데이터베이스 에러: {0}")]
    Database(String),

    /// 내부 에러
    #[error("내부 에러: {0}")]
    Internal(String),
}

/// 클리닉 작업을 위한 Result 타입.
pub type ClinicResult<T> = Result<T, ClinicError>;

impl ClinicError {
    /// 지정한 역할 목록으로 Forbidden 에러를 생성합니다.
    pub fn forbidden(required: &[Role]) -> Self {
        Self::Forbidden {
            required: required.to_vec(),
        }
    }

    /// 클라이언트 실수로 인한 에러인지 확인합니다.
    ///
    /// 서버 에러(Database, Internal, Config)는 false를 반환합니다.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            Self::Config(_) | Self::Database(_) | Self::Internal(_)
        )
    }
}

fn format_roles(roles: &[Role]) -> String {
    roles
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_message_names_roles() {
        let err = ClinicError::forbidden(&[Role::Admin, Role::Doctor]);
        let msg = err.to_string();
        assert!(msg.contains("Admin"));
        assert!(msg.contains("Doctor"));
    }

    #[test]
    fn test_unauthorized_message_is_generic() {
        // 어떤 검사가 실패했는지 노출되지 않아야 함
        let msg = ClinicError::Unauthorized.to_string();
        assert!(!msg.contains("서명"));
        assert!(!msg.contains("만료"));
    }

    #[test]
    fn test_client_error_classification() {
        assert!(ClinicError::InvalidCredentials.is_client_error());
        assert!(ClinicError::Unauthorized.is_client_error());
        assert!(ClinicError::NoPriceDefined.is_client_error());
        assert!(!ClinicError::Database("down".into()).is_client_error());
        assert!(!ClinicError::Internal("bug".into()).is_client_error());
    }
}
