//! 역할 기반 접근 제어 (RBAC).
//!
//! 직원 역할 정의. 역할은 직원 레코드에만 부여되며,
//! 환자 계정은 어떤 역할도 갖지 않습니다.

use serde::{Deserialize, Serialize};

/// 직원 역할.
///
/// 와이어 표현은 PascalCase 문자열입니다 (예: "Admin", "Nurse").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub enum Role {
    /// 관리자 - 카탈로그 및 직원 관리 권한
    Admin,
    /// 의사
    Doctor,
    /// 간호사
    Nurse,
    /// 접수원
    Receptionist,
}

impl Role {
    /// 역할의 와이어 문자열 반환.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Doctor => "Doctor",
            Role::Nurse => "Nurse",
            Role::Receptionist => "Receptionist",
        }
    }

    /// 문자열에서 역할 파싱 (대소문자 무시).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "doctor" => Some(Role::Doctor),
            "nurse" => Some(Role::Nurse),
            "receptionist" => Some(Role::Receptionist),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("Nurse"), Some(Role::Nurse));
        assert_eq!(Role::parse("unknown"), None);
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"Admin\"");

        let parsed: Role = serde_json::from_str("\"Nurse\"").unwrap();
        assert_eq!(parsed, Role::Nurse);
    }

    #[test]
    fn test_display_matches_wire_string() {
        assert_eq!(Role::Receptionist.to_string(), "Receptionist");
        assert_eq!(Role::Doctor.as_str(), "Doctor");
    }
}
