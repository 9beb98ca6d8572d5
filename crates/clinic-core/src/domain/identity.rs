//! 인증된 사용자 신원.
//!
//! 신원은 태그된 유니온으로 표현됩니다: 직원 레코드가 있으면
//! `Staff`, 없으면 `Patient`. 역할 검사는 변형(variant)에 대한
//! 패턴 매칭으로 수행되며, 동적 관계 탐색은 없습니다.

use serde::{Deserialize, Serialize};

use crate::domain::Role;
use crate::error::{ClinicError, ClinicResult};

/// 사용자 계정의 공개 프로필.
///
/// 이메일은 신원을 유일하게 식별합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct UserProfile {
    /// 사용자 ID
    pub id_utilisateur: i32,
    /// 사용자 이름
    pub nom_utilisateur: String,
    /// 이메일 (유일 식별자)
    pub email: String,
}

/// 인증된 신원.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Identity {
    /// 직원 레코드가 없는 일반 사용자 (환자 계정 포함)
    Patient { user: UserProfile },
    /// 직원 레코드가 연결된 사용자
    Staff { user: UserProfile, role: Role },
}

impl Identity {
    /// 신원의 사용자 프로필 반환.
    pub fn user(&self) -> &UserProfile {
        match self {
            Identity::Patient { user } | Identity::Staff { user, .. } => user,
        }
    }

    /// 신원의 이메일 반환.
    pub fn email(&self) -> &str {
        &self.user().email
    }

    /// 직원 역할 반환 (직원이 아니면 None).
    pub fn role(&self) -> Option<Role> {
        match self {
            Identity::Staff { role, .. } => Some(*role),
            Identity::Patient { .. } => None,
        }
    }

    /// 허용된 역할 중 하나를 가지는지 확인합니다.
    ///
    /// `Patient` 변형은 항상 false입니다.
    pub fn has_role_in(&self, allowed: &[Role]) -> bool {
        match self {
            Identity::Staff { role, .. } => allowed.contains(role),
            Identity::Patient { .. } => false,
        }
    }

    /// 허용된 역할을 요구합니다.
    ///
    /// 인증이 끝난 신원에 대해서만 호출되어야 하며,
    /// 실패 시 필요한 역할 목록을 담은 `Forbidden`을 반환합니다.
    pub fn require_role(&self, allowed: &[Role]) -> ClinicResult<()> {
        if self.has_role_in(allowed) {
            Ok(())
        } else {
            Err(ClinicError::forbidden(allowed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(email: &str) -> UserProfile {
        UserProfile {
            id_utilisateur: 1,
            nom_utilisateur: "test".to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_admin_passes_admin_gate() {
        let identity = Identity::Staff {
            user: profile("admin@clinic.tn"),
            role: Role::Admin,
        };

        assert!(identity.require_role(&[Role::Admin]).is_ok());
        // 성공해도 신원은 변하지 않음
        assert_eq!(identity.email(), "admin@clinic.tn");
    }

    #[test]
    fn test_nurse_fails_admin_gate() {
        let identity = Identity::Staff {
            user: profile("nurse@clinic.tn"),
            role: Role::Nurse,
        };

        let err = identity.require_role(&[Role::Admin]).unwrap_err();
        assert!(matches!(
            err,
            ClinicError::Forbidden { ref required } if required == &[Role::Admin]
        ));
    }

    #[test]
    fn test_patient_never_passes_role_gate() {
        let identity = Identity::Patient {
            user: profile("patient@clinic.tn"),
        };

        assert!(!identity.has_role_in(&[
            Role::Admin,
            Role::Doctor,
            Role::Nurse,
            Role::Receptionist
        ]));
    }

    #[test]
    fn test_role_set_membership() {
        let identity = Identity::Staff {
            user: profile("doc@clinic.tn"),
            role: Role::Doctor,
        };

        assert!(identity.has_role_in(&[Role::Admin, Role::Doctor]));
        assert!(!identity.has_role_in(&[Role::Admin, Role::Nurse]));
    }
}
