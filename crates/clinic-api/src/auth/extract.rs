//! Axum용 인증 추출기.
//!
//! Bearer 토큰을 검증하고 저장소에서 신원을 조회하는 추출기.
//! 토큰이 유효하지 않거나 subject에 해당하는 사용자가 더 이상
//! 존재하지 않으면 동일하게 401로 처리되며, 실패 원인은
//! 구분되지 않습니다.

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use clinic_core::{Identity, Role};

use super::decode_token;
use crate::error::ApiError;
use crate::repository::UserRepository;
use crate::state::AppState;

/// 인증된 현재 사용자 추출기.
///
/// # 사용 예시
///
/// ```rust,ignore
/// async fn protected_handler(
///     CurrentUser(identity): CurrentUser,
/// ) -> impl IntoResponse {
///     format!("Authenticated: {}", identity.email())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

impl<S> FromRequestParts<S> for CurrentUser
where
    Arc<AppState>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = Arc::<AppState>::from_ref(state);

        // Authorization 헤더에서 Bearer 토큰 추출
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(ApiError::unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(ApiError::unauthorized)?;

        // 토큰 검증 - 모든 실패는 동일하게 401
        let token_data = decode_token(token, &state.config.auth.jwt_secret)
            .map_err(|_| ApiError::unauthorized())?;

        // subject 이메일로 신원 조회 - 사용자가 사라졌어도 401
        let identity = UserRepository::find_identity_by_email(&state.db_pool, &token_data.claims.sub)
            .await
            .map_err(ApiError::from)?
            .ok_or_else(ApiError::unauthorized)?;

        Ok(CurrentUser(identity))
    }
}

/// 인증된 신원에 허용된 역할 중 하나를 요구합니다.
///
/// 인증이 성공한 다음에만 호출되어야 합니다 (401이 403보다
/// 먼저 보고됨). 실패 시 필요한 역할 목록을 담은 403을
/// 반환합니다.
pub fn require_role(allowed: &[Role], identity: &Identity) -> Result<(), ApiError> {
    identity.require_role(allowed).map_err(ApiError::from)
}

/// Admin 역할을 요구하는 추출기.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Identity);

impl<S> FromRequestParts<S> for AdminUser
where
    Arc<AppState>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentUser(identity) = CurrentUser::from_request_parts(parts, state).await?;
        require_role(&[Role::Admin], &identity)?;
        Ok(AdminUser(identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_core::{ClinicError, UserProfile};

    fn staff(role: Role) -> Identity {
        Identity::Staff {
            user: UserProfile {
                id_utilisateur: 1,
                nom_utilisateur: "test".to_string(),
                email: "test@clinic.tn".to_string(),
            },
            role,
        }
    }

    #[test]
    fn test_require_role_admits_member() {
        assert!(require_role(&[Role::Admin], &staff(Role::Admin)).is_ok());
        assert!(require_role(&[Role::Admin, Role::Doctor], &staff(Role::Doctor)).is_ok());
    }

    #[test]
    fn test_require_role_rejects_non_member() {
        let err = require_role(&[Role::Admin], &staff(Role::Nurse)).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Clinic(ClinicError::Forbidden { .. })
        ));
    }

    #[test]
    fn test_require_role_rejects_patient() {
        let patient = Identity::Patient {
            user: UserProfile {
                id_utilisateur: 2,
                nom_utilisateur: "patient".to_string(),
                email: "patient@clinic.tn".to_string(),
            },
        };

        assert!(require_role(&[Role::Admin, Role::Nurse], &patient).is_err());
    }
}
