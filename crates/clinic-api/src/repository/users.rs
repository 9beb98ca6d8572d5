//! User Repository
//!
//! 사용자 계정 관련 데이터베이스 연산을 담당합니다.
//! 인증 경로의 신원 조회(utilisateur + employer 조인)도 여기서
//! 처리합니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use utoipa::ToSchema;
use validator::Validate;

use clinic_core::{ClinicError, ClinicResult, Identity, Role, UserProfile};

// ================================================================================================
// Types
// ================================================================================================

/// 사용자 계정 레코드.
///
/// 비밀번호 해시는 응답에 직렬화되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserRecord {
    pub id_utilisateur: i32,
    pub nom_utilisateur: String,
    pub email: String,
    pub numero_tl: i64,
    pub adresse: String,
    pub genre: String,
    pub date_de_naissance: NaiveDate,
}

/// 새 사용자 계정 입력.
///
/// 비밀번호는 저장 전에 해싱됩니다.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewUser {
    pub nom_utilisateur: String,
    #[validate(email(message = "유효한 이메일이 아닙니다"))]
    pub email: String,
    pub numero_tl: i64,
    pub adresse: String,
    pub genre: String,
    pub date_de_naissance: NaiveDate,
    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub mot_de_passe: String,
}

/// 인증 경로용 사용자 행 (utilisateur LEFT JOIN employer).
#[derive(Debug, Clone, FromRow)]
pub struct UserAuthRecord {
    pub id_utilisateur: i32,
    pub nom_utilisateur: String,
    pub email: String,
    /// Argon2 PHC 형식 해시
    pub mot_de_passe: String,
    /// 직원 역할 (직원 레코드가 없으면 None)
    pub role: Option<String>,
}

impl UserAuthRecord {
    /// 행을 신원 태그 유니온으로 변환합니다.
    ///
    /// 저장된 역할 문자열이 알려진 역할이 아니면 내부 에러입니다
    /// (손상된 데이터를 조용히 환자로 강등하지 않음).
    pub fn into_identity(self) -> ClinicResult<Identity> {
        let user = UserProfile {
            id_utilisateur: self.id_utilisateur,
            nom_utilisateur: self.nom_utilisateur,
            email: self.email,
        };

        match self.role {
            None => Ok(Identity::Patient { user }),
            Some(raw) => {
                let role = Role::parse(&raw).ok_or_else(|| {
                    ClinicError::Internal(format!("알 수 없는 직원 역할: {}", raw))
                })?;
                Ok(Identity::Staff { user, role })
            }
        }
    }
}

// ================================================================================================
// Repository
// ================================================================================================

/// User Repository
pub struct UserRepository;

impl UserRepository {
    /// 이메일로 인증용 사용자 행 조회 (직원 역할 포함).
    pub async fn find_auth_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<UserAuthRecord>, sqlx::Error> {
        let record = sqlx::query_as::<_, UserAuthRecord>(
            r#"
            SELECT u.id_utilisateur, u.nom_utilisateur, u.email, u.mot_de_passe, e.role
            FROM utilisateur u
            LEFT JOIN employer e ON e.id_utilisateur = u.id_utilisateur
            WHERE u.email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// 이메일로 신원 조회.
    ///
    /// 토큰 subject 해석에 사용됩니다. 역할 문자열 파싱 실패는
    /// `Database`가 아닌 `Internal`로 보고됩니다.
    pub async fn find_identity_by_email(
        pool: &PgPool,
        email: &str,
    ) -> ClinicResult<Option<Identity>> {
        let row = Self::find_auth_by_email(pool, email)
            .await
            .map_err(|e| ClinicError::Database(e.to_string()))?;

        row.map(UserAuthRecord::into_identity).transpose()
    }

    /// 사용자 계정 생성.
    ///
    /// `hashed_password`는 이미 해싱된 값이어야 합니다.
    pub async fn create(
        pool: &PgPool,
        input: &NewUser,
        hashed_password: &str,
    ) -> Result<UserRecord, sqlx::Error> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO utilisateur
                (nom_utilisateur, email, numero_tl, adresse, genre, date_de_naissance, mot_de_passe)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id_utilisateur, nom_utilisateur, email, numero_tl, adresse, genre, date_de_naissance
            "#,
        )
        .bind(&input.nom_utilisateur)
        .bind(&input.email)
        .bind(input.numero_tl)
        .bind(&input.adresse)
        .bind(&input.genre)
        .bind(input.date_de_naissance)
        .bind(hashed_password)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// 모든 사용자 조회.
    pub async fn list(pool: &PgPool) -> Result<Vec<UserRecord>, sqlx::Error> {
        let records = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id_utilisateur, nom_utilisateur, email, numero_tl, adresse, genre, date_de_naissance
            FROM utilisateur
            ORDER BY id_utilisateur
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_row(role: Option<&str>) -> UserAuthRecord {
        UserAuthRecord {
            id_utilisateur: 7,
            nom_utilisateur: "amira".to_string(),
            email: "amira@clinic.tn".to_string(),
            mot_de_passe: "$argon2id$...".to_string(),
            role: role.map(String::from),
        }
    }

    #[test]
    fn test_row_without_employer_is_patient() {
        let identity = auth_row(None).into_identity().unwrap();
        assert!(matches!(identity, Identity::Patient { .. }));
        assert_eq!(identity.email(), "amira@clinic.tn");
    }

    #[test]
    fn test_row_with_role_is_staff() {
        let identity = auth_row(Some("Nurse")).into_identity().unwrap();
        assert_eq!(identity.role(), Some(Role::Nurse));
    }

    #[test]
    fn test_unknown_role_is_internal_error() {
        let result = auth_row(Some("Janitor")).into_identity();
        assert!(matches!(result, Err(ClinicError::Internal(_))));
    }

    #[test]
    fn test_new_user_validation() {
        let valid = NewUser {
            nom_utilisateur: "amira".to_string(),
            email: "amira@clinic.tn".to_string(),
            numero_tl: 21612345678,
            adresse: "Tunis".to_string(),
            genre: "F".to_string(),
            date_de_naissance: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
            mot_de_passe: "longenough1".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = NewUser {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_password = NewUser {
            mot_de_passe: "short".to_string(),
            ..valid
        };
        assert!(short_password.validate().is_err());
    }
}
