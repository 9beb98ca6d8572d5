//! Staff Repository
//!
//! 직원 및 의사 관련 데이터베이스 연산을 담당합니다.
//! 역할은 PascalCase 와이어 문자열로 저장됩니다.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use utoipa::ToSchema;

use clinic_core::Role;

// ================================================================================================
// Types
// ================================================================================================

/// 직원 레코드.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EmployeeRecord {
    pub id_employer: i32,
    pub id_utilisateur: i32,
    /// 역할 와이어 문자열 (인증 경로에서 [`Role`]로 파싱됨)
    pub role: String,
    pub salaire: Decimal,
    pub date_embauche: NaiveDate,
    #[sqlx(default)]
    pub statut: Option<String>,
}

/// 새 직원 입력.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewEmployee {
    pub id_utilisateur: i32,
    pub role: Role,
    pub salaire: Decimal,
    pub date_embauche: NaiveDate,
    #[serde(default)]
    pub statut: Option<String>,
}

/// 의사 레코드.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MedecinRecord {
    pub id_medecin: i32,
    pub id_employer: i32,
    pub specialite: String,
    pub grade: String,
}

/// 새 의사 입력.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewMedecin {
    pub id_employer: i32,
    pub specialite: String,
    pub grade: String,
}

// ================================================================================================
// Repository
// ================================================================================================

/// Staff Repository
pub struct StaffRepository;

impl StaffRepository {
    /// 직원 생성.
    pub async fn create_employee(
        pool: &PgPool,
        input: &NewEmployee,
    ) -> Result<EmployeeRecord, sqlx::Error> {
        sqlx::query_as::<_, EmployeeRecord>(
            r#"
            INSERT INTO employer (id_utilisateur, role, salaire, date_embauche, statut)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id_employer, id_utilisateur, role, salaire, date_embauche, statut
            "#,
        )
        .bind(input.id_utilisateur)
        .bind(input.role.as_str())
        .bind(input.salaire)
        .bind(input.date_embauche)
        .bind(&input.statut)
        .fetch_one(pool)
        .await
    }

    /// 모든 직원 조회.
    pub async fn list_employees(pool: &PgPool) -> Result<Vec<EmployeeRecord>, sqlx::Error> {
        sqlx::query_as::<_, EmployeeRecord>(
            r#"
            SELECT id_employer, id_utilisateur, role, salaire, date_embauche, statut
            FROM employer
            ORDER BY id_employer
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// 의사 생성.
    pub async fn create_medecin(
        pool: &PgPool,
        input: &NewMedecin,
    ) -> Result<MedecinRecord, sqlx::Error> {
        sqlx::query_as::<_, MedecinRecord>(
            r#"
            INSERT INTO medecin (id_employer, specialite, grade)
            VALUES ($1, $2, $3)
            RETURNING id_medecin, id_employer, specialite, grade
            "#,
        )
        .bind(input.id_employer)
        .bind(&input.specialite)
        .bind(&input.grade)
        .fetch_one(pool)
        .await
    }

    /// 모든 의사 조회.
    pub async fn list_medecins(pool: &PgPool) -> Result<Vec<MedecinRecord>, sqlx::Error> {
        sqlx::query_as::<_, MedecinRecord>(
            "SELECT id_medecin, id_employer, specialite, grade FROM medecin ORDER BY id_medecin",
        )
        .fetch_all(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_employee_role_uses_wire_string() {
        let input: NewEmployee = serde_json::from_str(
            r#"{
                "id_utilisateur": 3,
                "role": "Nurse",
                "salaire": 1200,
                "date_embauche": "2024-01-15"
            }"#,
        )
        .unwrap();

        assert_eq!(input.role, Role::Nurse);
        assert_eq!(input.role.as_str(), "Nurse");
    }
}
