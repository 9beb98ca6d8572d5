//! Patient Repository
//!
//! 환자 관련 데이터베이스 연산을 담당합니다.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use utoipa::ToSchema;

// ================================================================================================
// Types
// ================================================================================================

/// 환자 레코드.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PatientRecord {
    pub id_patient: i32,
    pub id_utilisateur: i32,
    /// 주치의 (의사 ID)
    #[sqlx(default)]
    pub medecin_traitant: Option<i32>,
    /// 의료 보험
    #[sqlx(default)]
    pub couverture_medicale: Option<String>,
}

/// 새 환자 입력.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewPatient {
    pub id_utilisateur: i32,
    #[serde(default)]
    pub medecin_traitant: Option<i32>,
    #[serde(default)]
    pub couverture_medicale: Option<String>,
}

// ================================================================================================
// Repository
// ================================================================================================

/// Patient Repository
pub struct PatientRepository;

impl PatientRepository {
    /// 환자 생성.
    pub async fn create(pool: &PgPool, input: &NewPatient) -> Result<PatientRecord, sqlx::Error> {
        sqlx::query_as::<_, PatientRecord>(
            r#"
            INSERT INTO patient (id_utilisateur, medecin_traitant, couverture_medicale)
            VALUES ($1, $2, $3)
            RETURNING id_patient, id_utilisateur, medecin_traitant, couverture_medicale
            "#,
        )
        .bind(input.id_utilisateur)
        .bind(input.medecin_traitant)
        .bind(&input.couverture_medicale)
        .fetch_one(pool)
        .await
    }

    /// 모든 환자 조회.
    pub async fn list(pool: &PgPool) -> Result<Vec<PatientRecord>, sqlx::Error> {
        sqlx::query_as::<_, PatientRecord>(
            r#"
            SELECT id_patient, id_utilisateur, medecin_traitant, couverture_medicale
            FROM patient
            ORDER BY id_patient
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// 환자 상세 조회.
    pub async fn find_by_id(
        pool: &PgPool,
        id_patient: i32,
    ) -> Result<Option<PatientRecord>, sqlx::Error> {
        sqlx::query_as::<_, PatientRecord>(
            r#"
            SELECT id_patient, id_utilisateur, medecin_traitant, couverture_medicale
            FROM patient
            WHERE id_patient = $1
            "#,
        )
        .bind(id_patient)
        .fetch_optional(pool)
        .await
    }
}
