//! Dossier Médical Repository
//!
//! 의료 기록(진료 기록부, 처방전, 약품) 관련 데이터베이스
//! 연산을 담당합니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use utoipa::ToSchema;

// ================================================================================================
// Types
// ================================================================================================

/// 진료 기록부 레코드.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DossierRecord {
    pub id_dossier: i32,
    pub id_patient: i32,
    /// 혈액형
    #[sqlx(default)]
    pub groupe_sanguin: Option<String>,
    pub date_creation: NaiveDate,
}

/// 새 진료 기록부 입력.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewDossier {
    pub id_patient: i32,
    #[serde(default)]
    pub groupe_sanguin: Option<String>,
}

/// 처방전 레코드.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct OrdonnanceRecord {
    pub id_ordonnance: i32,
    pub id_visite: i32,
    #[sqlx(default)]
    pub instructions: Option<String>,
}

/// 새 처방전 입력.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewOrdonnance {
    pub id_visite: i32,
    #[serde(default)]
    pub instructions: Option<String>,
}

/// 약품 레코드.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MedicamentRecord {
    pub id_medicament: i32,
    pub nom_medicament: String,
    #[sqlx(default)]
    pub forme: Option<String>,
}

/// 새 약품 입력.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewMedicament {
    pub nom_medicament: String,
    #[serde(default)]
    pub forme: Option<String>,
}

/// 처방 약품 라인 레코드.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PrescriptionMedRecord {
    pub id_ordonnance: i32,
    pub id_medicament: i32,
    /// 복용법
    pub posologie: String,
    /// 복용 기간
    pub duree: String,
}

/// 새 처방 약품 라인 입력.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewPrescriptionMed {
    pub id_medicament: i32,
    pub posologie: String,
    pub duree: String,
}

// ================================================================================================
// Repository
// ================================================================================================

/// Dossier Repository
pub struct DossierRepository;

impl DossierRepository {
    /// 진료 기록부 생성 (생성일은 CURRENT_DATE).
    pub async fn create_dossier(
        pool: &PgPool,
        input: &NewDossier,
    ) -> Result<DossierRecord, sqlx::Error> {
        sqlx::query_as::<_, DossierRecord>(
            r#"
            INSERT INTO dossier_medical (id_patient, groupe_sanguin, date_creation)
            VALUES ($1, $2, CURRENT_DATE)
            RETURNING id_dossier, id_patient, groupe_sanguin, date_creation
            "#,
        )
        .bind(input.id_patient)
        .bind(&input.groupe_sanguin)
        .fetch_one(pool)
        .await
    }

    /// 환자의 진료 기록부 조회.
    pub async fn find_by_patient(
        pool: &PgPool,
        id_patient: i32,
    ) -> Result<Option<DossierRecord>, sqlx::Error> {
        sqlx::query_as::<_, DossierRecord>(
            r#"
            SELECT id_dossier, id_patient, groupe_sanguin, date_creation
            FROM dossier_medical
            WHERE id_patient = $1
            "#,
        )
        .bind(id_patient)
        .fetch_optional(pool)
        .await
    }

    /// 처방전 생성.
    pub async fn create_ordonnance(
        pool: &PgPool,
        input: &NewOrdonnance,
    ) -> Result<OrdonnanceRecord, sqlx::Error> {
        sqlx::query_as::<_, OrdonnanceRecord>(
            r#"
            INSERT INTO ordonnance (id_visite, instructions)
            VALUES ($1, $2)
            RETURNING id_ordonnance, id_visite, instructions
            "#,
        )
        .bind(input.id_visite)
        .bind(&input.instructions)
        .fetch_one(pool)
        .await
    }

    /// 처방전에 약품 라인 추가.
    pub async fn add_prescription_med(
        pool: &PgPool,
        id_ordonnance: i32,
        input: &NewPrescriptionMed,
    ) -> Result<PrescriptionMedRecord, sqlx::Error> {
        sqlx::query_as::<_, PrescriptionMedRecord>(
            r#"
            INSERT INTO prescription_medicament (id_ordonnance, id_medicament, posologie, duree)
            VALUES ($1, $2, $3, $4)
            RETURNING id_ordonnance, id_medicament, posologie, duree
            "#,
        )
        .bind(id_ordonnance)
        .bind(input.id_medicament)
        .bind(&input.posologie)
        .bind(&input.duree)
        .fetch_one(pool)
        .await
    }

    /// 약품 생성.
    pub async fn create_medicament(
        pool: &PgPool,
        input: &NewMedicament,
    ) -> Result<MedicamentRecord, sqlx::Error> {
        sqlx::query_as::<_, MedicamentRecord>(
            r#"
            INSERT INTO medicament (nom_medicament, forme)
            VALUES ($1, $2)
            RETURNING id_medicament, nom_medicament, forme
            "#,
        )
        .bind(&input.nom_medicament)
        .bind(&input.forme)
        .fetch_one(pool)
        .await
    }

    /// 모든 약품 조회.
    pub async fn list_medicaments(pool: &PgPool) -> Result<Vec<MedicamentRecord>, sqlx::Error> {
        sqlx::query_as::<_, MedicamentRecord>(
            "SELECT id_medicament, nom_medicament, forme FROM medicament ORDER BY id_medicament",
        )
        .fetch_all(pool)
        .await
    }
}
