//! RDV(예약) Repository
//!
//! 진료 예약 관련 데이터베이스 연산을 담당합니다.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use utoipa::ToSchema;

// ================================================================================================
// Types
// ================================================================================================

/// 예약 레코드.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RdvRecord {
    pub id_rdv: i32,
    pub id_patient: i32,
    pub id_medecin: i32,
    pub date_rdv: NaiveDate,
    pub heure_rdv: NaiveTime,
    pub statut: String,
}

/// 새 예약 입력.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewRdv {
    pub id_patient: i32,
    pub id_medecin: i32,
    pub date_rdv: NaiveDate,
    pub heure_rdv: NaiveTime,
    /// 예약 상태 (기본값 "Prévu")
    #[serde(default = "default_statut")]
    pub statut: String,
}

fn default_statut() -> String {
    "Prévu".to_string()
}

// ================================================================================================
// Repository
// ================================================================================================

/// RDV Repository
pub struct RdvRepository;

impl RdvRepository {
    /// 예약 생성.
    pub async fn create(pool: &PgPool, input: &NewRdv) -> Result<RdvRecord, sqlx::Error> {
        sqlx::query_as::<_, RdvRecord>(
            r#"
            INSERT INTO rdv (id_patient, id_medecin, date_rdv, heure_rdv, statut)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id_rdv, id_patient, id_medecin, date_rdv, heure_rdv, statut
            "#,
        )
        .bind(input.id_patient)
        .bind(input.id_medecin)
        .bind(input.date_rdv)
        .bind(input.heure_rdv)
        .bind(&input.statut)
        .fetch_one(pool)
        .await
    }

    /// 모든 예약 조회.
    pub async fn list(pool: &PgPool) -> Result<Vec<RdvRecord>, sqlx::Error> {
        sqlx::query_as::<_, RdvRecord>(
            r#"
            SELECT id_rdv, id_patient, id_medecin, date_rdv, heure_rdv, statut
            FROM rdv
            ORDER BY date_rdv, heure_rdv
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// 예약 상세 조회.
    pub async fn find_by_id(pool: &PgPool, id_rdv: i32) -> Result<Option<RdvRecord>, sqlx::Error> {
        sqlx::query_as::<_, RdvRecord>(
            r#"
            SELECT id_rdv, id_patient, id_medecin, date_rdv, heure_rdv, statut
            FROM rdv
            WHERE id_rdv = $1
            "#,
        )
        .bind(id_rdv)
        .fetch_optional(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statut_defaults_to_prevu() {
        let input: NewRdv = serde_json::from_str(
            r#"{
                "id_patient": 1,
                "id_medecin": 2,
                "date_rdv": "2026-09-01",
                "heure_rdv": "09:30:00"
            }"#,
        )
        .unwrap();

        assert_eq!(input.statut, "Prévu");
    }
}
