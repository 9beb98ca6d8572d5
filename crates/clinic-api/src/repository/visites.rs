//! Visite Repository
//!
//! 방문(진료) 관련 데이터베이스 연산을 담당합니다.
//! 방문 날짜는 생성 시점의 서버 날짜입니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use utoipa::ToSchema;

// ================================================================================================
// Types
// ================================================================================================

/// 방문 레코드.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct VisiteRecord {
    pub id_visite: i32,
    pub id_rdv: i32,
    pub type_visite: String,
    /// 체중 (kg)
    pub poids: f64,
    /// 체온 (°C)
    pub temperature: f64,
    /// 수축기 혈압
    pub tension_max: f64,
    /// 이완기 혈압
    pub tension_min: f64,
    pub date_visite: NaiveDate,
}

/// 새 방문 입력.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewVisite {
    pub id_rdv: i32,
    pub type_visite: String,
    pub poids: f64,
    pub temperature: f64,
    pub tension_max: f64,
    pub tension_min: f64,
}

// ================================================================================================
// Repository
// ================================================================================================

/// Visite Repository
pub struct VisiteRepository;

impl VisiteRepository {
    /// 방문 생성 (날짜는 CURRENT_DATE).
    pub async fn create(pool: &PgPool, input: &NewVisite) -> Result<VisiteRecord, sqlx::Error> {
        sqlx::query_as::<_, VisiteRecord>(
            r#"
            INSERT INTO visite (id_rdv, type_visite, poids, temperature, tension_max, tension_min, date_visite)
            VALUES ($1, $2, $3, $4, $5, $6, CURRENT_DATE)
            RETURNING id_visite, id_rdv, type_visite, poids, temperature, tension_max, tension_min, date_visite
            "#,
        )
        .bind(input.id_rdv)
        .bind(&input.type_visite)
        .bind(input.poids)
        .bind(input.temperature)
        .bind(input.tension_max)
        .bind(input.tension_min)
        .fetch_one(pool)
        .await
    }

    /// 방문 상세 조회.
    pub async fn find_by_id(
        pool: &PgPool,
        id_visite: i32,
    ) -> Result<Option<VisiteRecord>, sqlx::Error> {
        sqlx::query_as::<_, VisiteRecord>(
            r#"
            SELECT id_visite, id_rdv, type_visite, poids, temperature, tension_max, tension_min, date_visite
            FROM visite
            WHERE id_visite = $1
            "#,
        )
        .bind(id_visite)
        .fetch_optional(pool)
        .await
    }
}
