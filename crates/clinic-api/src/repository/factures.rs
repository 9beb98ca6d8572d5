//! Facture Repository
//!
//! 청구서 관련 데이터베이스 연산을 담당합니다. 청구서는 생성
//! 시점의 가격 스냅샷이며, 같은 방문에 여러 청구 항목이 존재할
//! 수 있습니다 (유일성 제약 없음).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use utoipa::ToSchema;

use clinic_core::Billing;

// ================================================================================================
// Types
// ================================================================================================

/// 청구서 레코드.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FactureRecord {
    pub id_facture: i32,
    pub id_visite: i32,
    pub id_acte: i32,
    pub date_facture: NaiveDate,
    pub montant: Decimal,
    pub avance: Decimal,
    pub reste: Decimal,
    /// 지불 상태 와이어 문자열 ("Pending" | "Partial" | "Paid")
    pub etat: String,
}

/// 새 청구서 입력 (프론트엔드 최소 입력).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewFacture {
    pub id_visite: i32,
    pub id_acte: i32,
    /// 선금 (기본값 0.0)
    #[serde(default)]
    pub avance: Decimal,
}

// ================================================================================================
// Repository
// ================================================================================================

/// Facture Repository
pub struct FactureRepository;

impl FactureRepository {
    /// 계산된 청구 스냅샷을 저장합니다.
    ///
    /// 가격 조회와 같은 트랜잭션에서 실행되도록 executor를
    /// 받습니다. 날짜는 DB의 CURRENT_DATE를 사용합니다.
    pub async fn insert<'e, E>(
        executor: E,
        input: &NewFacture,
        billing: &Billing,
    ) -> Result<FactureRecord, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        sqlx::query_as::<_, FactureRecord>(
            r#"
            INSERT INTO facture (id_visite, id_acte, date_facture, montant, avance, reste, etat)
            VALUES ($1, $2, CURRENT_DATE, $3, $4, $5, $6)
            RETURNING id_facture, id_visite, id_acte, date_facture, montant, avance, reste, etat
            "#,
        )
        .bind(input.id_visite)
        .bind(input.id_acte)
        .bind(billing.montant)
        .bind(billing.avance)
        .bind(billing.reste)
        .bind(billing.etat.as_str())
        .fetch_one(executor)
        .await
    }

    /// 방문의 첫 번째 청구서 조회.
    pub async fn find_first_by_visite(
        pool: &PgPool,
        id_visite: i32,
    ) -> Result<Option<FactureRecord>, sqlx::Error> {
        sqlx::query_as::<_, FactureRecord>(
            r#"
            SELECT id_facture, id_visite, id_acte, date_facture, montant, avance, reste, etat
            FROM facture
            WHERE id_visite = $1
            ORDER BY id_facture
            LIMIT 1
            "#,
        )
        .bind(id_visite)
        .fetch_optional(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_facture_avance_defaults_to_zero() {
        let input: NewFacture =
            serde_json::from_str(r#"{"id_visite": 3, "id_acte": 9}"#).unwrap();
        assert_eq!(input.avance, Decimal::ZERO);
    }

    #[test]
    fn test_new_facture_with_explicit_avance() {
        let input: NewFacture =
            serde_json::from_str(r#"{"id_visite": 3, "id_acte": 9, "avance": 40}"#).unwrap();
        assert_eq!(input.avance, Decimal::from(40));
    }
}
