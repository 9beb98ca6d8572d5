//! Catalogue Repository
//!
//! 의료 행위(acte), 카탈로그, 가격(tarif) 관련 데이터베이스
//! 연산을 담당합니다. 청구는 행위당 첫 번째 가격 항목만
//! 참조합니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use utoipa::ToSchema;
use validator::Validate;

// ================================================================================================
// Types
// ================================================================================================

/// 의료 행위 레코드.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ActeRecord {
    pub id_acte: i32,
    pub nom_acte: String,
    pub code_acte: String,
}

/// 새 의료 행위 입력.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewActe {
    #[validate(length(min = 1, message = "행위 이름이 비어 있습니다"))]
    pub nom_acte: String,
    #[validate(length(min = 1, message = "행위 코드가 비어 있습니다"))]
    pub code_acte: String,
}

/// 카탈로그 레코드.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CatalogueRecord {
    pub id_catalogue: i32,
    pub nom_catalogue: String,
    #[sqlx(default)]
    pub description: Option<String>,
}

/// 새 카탈로그 입력.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewCatalogue {
    #[validate(length(min = 1, message = "카탈로그 이름이 비어 있습니다"))]
    pub nom_catalogue: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// 가격 항목 레코드 (행위 × 카탈로그 → 가격).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TarifRecord {
    pub id_tarif: i32,
    pub id_catalogue: i32,
    pub id_acte: i32,
    pub prix: Decimal,
}

/// 새 가격 항목 입력.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewTarif {
    pub id_catalogue: i32,
    pub id_acte: i32,
    pub prix: Decimal,
}

impl NewTarif {
    /// 가격이 음수가 아닌지 검증합니다.
    pub fn validate_price(&self) -> Result<(), &'static str> {
        if self.prix < Decimal::ZERO {
            Err("가격은 음수가 될 수 없습니다")
        } else {
            Ok(())
        }
    }
}

// ================================================================================================
// Repository
// ================================================================================================

/// Catalogue Repository
pub struct CatalogueRepository;

impl CatalogueRepository {
    /// 의료 행위 생성.
    pub async fn create_acte(pool: &PgPool, input: &NewActe) -> Result<ActeRecord, sqlx::Error> {
        let record = sqlx::query_as::<_, ActeRecord>(
            r#"
            INSERT INTO acte_medical (nom_acte, code_acte)
            VALUES ($1, $2)
            RETURNING id_acte, nom_acte, code_acte
            "#,
        )
        .bind(&input.nom_acte)
        .bind(&input.code_acte)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// 모든 의료 행위 조회.
    pub async fn list_actes(pool: &PgPool) -> Result<Vec<ActeRecord>, sqlx::Error> {
        sqlx::query_as::<_, ActeRecord>(
            "SELECT id_acte, nom_acte, code_acte FROM acte_medical ORDER BY id_acte",
        )
        .fetch_all(pool)
        .await
    }

    /// 카탈로그 생성.
    pub async fn create_catalogue(
        pool: &PgPool,
        input: &NewCatalogue,
    ) -> Result<CatalogueRecord, sqlx::Error> {
        let record = sqlx::query_as::<_, CatalogueRecord>(
            r#"
            INSERT INTO catalogue (nom_catalogue, description)
            VALUES ($1, $2)
            RETURNING id_catalogue, nom_catalogue, description
            "#,
        )
        .bind(&input.nom_catalogue)
        .bind(&input.description)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// 모든 카탈로그 조회.
    pub async fn list_catalogues(pool: &PgPool) -> Result<Vec<CatalogueRecord>, sqlx::Error> {
        sqlx::query_as::<_, CatalogueRecord>(
            "SELECT id_catalogue, nom_catalogue, description FROM catalogue ORDER BY id_catalogue",
        )
        .fetch_all(pool)
        .await
    }

    /// 가격 항목 생성.
    pub async fn create_tarif(pool: &PgPool, input: &NewTarif) -> Result<TarifRecord, sqlx::Error> {
        let record = sqlx::query_as::<_, TarifRecord>(
            r#"
            INSERT INTO tarifier (id_catalogue, id_acte, prix)
            VALUES ($1, $2, $3)
            RETURNING id_tarif, id_catalogue, id_acte, prix
            "#,
        )
        .bind(input.id_catalogue)
        .bind(input.id_acte)
        .bind(input.prix)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// 모든 가격 항목 조회.
    pub async fn list_tarifs(pool: &PgPool) -> Result<Vec<TarifRecord>, sqlx::Error> {
        sqlx::query_as::<_, TarifRecord>(
            "SELECT id_tarif, id_catalogue, id_acte, prix FROM tarifier ORDER BY id_tarif",
        )
        .fetch_all(pool)
        .await
    }

    /// 행위의 첫 번째 가격 항목 조회.
    ///
    /// 청구는 (행위, 카탈로그) 중 가장 먼저 등록된 항목을
    /// 사용합니다. 트랜잭션 안에서 호출할 수 있도록 executor를
    /// 받습니다.
    pub async fn find_first_tarif_by_acte<'e, E>(
        executor: E,
        id_acte: i32,
    ) -> Result<Option<TarifRecord>, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        sqlx::query_as::<_, TarifRecord>(
            r#"
            SELECT id_tarif, id_catalogue, id_acte, prix
            FROM tarifier
            WHERE id_acte = $1
            ORDER BY id_tarif
            LIMIT 1
            "#,
        )
        .bind(id_acte)
        .fetch_optional(executor)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tarif_rejects_negative_price() {
        use rust_decimal_macros::dec;

        let tarif = NewTarif {
            id_catalogue: 1,
            id_acte: 1,
            prix: dec!(-10),
        };
        assert!(tarif.validate_price().is_err());

        let free = NewTarif {
            id_catalogue: 1,
            id_acte: 1,
            prix: dec!(0),
        };
        assert!(free.validate_price().is_ok());
    }

    #[test]
    fn test_new_acte_requires_name_and_code() {
        let empty = NewActe {
            nom_acte: String::new(),
            code_acte: "C1".to_string(),
        };
        assert!(empty.validate().is_err());
    }
}
