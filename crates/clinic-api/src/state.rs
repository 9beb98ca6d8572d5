//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! AppState는 Arc로 래핑되어 여러 요청 간에 안전하게 공유됩니다.
//! 요청 간 공유되는 가변 상태는 DB 연결 풀뿐입니다.

use sqlx::PgPool;

use clinic_core::AppConfig;

/// 애플리케이션 공유 상태.
///
/// Axum의 State extractor를 통해 핸들러에 주입됩니다.
#[derive(Clone)]
pub struct AppState {
    /// 데이터베이스 연결 풀 (PostgreSQL)
    pub db_pool: PgPool,

    /// 애플리케이션 설정 (JWT 비밀 키, 토큰 TTL 포함)
    pub config: AppConfig,

    /// 서버 시작 시간 (업타임 계산용)
    pub started_at: chrono::DateTime<chrono::Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 새로운 AppState 생성.
    pub fn new(db_pool: PgPool, config: AppConfig) -> Self {
        Self {
            db_pool,
            config,
            started_at: chrono::Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 데이터베이스 연결 상태 확인.
    pub async fn is_db_healthy(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(&self.db_pool)
            .await
            .is_ok()
    }
}
