//! 설정 관리.
//!
//! 애플리케이션 설정을 정의하고 TOML 파일 + 환경 변수에서
//! 로드합니다. JWT 비밀 키는 하드코딩하지 않으며, 설정에
//! 없으면 기동에 실패합니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ClinicError, ClinicResult};

/// 애플리케이션 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// 서버 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// 데이터베이스 설정
    #[serde(default)]
    pub database: DatabaseConfig,
    /// 인증 설정
    #[serde(default)]
    pub auth: AuthConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// 데이터베이스 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Postgres 연결 URL
    pub url: String,
    /// 최대 연결 수
    pub max_connections: u32,
    /// 연결 타임아웃 (초)
    pub connection_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost:5432/clinic".to_string(),
            max_connections: 10,
            connection_timeout_secs: 30,
        }
    }
}

/// 인증 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT 서명 비밀 키 (필수, 기본값 없음)
    pub jwt_secret: String,
    /// 액세스 토큰 만료 시간 (분)
    pub token_expire_minutes: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_expire_minutes: 60,
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// 설정 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 우선순위: 기본값 < 파일 < `CLINIC_` 접두사 환경 변수.
    /// 예: `CLINIC_AUTH__JWT_SECRET`, `CLINIC_SERVER__PORT`.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> ClinicResult<Self> {
        let mut builder = config::Config::builder()
            .set_default("server.host", "127.0.0.1")
            .map_err(config_err)?
            .set_default("server.port", 3000)
            .map_err(config_err)?
            .set_default("database.url", "postgres://localhost:5432/clinic")
            .map_err(config_err)?
            .set_default("database.max_connections", 10)
            .map_err(config_err)?
            .set_default("database.connection_timeout_secs", 30)
            .map_err(config_err)?
            .set_default("auth.jwt_secret", "")
            .map_err(config_err)?
            .set_default("auth.token_expire_minutes", 60)
            .map_err(config_err)?
            .set_default("logging.level", "info")
            .map_err(config_err)?
            .set_default("logging.format", "pretty")
            .map_err(config_err)?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path.as_ref()));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix("CLINIC")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        let config: Self = settings.try_deserialize().map_err(config_err)?;
        config.validate()?;
        Ok(config)
    }

    /// 기본 경로(`config/default.toml`)가 있으면 함께 로드합니다.
    pub fn load_default() -> ClinicResult<Self> {
        let default_path = Path::new("config/default.toml");
        if default_path.exists() {
            Self::load(Some(default_path))
        } else {
            Self::load(None::<&Path>)
        }
    }

    /// 필수 설정값 검증.
    fn validate(&self) -> ClinicResult<()> {
        if self.auth.jwt_secret.is_empty() {
            return Err(ClinicError::Config(
                "auth.jwt_secret이 설정되지 않았습니다 (CLINIC_AUTH__JWT_SECRET)".to_string(),
            ));
        }
        if self.auth.token_expire_minutes <= 0 {
            return Err(ClinicError::Config(
                "auth.token_expire_minutes는 양수여야 합니다".to_string(),
            ));
        }
        Ok(())
    }
}

fn config_err(e: config::ConfigError) -> ClinicError {
    ClinicError::Config(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let server = ServerConfig::default();
        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 3000);

        let auth = AuthConfig::default();
        assert_eq!(auth.token_expire_minutes, 60);
        assert!(auth.jwt_secret.is_empty());
    }

    #[test]
    fn test_validate_rejects_missing_secret() {
        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::default(),
        };

        assert!(matches!(
            config.validate(),
            Err(ClinicError::Config(_))
        ));
    }

    #[test]
    fn test_validate_accepts_configured_secret() {
        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig {
                jwt_secret: "a-sufficiently-long-test-secret".to_string(),
                token_expire_minutes: 60,
            },
            logging: LoggingConfig::default(),
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [database]
            url = "postgres://db:5432/clinic"
            max_connections = 5
            connection_timeout_secs = 10

            [auth]
            jwt_secret = "file-provided-secret"
            token_expire_minutes = 30

            [logging]
            level = "debug"
            format = "json"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.auth.token_expire_minutes, 30);
        assert_eq!(config.logging.format, "json");
        assert!(config.validate().is_ok());
    }
}
