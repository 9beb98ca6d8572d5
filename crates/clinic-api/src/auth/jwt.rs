//! JWT 토큰 처리.
//!
//! 액세스 토큰 생성/검증 로직. 토큰은 무상태이며 서버에
//! 저장되지 않습니다. 폐기 목록이 없으므로 비밀번호 변경 후에도
//! 기존 토큰은 자연 만료까지 유효합니다 (문서화된 제한 사항).

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};

/// JWT 액세스 토큰 페이로드.
///
/// subject는 사용자의 이메일입니다. 역할은 토큰에 넣지 않고
/// 매 요청마다 저장소에서 조회합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - 사용자 이메일
    pub sub: String,
    /// Issued At - 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// Expiration - 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// 새로운 Claims 생성.
    ///
    /// # Arguments
    ///
    /// * `subject` - 사용자 이메일
    /// * `expires_in_minutes` - 만료 시간 (분)
    pub fn new(subject: impl Into<String>, expires_in_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(expires_in_minutes)).timestamp(),
        }
    }

    /// 토큰이 만료되었는지 확인.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// JWT 토큰 처리 에러.
///
/// HTTP 경계에서는 모든 변형이 동일하게 401로 수렴하며,
/// 어떤 검사가 실패했는지는 클라이언트에 노출되지 않습니다.
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("토큰 인코딩 실패: {0}")]
    EncodingError(#[from] jsonwebtoken::errors::Error),
    #[error("토큰 디코딩 실패")]
    DecodingError,
    #[error("토큰이 만료되었습니다")]
    TokenExpired,
    #[error("잘못된 토큰 형식")]
    InvalidToken,
}

/// 액세스 토큰 생성 (HS256).
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(JwtError::from)
}

/// JWT 토큰 디코딩 및 검증.
///
/// 서명과 만료를 검증하고, subject가 비어 있으면 실패합니다.
pub fn decode_token(token: &str, secret: &str) -> Result<TokenData<Claims>, JwtError> {
    let mut validation = Validation::default();
    validation.validate_exp = true;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::TokenExpired,
        jsonwebtoken::errors::ErrorKind::InvalidToken => JwtError::InvalidToken,
        _ => JwtError::DecodingError,
    })?;

    if data.claims.sub.is_empty() {
        return Err(JwtError::InvalidToken);
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-key-for-jwt-testing-minimum-32-chars";

    #[test]
    fn test_create_and_decode_token() {
        let claims = Claims::new("user@clinic.tn", 60);

        let token = create_token(&claims, TEST_SECRET).unwrap();
        assert!(!token.is_empty());

        let decoded = decode_token(&token, TEST_SECRET).unwrap();
        assert_eq!(decoded.claims.sub, "user@clinic.tn");
        assert_eq!(decoded.claims.exp, claims.exp);
    }

    #[test]
    fn test_expiration_is_issuance_plus_ttl() {
        let claims = Claims::new("user@clinic.tn", 60);
        assert_eq!(claims.exp - claims.iat, 60 * 60);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_token_rejected() {
        // 발급 시점을 과거로 밀어 leeway(기본 60초)를 넘긴다
        let claims = Claims::new("user@clinic.tn", -5);
        let token = create_token(&claims, TEST_SECRET).unwrap();

        let result = decode_token(&token, TEST_SECRET);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let claims = Claims::new("user@clinic.tn", 60);
        let token = create_token(&claims, TEST_SECRET).unwrap();

        let result = decode_token(&token, "wrong-secret-key-for-testing-minimum-32c");
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_token_rejected() {
        let result = decode_token("invalid.token.here", TEST_SECRET);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_subject_rejected() {
        let claims = Claims::new("", 60);
        let token = create_token(&claims, TEST_SECRET).unwrap();

        let result = decode_token(&token, TEST_SECRET);
        assert!(matches!(result, Err(JwtError::InvalidToken)));
    }
}
