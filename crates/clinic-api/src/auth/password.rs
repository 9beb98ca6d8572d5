//! 비밀번호 해싱 유틸리티.
//!
//! Argon2id 기반 비밀번호 해싱 및 검증. 평문은 로그에 기록하거나
//! 반환하지 않으며, 비교는 argon2 크레이트의 상수 시간 검증을
//! 사용합니다.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// 비밀번호 처리 에러.
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("비밀번호 해싱 실패")]
    HashingFailed,
    #[error("비밀번호 검증 실패")]
    VerificationFailed,
    #[error("잘못된 해시 형식")]
    InvalidHashFormat,
}

/// 비밀번호 해싱.
///
/// 솔트는 호출마다 새로 생성되며 PHC 형식 문자열에 포함됩니다.
/// 출력 길이는 입력 길이와 무관합니다.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| PasswordError::HashingFailed)?;

    Ok(hash.to_string())
}

/// 비밀번호 검증.
///
/// 저장된 PHC 해시와 입력된 비밀번호를 비교합니다.
/// 일치하면 Ok(()), 불일치하면 Err.
pub fn verify_password(password: &str, hash: &str) -> Result<(), PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHashFormat)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| PasswordError::VerificationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_password() {
        let password = "MotDePasse123!";
        let hash = hash_password(password).unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password(password, &hash).is_ok());
        assert!(verify_password("WrongPassword123!", &hash).is_err());
    }

    #[test]
    fn test_different_salts_different_hashes() {
        let hash1 = hash_password("Password1").unwrap();
        let hash2 = hash_password("Password1").unwrap();

        // 솔트가 다르므로 해시가 다르지만 둘 다 검증 가능
        assert_ne!(hash1, hash2);
        assert!(verify_password("Password1", &hash1).is_ok());
        assert!(verify_password("Password1", &hash2).is_ok());
    }

    #[test]
    fn test_hash_length_independent_of_input() {
        let short = hash_password("ab1").unwrap();
        let long = hash_password(&"x1".repeat(100)).unwrap();
        assert_eq!(short.len(), long.len());
    }

    #[test]
    fn test_invalid_hash_format() {
        let result = verify_password("password", "not-a-valid-hash");
        assert!(matches!(result, Err(PasswordError::InvalidHashFormat)));
    }
}
