//! Password hashing and verification
//!
//! Configured users carry Argon2id PHC strings; these helpers produce and check them.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a PHC hash
///
/// # Errors
/// Returns an error if the hash is not a valid PHC string
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = parse_hash(hash)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Check that a stored hash is a well-formed PHC string
///
/// # Errors
/// Returns `AppError::Config` describing the parse failure
pub fn check_hash_format(hash: &str) -> Result<(), AppError> {
    parse_hash(hash)
        .map(|_| ())
        .map_err(|e| AppError::Config(e.to_string()))
}

fn parse_hash(hash: &str) -> Result<PasswordHash<'_>, AppError> {
    PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password() {
        let password = "SecurePassword123!";
        let hash = hash_password(password).unwrap();

        assert!(hash.starts_with("$argon2"));
        // Fresh salt per call
        let hash2 = hash_password(password).unwrap();
        assert_ne!(hash, hash2);
    }

    #[test]
    fn test_verify_password_success() {
        let hash = hash_password("test").unwrap();
        assert!(verify_password("test", &hash).unwrap());
    }

    #[test]
    fn test_verify_password_failure() {
        let hash = hash_password("test").unwrap();
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_verify_password_malformed_hash() {
        assert!(verify_password("test", "not-a-hash").is_err());
    }

    #[test]
    fn test_check_hash_format() {
        let hash = hash_password("test").unwrap();
        assert!(check_hash_format(&hash).is_ok());

        let err = check_hash_format("plaintext").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
