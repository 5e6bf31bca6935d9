//! Password hashing and verification using Argon2.

use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{self, PasswordHashString, SaltString},
};
use rand::rngs::OsRng;

use crate::prelude::*;

/// Hashes a password with a fresh random salt.
///
/// Two calls with the same input yield different hash strings; both verify
/// against the original password through [`is_secret_valid`].
pub fn generate_secret_hash(pw: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    Ok(argon2.hash_password(pw.as_bytes(), &salt)?.to_string())
}

/// Verifies a password against a stored hash.
///
/// Salt and parameters are recovered from the hash string; comparison is
/// performed by the argon2 crate in constant time.
pub fn is_secret_valid(pw: &str, hash: &str) -> Result<bool> {
    let hash = PasswordHashString::new(hash)?;

    Ok(Argon2::default()
        .verify_password(pw.as_bytes(), &hash.password_hash())
        .is_ok())
}

impl From<password_hash::Error> for Error {
    fn from(value: password_hash::Error) -> Self {
        Self::PasswordHash(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_round_trip() {
        let hash = generate_secret_hash("user_password_123").unwrap();
        assert!(is_secret_valid("user_password_123", &hash).unwrap());
        assert!(!is_secret_valid("wrong_password", &hash).unwrap());
    }

    #[test]
    fn salting_makes_hashes_non_deterministic() {
        let first = generate_secret_hash("same password").unwrap();
        let second = generate_secret_hash("same password").unwrap();

        assert_ne!(first, second);
        assert!(is_secret_valid("same password", &first).unwrap());
        assert!(is_secret_valid("same password", &second).unwrap());
    }

    #[test]
    fn garbage_stored_hash_is_an_error() {
        assert!(is_secret_valid("pw", "not-a-phc-string").is_err());
    }
}
