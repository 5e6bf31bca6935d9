//! User accounts: the credential records behind authentication.

pub mod api;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::secret_hash::generate_secret_hash;
use crate::prelude::*;
use crate::principal::Role;
use crate::validate;

/// Stored user record. Deliberately not `Serialize`: the hash must never
/// reach a wire format, responses go through [`api::UserApi`].
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    /// Normalized lowercase, unique.
    pub email: String,
    /// Canonical 11-digit CPF, unique.
    pub cpf: String,
    /// Argon2 PHC string. Read only by the credential verifier.
    pub hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Validated, hashed input for inserting a user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub hash: String,
    pub role: Role,
}

impl UserCreate {
    /// Validates the fields, normalizes email and CPF, hashes the password.
    pub fn new(
        name: String,
        email: String,
        password: &str,
        cpf: String,
        role: Role,
    ) -> Result<Self> {
        validate::required("name", &name)?;
        let email = validate::email(&email)?;
        validate::password(password)?;
        let cpf = validate::cpf_field(&cpf)?;
        let hash = generate_secret_hash(password)?;

        Ok(Self {
            name,
            email,
            cpf,
            hash,
            role,
        })
    }
}

/// Partial update applied by the store; absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub cpf: Option<String>,
    pub hash: Option<String>,
    pub role: Option<Role>,
}
