//! Authentication core: password verification and token issuance.

pub mod auth_body;
pub mod secret_hash;
pub mod token;

use crate::prelude::*;
use crate::principal::Principal;
use crate::store::UserStore;
use secret_hash::is_secret_valid;

pub const CONNECTION_TOKEN_TYPE: &str = "Bearer";

/// Verifies a login attempt against the credential store.
///
/// The email is normalized to lowercase before lookup, and the lookup path
/// is the only one that reads the stored hash. Unknown email and wrong
/// password both surface as [`Error::WrongCredentials`] so callers cannot
/// probe which addresses exist.
pub fn authenticate(store: &dyn UserStore, email: &str, password: &str) -> Result<Principal> {
    if email.is_empty() || password.is_empty() {
        return Err(Error::MissingCredentials);
    }

    let email = email.to_lowercase();
    let Some(record) = store.find_by_email(&email) else {
        return Err(Error::WrongCredentials);
    };

    if !is_secret_valid(password, &record.hash)? {
        return Err(Error::WrongCredentials);
    }

    Ok(Principal {
        id: record.id,
        email: record.email,
        role: record.role,
    })
}
