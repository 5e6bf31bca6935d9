//! Field-level validation for incoming payloads.
//!
//! Violations surface as [`Error::Validation`] with the offending field
//! name so the caller can show a per-field message.

use crate::cpf;
use crate::prelude::*;

const MIN_PASSWORD_LEN: usize = 6;

pub fn required(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(field, "must not be empty"));
    }
    Ok(())
}

/// Checks the email shape and returns the normalized (lowercase) form,
/// the only form that is ever stored or compared.
pub fn email(value: &str) -> Result<String> {
    let value = value.trim();
    let well_formed = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    };
    if !well_formed {
        return Err(Error::validation("email", "must be a valid email address"));
    }
    Ok(value.to_lowercase())
}

pub fn password(value: &str) -> Result<()> {
    if value.len() < MIN_PASSWORD_LEN {
        return Err(Error::validation(
            "password",
            format!("must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    Ok(())
}

/// Validates a CPF and returns its canonical 11-digit form.
pub fn cpf_field(value: &str) -> Result<String> {
    if !cpf::is_valid(value) {
        return Err(Error::validation("cpf", "must be a valid CPF"));
    }
    Ok(cpf::clean(value))
}
