//! Wire types for the `/v1/users` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::secret_hash::generate_secret_hash;
use crate::cpf;
use crate::prelude::*;
use crate::principal::Role;
use crate::store::UserStore;
use crate::validate;

use super::{UserChanges, UserCreate, UserRecord};

/// User as exposed over the API. Built field-by-field from the record, so
/// the password hash structurally cannot end up here.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserApi {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<UserRecord> for UserApi {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            cpf: value.cpf,
            role: value.role,
            created_at: value.created_at,
        }
    }
}

/// Creation payload. Role defaults to `USER` when absent.
#[derive(Debug, Deserialize, Serialize)]
pub struct UserPost {
    pub name: String,
    pub email: String,
    pub password: String,
    pub cpf: String,
    #[serde(default)]
    pub role: Option<Role>,
}

impl TryFrom<UserPost> for UserCreate {
    type Error = Error;

    fn try_from(value: UserPost) -> Result<Self> {
        UserCreate::new(
            value.name,
            value.email,
            &value.password,
            value.cpf,
            value.role.unwrap_or_default(),
        )
    }
}

impl UserPost {
    /// Validates and inserts. The duplicate pre-check here is best-effort;
    /// the store's own constraint is the authoritative guard.
    pub fn persist(self, store: &dyn UserStore) -> Result<UserApi> {
        let create: UserCreate = self.try_into()?;
        if store.find_by_email(&create.email).is_some() {
            return Err(Error::Conflict { field: "email" });
        }
        Ok(store.insert(create)?.into())
    }
}

/// Partial update payload for `PATCH /v1/users/{id}`.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub cpf: Option<String>,
    pub role: Option<Role>,
}

impl UserUpdate {
    pub fn apply(self, id: Uuid, store: &dyn UserStore) -> Result<UserApi> {
        let mut changes = UserChanges {
            role: self.role,
            ..Default::default()
        };

        if let Some(name) = self.name {
            validate::required("name", &name)?;
            changes.name = Some(name);
        }
        if let Some(email) = self.email {
            let email = validate::email(&email)?;
            if store.exists_email_excluding(&email, id) {
                return Err(Error::Conflict { field: "email" });
            }
            changes.email = Some(email);
        }
        if let Some(password) = self.password {
            validate::password(&password)?;
            changes.hash = Some(generate_secret_hash(&password)?);
        }
        if let Some(raw) = self.cpf {
            changes.cpf = Some(validate::cpf_field(&raw)?);
        }

        Ok(store.update(id, changes)?.into())
    }
}

/// Query filters for `GET /v1/users`.
#[derive(Debug, Deserialize, Default)]
pub struct UserFilter {
    /// Substring match on name or email, case-insensitive.
    pub search: Option<String>,
    /// Prefix match on the canonical CPF digits.
    pub cpf: Option<String>,
    pub role: Option<Role>,
}

impl UserFilter {
    pub fn matches(&self, user: &UserRecord) -> bool {
        if let Some(role) = self.role {
            if user.role != role {
                return false;
            }
        }
        if let Some(raw) = &self.cpf {
            if !user.cpf.starts_with(&cpf::clean(raw)) {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !user.name.to_lowercase().contains(&needle) && !user.email.contains(&needle) {
                return false;
            }
        }
        true
    }
}
