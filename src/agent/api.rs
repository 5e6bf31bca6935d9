//! Wire types for the `/v1/agents` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cpf;
use crate::prelude::*;
use crate::principal::Role;
use crate::store::AgentStore;
use crate::validate;

use super::{AgentChanges, AgentCreate, AgentRecord, AgentStatus};

/// Creation payload. Status defaults to `ACTIVE`, role to `USER`.
#[derive(Debug, Deserialize, Serialize)]
pub struct AgentPost {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    #[serde(default)]
    pub status: Option<AgentStatus>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
}

impl TryFrom<AgentPost> for AgentCreate {
    type Error = Error;

    fn try_from(value: AgentPost) -> Result<Self> {
        validate::required("name", &value.name)?;
        validate::required("phone", &value.phone)?;
        validate::required("position", &value.position)?;
        validate::required("department", &value.department)?;
        let email = validate::email(&value.email)?;
        let cpf = validate::cpf_field(&value.cpf)?;

        Ok(Self {
            name: value.name,
            email,
            cpf,
            phone: value.phone,
            position: value.position,
            department: value.department,
            status: value.status.unwrap_or_default(),
            role: value.role.unwrap_or_default(),
            hire_date: value.hire_date,
        })
    }
}

impl AgentPost {
    /// Validates and inserts. The duplicate pre-check here is best-effort;
    /// the store's own constraint is the authoritative guard.
    pub fn persist(self, store: &dyn AgentStore) -> Result<AgentRecord> {
        let create: AgentCreate = self.try_into()?;
        if store.find_by_email(&create.email).is_some() {
            return Err(Error::Conflict { field: "email" });
        }
        store.insert(create)
    }
}

/// Partial update payload for `PATCH /v1/agents/{id}`.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct AgentUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub status: Option<AgentStatus>,
    pub role: Option<Role>,
    pub hire_date: Option<NaiveDate>,
}

impl AgentUpdate {
    pub fn apply(self, id: Uuid, store: &dyn AgentStore) -> Result<AgentRecord> {
        let mut changes = AgentChanges {
            phone: self.phone,
            position: self.position,
            department: self.department,
            status: self.status,
            role: self.role,
            hire_date: self.hire_date,
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
        if let Some(raw) = self.cpf {
            changes.cpf = Some(validate::cpf_field(&raw)?);
        }

        store.update(id, changes)
    }
}

/// Query filters for `GET /v1/agents`.
#[derive(Debug, Deserialize, Default)]
pub struct AgentFilter {
    pub status: Option<AgentStatus>,
    /// Substring match, case-insensitive.
    pub department: Option<String>,
    /// Substring match, case-insensitive.
    pub position: Option<String>,
    /// Substring match on name, email, position or department.
    pub search: Option<String>,
    /// Prefix match on the canonical CPF digits.
    pub cpf: Option<String>,
}

impl AgentFilter {
    pub fn matches(&self, agent: &AgentRecord) -> bool {
        if let Some(status) = self.status {
            if agent.status != status {
                return false;
            }
        }
        if let Some(department) = &self.department {
            if !contains_ci(&agent.department, department) {
                return false;
            }
        }
        if let Some(position) = &self.position {
            if !contains_ci(&agent.position, position) {
                return false;
            }
        }
        if let Some(raw) = &self.cpf {
            if !agent.cpf.starts_with(&cpf::clean(raw)) {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let hit = contains_ci(&agent.name, search)
                || contains_ci(&agent.email, search)
                || contains_ci(&agent.position, search)
                || contains_ci(&agent.department, search);
            if !hit {
                return false;
            }
        }
        true
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
