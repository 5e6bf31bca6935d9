//! Agents: the staff records managed by the application.

pub mod api;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::principal::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentStatus {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "INACTIVE")]
    Inactive,
}

impl Default for AgentStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// Stored agent record. Agents carry no credentials, so the record itself
/// is the wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: Uuid,
    pub name: String,
    /// Normalized lowercase, unique.
    pub email: String,
    /// Canonical 11-digit CPF, unique.
    pub cpf: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub status: AgentStatus,
    pub role: Role,
    pub hire_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Validated input for inserting an agent.
#[derive(Debug, Clone)]
pub struct AgentCreate {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub status: AgentStatus,
    pub role: Role,
    pub hire_date: Option<NaiveDate>,
}

/// Partial update applied by the store; absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct AgentChanges {
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
