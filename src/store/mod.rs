//! Persistence boundary.
//!
//! The core talks to storage through these traits. Uniqueness of normalized
//! email and canonical CPF is enforced by the implementation itself (inside
//! `insert`/`update`); callers may pre-check, but two concurrent writers can
//! both pass a pre-check, so the store constraint is the one that counts.
//! Violations are reported as [`Error::Conflict`] with the offending field,
//! never as an opaque storage error.

mod memory;

pub use memory::MemStore;

use uuid::Uuid;

use crate::agent::api::AgentFilter;
use crate::agent::{AgentChanges, AgentCreate, AgentRecord};
use crate::prelude::*;
use crate::user::api::UserFilter;
use crate::user::{UserChanges, UserCreate, UserRecord};

pub trait UserStore: Send + Sync {
    /// Lookup by normalized email. The returned record includes the hash;
    /// the credential verifier is the only caller allowed to read it.
    fn find_by_email(&self, email: &str) -> Option<UserRecord>;

    fn find_by_id(&self, id: Uuid) -> Option<UserRecord>;

    /// Update-time duplicate pre-check, ignoring the record being updated.
    fn exists_email_excluding(&self, email: &str, exclude: Uuid) -> bool;

    fn insert(&self, create: UserCreate) -> Result<UserRecord>;

    fn update(&self, id: Uuid, changes: UserChanges) -> Result<UserRecord>;

    fn delete(&self, id: Uuid) -> Result<()>;

    fn list(&self, filter: &UserFilter) -> Vec<UserRecord>;
}

pub trait AgentStore: Send + Sync {
    fn find_by_email(&self, email: &str) -> Option<AgentRecord>;

    fn find_by_id(&self, id: Uuid) -> Option<AgentRecord>;

    fn exists_email_excluding(&self, email: &str, exclude: Uuid) -> bool;

    fn insert(&self, create: AgentCreate) -> Result<AgentRecord>;

    fn update(&self, id: Uuid, changes: AgentChanges) -> Result<AgentRecord>;

    fn delete(&self, id: Uuid) -> Result<()>;

    fn list(&self, filter: &AgentFilter) -> Vec<AgentRecord>;
}
