//! In-process store backed by `RwLock`-guarded maps.
//!
//! Uniqueness checks run inside the write lock, so a concurrent duplicate
//! registration resolves to exactly one success and one conflict.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::agent::api::AgentFilter;
use crate::agent::{AgentChanges, AgentCreate, AgentRecord};
use crate::prelude::*;
use crate::user::api::UserFilter;
use crate::user::{UserChanges, UserCreate, UserRecord};

use super::{AgentStore, UserStore};

#[derive(Default)]
pub struct MemStore {
    users: RwLock<HashMap<Uuid, UserRecord>>,
    agents: RwLock<HashMap<Uuid, AgentRecord>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemStore {
    fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        let users = self.users.read().expect("user store lock poisoned");
        users.values().find(|u| u.email == email).cloned()
    }

    fn find_by_id(&self, id: Uuid) -> Option<UserRecord> {
        let users = self.users.read().expect("user store lock poisoned");
        users.get(&id).cloned()
    }

    fn exists_email_excluding(&self, email: &str, exclude: Uuid) -> bool {
        let users = self.users.read().expect("user store lock poisoned");
        users.values().any(|u| u.id != exclude && u.email == email)
    }

    fn insert(&self, create: UserCreate) -> Result<UserRecord> {
        let mut users = self.users.write().expect("user store lock poisoned");
        if users.values().any(|u| u.email == create.email) {
            return Err(Error::Conflict { field: "email" });
        }
        if users.values().any(|u| u.cpf == create.cpf) {
            return Err(Error::Conflict { field: "cpf" });
        }

        let record = UserRecord {
            id: Uuid::new_v4(),
            name: create.name,
            email: create.email,
            cpf: create.cpf,
            hash: create.hash,
            role: create.role,
            created_at: Utc::now(),
        };
        users.insert(record.id, record.clone());
        Ok(record)
    }

    fn update(&self, id: Uuid, changes: UserChanges) -> Result<UserRecord> {
        let mut users = self.users.write().expect("user store lock poisoned");
        if !users.contains_key(&id) {
            return Err(Error::NotFound);
        }
        if let Some(email) = &changes.email {
            if users.values().any(|u| u.id != id && u.email == *email) {
                return Err(Error::Conflict { field: "email" });
            }
        }
        if let Some(cpf) = &changes.cpf {
            if users.values().any(|u| u.id != id && u.cpf == *cpf) {
                return Err(Error::Conflict { field: "cpf" });
            }
        }

        let record = users.get_mut(&id).ok_or(Error::NotFound)?;
        if let Some(name) = changes.name {
            record.name = name;
        }
        if let Some(email) = changes.email {
            record.email = email;
        }
        if let Some(cpf) = changes.cpf {
            record.cpf = cpf;
        }
        if let Some(hash) = changes.hash {
            record.hash = hash;
        }
        if let Some(role) = changes.role {
            record.role = role;
        }
        Ok(record.clone())
    }

    fn delete(&self, id: Uuid) -> Result<()> {
        let mut users = self.users.write().expect("user store lock poisoned");
        users.remove(&id).map(|_| ()).ok_or(Error::NotFound)
    }

    fn list(&self, filter: &UserFilter) -> Vec<UserRecord> {
        let users = self.users.read().expect("user store lock poisoned");
        let mut out: Vec<_> = users.values().filter(|u| filter.matches(u)).cloned().collect();
        out.sort_by_key(|u| (u.created_at, u.id));
        out
    }
}

impl AgentStore for MemStore {
    fn find_by_email(&self, email: &str) -> Option<AgentRecord> {
        let agents = self.agents.read().expect("agent store lock poisoned");
        agents.values().find(|a| a.email == email).cloned()
    }

    fn find_by_id(&self, id: Uuid) -> Option<AgentRecord> {
        let agents = self.agents.read().expect("agent store lock poisoned");
        agents.get(&id).cloned()
    }

    fn exists_email_excluding(&self, email: &str, exclude: Uuid) -> bool {
        let agents = self.agents.read().expect("agent store lock poisoned");
        agents.values().any(|a| a.id != exclude && a.email == email)
    }

    fn insert(&self, create: AgentCreate) -> Result<AgentRecord> {
        let mut agents = self.agents.write().expect("agent store lock poisoned");
        if agents.values().any(|a| a.email == create.email) {
            return Err(Error::Conflict { field: "email" });
        }
        if agents.values().any(|a| a.cpf == create.cpf) {
            return Err(Error::Conflict { field: "cpf" });
        }

        let record = AgentRecord {
            id: Uuid::new_v4(),
            name: create.name,
            email: create.email,
            cpf: create.cpf,
            phone: create.phone,
            position: create.position,
            department: create.department,
            status: create.status,
            role: create.role,
            hire_date: create.hire_date,
            created_at: Utc::now(),
        };
        agents.insert(record.id, record.clone());
        Ok(record)
    }

    fn update(&self, id: Uuid, changes: AgentChanges) -> Result<AgentRecord> {
        let mut agents = self.agents.write().expect("agent store lock poisoned");
        if !agents.contains_key(&id) {
            return Err(Error::NotFound);
        }
        if let Some(email) = &changes.email {
            if agents.values().any(|a| a.id != id && a.email == *email) {
                return Err(Error::Conflict { field: "email" });
            }
        }
        if let Some(cpf) = &changes.cpf {
            if agents.values().any(|a| a.id != id && a.cpf == *cpf) {
                return Err(Error::Conflict { field: "cpf" });
            }
        }

        let record = agents.get_mut(&id).ok_or(Error::NotFound)?;
        if let Some(name) = changes.name {
            record.name = name;
        }
        if let Some(email) = changes.email {
            record.email = email;
        }
        if let Some(cpf) = changes.cpf {
            record.cpf = cpf;
        }
        if let Some(phone) = changes.phone {
            record.phone = phone;
        }
        if let Some(position) = changes.position {
            record.position = position;
        }
        if let Some(department) = changes.department {
            record.department = department;
        }
        if let Some(status) = changes.status {
            record.status = status;
        }
        if let Some(role) = changes.role {
            record.role = role;
        }
        if let Some(hire_date) = changes.hire_date {
            record.hire_date = Some(hire_date);
        }
        Ok(record.clone())
    }

    fn delete(&self, id: Uuid) -> Result<()> {
        let mut agents = self.agents.write().expect("agent store lock poisoned");
        agents.remove(&id).map(|_| ()).ok_or(Error::NotFound)
    }

    fn list(&self, filter: &AgentFilter) -> Vec<AgentRecord> {
        let agents = self.agents.read().expect("agent store lock poisoned");
        let mut out: Vec<_> = agents
            .values()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect();
        out.sort_by_key(|a| (a.created_at, a.id));
        out
    }
}
