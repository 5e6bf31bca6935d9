//! Verified identity and the role-authorization gate.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of account roles, serialized in the wire casing the existing
/// clients expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "ENTERPRISE")]
    Enterprise,
}

impl Default for Role {
    fn default() -> Self {
        Self::User
    }
}

/// The identity produced by a successful authentication.
///
/// Built field-by-field from the credential record, so it structurally
/// cannot carry the password hash past the verifier boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub id: Uuid,
    /// Normalized (lowercase) email.
    pub email: String,
    pub role: Role,
}

/// Role gate, evaluated only after token verification succeeded.
///
/// An empty `required` set means "any authenticated principal".
pub fn authorize(role: Role, required: &[Role]) -> bool {
    required.is_empty() || required.contains(&role)
}

/// Required-role set for admin-only routes.
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
