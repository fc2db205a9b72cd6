use serde::{Deserialize, Serialize};

/// Platform roles, ordered by privilege
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Role {
    Banned,
    #[default]
    User,
    Monitor,
    Admin,
}

impl Role {
    /// A role satisfies a requirement when it ranks at least as high.
    /// Banned accounts never satisfy anything.
    pub fn satisfies(&self, required: Role) -> bool {
        *self != Role::Banned && *self >= required
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Banned => "Banned",
            Role::User => "User",
            Role::Monitor => "Monitor",
            Role::Admin => "Admin",
        }
    }
}

/// Current viewer, as returned by `GET /api/account/profile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl UserInfo {
    pub fn has_role(&self, required: Role) -> bool {
        self.role.satisfies(required)
    }
}
