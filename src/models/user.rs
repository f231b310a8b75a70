use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored user record. `id` and `created_at` never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields for create and update requests.
///
/// Server-owned fields (`id`, timestamps) are ignored if a client sends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub username: String,
    pub email: String,
    pub full_name: String,
}

impl User {
    #[must_use]
    pub fn from_payload(id: i64, payload: UserPayload, now: DateTime<Utc>) -> Self {
        Self {
            id,
            username: payload.username,
            email: payload.email,
            full_name: payload.full_name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every client-owned field and refreshes `updated_at`.
    pub fn apply(&mut self, payload: UserPayload, now: DateTime<Utc>) {
        self.username = payload.username;
        self.email = payload.email;
        self.full_name = payload.full_name;
        self.updated_at = now.max(self.created_at);
    }
}
