//! In-memory user store.
//!
//! An ordered collection of [`User`] records plus the id counter. Insertion
//! order is display order. The store itself does no locking; callers that
//! share it across tasks wrap it in a lock (see
//! [`InMemoryUserService`](crate::services::InMemoryUserService)).

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{User, UserPayload};

/// Which unique field a payload collides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Conflict {
    #[error("Username already exists")]
    Username,

    #[error("Email already exists")]
    Email,
}

#[derive(Debug)]
pub struct UserStore {
    users: Vec<User>,
    next_id: i64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    #[must_use]
    pub fn list(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Scans records in order, skipping `exclude`, and reports the first
    /// collision found. Within one record, username is checked before email.
    #[must_use]
    pub fn find_conflict(&self, payload: &UserPayload, exclude: Option<i64>) -> Option<Conflict> {
        self.users
            .iter()
            .filter(|u| Some(u.id) != exclude)
            .find_map(|u| {
                if u.username == payload.username {
                    Some(Conflict::Username)
                } else if u.email == payload.email {
                    Some(Conflict::Email)
                } else {
                    None
                }
            })
    }

    /// Appends a new record. Fails without touching the store on conflict.
    pub fn insert(&mut self, payload: UserPayload, now: DateTime<Utc>) -> Result<User, Conflict> {
        if let Some(conflict) = self.find_conflict(&payload, None) {
            return Err(conflict);
        }

        let user = User::from_payload(self.next_id, payload, now);
        self.next_id += 1;
        self.users.push(user.clone());
        Ok(user)
    }

    /// Replaces the client-owned fields of record `id`.
    ///
    /// Returns `Ok(None)` when no such record exists.
    pub fn update(
        &mut self,
        id: i64,
        payload: UserPayload,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, Conflict> {
        let Some(index) = self.users.iter().position(|u| u.id == id) else {
            return Ok(None);
        };

        if let Some(conflict) = self.find_conflict(&payload, Some(id)) {
            return Err(conflict);
        }

        let user = &mut self.users[index];
        user.apply(payload, now);
        Ok(Some(user.clone()))
    }

    pub fn remove(&mut self, id: i64) -> Option<User> {
        let index = self.users.iter().position(|u| u.id == id)?;
        Some(self.users.remove(index))
    }
}
