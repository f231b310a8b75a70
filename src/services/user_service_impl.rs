//! In-memory implementation of the `UserService` trait.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use crate::models::{User, UserPayload};
use crate::services::user_service::{UserError, UserService};
use crate::services::validation::validate_user_payload;
use crate::store::UserStore;

/// Owns the [`UserStore`]. Writers hold the lock across the uniqueness scan
/// and the mutation, so concurrent creates cannot admit duplicates.
#[derive(Default)]
pub struct InMemoryUserService {
    store: RwLock<UserStore>,
}

impl InMemoryUserService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserService for InMemoryUserService {
    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        Ok(self.store.read().await.list().to_vec())
    }

    async fn get_user(&self, id: i64) -> Result<User, UserError> {
        self.store
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(UserError::NotFound(id))
    }

    async fn create_user(&self, payload: UserPayload) -> Result<User, UserError> {
        validate_user_payload(&payload)?;

        let user = self.store.write().await.insert(payload, Utc::now())?;

        metrics::counter!("users_created_total").increment(1);
        info!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }

    async fn update_user(&self, id: i64, payload: UserPayload) -> Result<User, UserError> {
        let user = {
            let mut store = self.store.write().await;
            if store.get(id).is_none() {
                return Err(UserError::NotFound(id));
            }
            validate_user_payload(&payload)?;
            store
                .update(id, payload, Utc::now())?
                .ok_or(UserError::NotFound(id))?
        };

        metrics::counter!("users_updated_total").increment(1);
        info!(user_id = user.id, username = %user.username, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: i64) -> Result<(), UserError> {
        let removed = self
            .store
            .write()
            .await
            .remove(id)
            .ok_or(UserError::NotFound(id))?;

        metrics::counter!("users_deleted_total").increment(1);
        info!(user_id = removed.id, username = %removed.username, "User deleted");
        Ok(())
    }

    /// The store lives in process memory, so there is nothing to wait on.
    async fn is_ready(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn payload(username: &str) -> UserPayload {
        UserPayload {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            full_name: format!("{username} user"),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = InMemoryUserService::new();
        let created = service.create_user(payload("alice")).await.unwrap();
        let fetched = service.get_user(created.id).await.unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.full_name, "alice user");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_email() {
        let service = InMemoryUserService::new();
        let mut bad = payload("bob");
        bad.email = "invalid-email".to_string();

        let err = service.create_user(bad).await.unwrap_err();
        assert!(matches!(err, UserError::Validation(_)));
        assert!(service.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found_before_validation() {
        let service = InMemoryUserService::new();
        let mut bad = payload("ghost");
        bad.email = String::new();

        let err = service.update_user(5, bad).await.unwrap_err();
        assert!(matches!(err, UserError::NotFound(5)));
    }

    #[tokio::test]
    async fn test_update_conflict_with_other_user() {
        let service = InMemoryUserService::new();
        service.create_user(payload("a")).await.unwrap();
        let b = service.create_user(payload("b")).await.unwrap();

        let err = service.update_user(b.id, payload("a")).await.unwrap_err();
        match err {
            UserError::Conflict(msg) => assert_eq!(msg, "Username already exists"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let service = InMemoryUserService::new();
        let user = service.create_user(payload("carol")).await.unwrap();

        service.delete_user(user.id).await.unwrap();
        assert!(matches!(
            service.delete_user(user.id).await,
            Err(UserError::NotFound(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_keep_usernames_unique() {
        let service = Arc::new(InMemoryUserService::new());

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.create_user(payload("racer")).await })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(service.list_users().await.unwrap().len(), 1);
    }
}
