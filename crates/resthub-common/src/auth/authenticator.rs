//! Authentication against the users listed in configuration

use std::collections::HashMap;

use async_trait::async_trait;
use resthub_core::{AuthenticationService, DomainError, Principal, RepoResult};
use tracing::{debug, instrument, warn};

use super::password::{check_hash_format, verify_password};
use crate::config::UserCredential;
use crate::error::AppError;

/// `AuthenticationService` backed by a fixed user table
#[derive(Debug, Clone, Default)]
pub struct StaticAuthenticationService {
    users: HashMap<String, UserCredential>,
}

impl StaticAuthenticationService {
    /// Build the service, rejecting malformed password hashes up front
    ///
    /// # Errors
    /// Returns `AppError::Config` naming the offending user
    pub fn new(users: impl IntoIterator<Item = UserCredential>) -> Result<Self, AppError> {
        let mut table = HashMap::new();
        for user in users {
            check_hash_format(&user.password_hash).map_err(|e| {
                AppError::Config(format!("password hash of '{}': {e}", user.user_name))
            })?;
            table.insert(user.user_name.clone(), user);
        }
        Ok(Self { users: table })
    }

    /// Number of known users
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl AuthenticationService for StaticAuthenticationService {
    #[instrument(skip(self, password))]
    async fn authenticate(
        &self,
        user_name: &str,
        password: Option<&str>,
    ) -> RepoResult<Option<Principal>> {
        let Some(user) = self.users.get(user_name) else {
            debug!("Unknown user");
            return Ok(None);
        };

        let Some(password) = password else {
            debug!("No password supplied");
            return Ok(None);
        };

        let hash = user.password_hash.clone();
        let candidate = password.to_string();
        // Argon2 is CPU bound
        let verified = tokio::task::spawn_blocking(move || verify_password(&candidate, &hash))
            .await
            .map_err(|e| DomainError::InternalError(e.to_string()))?
            .map_err(|e| DomainError::InternalError(e.to_string()))?;

        if verified {
            Ok(Some(Principal::new(&user.user_id, &user.user_name)))
        } else {
            warn!("Password mismatch");
            Ok(None)
        }
    }
}
