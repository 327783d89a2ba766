//! Authentication collaborator used by the authorization service

use async_trait::async_trait;

use super::dao::RepoResult;

/// An authenticated user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Stable identifier the issued tokens are bound to
    pub user_id: String,
    pub user_name: String,
}

impl Principal {
    pub fn new(user_id: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
        }
    }
}

#[async_trait]
pub trait AuthenticationService: Send + Sync {
    /// Resolve user credentials to a principal
    ///
    /// Returns `Ok(None)` for unknown users and wrong passwords alike.
    async fn authenticate(
        &self,
        user_name: &str,
        password: Option<&str>,
    ) -> RepoResult<Option<Principal>>;
}
