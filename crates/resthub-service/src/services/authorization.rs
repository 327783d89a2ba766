//! OAuth2 authorization service
//!
//! Mints bearer tokens for the resource-owner password flow and resolves
//! access tokens back to their records.

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use resthub_core::entities::{Entity, Token};
use resthub_core::error::DomainError;
use resthub_core::oauth::{ProtocolError, ProtocolErrorKind};
use resthub_core::traits::GenericDao;
use tracing::{debug, info, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::generic::GenericService;

/// Authorization service
pub struct AuthorizationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthorizationService<'a> {
    /// Create a new AuthorizationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Issue a token for a resource owner
    ///
    /// Client credentials are recorded in the trace but not checked.
    ///
    /// # Errors
    /// - `InvalidArgument` when `scopes` or `user_name` is absent
    /// - `INVALID_CLIENT_CREDENTIALS` when the user cannot be authenticated
    /// - `INVALID_SCOPE` when a requested scope is not configured
    #[instrument(skip(self, client_secret, password))]
    pub async fn generate_token(
        &self,
        scopes: Option<&[String]>,
        client_id: Option<&str>,
        client_secret: Option<&str>,
        user_name: Option<&str>,
        password: Option<&str>,
    ) -> ServiceResult<Token> {
        let scopes = scopes.ok_or_else(|| ServiceError::invalid_argument("scopes must be provided"))?;
        let user_name =
            user_name.ok_or_else(|| ServiceError::invalid_argument("user_name must be provided"))?;

        debug!(has_client_secret = client_secret.is_some(), "Token requested");

        let Some(principal) = self
            .ctx
            .authenticator()
            .authenticate(user_name, password)
            .await?
        else {
            warn!(user_name, "Rejected resource owner credentials");
            return Err(ProtocolError::new(ProtocolErrorKind::InvalidClientCredentials).into());
        };

        let allowed = &self.ctx.oauth2().scopes;
        if let Some(unknown) = scopes.iter().find(|s| !allowed.contains(*s)) {
            return Err(ProtocolError::with_description(
                ProtocolErrorKind::InvalidScope,
                format!("unknown scope '{unknown}'"),
            )
            .into());
        }

        let length = self.ctx.oauth2().token_length;
        let access_token = random_token(length);
        let mut refresh_token = random_token(length);
        while refresh_token == access_token {
            refresh_token = random_token(length);
        }

        let token = Token::new(
            access_token,
            refresh_token,
            principal.user_id,
            self.ctx.oauth2().token_lifetime,
            scopes.to_vec(),
        );
        let saved = self.ctx.token_dao().save(&token).await?;

        info!(
            token_id = ?saved.id,
            user_id = %saved.user_id,
            "Token issued"
        );
        Ok(saved)
    }

    /// Look up the record behind an access token
    ///
    /// # Errors
    /// Returns `InvalidArgument` when `access_token` is absent
    #[instrument(skip_all)]
    pub async fn get_token_information(&self, access_token: Option<&str>) -> ServiceResult<Option<Token>> {
        let access_token = access_token
            .ok_or_else(|| ServiceError::invalid_argument("access_token must be provided"))?;

        Ok(self.ctx.token_dao().find_by_access_token(access_token).await?)
    }
}

#[async_trait]
impl GenericService<Token> for AuthorizationService<'_> {
    fn dao(&self) -> &dyn GenericDao<Token> {
        self.ctx.token_dao().as_generic()
    }

    fn validate(&self, token: &Token) -> ServiceResult<()> {
        if token.access_token.is_empty() || token.refresh_token.is_empty() {
            return Err(ServiceError::validation("Token strings must not be empty"));
        }
        if token.access_token == token.refresh_token {
            return Err(ServiceError::validation(
                "Access and refresh tokens must differ",
            ));
        }
        Ok(())
    }

    /// Update a token, keeping its minting timestamp
    async fn update(&self, mut token: Token) -> ServiceResult<Token> {
        let id = token.id.ok_or(DomainError::MissingIdentifier(Token::KIND))?;
        let stored = self
            .dao()
            .read_by_primary_key(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Token::KIND, id))?;

        token.created_on = stored.created_on;
        self.validate(&token)?;
        Ok(self.dao().save(&token).await?)
    }
}

/// `length` random bytes, URL-safe base64 without padding
fn random_token(length: usize) -> String {
    let mut bytes = vec![0u8; length];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
