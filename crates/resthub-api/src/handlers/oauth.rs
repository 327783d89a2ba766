//! OAuth2 handlers
//!
//! Token endpoint (resource-owner password grant) and token introspection.

use axum::{
    extract::{rejection::FormRejection, Query, State},
    http::header,
    response::IntoResponse,
    Form, Json,
};
use resthub_core::{ProtocolError, ProtocolErrorKind};
use resthub_service::dto::{TokenInformationResponse, TokenRequest, TokenResponse};
use resthub_service::{AuthorizationService, ServiceError};
use serde::Deserialize;
use tracing::{debug, instrument};
use validator::Validate;

use crate::extractors::BearerToken;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// The only grant this server issues tokens for
pub const PASSWORD_GRANT: &str = "password";

/// Argument contract violations surface to clients as `invalid_request`
fn to_protocol_error(err: ServiceError) -> ApiError {
    if err.is_invalid_argument() {
        let description = match err {
            ServiceError::InvalidArgument(msg) => msg,
            other => other.to_string(),
        };
        ApiError::Protocol(ProtocolError::with_description(
            ProtocolErrorKind::InvalidRequest,
            description,
        ))
    } else {
        ApiError::Service(err)
    }
}

/// Issue a token
///
/// POST /oauth/token
#[instrument(skip_all)]
pub async fn token(
    State(state): State<AppState>,
    form: Result<Form<TokenRequest>, FormRejection>,
) -> ApiResult<impl IntoResponse> {
    let Form(request) = form.map_err(|e| {
        ApiError::Protocol(ProtocolError::with_description(
            ProtocolErrorKind::InvalidRequest,
            e.body_text(),
        ))
    })?;
    request.validate().map_err(|e| {
        ApiError::Protocol(ProtocolError::with_description(
            ProtocolErrorKind::InvalidRequest,
            e.to_string(),
        ))
    })?;

    match request.grant_type.as_deref() {
        Some(PASSWORD_GRANT) => {}
        Some(other) => {
            debug!(grant_type = other, "Rejected grant type");
            return Err(ProtocolError::with_description(
                ProtocolErrorKind::UnsupportedGrantType,
                format!("grant type '{other}' is not supported"),
            )
            .into());
        }
        None => {
            return Err(ProtocolError::with_description(
                ProtocolErrorKind::InvalidRequest,
                "grant_type is required",
            )
            .into());
        }
    }

    let scopes = request.scopes();
    let token = AuthorizationService::new(state.service_context())
        .generate_token(
            Some(scopes.as_slice()),
            request.client_id.as_deref(),
            request.client_secret.as_deref(),
            request.username.as_deref(),
            request.password.as_deref(),
        )
        .await
        .map_err(to_protocol_error)?;

    Ok((
        [(header::CACHE_CONTROL, "no-store"), (header::PRAGMA, "no-cache")],
        Json(TokenResponse::from(&token)),
    ))
}

/// Token details query string
#[derive(Debug, Default, Deserialize)]
pub struct TokenDetailsParams {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Describe the token behind an access token
///
/// GET /oauth/tokenDetails?access_token=
///
/// The query parameter wins over an `Authorization: Bearer` header.
#[instrument(skip_all)]
pub async fn token_details(
    State(state): State<AppState>,
    Query(params): Query<TokenDetailsParams>,
    BearerToken(bearer): BearerToken,
) -> ApiResult<Json<TokenInformationResponse>> {
    let access_token = params.access_token.or(bearer);

    let token = AuthorizationService::new(state.service_context())
        .get_token_information(access_token.as_deref())
        .await
        .map_err(to_protocol_error)?
        .ok_or(ApiError::UnknownToken)?;

    Ok(Json(TokenInformationResponse::from(&token)))
}
