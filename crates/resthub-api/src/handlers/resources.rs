//! Generic resource handlers
//!
//! One set of CRUD and search endpoints, bound per entity type through
//! [`Resource`].

use axum::extract::State;
use resthub_core::{Entity, Hotel, Role};
use resthub_service::dto::{HotelRequest, PageResponse, RoleRequest};
use resthub_service::{GenericService, HotelService, RoleService, ServiceContext, ServiceError};
use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;
use validator::Validate;

use crate::extractors::{IdPath, SearchParams, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent, Negotiated, ResponseFormat};
use crate::state::AppState;

/// XML root element for page envelopes
const PAGE_ROOT: &str = "page";

/// Entity exposed under `/{KIND}`
pub trait Resource: Entity + Serialize {
    /// Request body accepted on create and update
    type Request: DeserializeOwned + Validate + Into<Self> + Send;

    /// Service handling this entity
    fn service(ctx: &ServiceContext) -> Box<dyn GenericService<Self> + '_>;
}

impl Resource for Hotel {
    type Request = HotelRequest;

    fn service(ctx: &ServiceContext) -> Box<dyn GenericService<Self> + '_> {
        Box::new(HotelService::new(ctx))
    }
}

impl Resource for Role {
    type Request = RoleRequest;

    fn service(ctx: &ServiceContext) -> Box<dyn GenericService<Self> + '_> {
        Box::new(RoleService::new(ctx))
    }
}

async fn find_page<R: Resource>(
    state: &AppState,
    format: ResponseFormat,
    query: &str,
    params: &SearchParams,
) -> ApiResult<Negotiated<PageResponse<R>>> {
    let page = R::service(state.service_context())
        .find(query, params.page, params.size)
        .await?
        .ok_or(ApiError::BadQuery)?;

    Ok(Negotiated::new(format, PAGE_ROOT, PageResponse::from(page)))
}

/// List entities page by page
///
/// GET /{kind}?page=&size=
#[instrument(skip(state), fields(kind = R::KIND))]
pub async fn list<R: Resource>(
    State(state): State<AppState>,
    format: ResponseFormat,
    params: SearchParams,
) -> ApiResult<Negotiated<PageResponse<R>>> {
    find_page::<R>(&state, format, "", &params).await
}

/// Search entities
///
/// GET /{kind}/search?q=&page=&size=
#[instrument(skip(state), fields(kind = R::KIND))]
pub async fn search<R: Resource>(
    State(state): State<AppState>,
    format: ResponseFormat,
    params: SearchParams,
) -> ApiResult<Negotiated<PageResponse<R>>> {
    find_page::<R>(&state, format, &params.q, &params).await
}

/// Get entity by ID
///
/// GET /{kind}/{id}
#[instrument(skip(state), fields(kind = R::KIND))]
pub async fn get<R: Resource>(
    State(state): State<AppState>,
    format: ResponseFormat,
    IdPath(id): IdPath,
) -> ApiResult<Negotiated<R>> {
    let entity = R::service(state.service_context())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(R::KIND, id.to_string()))?;

    Ok(Negotiated::new(format, R::KIND, entity))
}

/// Create entity
///
/// POST /{kind}
#[instrument(skip(state, request), fields(kind = R::KIND))]
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    format: ResponseFormat,
    ValidatedJson(request): ValidatedJson<R::Request>,
) -> ApiResult<Created<Negotiated<R>>> {
    let created = R::service(state.service_context())
        .create(request.into())
        .await?;

    Ok(Created(Negotiated::new(format, R::KIND, created)))
}

/// Replace entity
///
/// PUT /{kind}/{id}
#[instrument(skip(state, request), fields(kind = R::KIND))]
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    format: ResponseFormat,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<R::Request>,
) -> ApiResult<Negotiated<R>> {
    let entity: R = request.into();
    if let Some(body_id) = entity.id() {
        if body_id != id {
            return Err(ApiError::invalid_body(format!(
                "Body id {body_id} does not match path id {id}"
            )));
        }
    }

    let updated = R::service(state.service_context())
        .update(entity.with_id(id))
        .await?;

    Ok(Negotiated::new(format, R::KIND, updated))
}

/// Delete entity
///
/// DELETE /{kind}/{id}
#[instrument(skip(state), fields(kind = R::KIND))]
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    R::service(state.service_context()).delete_by_id(id).await?;
    Ok(NoContent)
}
