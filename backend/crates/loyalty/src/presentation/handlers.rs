//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use platform::token::TokenService;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::config::LoyaltyConfig;
use crate::application::{
    AnalyticUseCase, ClientProfileUseCase, EventUseCase, MerchUseCase, PointUseCase,
    SignInUseCase, SignUpUseCase, StandUseCase,
};
use crate::domain::repository::LoyaltyStore;
use crate::domain::value_object::ids::{ClientId, EventId, MerchId, StandId};
use crate::error::{LoyaltyError, LoyaltyResult};
use crate::presentation::dto::{
    AnalyticGroupedResponse, AnalyticResponse, AuthResponse, ClientResponse,
    CreateAnalyticRequest, CreateEventRequest, CreateMerchRequest, CreateStandRequest,
    EventResponse, MerchResponse, PointResponse, SignInRequest, SignUpRequest, StandResponse,
    UpdateClientRequest, UpdateEventRequest, UpdateMerchRequest, UpdateStandRequest,
    UpsertPointsRequest,
};
use crate::presentation::extract::{ApiJson, ApiPath};
use crate::presentation::middleware::{AuthenticatedClient, TokenGuardState};

/// Shared state for loyalty handlers
#[derive(Clone)]
pub struct LoyaltyAppState<R>
where
    R: LoyaltyStore,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
}

impl<R> LoyaltyAppState<R>
where
    R: LoyaltyStore,
{
    /// Derives the signing keys once; every request reuses them.
    pub fn new(repo: R, config: &LoyaltyConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            tokens: Arc::new(config.token_service()),
        }
    }

    /// Guard state sharing this state's `TokenService`
    pub fn token_guard(&self) -> TokenGuardState {
        TokenGuardState {
            tokens: self.tokens.clone(),
        }
    }
}

// ============================================================================
// Clients
// ============================================================================

/// POST /clients/sign-up
pub async fn sign_up<R>(
    State(state): State<LoyaltyAppState<R>>,
    ApiJson(req): ApiJson<SignUpRequest>,
) -> LoyaltyResult<Json<AuthResponse>>
where
    R: LoyaltyStore,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.tokens.clone());
    let output = use_case.execute(req.into_input()?).await?;

    Ok(Json(AuthResponse {
        id: output.client_id.into_uuid(),
        token: output.token,
    }))
}

/// POST /clients/sign-in
pub async fn sign_in<R>(
    State(state): State<LoyaltyAppState<R>>,
    ApiJson(req): ApiJson<SignInRequest>,
) -> LoyaltyResult<Json<AuthResponse>>
where
    R: LoyaltyStore,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.tokens.clone());
    let output = use_case.execute(req.into()).await?;

    Ok(Json(AuthResponse {
        id: output.client_id.into_uuid(),
        token: output.token,
    }))
}

/// GET /clients/{id}
///
/// Runs behind `require_client_token`, which has already matched the path id
/// against the token subject.
pub async fn get_client<R>(
    State(state): State<LoyaltyAppState<R>>,
    Extension(caller): Extension<AuthenticatedClient>,
) -> LoyaltyResult<Json<ClientResponse>>
where
    R: LoyaltyStore,
{
    let client = ClientProfileUseCase::new(state.repo.clone())
        .get(&caller.client_id)
        .await?
        .ok_or(LoyaltyError::NotFound("Client"))?;

    Ok(Json(client.into()))
}

/// PUT /clients/{id}
pub async fn update_client<R>(
    State(state): State<LoyaltyAppState<R>>,
    Extension(caller): Extension<AuthenticatedClient>,
    ApiJson(req): ApiJson<UpdateClientRequest>,
) -> LoyaltyResult<Json<ClientResponse>>
where
    R: LoyaltyStore,
{
    let client = ClientProfileUseCase::new(state.repo.clone())
        .update(&caller.client_id, req.into_patch()?)
        .await?
        .ok_or(LoyaltyError::NotFound("Client"))?;

    Ok(Json(client.into()))
}

/// DELETE /clients/{id}
pub async fn delete_client<R>(
    State(state): State<LoyaltyAppState<R>>,
    Extension(caller): Extension<AuthenticatedClient>,
) -> LoyaltyResult<StatusCode>
where
    R: LoyaltyStore,
{
    let deleted = ClientProfileUseCase::new(state.repo.clone())
        .delete(&caller.client_id)
        .await?;

    if !deleted {
        return Err(LoyaltyError::NotFound("Client"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Stands
// ============================================================================

/// POST /stands
pub async fn create_stand<R>(
    State(state): State<LoyaltyAppState<R>>,
    ApiJson(req): ApiJson<CreateStandRequest>,
) -> LoyaltyResult<Json<StandResponse>>
where
    R: LoyaltyStore,
{
    let stand = StandUseCase::new(state.repo.clone())
        .create(req.into_new_stand()?)
        .await?;
    Ok(Json(stand.into()))
}

/// GET /stands
pub async fn list_stands<R>(
    State(state): State<LoyaltyAppState<R>>,
) -> LoyaltyResult<Json<Vec<StandResponse>>>
where
    R: LoyaltyStore,
{
    let stands = StandUseCase::new(state.repo.clone()).list().await?;
    Ok(Json(stands.into_iter().map(Into::into).collect()))
}

/// GET /stands/{id}
pub async fn get_stand<R>(
    State(state): State<LoyaltyAppState<R>>,
    ApiPath(id): ApiPath<Uuid>,
) -> LoyaltyResult<Json<StandResponse>>
where
    R: LoyaltyStore,
{
    let stand = StandUseCase::new(state.repo.clone())
        .get(&StandId::from_uuid(id))
        .await?
        .ok_or(LoyaltyError::NotFound("Stand"))?;
    Ok(Json(stand.into()))
}

/// PUT /stands/{id}
pub async fn update_stand<R>(
    State(state): State<LoyaltyAppState<R>>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<UpdateStandRequest>,
) -> LoyaltyResult<Json<StandResponse>>
where
    R: LoyaltyStore,
{
    let stand = StandUseCase::new(state.repo.clone())
        .update(&StandId::from_uuid(id), req.into_patch()?)
        .await?
        .ok_or(LoyaltyError::NotFound("Stand"))?;
    Ok(Json(stand.into()))
}

/// DELETE /stands/{id}
pub async fn delete_stand<R>(
    State(state): State<LoyaltyAppState<R>>,
    ApiPath(id): ApiPath<Uuid>,
) -> LoyaltyResult<StatusCode>
where
    R: LoyaltyStore,
{
    let deleted = StandUseCase::new(state.repo.clone())
        .delete(&StandId::from_uuid(id))
        .await?;
    if !deleted {
        return Err(LoyaltyError::NotFound("Stand"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Events
// ============================================================================

/// POST /events
pub async fn create_event<R>(
    State(state): State<LoyaltyAppState<R>>,
    ApiJson(req): ApiJson<CreateEventRequest>,
) -> LoyaltyResult<Json<EventResponse>>
where
    R: LoyaltyStore,
{
    let event = EventUseCase::new(state.repo.clone())
        .create(req.into_new_event()?)
        .await?;
    Ok(Json(event.into()))
}

/// GET /events
pub async fn list_events<R>(
    State(state): State<LoyaltyAppState<R>>,
) -> LoyaltyResult<Json<Vec<EventResponse>>>
where
    R: LoyaltyStore,
{
    let events = EventUseCase::new(state.repo.clone()).list().await?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}

/// GET /events/{id}
pub async fn get_event<R>(
    State(state): State<LoyaltyAppState<R>>,
    ApiPath(id): ApiPath<Uuid>,
) -> LoyaltyResult<Json<EventResponse>>
where
    R: LoyaltyStore,
{
    let event = EventUseCase::new(state.repo.clone())
        .get(&EventId::from_uuid(id))
        .await?
        .ok_or(LoyaltyError::NotFound("Event"))?;
    Ok(Json(event.into()))
}

/// PUT /events/{id}
pub async fn update_event<R>(
    State(state): State<LoyaltyAppState<R>>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<UpdateEventRequest>,
) -> LoyaltyResult<Json<EventResponse>>
where
    R: LoyaltyStore,
{
    let event = EventUseCase::new(state.repo.clone())
        .update(&EventId::from_uuid(id), req.into_patch()?)
        .await?
        .ok_or(LoyaltyError::NotFound("Event"))?;
    Ok(Json(event.into()))
}

/// DELETE /events/{id}
pub async fn delete_event<R>(
    State(state): State<LoyaltyAppState<R>>,
    ApiPath(id): ApiPath<Uuid>,
) -> LoyaltyResult<StatusCode>
where
    R: LoyaltyStore,
{
    let deleted = EventUseCase::new(state.repo.clone())
        .delete(&EventId::from_uuid(id))
        .await?;
    if !deleted {
        return Err(LoyaltyError::NotFound("Event"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Merch
// ============================================================================

/// POST /merch
pub async fn create_merch<R>(
    State(state): State<LoyaltyAppState<R>>,
    ApiJson(req): ApiJson<CreateMerchRequest>,
) -> LoyaltyResult<Json<MerchResponse>>
where
    R: LoyaltyStore,
{
    let merch = MerchUseCase::new(state.repo.clone())
        .create(req.into_new_merch()?)
        .await?;
    Ok(Json(merch.into()))
}

/// GET /merch
pub async fn list_merch<R>(
    State(state): State<LoyaltyAppState<R>>,
) -> LoyaltyResult<Json<Vec<MerchResponse>>>
where
    R: LoyaltyStore,
{
    let merch = MerchUseCase::new(state.repo.clone()).list().await?;
    Ok(Json(merch.into_iter().map(Into::into).collect()))
}

/// GET /merch/{id}
pub async fn get_merch<R>(
    State(state): State<LoyaltyAppState<R>>,
    ApiPath(id): ApiPath<Uuid>,
) -> LoyaltyResult<Json<MerchResponse>>
where
    R: LoyaltyStore,
{
    let merch = MerchUseCase::new(state.repo.clone())
        .get(&MerchId::from_uuid(id))
        .await?
        .ok_or(LoyaltyError::NotFound("Merch"))?;
    Ok(Json(merch.into()))
}

/// PUT /merch/{id}
pub async fn update_merch<R>(
    State(state): State<LoyaltyAppState<R>>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<UpdateMerchRequest>,
) -> LoyaltyResult<Json<MerchResponse>>
where
    R: LoyaltyStore,
{
    let merch = MerchUseCase::new(state.repo.clone())
        .update(&MerchId::from_uuid(id), req.into_patch()?)
        .await?
        .ok_or(LoyaltyError::NotFound("Merch"))?;
    Ok(Json(merch.into()))
}

/// DELETE /merch/{id}
pub async fn delete_merch<R>(
    State(state): State<LoyaltyAppState<R>>,
    ApiPath(id): ApiPath<Uuid>,
) -> LoyaltyResult<StatusCode>
where
    R: LoyaltyStore,
{
    let deleted = MerchUseCase::new(state.repo.clone())
        .delete(&MerchId::from_uuid(id))
        .await?;
    if !deleted {
        return Err(LoyaltyError::NotFound("Merch"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Points
// ============================================================================

/// POST /points/upsert
pub async fn upsert_points<R>(
    State(state): State<LoyaltyAppState<R>>,
    ApiJson(req): ApiJson<UpsertPointsRequest>,
) -> LoyaltyResult<Json<PointResponse>>
where
    R: LoyaltyStore,
{
    let total_points = req.validated_points()?;
    let point = PointUseCase::new(state.repo.clone())
        .upsert(ClientId::from_uuid(req.user_id), total_points)
        .await?;
    Ok(Json(point.into()))
}

/// GET /points/{user_id}
pub async fn get_points<R>(
    State(state): State<LoyaltyAppState<R>>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> LoyaltyResult<Json<PointResponse>>
where
    R: LoyaltyStore,
{
    let point = PointUseCase::new(state.repo.clone())
        .get(&ClientId::from_uuid(user_id))
        .await?
        .ok_or(LoyaltyError::NotFound("Point"))?;
    Ok(Json(point.into()))
}

// ============================================================================
// Analytics
// ============================================================================

/// POST /analytics
pub async fn record_analytic<R>(
    State(state): State<LoyaltyAppState<R>>,
    ApiJson(req): ApiJson<CreateAnalyticRequest>,
) -> LoyaltyResult<Json<AnalyticResponse>>
where
    R: LoyaltyStore,
{
    let analytic = AnalyticUseCase::new(state.repo.clone())
        .record(
            req.user_id.map(ClientId::from_uuid),
            req.stand_id.map(StandId::from_uuid),
        )
        .await?;
    Ok(Json(analytic.into()))
}

/// GET /analytics/grouped
pub async fn grouped_analytics<R>(
    State(state): State<LoyaltyAppState<R>>,
) -> LoyaltyResult<Json<Vec<AnalyticGroupedResponse>>>
where
    R: LoyaltyStore,
{
    let buckets = AnalyticUseCase::new(state.repo.clone()).grouped().await?;
    Ok(Json(buckets.into_iter().map(Into::into).collect()))
}
