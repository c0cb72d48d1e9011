//! Bearer Token Middleware
//!
//! Guards `/clients/{id}`: the caller must present a valid token whose
//! subject is the client named in the path.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer;
use platform::token::TokenService;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::CheckTokenUseCase;
use crate::domain::value_object::ids::ClientId;
use crate::error::LoyaltyError;
use crate::presentation::extract::ApiPath;

/// Middleware state
#[derive(Clone)]
pub struct TokenGuardState {
    pub tokens: Arc<TokenService>,
}

/// Verified token subject, stored in request extensions
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedClient {
    pub client_id: ClientId,
}

/// 401 without a valid token, 403 when the token belongs to another client.
///
/// Must be installed with `route_layer` so the path is already matched.
pub async fn require_client_token(
    State(state): State<TokenGuardState>,
    path: Result<ApiPath<Uuid>, LoyaltyError>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, LoyaltyError> {
    let token = extract_bearer(req.headers()).ok_or(LoyaltyError::MissingToken)?;
    let client_id = CheckTokenUseCase::new(state.tokens.clone()).execute(&token)?;

    let ApiPath(path_id) = path?;
    if client_id.as_uuid() != &path_id {
        return Err(LoyaltyError::Forbidden);
    }

    req.extensions_mut().insert(AuthenticatedClient { client_id });
    Ok(next.run(req).await)
}
