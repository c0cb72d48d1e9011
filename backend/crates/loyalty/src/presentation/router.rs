//! Loyalty Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use crate::application::config::LoyaltyConfig;
use crate::domain::repository::LoyaltyStore;
use crate::infra::postgres::PgLoyaltyRepository;
use crate::presentation::handlers::{self, LoyaltyAppState};
use crate::presentation::middleware::require_client_token;

/// Create the Loyalty router with PostgreSQL repository
pub fn loyalty_router(repo: PgLoyaltyRepository, config: LoyaltyConfig) -> Router {
    loyalty_router_generic(repo, config)
}

/// Create a Loyalty router for any repository implementation
pub fn loyalty_router_generic<R>(repo: R, config: LoyaltyConfig) -> Router
where
    R: LoyaltyStore,
{
    let state = LoyaltyAppState::new(repo, &config);
    let guard = state.token_guard();

    let client_routes = Router::new()
        .route(
            "/clients/{id}",
            get(handlers::get_client::<R>)
                .put(handlers::update_client::<R>)
                .delete(handlers::delete_client::<R>),
        )
        .route_layer(middleware::from_fn_with_state(guard, require_client_token));

    Router::new()
        .route("/clients/sign-up", post(handlers::sign_up::<R>))
        .route("/clients/sign-in", post(handlers::sign_in::<R>))
        .merge(client_routes)
        .route(
            "/stands",
            get(handlers::list_stands::<R>).post(handlers::create_stand::<R>),
        )
        .route(
            "/stands/{id}",
            get(handlers::get_stand::<R>)
                .put(handlers::update_stand::<R>)
                .delete(handlers::delete_stand::<R>),
        )
        .route(
            "/events",
            get(handlers::list_events::<R>).post(handlers::create_event::<R>),
        )
        .route(
            "/events/{id}",
            get(handlers::get_event::<R>)
                .put(handlers::update_event::<R>)
                .delete(handlers::delete_event::<R>),
        )
        .route(
            "/merch",
            get(handlers::list_merch::<R>).post(handlers::create_merch::<R>),
        )
        .route(
            "/merch/{id}",
            get(handlers::get_merch::<R>)
                .put(handlers::update_merch::<R>)
                .delete(handlers::delete_merch::<R>),
        )
        .route("/points/upsert", post(handlers::upsert_points::<R>))
        .route("/points/{user_id}", get(handlers::get_points::<R>))
        .route("/analytics", post(handlers::record_analytic::<R>))
        .route("/analytics/grouped", get(handlers::grouped_analytics::<R>))
        .with_state(state)
}
