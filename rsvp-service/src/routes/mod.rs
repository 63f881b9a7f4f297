use axum::{extract::Request, middleware, routing::get, Router};
use log::{info, warn};
use rsvp_shared::config::remove_base_path;
use rsvp_shared::store::{dynamo::DynamoRsvpStore, RsvpStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::error::AppError;
use crate::handlers::{
    guest_handlers::{confirm_attendance, get_guests},
    intention_handlers::{get_declined, get_intentions, record_intention},
};

/// Creates a router with the default store
pub async fn create_router() -> Router {
    info!("Creating router with DynamoDB store");

    let dynamo_store = Arc::new(DynamoRsvpStore::new().await);

    // Behind API Gateway the stage name is part of the path
    let prefix = if remove_base_path() { "" } else { "/Prod" };
    info!("Using API route prefix: {}", prefix);

    create_router_with_store(dynamo_store, prefix)
}

/// Creates a router with a given store implementation
pub fn create_router_with_store<S>(store: Arc<S>, prefix: &str) -> Router
where
    S: RsvpStore + 'static,
{
    info!("Setting up API routes with prefix: '{}'", prefix);

    // The RSVP pages are public, so any origin may call in
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    async fn logging_middleware(
        req: Request,
        next: axum::middleware::Next,
    ) -> impl axum::response::IntoResponse {
        info!(
            "Router received request: method={}, uri={}",
            req.method(),
            req.uri()
        );
        next.run(req).await
    }

    let api_routes = Router::new()
        .route("/guests", get(get_guests::<S>).post(confirm_attendance::<S>))
        .route(
            "/intentions",
            get(get_intentions::<S>).post(record_intention::<S>),
        )
        .route("/intentions/declined", get(get_declined::<S>))
        .with_state(store);

    let router = if prefix.is_empty() {
        api_routes
            .layer(cors)
            .layer(middleware::from_fn(logging_middleware))
    } else {
        Router::new()
            .nest(prefix, api_routes)
            .layer(cors)
            .layer(middleware::from_fn(logging_middleware))
    };

    router.fallback(|req: Request| async move {
        warn!("No route matched for: {} {}", req.method(), req.uri());
        AppError::not_found("The requested resource was not found".to_string())
    })
}
