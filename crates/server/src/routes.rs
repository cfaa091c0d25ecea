use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

pub mod feedback;
pub mod products;
pub mod users;

/// Shared handler state: the explicitly constructed database pool.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

#[derive(Serialize)]
pub struct Welcome {
    pub message: &'static str,
}

pub async fn root() -> Json<Welcome> {
    Json(Welcome { message: "Welcome to the store API" })
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: root, health and the three resources
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/users/", get(users::list_users).post(users::create_user))
        .route("/products/", get(products::list_products).post(products::create_product))
        .route("/feedback/", get(feedback::list_feedback).post(feedback::create_feedback))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
