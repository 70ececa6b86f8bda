// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! HTTP routing for the server.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::AppState;
use crate::handlers::health::health_http;
use crate::handlers::home::home_http;
use crate::handlers::register::register_http;

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_http))
        .route("/api/health", get(health_http))
        .route("/api/register", post(register_http))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
