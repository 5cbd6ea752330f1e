mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::service::DocumentService;

pub fn create_router(service: DocumentService) -> Router {
    let api = Router::new()
        // Intake
        .route("/user-input", post(handlers::submit_idea))
        // Generation (domain-aware: kind in the path)
        .route(
            "/generate-document/{kind}/{id}",
            get(handlers::generate_document),
        )
        // Generation (domain-agnostic aliases fixing the kind)
        .route(
            "/generate-requirements/{id}",
            get(handlers::generate_requirements),
        )
        .route(
            "/generate-technical/{id}",
            get(handlers::generate_technical),
        )
        .route(
            "/generate-lifecycle/{id}",
            get(handlers::generate_lifecycle),
        )
        // Revision
        .route(
            "/revise-document/{kind}/{id}",
            post(handlers::revise_document),
        )
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}
