pub mod autos;
pub mod health;

use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{openapi::ApiDoc, state::ServerState};

/// Build the full application router: auto resource, health, API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let autos = Router::new()
        .route("/auto", get(autos::list).post(autos::create))
        .route(
            "/auto/:auto_id",
            get(autos::get).put(autos::replace).patch(autos::patch).delete(autos::delete),
        );

    Router::new()
        .route("/health", get(health::health))
        .merge(autos)
        .merge(SwaggerUi::new("/apidocs").url("/apispec_1.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx responses
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
