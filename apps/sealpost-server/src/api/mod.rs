use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use sp_proto::api::{DecryptResponse, EncryptRequest, ErrorResponse};
use sp_proto::Envelope;

use crate::state::AppState;

pub mod health;
pub mod seal;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/encrypt", post(seal::encrypt_message))
        .route("/decrypt", post(seal::decrypt_message))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health::health))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(seal::encrypt_message, seal::decrypt_message, health::health),
    components(schemas(
        Envelope,
        EncryptRequest,
        DecryptResponse,
        ErrorResponse,
        health::HealthResponse
    )),
    tags(
        (name = "Sealing", description = "Hybrid message encryption and decryption"),
        (name = "Health", description = "Liveness probe")
    )
)]
struct ApiDoc;
