// src/routes.rs

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::{
    config::AppState,
    docs::ApiDoc,
    handlers,
    middleware::cors::cors_layer,
};

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn create_router(app_state: AppState) -> Router {
    // Rotas públicas, consumidas pelo site
    let external_routes = Router::new()
        .route("/vehicle", get(handlers::vehicle::list_vehicles))
        .route("/vehicle/filter-options", get(handlers::vehicle::get_filter_options))
        .route("/vehicle/modelos-by-marcas", get(handlers::vehicle::get_modelos_by_marcas))
        .route("/vehicle/{id}", get(handlers::vehicle::get_vehicle_detail))
        .route("/contact", post(handlers::contact::create_contact));

    // Consulta interna (painel da loja)
    let internal_routes = Router::new()
        .route("/contact", get(handlers::contact::list_contacts))
        .route("/contact/{id}", get(handlers::contact::get_contact));

    let cors = cors_layer(&app_state.config.cors_origins);

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api/v1/external", external_routes)
        .nest("/api/v1/internal", internal_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
