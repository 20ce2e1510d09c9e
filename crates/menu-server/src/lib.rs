pub mod config;
pub mod handlers;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

pub use state::AppState;

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/languages", get(handlers::menu::list_languages))
        .route("/api/menu/{language}", get(handlers::menu::get_menu))
        .route(
            "/api/visit",
            get(handlers::visit::record_visit).post(handlers::visit::record_visit),
        );

    let page_routes = Router::new()
        .route("/", get(handlers::pages::splash))
        .route("/{language}", get(handlers::pages::menu_page))
        .route("/{language}/items/{id}", get(handlers::pages::item_page));

    let images = ServeDir::new(&state.settings.site.images_dir);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness_check))
        .merge(api_routes)
        .merge(page_routes)
        .nest_service("/images", images)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
}
