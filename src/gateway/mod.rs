pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use anyhow::Context;
use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{Next, from_fn},
    response::Response,
    routing::{delete, get},
};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Axum middleware that logs one line per request with status and latency.
async fn trace_requests(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}

/// Build the complete router: reservation routes, health, API docs.
pub fn build_router(state: Arc<AppState>) -> Router {
    // Collection routes are served with and without the trailing slash
    let reservation_routes = Router::new()
        .route(
            "/reservation",
            get(handlers::get_reservations).post(handlers::create_reservation),
        )
        .route(
            "/reservation/",
            get(handlers::get_reservations).post(handlers::create_reservation),
        )
        .route(
            "/reservation/{id}",
            get(handlers::get_reservation_by_id)
                .post(handlers::update_reservation)
                .put(handlers::update_reservation)
                .delete(handlers::delete_reservation_by_id),
        )
        .route(
            "/reservation/game/{game_id}",
            get(handlers::get_reservations_by_game_id),
        )
        .route(
            "/reservation/delete/{game_id}",
            delete(handlers::delete_reservations_by_game_id),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(reservation_routes)
        .with_state(state)
        // OpenAPI / Swagger UI (stateless, added after with_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::api_doc()))
        .layer(from_fn(trace_requests))
}

/// Start HTTP Gateway server
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {} (port may already be in use)", addr))?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API Docs: http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Gateway server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
