use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

use crate::api::{catalog, cors, search, security};
use crate::config::Config;
use crate::db::repo::PgDatabase;
use crate::db::Database;
use crate::error::Error;

const JSON_BODY_LIMIT: usize = 100 * 1024;

pub struct AppState {
    pub db: Box<dyn Database>,
}

/// Builds the router. Layers run outermost first: logging, security headers,
/// origin guard, CORS headers, body limit.
pub fn app(state: Arc<AppState>, allowed_origin: HeaderValue) -> Router {
    let router = Router::new()
        .route("/users", get(catalog::list_users))
        .route("/movies", get(catalog::list_movies))
        .route("/search", get(search::search_movies))
        .layer(DefaultBodyLimit::max(JSON_BODY_LIMIT))
        .layer(cors::layer(allowed_origin.clone()))
        .layer(middleware::from_fn_with_state(
            allowed_origin,
            cors::reject_foreign_origin,
        ));

    security::with_headers(router)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(state)
}

pub async fn start_server(config: &Config) -> Result<(), Error> {
    let allowed_origin = config.allowed_origin()?;
    tracing::info!(mode = ?config.mode, origin = ?allowed_origin, "cors policy");
    tracing::info!(database = ?config.database, "using database");

    let state = Arc::new(AppState {
        db: Box::new(PgDatabase::connect_lazy(&config.database)),
    });

    let addr = config.server.to_socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server running");

    axum::serve(listener, app(state, allowed_origin)).await?;
    Ok(())
}
